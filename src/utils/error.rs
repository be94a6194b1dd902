use thiserror::Error;

#[derive(Error, Debug)]
pub enum IsogramError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl IsogramError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidArgument { message } => format!("Input rejected: {}", message),
            Self::IoError(e) => format!("Could not read input: {}", e),
            Self::SerializationError(e) => format!("Could not render output: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    /// Process exit code for the CLI. 1 is reserved for "not an isogram".
    pub fn exit_code(&self) -> i32 {
        2
    }
}

pub type Result<T> = std::result::Result<T, IsogramError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = IsogramError::invalid_argument("line 3 is not valid UTF-8");
        assert_eq!(err.to_string(), "Invalid argument: line 3 is not valid UTF-8");
        assert!(err.user_friendly_message().contains("line 3"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: IsogramError = io.into();
        assert!(matches!(err, IsogramError::IoError(_)));
    }
}
