use crate::config::OutputFormat;
use crate::core::{CharPolicy, ConfigProvider};
use crate::utils::error::{IsogramError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub check: CheckConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckConfig {
    /// `"all"` or `"letters"`.
    pub policy: Option<String>,
    pub max_input_chars: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// `"text"` or `"json"`.
    pub format: Option<String>,
}

const POLICIES: [&str; 2] = ["all", "letters"];
const FORMATS: [&str; 2] = ["text", "json"];

impl TomlConfig {
    /// Loads a config from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(IsogramError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses a config from TOML text, after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;

        toml::from_str(&processed).map_err(|e| IsogramError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of the environment variable. Unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| IsogramError::ConfigError {
            message: format!("bad substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// `[output] format`, if it names a known format.
    pub fn output_format(&self) -> Option<OutputFormat> {
        match self.output.format.as_deref() {
            Some("json") => Some(OutputFormat::Json),
            Some("text") => Some(OutputFormat::Text),
            _ => None,
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn policy(&self) -> CharPolicy {
        match self.check.policy.as_deref() {
            Some("letters") => CharPolicy::LettersOnly,
            _ => CharPolicy::AllCharacters,
        }
    }

    fn max_input_chars(&self) -> Option<usize> {
        self.check.max_input_chars
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(policy) = &self.check.policy {
            validation::validate_one_of("check.policy", policy, &POLICIES)?;
        }
        if let Some(limit) = self.check.max_input_chars {
            validation::validate_positive_number("check.max_input_chars", limit, 1)?;
        }
        if let Some(format) = &self.output.format {
            validation::validate_one_of("output.format", format, &FORMATS)?;
        }
        Ok(())
    }
}
