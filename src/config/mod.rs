pub mod cli;
pub mod toml_config;

use crate::core::WordSource;
use crate::utils::error::Result;

#[cfg(feature = "cli")]
use crate::core::{CharPolicy, ConfigProvider};
#[cfg(feature = "cli")]
use crate::utils::error::IsogramError;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub use cli::{ArgsSource, FileSource, ReaderSource};
pub use crate::domain::model::OutputFormat;
pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "isogram-check")]
#[command(about = "Report whether words contain any repeated character, ignoring case")]
pub struct CliConfig {
    /// Words or phrases to check. Reads stdin when none are given and --file is absent.
    pub words: Vec<String>,

    #[arg(long, help = "Read one word per line from this file")]
    pub file: Option<String>,

    #[arg(long, help = "Read one word per line from stdin")]
    pub stdin: bool,

    #[arg(long, value_enum, help = "Which characters take part in the check")]
    pub policy: Option<CharPolicy>,

    #[arg(long, conflicts_with = "policy", help = "Shorthand for --policy letters")]
    pub letters_only: bool,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Reject inputs longer than this many characters")]
    pub max_input_chars: Option<usize>,

    #[arg(long, help = "TOML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log lines as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Fills anything not given on the command line from the config file.
    pub fn merge_file(&mut self, file: &TomlConfig) {
        if self.policy.is_none() && !self.letters_only {
            self.policy = Some(file.policy());
        }
        if self.max_input_chars.is_none() {
            self.max_input_chars = file.max_input_chars();
        }
        if self.format.is_none() {
            self.format = file.output_format();
        }
    }

    /// `--format`, else text.
    pub fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    /// `--file` wins; stdin when asked for or when no words were given.
    pub fn input_source(&self) -> InputSource {
        match &self.file {
            Some(path) => InputSource::File(FileSource::new(path)),
            None if self.stdin || self.words.is_empty() => {
                InputSource::Stdin(ReaderSource::new(std::io::stdin().lock()))
            }
            None => InputSource::Args(ArgsSource::new(self.words.clone())),
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn policy(&self) -> CharPolicy {
        if self.letters_only {
            CharPolicy::LettersOnly
        } else {
            self.policy.unwrap_or_default()
        }
    }

    fn max_input_chars(&self) -> Option<usize> {
        self.max_input_chars
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let sources = [self.file.is_some(), self.stdin, !self.words.is_empty()]
            .iter()
            .filter(|given| **given)
            .count();
        if sources > 1 {
            return Err(IsogramError::ConfigError {
                message: "give words, --file or --stdin, not more than one".to_string(),
            });
        }
        if let Some(path) = &self.file {
            validation::validate_path("file", path)?;
        }
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        if let Some(limit) = self.max_input_chars {
            validation::validate_positive_number("max_input_chars", limit, 1)?;
        }
        Ok(())
    }
}

/// The input chosen on the command line.
pub enum InputSource {
    Args(ArgsSource),
    File(FileSource),
    Stdin(ReaderSource<std::io::StdinLock<'static>>),
}

impl WordSource for InputSource {
    fn words(&self) -> Result<Vec<String>> {
        match self {
            InputSource::Args(source) => source.words(),
            InputSource::File(source) => source.words(),
            InputSource::Stdin(source) => source.words(),
        }
    }
}
