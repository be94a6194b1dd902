pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{ArgsSource, FileSource, InputSource, ReaderSource, TomlConfig};
pub use crate::core::{
    engine::CheckEngine,
    isogram::{is_isogram, IsogramChecker},
    output::render,
};
pub use crate::domain::model::{CharPolicy, CheckReport, OutputFormat, Person, Verdict};
pub use crate::utils::error::{IsogramError, Result};
