pub mod engine;
pub mod isogram;
pub mod output;

pub use crate::domain::model::{CharPolicy, CheckReport, Verdict};
pub use crate::domain::ports::{ConfigProvider, WordSource};
pub use crate::utils::error::Result;
