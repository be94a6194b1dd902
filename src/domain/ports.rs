use crate::domain::model::CharPolicy;
use crate::utils::error::Result;

/// Somewhere words to check come from.
pub trait WordSource {
    fn words(&self) -> Result<Vec<String>>;
}

pub trait ConfigProvider {
    fn policy(&self) -> CharPolicy;
    fn max_input_chars(&self) -> Option<usize>;
}
