use crate::core::isogram::IsogramChecker;
use crate::domain::model::CheckReport;
use crate::domain::ports::{ConfigProvider, WordSource};
use crate::utils::error::{IsogramError, Result};

pub struct CheckEngine<S: WordSource> {
    source: S,
    checker: IsogramChecker,
    max_input_chars: Option<usize>,
}

impl<S: WordSource> CheckEngine<S> {
    /// Engine with no input length limit.
    pub fn new(source: S, checker: IsogramChecker) -> Self {
        Self {
            source,
            checker,
            max_input_chars: None,
        }
    }

    /// Takes the policy and length limit from `config`.
    pub fn from_config<C: ConfigProvider>(source: S, config: &C) -> Self {
        Self {
            source,
            checker: IsogramChecker::new(config.policy()),
            max_input_chars: config.max_input_chars(),
        }
    }

    pub fn with_max_input_chars(mut self, limit: usize) -> Self {
        self.max_input_chars = Some(limit);
        self
    }

    /// Reads every word from the source and checks it.
    ///
    /// Fails on the first input over `max_input_chars`; no partial report is returned.
    pub fn run(&self) -> Result<CheckReport> {
        let words = self.source.words()?;
        tracing::debug!(
            "Checking {} input(s) with policy {:?}",
            words.len(),
            self.checker.policy()
        );

        let mut verdicts = Vec::with_capacity(words.len());
        for word in words {
            if let Some(limit) = self.max_input_chars {
                let len = word.chars().count();
                if len > limit {
                    return Err(IsogramError::invalid_argument(format!(
                        "input of {} characters exceeds the limit of {}",
                        len, limit
                    )));
                }
            }

            let verdict = self.checker.check(&word);
            if let (Some(ch), Some(pos)) = (verdict.repeated, verdict.position) {
                tracing::debug!("'{}' repeats '{}' at index {}", verdict.input, ch, pos);
            }
            verdicts.push(verdict);
        }

        let report = CheckReport::from_verdicts(verdicts);
        tracing::info!(
            "Checked {} input(s): {} isogram(s), {} not",
            report.total,
            report.isograms,
            report.non_isograms
        );
        Ok(report)
    }
}
