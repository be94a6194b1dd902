//! Isogram detection.
//!
//! Every input character is case-folded with [`char::to_lowercase`] and the
//! folded characters are scanned once, left to right, against a seen-set.
//! The scan stops at the first collision.

use crate::domain::model::{CharPolicy, Verdict};
use std::collections::HashSet;

/// Returns `true` when no character of `input` repeats, ignoring case.
///
/// Digits, whitespace and punctuation are compared like any other character,
/// so `"six-year-old"` is not an isogram. The empty string is.
///
/// ```
/// use isogram_check::is_isogram;
///
/// assert!(is_isogram("Dermatoglyphics"));
/// assert!(!is_isogram("moOse"));
/// ```
pub fn is_isogram(input: &str) -> bool {
    IsogramChecker::default().is_isogram(input)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsogramChecker {
    policy: CharPolicy,
}

impl IsogramChecker {
    pub fn new(policy: CharPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> CharPolicy {
        self.policy
    }

    pub fn is_isogram(&self, input: &str) -> bool {
        self.first_repeat(input).is_none()
    }

    pub fn check(&self, input: &str) -> Verdict {
        let repeat = self.first_repeat(input);
        Verdict {
            input: input.to_string(),
            is_isogram: repeat.is_none(),
            repeated: repeat.map(|(ch, _)| ch),
            position: repeat.map(|(_, pos)| pos),
        }
    }

    /// Folded character and input char index of the first collision.
    fn first_repeat(&self, input: &str) -> Option<(char, usize)> {
        let mut seen = HashSet::new();
        for (pos, ch) in input.chars().enumerate() {
            if !self.policy.admits(ch) {
                continue;
            }
            for folded in ch.to_lowercase() {
                if !seen.insert(folded) {
                    return Some((folded, pos));
                }
            }
        }
        None
    }
}
