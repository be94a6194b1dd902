use serde::{Deserialize, Serialize};

/// Which characters take part in the uniqueness check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum CharPolicy {
    /// Every character counts after case-folding, including digits, spaces and punctuation.
    #[default]
    #[cfg_attr(feature = "cli", value(name = "all"))]
    AllCharacters,
    /// Only alphabetic characters count; everything else is skipped.
    #[cfg_attr(feature = "cli", value(name = "letters"))]
    LettersOnly,
}

impl CharPolicy {
    pub fn admits(self, ch: char) -> bool {
        match self {
            CharPolicy::AllCharacters => true,
            CharPolicy::LettersOnly => ch.is_alphabetic(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Outcome of checking one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub input: String,
    pub is_isogram: bool,
    /// The first case-folded character seen twice.
    pub repeated: Option<char>,
    /// Char index in `input` of the second occurrence.
    pub position: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub verdicts: Vec<Verdict>,
    pub total: usize,
    pub isograms: usize,
    pub non_isograms: usize,
}

impl CheckReport {
    pub fn from_verdicts(verdicts: Vec<Verdict>) -> Self {
        let isograms = verdicts.iter().filter(|v| v.is_isogram).count();
        let total = verdicts.len();
        Self {
            verdicts,
            total,
            isograms,
            non_isograms: total - isograms,
        }
    }

    pub fn all_isograms(&self) -> bool {
        self.non_isograms == 0
    }
}

/// A person's name and age.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    first_name: String,
    last_name: String,
    age: u32,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: u32) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.full_name(), self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_uses_own_fields() {
        let matz = Person::new("Yukihiro", "Matsumoto", 47);
        let joe = Person::new("Joe", "Smith", 30);

        assert_eq!(matz.full_name(), "Yukihiro Matsumoto");
        assert_eq!(joe.full_name(), "Joe Smith");
        assert_eq!(joe.age(), 30);
        assert_eq!(matz.to_string(), "Yukihiro Matsumoto (47)");
    }

    #[test]
    fn test_person_serializes() {
        let joe = Person::new("Joe", "Smith", 30);
        let json = serde_json::to_value(&joe).unwrap();
        assert_eq!(json["first_name"], "Joe");
        assert_eq!(json["age"], 30);
    }

    #[test]
    fn test_report_counts() {
        let verdicts = vec![
            Verdict {
                input: "abc".to_string(),
                is_isogram: true,
                repeated: None,
                position: None,
            },
            Verdict {
                input: "aba".to_string(),
                is_isogram: false,
                repeated: Some('a'),
                position: Some(2),
            },
        ];
        let report = CheckReport::from_verdicts(verdicts);
        assert_eq!(report.total, 2);
        assert_eq!(report.isograms, 1);
        assert_eq!(report.non_isograms, 1);
        assert!(!report.all_isograms());
        assert!(CheckReport::default().all_isograms());
    }

    #[test]
    fn test_policy_admits() {
        assert!(CharPolicy::AllCharacters.admits('-'));
        assert!(!CharPolicy::LettersOnly.admits('-'));
        assert!(CharPolicy::LettersOnly.admits('é'));
    }
}
