//! Vocabulary banks and author roster
//!
//! Compiled-in defaults live in `constants`; a TOML file with the same
//! field names can replace any subset, which keeps wording and byline
//! changes away from engine code.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{authors, lexicon as defaults};
use crate::error::Result;
use crate::types::Author;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    pub openers: Vec<String>,
    pub performance_good: Vec<String>,
    pub performance_modest: Vec<String>,
    pub efficiency_good: Vec<String>,
    pub efficiency_modest: Vec<String>,
    pub verdict_top: Vec<String>,
    pub verdict_mid: Vec<String>,
    pub verdict_low: Vec<String>,
    pub verdict_closer_top: String,
    pub verdict_closer_mid: String,
    pub verdict_closer_low: String,
    pub authors: Vec<Author>,
}

fn bank(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            openers: bank(defaults::OPENERS),
            performance_good: bank(defaults::PERFORMANCE_GOOD),
            performance_modest: bank(defaults::PERFORMANCE_MODEST),
            efficiency_good: bank(defaults::EFFICIENCY_GOOD),
            efficiency_modest: bank(defaults::EFFICIENCY_MODEST),
            verdict_top: bank(defaults::VERDICT_TOP),
            verdict_mid: bank(defaults::VERDICT_MID),
            verdict_low: bank(defaults::VERDICT_LOW),
            verdict_closer_top: defaults::VERDICT_CLOSER_TOP.to_string(),
            verdict_closer_mid: defaults::VERDICT_CLOSER_MID.to_string(),
            verdict_closer_low: defaults::VERDICT_CLOSER_LOW.to_string(),
            authors: authors::AUTHOR_ROSTER
                .iter()
                .map(|(name, role)| Author {
                    name: (*name).to_string(),
                    role: (*role).to_string(),
                })
                .collect(),
        }
    }
}

impl Lexicon {
    /// Load overrides from a TOML file; fields the file omits keep their
    /// compiled-in defaults.
    pub fn from_toml_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let lexicon: Lexicon = toml::from_str(&content)?;
        Ok(lexicon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_banks_populated() {
        let lexicon = Lexicon::default();
        assert!(!lexicon.openers.is_empty());
        assert!(!lexicon.verdict_top.is_empty());
        assert_eq!(lexicon.authors.len(), 5);
        assert!(!lexicon.verdict_closer_low.is_empty());
    }

    #[test]
    fn test_toml_override_keeps_unspecified_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "openers = [\"rewrites the rulebook\"]").unwrap();
        file.flush().unwrap();

        let lexicon = Lexicon::from_toml_path(file.path()).unwrap();
        assert_eq!(lexicon.openers, vec!["rewrites the rulebook".to_string()]);
        assert_eq!(lexicon.authors.len(), 5);
        assert_eq!(
            lexicon.performance_good,
            Lexicon::default().performance_good
        );
    }

    #[test]
    fn test_toml_author_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[authors]]").unwrap();
        writeln!(file, "name = \"Test Author\"").unwrap();
        writeln!(file, "role = \"Guest Reviewer\"").unwrap();
        file.flush().unwrap();

        let lexicon = Lexicon::from_toml_path(file.path()).unwrap();
        assert_eq!(lexicon.authors.len(), 1);
        assert_eq!(lexicon.authors[0].name, "Test Author");
    }
}
