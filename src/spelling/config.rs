//! Configuration for loading and querying a dictionary index.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LexisError, Result};

/// Characters accepted by the query precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterSet {
    /// Any Unicode alphabetic character.
    #[default]
    Unicode,
    /// ASCII letters only; other letters make the query unsupported.
    Ascii,
}

impl CharacterSet {
    /// Check if a single character is alphabetic under this set.
    pub fn is_alphabetic(&self, ch: char) -> bool {
        match self {
            CharacterSet::Unicode => ch.is_alphabetic(),
            CharacterSet::Ascii => ch.is_ascii_alphabetic(),
        }
    }

    /// Check if a query is non-empty and made only of alphabetic characters.
    pub fn accepts(&self, query: &str) -> bool {
        !query.is_empty() && query.chars().all(|ch| self.is_alphabetic(ch))
    }
}

/// Configuration for a [`DictionaryIndex`](crate::spelling::dictionary::DictionaryIndex).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Check at load time that the words are sorted under the ordinal comparator.
    pub verify_order: bool,
    /// Which characters a query may contain.
    pub character_set: CharacterSet,
    /// Lowercase queries before searching.
    pub lowercase_queries: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        DictionaryConfig {
            verify_order: cfg!(debug_assertions),
            character_set: CharacterSet::default(),
            lowercase_queries: false,
        }
    }
}

impl DictionaryConfig {
    /// Enable or disable the load-time order check.
    pub fn with_verify_order(mut self, verify_order: bool) -> Self {
        self.verify_order = verify_order;
        self
    }

    /// Set the accepted character set.
    pub fn with_character_set(mut self, character_set: CharacterSet) -> Self {
        self.character_set = character_set;
        self
    }

    /// Enable or disable query lowercasing.
    pub fn with_lowercase_queries(mut self, lowercase_queries: bool) -> Self {
        self.lowercase_queries = lowercase_queries;
        self
    }

    /// Read a configuration from a JSON file. Missing fields take their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LexisError::load(path, e))?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_character_set_accepts() {
        assert!(CharacterSet::Unicode.accepts("cat"));
        assert!(CharacterSet::Unicode.accepts("caf\u{e9}"));
        assert!(CharacterSet::Ascii.accepts("Cat"));
        assert!(!CharacterSet::Ascii.accepts("caf\u{e9}"));

        for set in [CharacterSet::Unicode, CharacterSet::Ascii] {
            assert!(!set.accepts(""));
            assert!(!set.accepts("cat5"));
            assert!(!set.accepts("can't"));
            assert!(!set.accepts("two words"));
        }
    }

    #[test]
    fn test_default_config() {
        let config = DictionaryConfig::default();
        assert_eq!(config.verify_order, cfg!(debug_assertions));
        assert_eq!(config.character_set, CharacterSet::Unicode);
        assert!(!config.lowercase_queries);
    }

    #[test]
    fn test_builder_methods() {
        let config = DictionaryConfig::default()
            .with_verify_order(true)
            .with_character_set(CharacterSet::Ascii)
            .with_lowercase_queries(true);

        assert!(config.verify_order);
        assert_eq!(config.character_set, CharacterSet::Ascii);
        assert!(config.lowercase_queries);
    }

    #[test]
    fn test_load_partial_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, r#"{{"character_set": "ascii", "verify_order": true}}"#).unwrap();
        temp_file.flush().unwrap();

        let config = DictionaryConfig::load_from_file(temp_file.path()).unwrap();
        assert!(config.verify_order);
        assert_eq!(config.character_set, CharacterSet::Ascii);
        assert!(!config.lowercase_queries);
    }

    #[test]
    fn test_load_invalid_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "not json").unwrap();
        temp_file.flush().unwrap();

        let result = DictionaryConfig::load_from_file(temp_file.path());
        assert!(matches!(result, Err(LexisError::Json(_))));

        let result = DictionaryConfig::load_from_file("/nonexistent/lexis.json");
        assert!(matches!(result, Err(LexisError::Load { .. })));
    }
}
