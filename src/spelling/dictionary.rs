//! Sorted word list with binary-search membership queries.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{LexisError, Result};
use crate::spelling::config::{CharacterSet, DictionaryConfig};
use crate::spelling::ordering::{first_unordered, is_greater};

/// An immutable, ordered word list that answers "is this a known word".
///
/// The words must be sorted ascending under
/// [`ordinal_cmp`](crate::spelling::ordering::ordinal_cmp). When
/// [`DictionaryConfig::verify_order`] is set this is checked once at load
/// time; otherwise an unsorted source silently produces wrong answers.
#[derive(Debug, Clone)]
pub struct DictionaryIndex {
    words: Box<[String]>,
    config: DictionaryConfig,
}

impl DictionaryIndex {
    /// Load a word list from a file with the default configuration.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_config(path, DictionaryConfig::default())
    }

    /// Load a word list from a file.
    ///
    /// Each whitespace-separated token is a word. Text from `#` to the end of
    /// a line is ignored.
    pub fn open_with_config<P: AsRef<Path>>(path: P, config: DictionaryConfig) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LexisError::load(path, e))?;
        let words = read_words(BufReader::new(file)).map_err(|e| LexisError::load(path, e))?;

        debug!("Loaded {} words from {}", words.len(), path.display());
        Self::build(words, config)
    }

    /// Load a word list from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R, config: DictionaryConfig) -> Result<Self> {
        let words = read_words(reader).map_err(|source| LexisError::LoadReader { source })?;
        Self::build(words, config)
    }

    /// Build an index from words that are already split.
    pub fn from_words<I, S>(words: I, config: DictionaryConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::build(words.into_iter().map(Into::into).collect(), config)
    }

    fn build(words: Vec<String>, config: DictionaryConfig) -> Result<Self> {
        if words.is_empty() {
            warn!("Dictionary is empty; every lookup will miss");
        }

        if config.character_set == CharacterSet::Ascii {
            let unreachable = words.iter().filter(|word| !word.is_ascii()).count();
            if unreachable > 0 {
                warn!("{unreachable} non-ASCII words can never match an ASCII-only query");
            }
        }

        let index = DictionaryIndex {
            words: words.into_boxed_slice(),
            config,
        };

        if index.config.verify_order {
            index.verify_order()?;
        }

        Ok(index)
    }

    /// Check if `query` is a word of the dictionary.
    ///
    /// Queries that are empty or contain a non-alphabetic character are
    /// never found, whatever the list contains.
    pub fn contains(&self, query: &str) -> bool {
        self.position(query).is_some()
    }

    /// Get the position of `query` in the word list, if present.
    pub fn position(&self, query: &str) -> Option<usize> {
        if !self.config.character_set.accepts(query) {
            return None;
        }

        if self.config.lowercase_queries {
            self.search(&query.to_lowercase())
        } else {
            self.search(query)
        }
    }

    fn search(&self, query: &str) -> Option<usize> {
        let mut left = 0;
        let mut right = self.words.len();

        while left < right {
            let mid = left + (right - left) / 2;
            let word = self.words[mid].as_str();

            if word == query {
                return Some(mid);
            } else if is_greater(word, query) {
                right = mid;
            } else {
                left = mid + 1;
            }
        }

        None
    }

    /// Check that the words are non-decreasing under the ordinal comparator.
    pub fn verify_order(&self) -> Result<()> {
        match first_unordered(&self.words) {
            Some(position) => Err(LexisError::data_integrity(
                position,
                self.words[position - 1].as_str(),
                self.words[position].as_str(),
            )),
            None => {
                info!("Verified ordering of {} words", self.words.len());
                Ok(())
            }
        }
    }

    /// Get all words in load order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Get the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get the configuration this index was built with.
    pub fn config(&self) -> &DictionaryConfig {
        &self.config
    }

    /// Get summary statistics about the word list.
    pub fn stats(&self) -> DictionaryStats {
        let lengths = self.words.iter().map(|word| word.chars().count());
        let total: usize = lengths.clone().sum();

        DictionaryStats {
            word_count: self.words.len(),
            min_length: lengths.clone().min().unwrap_or(0),
            max_length: lengths.max().unwrap_or(0),
            average_length: if self.words.is_empty() {
                0.0
            } else {
                total as f64 / self.words.len() as f64
            },
            first_word: self.words.first().cloned(),
            last_word: self.words.last().cloned(),
        }
    }
}

/// Summary statistics about a loaded dictionary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryStats {
    /// Number of words, duplicates included.
    pub word_count: usize,
    /// Length of the shortest word in characters.
    pub min_length: usize,
    /// Length of the longest word in characters.
    pub max_length: usize,
    /// Mean word length in characters.
    pub average_length: f64,
    /// First word of the list.
    pub first_word: Option<String>,
    /// Last word of the list.
    pub last_word: Option<String>,
}

fn read_words<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let content = match line.find('#') {
            Some(comment) => &line[..comment],
            None => line.as_str(),
        };
        words.extend(content.split_whitespace().map(str::to_string));
    }

    Ok(words)
}
