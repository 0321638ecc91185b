//! Boundary to the external autocorrection service.
//!
//! A lookup that misses hands the raw candidate to a [`Corrector`] and gets a
//! replacement string back. How the replacement is chosen is up to the
//! implementation; this crate only ships trivial and table-driven ones.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::{LexisError, Result};

/// Turns an unknown word into its corrected form.
pub trait Corrector: Send + Sync {
    /// Correct a single word. Return it unchanged when no correction is known.
    fn correct(&self, word: &str) -> String;
}

impl<F> Corrector for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn correct(&self, word: &str) -> String {
        self(word)
    }
}

/// A corrector that leaves every word as it is.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughCorrector;

impl Corrector for PassthroughCorrector {
    fn correct(&self, word: &str) -> String {
        word.to_string()
    }
}

/// A fixed table of misspellings and their corrections.
#[derive(Debug, Clone, Default)]
pub struct CorrectionTable {
    entries: HashMap<String, String>,
}

impl CorrectionTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        CorrectionTable {
            entries: HashMap::new(),
        }
    }

    /// Add or replace a correction.
    pub fn insert<S: Into<String>>(&mut self, misspelling: S, correction: S) {
        self.entries.insert(misspelling.into(), correction.into());
    }

    /// Get the correction for a word, if the table has one.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    /// Get the number of corrections.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a table from a file with format "misspelling correction" per line.
    ///
    /// Blank lines and text after `#` are ignored. Any other line must have
    /// exactly two columns.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LexisError::load(path, e))?;
        let reader = BufReader::new(file);
        let mut table = CorrectionTable::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| LexisError::load(path, e))?;
            let content = line.split('#').next().unwrap_or_default();
            let parts: Vec<&str> = content.split_whitespace().collect();

            match parts.as_slice() {
                [] => {}
                [misspelling, correction] => table.insert(*misspelling, *correction),
                _ => {
                    return Err(LexisError::malformed(
                        path,
                        line_num + 1,
                        format!("expected 2 columns, found {}", parts.len()),
                    ));
                }
            }
        }

        debug!("Loaded {} corrections from {}", table.len(), path.display());
        Ok(table)
    }
}

impl Corrector for CorrectionTable {
    fn correct(&self, word: &str) -> String {
        self.get(word).unwrap_or(word).to_string()
    }
}

impl<S: Into<String>> FromIterator<(S, S)> for CorrectionTable {
    fn from_iter<I: IntoIterator<Item = (S, S)>>(iter: I) -> Self {
        let mut table = CorrectionTable::new();
        for (misspelling, correction) in iter {
            table.insert(misspelling, correction);
        }
        table
    }
}
