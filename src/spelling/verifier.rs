//! Dictionary check with fallback to a corrector.

use std::fmt;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::spelling::corrector::{Corrector, PassthroughCorrector};
use crate::spelling::dictionary::DictionaryIndex;

/// Outcome of verifying one candidate word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    /// The candidate as it was given.
    pub original: String,
    /// Whether the candidate is in the dictionary.
    pub known: bool,
    /// The corrector's answer, present only for unknown candidates.
    pub corrected: Option<String>,
}

impl Verification {
    /// A candidate found in the dictionary.
    pub fn known(original: String) -> Self {
        Verification {
            original,
            known: true,
            corrected: None,
        }
    }

    /// A candidate missing from the dictionary, with its correction.
    pub fn corrected(original: String, corrected: String) -> Self {
        Verification {
            original,
            known: false,
            corrected: Some(corrected),
        }
    }

    /// The form to present: the original when known, otherwise the correction.
    pub fn display(&self) -> &str {
        self.corrected.as_deref().unwrap_or(&self.original)
    }

    /// Check if the corrector changed the word.
    pub fn was_changed(&self) -> bool {
        self.display() != self.original
    }

    /// Render as `original -> presented`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.original, self.display())
    }
}

/// Checks candidates against a dictionary and corrects the unknown ones.
pub struct WordVerifier {
    index: Arc<DictionaryIndex>,
    corrector: Box<dyn Corrector>,
}

impl WordVerifier {
    /// Create a verifier that hands unknown words to `corrector`.
    pub fn new<C: Corrector + 'static>(index: Arc<DictionaryIndex>, corrector: C) -> Self {
        WordVerifier {
            index,
            corrector: Box::new(corrector),
        }
    }

    /// Create a verifier whose corrector leaves words unchanged.
    pub fn without_corrector(index: Arc<DictionaryIndex>) -> Self {
        Self::new(index, PassthroughCorrector)
    }

    /// Verify a single candidate.
    ///
    /// The corrector is consulted only when the lookup fails.
    pub fn verify(&self, candidate: &str) -> Verification {
        if self.index.contains(candidate) {
            return Verification::known(candidate.to_string());
        }

        let corrected = self.corrector.correct(candidate);
        debug!("Unknown word {candidate:?} corrected to {corrected:?}");
        Verification::corrected(candidate.to_string(), corrected)
    }

    /// Verify several candidates in order.
    pub fn verify_all<I, S>(&self, candidates: I) -> Vec<Verification>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        candidates
            .into_iter()
            .map(|candidate| self.verify(candidate.as_ref()))
            .collect()
    }

    /// Get the underlying dictionary.
    pub fn index(&self) -> &DictionaryIndex {
        &self.index
    }
}
