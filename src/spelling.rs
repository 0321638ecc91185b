//! Dictionary lookup for recognized words.
//!
//! A [`DictionaryIndex`](dictionary::DictionaryIndex) holds a sorted word
//! list and answers membership queries by binary search under the ordinal
//! comparator in [`ordering`]. A [`WordVerifier`](verifier::WordVerifier)
//! wraps an index and hands misses to a [`Corrector`](corrector::Corrector).

pub mod config;
pub mod corrector;
pub mod dictionary;
pub mod ordering;
pub mod verifier;

// Re-export commonly used types
pub use config::{CharacterSet, DictionaryConfig};
pub use corrector::{CorrectionTable, Corrector, PassthroughCorrector};
pub use dictionary::{DictionaryIndex, DictionaryStats};
pub use ordering::{is_greater, ordinal_cmp};
pub use verifier::{Verification, WordVerifier};
