//! # Lexis
//!
//! A small dictionary lookup service for checking words produced by a
//! recognizer, with a handoff to an external corrector for unknown words.
//!
//! ## Features
//!
//! - Binary search over a sorted word list with ordinal, prefix-aware ordering
//! - Optional load-time check that the list is actually sorted
//! - Pluggable correction for words the dictionary does not know
//! - Command line front-end

pub mod cli;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::error::{LexisError, Result};
    pub use crate::spelling::{
        CharacterSet, CorrectionTable, Corrector, DictionaryConfig, DictionaryIndex,
        PassthroughCorrector, Verification, WordVerifier,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
