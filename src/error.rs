//! Error types for the Lexis library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`LexisError`] enum. Lookups themselves never fail: only loading a word
//! list, loading a correction table or reading a configuration can.
//!
//! # Examples
//!
//! ```
//! use lexis::error::LexisError;
//! use lexis::spelling::DictionaryIndex;
//!
//! match DictionaryIndex::open("/nonexistent/words_alpha.txt") {
//!     Ok(index) => println!("Loaded {} words", index.len()),
//!     Err(e) => {
//!         assert!(matches!(e, LexisError::Load { .. }));
//!         eprintln!("Error: {}", e);
//!     }
//! }
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The main error type for Lexis operations.
#[derive(Error, Debug)]
pub enum LexisError {
    /// A word list or correction table file could not be read.
    #[error("Load error: {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A word list given as a reader could not be read.
    #[error("Load error: {source}")]
    LoadReader {
        #[source]
        source: io::Error,
    },

    /// A source was readable but its content is malformed.
    #[error("Load error: {}: line {line}: {message}", .path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// The loaded word list is not ordered consistently with the comparator.
    #[error(
        "Data integrity error: word {position} ({current:?}) sorts before the preceding word ({previous:?})"
    )]
    DataIntegrity {
        position: usize,
        previous: String,
        current: String,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with LexisError.
pub type Result<T> = std::result::Result<T, LexisError>;

impl LexisError {
    /// Create a load error for the given source path.
    pub fn load<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        LexisError::Load {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a malformed-content error for a 1-based line of a source.
    pub fn malformed<P: AsRef<Path>, S: Into<String>>(path: P, line: usize, msg: S) -> Self {
        LexisError::Malformed {
            path: path.as_ref().to_path_buf(),
            line,
            message: msg.into(),
        }
    }

    /// Create a data integrity error for the word at `position`.
    pub fn data_integrity<S: Into<String>>(position: usize, previous: S, current: S) -> Self {
        LexisError::DataIntegrity {
            position,
            previous: previous.into(),
            current: current.into(),
        }
    }

    /// Whether this error came from reading or parsing a source.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            LexisError::Load { .. } | LexisError::LoadReader { .. } | LexisError::Malformed { .. }
        )
    }
}
