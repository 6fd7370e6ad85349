//! Error types for the derlem library.
//!
//! Every fallible operation in the crate returns [`Result`], whose error side is
//! the [`DerlemError`] enum. The text-level heuristics never fail on malformed
//! input; errors come from the layers that touch the file system, the lexicon
//! loader and configuration.
//!
//! # Examples
//!
//! ```
//! use derlem::error::{DerlemError, Result};
//!
//! fn load() -> Result<()> {
//!     Err(DerlemError::lexicon("line 3: missing parse column"))
//! }
//!
//! match load() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for derlem operations.
#[derive(Error, Debug)]
pub enum DerlemError {
    /// I/O errors (reading documents, writing reports)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV serialization errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid regular expression built from keywords or patterns
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Malformed lexicon file
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Corpus layout problems (missing base directory, bad channel)
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for operations that may fail with DerlemError.
pub type Result<T> = std::result::Result<T, DerlemError>;

impl DerlemError {
    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        DerlemError::Lexicon(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        DerlemError::Corpus(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        DerlemError::Config(msg.into())
    }
}
