//! Error types for the Mova library.
//!
//! All errors are represented by the [`MovaError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use mova::error::{MovaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(MovaError::analysis("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Mova operations.
///
/// This enum represents all possible errors that can occur in the Mova
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum MovaError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Lookup of a language code or name with no registry entry
    #[error("Unregistered language: {0}")]
    UnregisteredLanguage(String),

    /// Analysis-related errors (tokenization, stemming, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A backing resource file exists but cannot be used
    #[error("Resource error: {0}")]
    Resource(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with MovaError.
pub type Result<T> = std::result::Result<T, MovaError>;

impl MovaError {
    /// Create a new unregistered-language error.
    pub fn unregistered_language<S: Into<String>>(msg: S) -> Self {
        MovaError::UnregisteredLanguage(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        MovaError::Analysis(msg.into())
    }

    /// Create a new resource error.
    pub fn resource<S: Into<String>>(msg: S) -> Self {
        MovaError::Resource(msg.into())
    }
}
