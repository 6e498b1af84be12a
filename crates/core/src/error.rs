//! Error types for HTML slide deck extraction.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during slide deck extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or read the input file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// The input could not be decoded as an HTML document.
    #[error("HTML parsing error: {0}")]
    ParseError(String),
}
