//! Core domain types, errors, and Markdown formatting for HTML slide
//! deck extraction.

pub mod error;
pub mod markdown;
pub mod types;

pub use error::{Error, Result};
pub use markdown::{MarkdownFormatter, FILE_DIVIDER};
pub use types::{Card, ExtractedSlide, Presentation};
