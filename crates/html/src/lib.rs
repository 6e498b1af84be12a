//! HTML slide deck parser backend for Markdown extraction.
//!
//! Parses hand-authored HTML decks where each slide is an element with the
//! `slide` class and renders them through [`deck_core::MarkdownFormatter`].

pub mod parser;

pub use parser::HtmlParser;

use deck_core::{MarkdownFormatter, Result};
use std::path::Path;

/// Convert one HTML deck on disk into Markdown.
pub fn extract_markdown(path: &Path) -> Result<String> {
    let presentation = HtmlParser::new().parse_file(path)?;
    Ok(MarkdownFormatter::new().format(&presentation))
}
