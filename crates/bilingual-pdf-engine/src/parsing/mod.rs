//! Markdown parsing: block extraction and markup conversion.
//!
//! Extraction and conversion share one parser configuration, so converting a
//! block's `raw` fragment always reproduces the `rendered` value computed at
//! extraction time.

pub mod extract;
pub mod kinds;
pub mod tree;

use pulldown_cmark::{Parser, html};

pub use extract::{extract, extract_str};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("Failed to render markup: {0}")]
    Render(#[from] std::fmt::Error),
}

/// The parser used for both extraction and conversion: plain CommonMark.
pub(crate) fn parser(markup: &str) -> Parser<'_> {
    Parser::new(markup)
}

/// Converts a markdown fragment to HTML.
pub fn convert(markup: &str) -> Result<String, ParseError> {
    let mut out = String::with_capacity(markup.len() * 3 / 2);
    html::write_html_fmt(&mut out, parser(markup))?;
    Ok(out)
}
