//! Translation providers.
//!
//! A [`Translator`] turns a list of payload strings into translated strings
//! of the same length and order. Empty payloads translate to empty strings.

pub mod file;
pub mod google;

pub use file::FileTranslator;
pub use google::GoogleTranslator;

use crate::io::IoError;
use crate::languages::LanguagePair;
use crate::parsing::ParseError;

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unexpected response shape: {0}")]
    UnexpectedResponse(String),
    #[error("Translating block {index}: {source}")]
    Block {
        index: usize,
        source: Box<TranslateError>,
    },
    #[error("Reading translation file: {0}")]
    Io(#[from] IoError),
    #[error("Parsing translation file: {0}")]
    Parse(#[from] ParseError),
    #[error("Translator returned {actual} strings for {expected} payloads")]
    LengthMismatch { expected: usize, actual: usize },
}

pub trait Translator {
    fn translate(
        &self,
        payloads: &[String],
        pair: &LanguagePair,
    ) -> Result<Vec<String>, TranslateError>;
}
