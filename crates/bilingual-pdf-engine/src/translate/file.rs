use std::path::PathBuf;

use super::{TranslateError, Translator};
use crate::align::StructuralMismatch;
use crate::io;
use crate::languages::LanguagePair;
use crate::models::Block;
use crate::parsing::extract;

/// Reads translations from a pre-translated markdown file.
///
/// The file is extracted with the same block extractor as the source, and its
/// blocks are matched to the source purely by position.
#[derive(Debug, Clone)]
pub struct FileTranslator {
    path: PathBuf,
}

impl FileTranslator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The translated document's blocks, used directly as the translated
    /// sequence.
    pub fn translated_blocks(&self) -> Result<Vec<Block>, TranslateError> {
        let bytes = io::read_file(&self.path)?;
        Ok(extract(&bytes)?)
    }
}

impl Translator for FileTranslator {
    /// Returns each translated block's text, padded with empty strings or
    /// truncated to the payload count.
    fn translate(
        &self,
        payloads: &[String],
        _pair: &LanguagePair,
    ) -> Result<Vec<String>, TranslateError> {
        let blocks = self.translated_blocks()?;
        if let Some(mismatch) = StructuralMismatch::check(payloads.len(), blocks.len()) {
            log::warn!("{}: {mismatch}", self.path.display());
        }

        let mut texts: Vec<String> = blocks
            .iter()
            .take(payloads.len())
            .map(|b| b.text().to_string())
            .collect();
        texts.resize(payloads.len(), String::new());
        Ok(texts)
    }
}
