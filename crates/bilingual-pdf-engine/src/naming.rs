//! Output file naming.
//!
//! Names are derived from the input stem and the language pair. A stem that
//! already ends in `.<source>` (`notes.fr.md`) does not repeat the source
//! code: `notes.fr.md` → `notes.fr.es.pdf`, `notes.md` → `notes.fr.es.pdf`.

use std::path::{Path, PathBuf};

use crate::languages::LanguagePair;

fn stem(input: &Path) -> String {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.strip_suffix(".md") {
        Some(stem) => stem.to_string(),
        None => name,
    }
}

fn sibling(input: &Path, file_name: String) -> PathBuf {
    match input.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// The PDF path: `explicit` when given, otherwise derived from `input`.
pub fn pdf_output(input: &Path, pair: &LanguagePair, explicit: Option<&Path>) -> PathBuf {
    if let Some(explicit) = explicit {
        return explicit.to_path_buf();
    }
    let stem = stem(input);
    let source_suffix = format!(".{}", pair.source);
    let file_name = if stem.ends_with(&source_suffix) {
        format!("{stem}.{}.pdf", pair.target)
    } else {
        format!("{stem}.{}.{}.pdf", pair.source, pair.target)
    };
    sibling(input, file_name)
}

/// The HTML path: the PDF path with an `.html` extension.
pub fn html_output(input: &Path, pair: &LanguagePair, explicit: Option<&Path>) -> PathBuf {
    pdf_output(input, pair, explicit).with_extension("html")
}

/// The translated markdown path: `<base>.<target>.md`.
pub fn translation_output(input: &Path, pair: &LanguagePair) -> PathBuf {
    let stem = stem(input);
    let source_suffix = format!(".{}", pair.source);
    let base = stem.strip_suffix(&source_suffix).unwrap_or(&stem);
    sibling(input, format!("{base}.{}.md", pair.target))
}
