pub mod align;
pub mod io;
pub mod languages;
pub mod models;
pub mod naming;
pub mod parsing;
pub mod payload;
pub mod pdf;
pub mod pipeline;
pub mod rebuild;
pub mod render;
pub mod translate;

// Re-export key types for easier usage
pub use align::{AlignedPair, Alignment, StructuralMismatch, align};
pub use io::*;
pub use languages::LanguagePair;
pub use models::{Block, BlockKind};
pub use parsing::{ParseError, convert, extract, extract_str};
pub use pdf::{PdfError, PdfRenderer};
pub use pipeline::{translate_blocks, translated_markdown};
pub use rebuild::{Outcome, build, reconstruct};
pub use render::{Labels, render};
pub use translate::{FileTranslator, GoogleTranslator, TranslateError, Translator};
