use crate::models::{Block, BlockKind};
use crate::parsing::kinds::{BlockQuote, Heading, ListMarkers};

/// Rebuilds a raw markdown fragment of `source`'s kind around `translated`.
///
/// Total over all inputs: every kind has a rule and none can fail.
pub fn reconstruct(source: &Block, translated: &str) -> String {
    match source.kind() {
        BlockKind::Heading { level } => {
            Heading::atx(level, &Heading::capitalize(translated.trim()))
        }
        BlockKind::Blockquote => BlockQuote::quote(translated),
        BlockKind::CodeBlock => source.raw().to_string(),
        BlockKind::RawMarkup => translated.to_string(),
        BlockKind::ThematicBreak => "---".to_string(),
        BlockKind::List => {
            let items = translated
                .split('\n')
                .map(str::trim)
                .filter(|item| !item.is_empty());
            ListMarkers::write(items, ListMarkers::is_ordered(source.raw()))
        }
        BlockKind::Paragraph => translated.to_string(),
    }
}
