//! Turning a source block plus translated text into a translated block.
//!
//! [`reconstruct`] rebuilds a raw fragment of the source block's kind;
//! [`build`] re-extracts that fragment so the translated block gets a fresh
//! `rendered` value, falling back to an escaped paragraph when the fragment
//! does not re-parse into exactly one block of the same kind.

pub mod reconstruct;

pub use reconstruct::reconstruct;

use crate::models::{Block, BlockKind};
use crate::parsing::extract_str;

/// How a non-passthrough block was rebuilt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The fragment re-parsed into exactly one block of the source kind.
    Reparsed(Block),
    /// The fragment did not re-parse cleanly; the text was escaped into a
    /// single paragraph.
    Escaped(Block),
}

impl Outcome {
    pub fn into_block(self) -> Block {
        match self {
            Outcome::Reparsed(block) | Outcome::Escaped(block) => block,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Outcome::Escaped(_))
    }
}

/// Builds the translated counterpart of `source`.
pub fn build(source: &Block, translated: &str) -> Block {
    let fragment = reconstruct(source, translated);

    match source.kind() {
        BlockKind::CodeBlock => source.clone(),
        BlockKind::RawMarkup => {
            let markup = if translated.is_empty() {
                source.rendered().to_string()
            } else {
                fragment
            };
            Block::new(BlockKind::RawMarkup, markup.clone(), markup.clone(), markup)
        }
        _ => reparse(source, translated, fragment).into_block(),
    }
}

/// Re-extracts `fragment`, accepting only a single block of the source kind.
///
/// A fragment that re-parses into one block of a different kind (a translated
/// paragraph starting with `# `) is escaped rather than accepted, so a
/// translated block never changes kind or heading level.
pub fn reparse(source: &Block, translated: &str, fragment: String) -> Outcome {
    match extract_str(&fragment) {
        Ok(mut blocks) if blocks.len() == 1 && blocks[0].kind() == source.kind() => {
            Outcome::Reparsed(blocks.remove(0))
        }
        Ok(blocks) => {
            log::warn!(
                "reconstructed {} re-parsed into {} block(s) of kinds {:?}; escaping as paragraph",
                source.kind(),
                blocks.len(),
                blocks.iter().map(|b| b.kind().name()).collect::<Vec<_>>()
            );
            Outcome::Escaped(escaped(source, translated, fragment))
        }
        Err(e) => {
            log::warn!("reconstructed {} failed to re-parse: {e}", source.kind());
            Outcome::Escaped(escaped(source, translated, fragment))
        }
    }
}

fn escaped(source: &Block, translated: &str, fragment: String) -> Block {
    let rendered = format!("<p>{}</p>\n", html_escape::encode_text(translated));
    Block::new(source.kind(), fragment, translated.to_string(), rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{convert, extract_str};
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn first(md: &str) -> Block {
        extract_str(md).unwrap().remove(0)
    }

    #[test]
    fn heading_is_reparsed() {
        let source = first("## Bonjour le monde\n");
        let block = build(&source, "hola mundo");
        assert_eq!(block.kind(), BlockKind::Heading { level: 2 });
        assert_eq!(block.raw(), "## Hola mundo");
        assert_eq!(block.text(), "Hola mundo");
        assert_snapshot!(block.rendered(), @"<h2>Hola mundo</h2>");
    }

    #[test]
    fn paragraph_keeps_inline_markup() {
        let source = first("Visitez [Google](https://google.com).\n");
        let block = build(&source, "Visite [Google](https://google.com).");
        assert_eq!(block.kind(), BlockKind::Paragraph);
        assert_eq!(
            block.rendered(),
            "<p>Visite <a href=\"https://google.com\">Google</a>.</p>\n"
        );
    }

    #[test]
    fn ordered_list_is_rebuilt() {
        let source = first("1. pain\n2. fromage\n");
        let block = build(&source, "pan\nqueso");
        assert_eq!(block.kind(), BlockKind::List);
        assert_eq!(block.raw(), "1. pan\n2. queso\n");
        assert_snapshot!(block.rendered(), @r"
        <ol>
        <li>pan</li>
        <li>queso</li>
        </ol>
        ");
    }

    #[test]
    fn blockquote_is_rebuilt() {
        let source = first("> citation\n");
        let block = build(&source, "cita");
        assert_eq!(block.kind(), BlockKind::Blockquote);
        assert_eq!(block.text(), "cita");
    }

    #[test]
    fn thematic_break_is_rebuilt() {
        let source = first("___\n");
        let block = build(&source, "");
        assert_eq!(block.kind(), BlockKind::ThematicBreak);
        assert_eq!(block.raw(), "---");
        assert_eq!(block.rendered(), convert("---").unwrap());
    }

    #[test]
    fn code_block_passes_through() {
        let source = first("```rust\nfn main() {}\n```\n");
        assert_eq!(build(&source, "traduit"), source);
    }

    #[test]
    fn raw_markup_round_trip() {
        let source = first("<div>\nbonjour\n</div>\n");
        let block = build(&source, "<div>hi</div>");
        assert_eq!(block.kind(), BlockKind::RawMarkup);
        assert_eq!(block.raw(), "<div>hi</div>");
        assert_eq!(block.text(), "<div>hi</div>");
        assert_eq!(block.rendered(), block.raw());
    }

    #[test]
    fn empty_raw_markup_translation_keeps_source() {
        let source = first("<div>\nbonjour\n</div>\n");
        let block = build(&source, "");
        assert_eq!(block.rendered(), source.rendered());
        assert_eq!(block.raw(), source.rendered());
    }

    #[rstest]
    #[case::only_a_reference_definition("[ref]: https://example.com")]
    #[case::empty("")]
    #[case::whitespace("   \n  ")]
    fn zero_blocks_falls_back_to_escaped_paragraph(#[case] translated: &str) {
        let source = first("Un paragraphe.\n");
        let outcome = reparse(&source, translated, reconstruct(&source, translated));
        assert!(outcome.is_degraded());
        let block = outcome.into_block();
        assert_eq!(block.kind(), BlockKind::Paragraph);
        assert_eq!(block.text(), translated);
        assert_eq!(
            block.rendered(),
            format!("<p>{}</p>\n", html_escape::encode_text(translated))
        );
    }

    #[test]
    fn fallback_escapes_markup_characters() {
        let source = first("Un paragraphe.\n");
        let block = build(&source, "a < b & c\n\nsecond block");
        assert_eq!(block.rendered(), "<p>a &lt; b &amp; c\n\nsecond block</p>\n");
    }

    #[test]
    fn kind_change_is_degraded() {
        let source = first("Un paragraphe.\n");
        let outcome = reparse(&source, "# Titre", "# Titre".to_string());
        assert!(outcome.is_degraded());
        assert_eq!(outcome.into_block().kind(), BlockKind::Paragraph);
    }

    #[test]
    fn empty_list_translation_is_degraded() {
        let source = first("- a\n- b\n");
        let block = build(&source, "\n\n");
        assert_eq!(block.kind(), BlockKind::List);
        assert_eq!(block.rendered(), "<p>\n\n</p>\n");
    }
}
