//! Translate a block sequence and serialize the result.

use crate::languages::LanguagePair;
use crate::models::Block;
use crate::payload::payloads;
use crate::rebuild::{build, reconstruct};
use crate::translate::{TranslateError, Translator};

/// Sends every block's payload through `translator` in one call and rebuilds
/// each translated block from its source.
///
/// The result has exactly one block per source block.
pub fn translate_blocks(
    blocks: &[Block],
    translator: &dyn Translator,
    pair: &LanguagePair,
) -> Result<Vec<Block>, TranslateError> {
    let payloads = payloads(blocks);
    let translated = translator.translate(&payloads, pair)?;
    if translated.len() != payloads.len() {
        return Err(TranslateError::LengthMismatch {
            expected: payloads.len(),
            actual: translated.len(),
        });
    }

    Ok(blocks
        .iter()
        .zip(&translated)
        .map(|(source, text)| build(source, text))
        .collect())
}

/// Markdown for a translated block sequence, one blank line between blocks.
///
/// A translated block with no `raw` is rebuilt from its source block and
/// its `text`.
pub fn translated_markdown(source: &[Block], translated: &[Block]) -> String {
    let mut parts = Vec::with_capacity(translated.len());
    for (i, block) in translated.iter().enumerate() {
        let raw = block.raw().trim_end_matches('\n');
        let raw = match source.get(i) {
            Some(src) if raw.is_empty() => reconstruct(src, block.text()),
            _ => raw.to_string(),
        };
        parts.push(raw);
    }

    let mut out = parts.join("\n\n");
    let trimmed = out.trim_end_matches('\n').len();
    out.truncate(trimmed);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BlockKind;
    use crate::parsing::extract_str;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    /// Upper-cases every payload and records what it was sent.
    struct Shouting {
        seen: RefCell<Vec<String>>,
    }

    impl Shouting {
        fn new() -> Self {
            Self {
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl Translator for Shouting {
        fn translate(
            &self,
            payloads: &[String],
            _pair: &LanguagePair,
        ) -> Result<Vec<String>, TranslateError> {
            self.seen.borrow_mut().extend(payloads.iter().cloned());
            Ok(payloads.iter().map(|p| p.to_uppercase()).collect())
        }
    }

    struct Dropping;

    impl Translator for Dropping {
        fn translate(
            &self,
            payloads: &[String],
            _pair: &LanguagePair,
        ) -> Result<Vec<String>, TranslateError> {
            Ok(payloads.iter().skip(1).cloned().collect())
        }
    }

    fn pair() -> LanguagePair {
        LanguagePair::new("fr", "es")
    }

    #[test]
    fn payloads_follow_selection_policy() {
        let blocks = extract_str("# Titre\n\nUn [lien](http://a.fr).\n\n```\ncode\n```\n").unwrap();
        let translator = Shouting::new();
        translate_blocks(&blocks, &translator, &pair()).unwrap();
        assert_eq!(
            *translator.seen.borrow(),
            vec![
                "Titre".to_string(),
                "Un [lien](http://a.fr).".to_string(),
                String::new()
            ]
        );
    }

    #[test]
    fn translated_blocks_keep_kinds() {
        let blocks = extract_str("## Titre\n\n- un\n- deux\n\n```rust\nfn x() {}\n```\n").unwrap();
        let translated = translate_blocks(&blocks, &Shouting::new(), &pair()).unwrap();

        let kinds: Vec<BlockKind> = translated.iter().map(Block::kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Heading { level: 2 },
                BlockKind::List,
                BlockKind::CodeBlock
            ]
        );
        assert_eq!(translated[0].raw(), "## TITRE");
        assert_eq!(translated[2], blocks[2]);
    }

    #[test]
    fn short_translation_is_an_error() {
        let blocks = extract_str("un\n\ndeux\n").unwrap();
        let err = translate_blocks(&blocks, &Dropping, &pair()).unwrap_err();
        assert!(matches!(
            err,
            TranslateError::LengthMismatch {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn markdown_joins_blocks_with_blank_lines() {
        let blocks = extract_str("# Titre\n\n1. un\n2. deux\n\n> cité\n").unwrap();
        let translated = translate_blocks(&blocks, &Shouting::new(), &pair()).unwrap();
        assert_snapshot!(translated_markdown(&blocks, &translated), @r"
        # TITRE

        1. UN
        2. DEUX

        > CITÉ
        ");
    }

    #[test]
    fn empty_sequence_is_a_single_newline() {
        assert_eq!(translated_markdown(&[], &[]), "\n");
    }
}
