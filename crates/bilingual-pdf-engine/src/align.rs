//! Positional alignment of a source block sequence with its translation.
//!
//! Blocks are paired strictly by index. There is no content matching: when
//! the two sequences differ in length, every pair past the end of the
//! shorter one has an empty side, and a [`StructuralMismatch`] is reported.

use crate::models::Block;

/// One row of the bilingual layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignedPair<'a> {
    pub source: Option<&'a Block>,
    pub translated: Option<&'a Block>,
}

impl<'a> AlignedPair<'a> {
    /// Rendered markup of the source side, empty when absent.
    pub fn source_html(&self) -> &'a str {
        self.source.map_or("", Block::rendered)
    }

    /// Rendered markup of the translated side, empty when absent.
    pub fn translated_html(&self) -> &'a str {
        self.translated.map_or("", Block::rendered)
    }
}

/// Block counts disagree between source and translation.
///
/// Not fatal: alignment still pads the shorter side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error(
    "block count mismatch: source has {source_count} blocks, translation has {translated_count} blocks"
)]
pub struct StructuralMismatch {
    pub source_count: usize,
    pub translated_count: usize,
}

impl StructuralMismatch {
    /// Compares two counts, returning a mismatch when they differ.
    pub fn check(source_count: usize, translated_count: usize) -> Option<Self> {
        (source_count != translated_count).then_some(Self {
            source_count,
            translated_count,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment<'a> {
    pub pairs: Vec<AlignedPair<'a>>,
    pub mismatch: Option<StructuralMismatch>,
}

/// Pairs `source[i]` with `translated[i]` for `i` up to the longer length.
pub fn align<'a>(source: &'a [Block], translated: &'a [Block]) -> Alignment<'a> {
    let mismatch = StructuralMismatch::check(source.len(), translated.len());
    if let Some(m) = &mismatch {
        log::warn!("{m}");
    }

    let len = source.len().max(translated.len());
    let pairs = (0..len)
        .map(|i| AlignedPair {
            source: source.get(i),
            translated: translated.get(i),
        })
        .collect();

    Alignment { pairs, mismatch }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::extract_str;
    use pretty_assertions::assert_eq;

    fn blocks(md: &str) -> Vec<Block> {
        extract_str(md).unwrap()
    }

    #[test]
    fn equal_lengths_pair_one_to_one() {
        let source = blocks("# a\n\nb\n");
        let translated = blocks("# x\n\ny\n");
        let alignment = align(&source, &translated);
        assert_eq!(alignment.mismatch, None);
        assert_eq!(alignment.pairs.len(), 2);
        assert_eq!(alignment.pairs[1].source_html(), "<p>b</p>\n");
        assert_eq!(alignment.pairs[1].translated_html(), "<p>y</p>\n");
    }

    #[test]
    fn shorter_translation_is_padded() {
        let source = blocks("a\n\nb\n\nc\n");
        let translated = blocks("x\n\ny\n");
        let alignment = align(&source, &translated);

        assert_eq!(alignment.pairs.len(), 3);
        assert_eq!(alignment.pairs[0].source, Some(&source[0]));
        assert_eq!(alignment.pairs[0].translated, Some(&translated[0]));
        assert_eq!(alignment.pairs[1].translated, Some(&translated[1]));
        assert_eq!(alignment.pairs[2].source, Some(&source[2]));
        assert_eq!(alignment.pairs[2].translated, None);
        assert_eq!(alignment.pairs[2].translated_html(), "");
        assert_eq!(
            alignment.mismatch,
            Some(StructuralMismatch {
                source_count: 3,
                translated_count: 2
            })
        );
    }

    #[test]
    fn longer_translation_is_padded() {
        let source = blocks("a\n");
        let translated = blocks("x\n\ny\n");
        let alignment = align(&source, &translated);
        assert_eq!(alignment.pairs.len(), 2);
        assert_eq!(alignment.pairs[1].source, None);
        assert_eq!(alignment.mismatch.map(|m| m.translated_count), Some(2));
    }

    #[test]
    fn empty_sequences() {
        let alignment = align(&[], &[]);
        assert!(alignment.pairs.is_empty());
        assert!(alignment.mismatch.is_none());
    }

    #[test]
    fn mismatch_message_names_both_counts() {
        let m = StructuralMismatch::check(3, 2).unwrap();
        assert_eq!(
            m.to_string(),
            "block count mismatch: source has 3 blocks, translation has 2 blocks"
        );
    }
}
