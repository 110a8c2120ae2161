/// The structural kind of a [`Block`].
///
/// Closed over the block grammars the engine knows how to rebuild; a heading
/// carries its depth so a level can never exist without a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// ATX or setext heading, `level` in 1..=6.
    Heading { level: u8 },
    Paragraph,
    /// Ordered or unordered list; orderedness is read back from `raw`.
    List,
    /// Fenced or indented code. Never translated.
    CodeBlock,
    Blockquote,
    ThematicBreak,
    /// A raw HTML block, passed through without conversion.
    RawMarkup,
}

impl BlockKind {
    /// Heading depth, or 0 for every other kind.
    pub fn level(&self) -> u8 {
        match self {
            BlockKind::Heading { level } => *level,
            _ => 0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::Heading { .. } => "Heading",
            BlockKind::Paragraph => "Paragraph",
            BlockKind::List => "List",
            BlockKind::CodeBlock => "CodeBlock",
            BlockKind::Blockquote => "Blockquote",
            BlockKind::ThematicBreak => "ThematicBreak",
            BlockKind::RawMarkup => "RawMarkup",
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockKind::Heading { level } => write!(f, "Heading({level})"),
            other => f.write_str(other.name()),
        }
    }
}

/// One structural unit of a document: the unit of translation and layout.
///
/// A block holds three views of the same content:
/// - `raw`: a markdown fragment that reproduces the block when parsed alone
/// - `text`: the plain text handed to a translator
/// - `rendered`: the HTML obtained by converting `raw` (verbatim for
///   [`BlockKind::RawMarkup`])
///
/// Blocks are immutable once built. Translation produces a new block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    kind: BlockKind,
    raw: String,
    text: String,
    rendered: String,
}

impl Block {
    pub(crate) fn new(kind: BlockKind, raw: String, text: String, rendered: String) -> Self {
        Self {
            kind,
            raw,
            text,
            rendered,
        }
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    pub fn level(&self) -> u8 {
        self.kind.level()
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_is_zero_outside_headings() {
        assert_eq!(BlockKind::Heading { level: 3 }.level(), 3);
        assert_eq!(BlockKind::Paragraph.level(), 0);
        assert_eq!(BlockKind::List.level(), 0);
    }

    #[test]
    fn display_includes_heading_level() {
        assert_eq!(BlockKind::Heading { level: 2 }.to_string(), "Heading(2)");
        assert_eq!(BlockKind::RawMarkup.to_string(), "RawMarkup");
    }
}
