//! Block extraction: maps each top-level node of the parse tree to a [`Block`].
//!
//! | node | `text` | `raw` |
//! |---|---|---|
//! | heading | inline text | `#`-prefixed text |
//! | paragraph | inline text | original source lines |
//! | list | one line per item | one `-`/`n.` line per item, item source preserved |
//! | code | code body | fence + info string, or four-space indent |
//! | blockquote | child texts, one per line | `> `-prefixed child texts |
//! | thematic break | `---` | `---` |
//! | HTML block | source lines | source lines (also `rendered`) |
//!
//! Any other top-level node (link reference definitions, footnotes) is
//! skipped.

use pulldown_cmark::{CodeBlockKind, Event, Tag};

use crate::models::{Block, BlockKind};

use super::{
    ParseError, convert,
    kinds::{BlockQuote, CodeFence, Heading, ListMarkers, one_line},
    tree::{self, Node, plain_text},
};

const THEMATIC_BREAK: &str = "---";

/// Parses document bytes into an ordered sequence of blocks.
pub fn extract(bytes: &[u8]) -> Result<Vec<Block>, ParseError> {
    let source = std::str::from_utf8(bytes)?;
    extract_str(source)
}

/// [`extract`] for input that is already a string.
pub fn extract_str(source: &str) -> Result<Vec<Block>, ParseError> {
    let mut blocks = Vec::new();

    for node in tree::build(source) {
        let Some((kind, raw, text)) = block_parts(&node, source) else {
            log::debug!("skipping top-level node at {:?}", node.range());
            continue;
        };

        let rendered = match kind {
            BlockKind::RawMarkup => raw.clone(),
            _ => convert(&raw)?,
        };
        blocks.push(Block::new(kind, raw, text, rendered));
    }

    Ok(blocks)
}

/// Returns `(kind, raw, text)` for a top-level node, or `None` to skip it.
fn block_parts(node: &Node<'_>, source: &str) -> Option<(BlockKind, String, String)> {
    match node {
        Node::Leaf {
            event: Event::Rule, ..
        } => Some((
            BlockKind::ThematicBreak,
            THEMATIC_BREAK.to_string(),
            THEMATIC_BREAK.to_string(),
        )),
        Node::Leaf { .. } => None,
        Node::Element {
            tag,
            range,
            children,
        } => match tag {
            Tag::Heading { level, .. } => {
                let level = *level as u8;
                let text = plain_text(children);
                // Setext headings may span lines; ATX cannot.
                let raw = Heading::atx(level, &text.replace('\n', " "));
                Some((BlockKind::Heading { level }, raw, text))
            }
            Tag::Paragraph => {
                let raw = source[range.clone()]
                    .trim_end_matches(['\n', '\r'])
                    .to_string();
                Some((BlockKind::Paragraph, raw, plain_text(children)))
            }
            Tag::List(start) => {
                let mut lines = Vec::new();
                list_lines(children, source, &mut lines);
                let text = lines
                    .iter()
                    .map(|line| line.text.as_str())
                    .collect::<Vec<_>>()
                    .join("\n");
                let raw = ListMarkers::write(lines.iter().map(|l| l.raw.as_str()), start.is_some());
                Some((BlockKind::List, raw, text))
            }
            Tag::CodeBlock(kind) => {
                let body = code_body(children);
                let raw = match kind {
                    CodeBlockKind::Fenced(info) => CodeFence::fenced(&body, info),
                    CodeBlockKind::Indented => CodeFence::indented(&body),
                };
                Some((BlockKind::CodeBlock, raw, body))
            }
            Tag::BlockQuote(_) => {
                let mut text = Vec::with_capacity(children.len());
                let mut raw = String::new();
                for child in children {
                    let child_text = plain_text(std::slice::from_ref(child));
                    BlockQuote::quote_lines(&child_text, &mut raw);
                    text.push(child_text);
                }
                if raw.is_empty() {
                    // An empty quote still needs its marker to parse as one.
                    raw = BlockQuote::quote("");
                }
                Some((BlockKind::Blockquote, raw, text.join("\n")))
            }
            Tag::HtmlBlock => {
                let raw: String = children
                    .iter()
                    .filter_map(|child| match child {
                        Node::Leaf {
                            event: Event::Html(html),
                            ..
                        } => Some(html.as_ref()),
                        _ => None,
                    })
                    .collect();
                Some((BlockKind::RawMarkup, raw.clone(), raw))
            }
            _ => None,
        },
    }
}

fn code_body(children: &[Node<'_>]) -> String {
    children
        .iter()
        .filter_map(|child| match child {
            Node::Leaf {
                event: Event::Text(t),
                ..
            } => Some(t.as_ref()),
            _ => None,
        })
        .collect()
}

/// One list item flattened onto a single line.
#[derive(Debug, Default)]
struct ListLine {
    text: String,
    raw: String,
}

/// Flattens list items, nested lists included, into one line each.
fn list_lines(items: &[Node<'_>], source: &str, lines: &mut Vec<ListLine>) {
    for item in items {
        let mut builder = ItemLine::default();
        let mut nested = Vec::new();

        for child in item.children() {
            if child.is_inline() {
                builder.extend_run(child);
                continue;
            }
            builder.close_run(source);

            match child {
                Node::Element {
                    tag: Tag::List(_),
                    children,
                    ..
                } => nested.push(children.as_slice()),
                Node::Element {
                    tag: Tag::Paragraph,
                    range,
                    children,
                } => builder.push(plain_text(children), one_line(&source[range.clone()])),
                Node::Element {
                    tag: Tag::CodeBlock(_),
                    children,
                    ..
                } => {
                    let code = one_line(&code_body(children));
                    let span = CodeFence::span(&code);
                    builder.push(code, span);
                }
                other => {
                    let text = plain_text(std::slice::from_ref(other));
                    builder.push(text.clone(), one_line(&text));
                }
            }
        }
        builder.close_run(source);
        lines.push(builder.finish());

        for children in nested {
            list_lines(children, source, lines);
        }
    }
}

/// Accumulates the text and source segments of a single list item.
///
/// Tight items carry their inline content directly, so consecutive inline
/// nodes form a "run" whose source span is sliced in one piece to keep link
/// and emphasis syntax intact.
#[derive(Default)]
struct ItemLine<'n, 'a> {
    run: Vec<&'n Node<'a>>,
    text: Vec<String>,
    raw: Vec<String>,
}

impl<'n, 'a> ItemLine<'n, 'a> {
    fn extend_run(&mut self, node: &'n Node<'a>) {
        self.run.push(node);
    }

    fn close_run(&mut self, source: &str) {
        let (Some(first), Some(last)) = (self.run.first(), self.run.last()) else {
            return;
        };
        let span = first.range().start..last.range().end;
        let text = plain_text_of(&self.run);
        self.push(text, one_line(&source[span]));
        self.run.clear();
    }

    fn push(&mut self, text: String, raw: String) {
        let text = one_line(&text);
        if !text.is_empty() || !raw.is_empty() {
            self.text.push(text);
            self.raw.push(raw);
        }
    }

    fn finish(self) -> ListLine {
        ListLine {
            text: self.text.join(" "),
            raw: self.raw.join(" "),
        }
    }
}

fn plain_text_of(nodes: &[&Node<'_>]) -> String {
    nodes
        .iter()
        .map(|node| plain_text(std::slice::from_ref(*node)))
        .collect()
}
