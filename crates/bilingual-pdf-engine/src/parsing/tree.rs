//! A small owned tree built from pulldown-cmark's offset event stream.
//!
//! pulldown-cmark is a pull parser: it emits a flat `Start`/`End` event
//! sequence. Block extraction needs to look at a node's children and its
//! source span together, so the stream is folded into nested [`Node`]s once.

use std::ops::Range;

use pulldown_cmark::{Event, Tag};

use super::parser;

/// A node of the parse tree with the byte range it covers in the source.
#[derive(Debug)]
pub enum Node<'a> {
    /// A `Start(tag)`/`End` pair and everything between them.
    Element {
        tag: Tag<'a>,
        range: Range<usize>,
        children: Vec<Node<'a>>,
    },
    /// Any event that is not a `Start` or `End`.
    Leaf { event: Event<'a>, range: Range<usize> },
}

impl<'a> Node<'a> {
    pub fn range(&self) -> Range<usize> {
        match self {
            Node::Element { range, .. } | Node::Leaf { range, .. } => range.clone(),
        }
    }

    pub fn children(&self) -> &[Node<'a>] {
        match self {
            Node::Element { children, .. } => children,
            Node::Leaf { .. } => &[],
        }
    }

    /// Whether this node belongs to inline content (text runs, spans, links).
    pub fn is_inline(&self) -> bool {
        match self {
            Node::Element { tag, .. } => is_inline_tag(tag),
            Node::Leaf { event, .. } => matches!(
                event,
                Event::Text(_)
                    | Event::Code(_)
                    | Event::InlineHtml(_)
                    | Event::InlineMath(_)
                    | Event::DisplayMath(_)
                    | Event::FootnoteReference(_)
                    | Event::SoftBreak
                    | Event::HardBreak
                    | Event::TaskListMarker(_)
            ),
        }
    }
}

fn is_inline_tag(tag: &Tag<'_>) -> bool {
    matches!(
        tag,
        Tag::Emphasis
            | Tag::Strong
            | Tag::Strikethrough
            | Tag::Link { .. }
            | Tag::Image { .. }
    )
}

/// Parses `source` and returns its top-level nodes in document order.
pub fn build(source: &str) -> Vec<Node<'_>> {
    let mut roots = Vec::new();
    let mut stack: Vec<Node<'_>> = Vec::new();

    for (event, range) in parser(source).into_offset_iter() {
        let node = match event {
            Event::Start(tag) => {
                stack.push(Node::Element {
                    tag,
                    range,
                    children: Vec::new(),
                });
                continue;
            }
            Event::End(_) => match stack.pop() {
                Some(node) => node,
                None => continue,
            },
            event => Node::Leaf { event, range },
        };

        match stack.last_mut() {
            Some(Node::Element { children, .. }) => children.push(node),
            _ => roots.push(node),
        }
    }

    // Balanced streams leave the stack empty; anything left is still content.
    while let Some(node) = stack.pop() {
        match stack.last_mut() {
            Some(Node::Element { children, .. }) => children.push(node),
            _ => roots.push(node),
        }
    }

    roots
}

/// Collects the plain text of `nodes`.
///
/// Links and emphasis reduce to their text, code spans keep their literal
/// content, soft and hard breaks become `\n`, and block boundaries inside
/// the subtree start a new line. Trailing newlines are trimmed.
pub fn plain_text(nodes: &[Node<'_>]) -> String {
    let mut out = String::new();
    push_text(nodes, &mut out);
    out.truncate(out.trim_end_matches('\n').len());
    out
}

fn push_text(nodes: &[Node<'_>], out: &mut String) {
    for node in nodes {
        match node {
            Node::Leaf { event, .. } => match event {
                Event::Text(t) | Event::Code(t) | Event::InlineMath(t) | Event::DisplayMath(t) => {
                    out.push_str(t)
                }
                Event::SoftBreak | Event::HardBreak => out.push('\n'),
                _ => {}
            },
            Node::Element { children, .. } if node.is_inline() => push_text(children, out),
            Node::Element { children, .. } => {
                start_line(out);
                push_text(children, out);
                start_line(out);
            }
        }
    }
}

fn start_line(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}
