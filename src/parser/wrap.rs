//! Paragraph wrapping and run closing.

use super::context::Conversion;
use super::node::{Node, OpenParagraph};
use crate::model::Block;

/// A line after wrapping: every line is now a paragraph or a block.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Wrapped {
    Open(OpenParagraph),
    Block(Block),
}

/// Wrap every unclaimed line in a default paragraph with one open run.
///
/// Blank lines are dropped unless `keep_blank_lines` is set, in which case
/// each becomes an empty paragraph.
pub(crate) fn wrap_paragraphs(nodes: Vec<Node>, cx: &Conversion<'_>) -> Vec<Wrapped> {
    let styles = cx.styles();
    let keep_blank = cx.options.keep_blank_lines;

    nodes
        .into_iter()
        .filter_map(|node| match node {
            node if node.is_blank() => keep_blank
                .then(|| Wrapped::Open(OpenParagraph::new(styles.body, styles.normal, ""))),
            Node::Text(line) => Some(Wrapped::Open(OpenParagraph::new(
                styles.body,
                styles.normal,
                line,
            ))),
            Node::Open(open) => Some(Wrapped::Open(open)),
            Node::Block(block) => Some(Wrapped::Block(block)),
        })
        .collect()
}

/// Closes open runs at the nearest structural boundary.
///
/// At most one paragraph is open at a time. It is closed as soon as the
/// next paragraph or block starts, or when the input ends, so a run never
/// extends past the start of another paragraph.
#[derive(Debug, Default)]
pub(crate) struct RunCloser {
    open: Option<OpenParagraph>,
    blocks: Vec<Block>,
}

impl RunCloser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next wrapped line.
    pub fn push(&mut self, item: Wrapped) {
        self.close_open();
        match item {
            Wrapped::Open(open) => self.open = Some(open),
            Wrapped::Block(block) => self.blocks.push(block),
        }
    }

    /// Close whatever is still open and return the finished blocks.
    pub fn finish(mut self) -> Vec<Block> {
        self.close_open();
        self.blocks
    }

    fn close_open(&mut self) {
        if let Some(open) = self.open.take() {
            self.blocks.push(Block::Paragraph(open.close()));
        }
    }
}

/// Close every open run.
pub(crate) fn close_runs(items: Vec<Wrapped>) -> Vec<Block> {
    let mut closer = RunCloser::new();
    for item in items {
        closer.push(item);
    }
    closer.finish()
}
