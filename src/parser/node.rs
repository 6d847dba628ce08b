//! Intermediate line representation shared by the conversion passes.
//!
//! Passes run over a `Vec<Node>`. A line starts out as [`Node::Text`] and is
//! claimed by at most one pass, which turns it into an [`Node::Open`]
//! paragraph (its run still accepts inline rewriting) or a finished
//! [`Node::Block`]. Later passes only ever look at unclaimed text, so a
//! construct emitted by one pass is never matched again by another.

use crate::model::{Block, CharShapeId, ParaShapeId, Paragraph, TextRun};

/// One line (or span of lines) of the document during conversion.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    /// Escaped source line not yet claimed by any pass
    Text(String),

    /// Paragraph whose text run has not been closed yet
    Open(OpenParagraph),

    /// Finished structural block
    Block(Block),
}

impl Node {
    /// Unclaimed text of this node, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Whether this node is an unclaimed blank line.
    pub fn is_blank(&self) -> bool {
        self.as_text().is_some_and(|t| t.trim().is_empty())
    }
}

impl From<Block> for Node {
    fn from(block: Block) -> Self {
        Node::Block(block)
    }
}

impl From<OpenParagraph> for Node {
    fn from(open: OpenParagraph) -> Self {
        Node::Open(open)
    }
}

/// A paragraph with one open text run.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OpenParagraph {
    pub para_shape: ParaShapeId,
    pub instance_id: Option<u32>,
    /// Fixed run written before the open one (list glyphs)
    pub lead: Option<TextRun>,
    pub char_shape: CharShapeId,
    /// Escaped text of the open run
    pub text: String,
}

impl OpenParagraph {
    /// Open a paragraph with a single run.
    pub fn new(para_shape: ParaShapeId, char_shape: CharShapeId, text: impl Into<String>) -> Self {
        Self {
            para_shape,
            instance_id: None,
            lead: None,
            char_shape,
            text: text.into(),
        }
    }

    /// Set a fixed run written before the open one.
    pub fn with_lead(mut self, lead: TextRun) -> Self {
        self.lead = Some(lead);
        self
    }

    /// Set the list instance identifier.
    pub fn with_instance(mut self, instance_id: Option<u32>) -> Self {
        self.instance_id = instance_id;
        self
    }

    /// Close the open run, producing a finished paragraph.
    pub fn close(self) -> Paragraph {
        let mut paragraph = Paragraph::new(self.para_shape).with_instance(self.instance_id);
        if let Some(lead) = self.lead {
            paragraph.add_run(lead);
        }
        paragraph.add_run(TextRun::new(self.text, self.char_shape));
        paragraph
    }
}

/// Split escaped text into one [`Node::Text`] per line.
pub(crate) fn lines(text: &str) -> Vec<Node> {
    text.split('\n').map(|l| Node::Text(l.to_string())).collect()
}

/// Apply `f` to every unclaimed line, replacing it with the returned node.
pub(crate) fn map_text<F>(nodes: Vec<Node>, mut f: F) -> Vec<Node>
where
    F: FnMut(String) -> Node,
{
    nodes
        .into_iter()
        .map(|node| match node {
            Node::Text(text) => f(text),
            other => other,
        })
        .collect()
}
