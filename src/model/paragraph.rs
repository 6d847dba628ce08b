//! Paragraph and text-level types.

use super::{CharShapeId, ParaShapeId};
use crate::parser::escape_xml;
use serde::{Deserialize, Serialize};

/// A paragraph of text content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in the paragraph
    pub runs: Vec<TextRun>,

    /// Paragraph shape (alignment, indent, border)
    pub para_shape: ParaShapeId,

    /// List instance identifier grouping nested list items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<u32>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new(para_shape: ParaShapeId) -> Self {
        Self {
            runs: Vec::new(),
            para_shape,
            instance_id: None,
        }
    }

    /// Create a paragraph holding one run of already escaped text.
    pub fn with_text(para_shape: ParaShapeId, char_shape: CharShapeId, text: impl Into<String>) -> Self {
        let mut p = Self::new(para_shape);
        p.add_run(TextRun::new(text, char_shape));
        p
    }

    /// Set the list instance identifier.
    pub fn with_instance(mut self, instance_id: Option<u32>) -> Self {
        self.instance_id = instance_id;
        self
    }

    /// Add a styled text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.runs.push(run);
    }

    /// Concatenated (escaped) text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if the paragraph carries no text.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(TextRun::is_empty)
    }
}

/// A run of text sharing one character shape.
///
/// `text` is XML-escaped content: it never contains a raw `<`, `&` or quote,
/// and it is written to the output verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    /// Escaped text content
    pub text: String,

    /// Character shape
    pub char_shape: CharShapeId,
}

impl TextRun {
    /// Create a run from already escaped text.
    pub fn new(text: impl Into<String>, char_shape: CharShapeId) -> Self {
        Self {
            text: text.into(),
            char_shape,
        }
    }

    /// Create a run from raw text, escaping it.
    pub fn from_raw(raw: &str, char_shape: CharShapeId) -> Self {
        Self::new(escape_xml(raw), char_shape)
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_text() {
        let mut p = Paragraph::new(ParaShapeId(0));
        p.add_run(TextRun::new("Hello ", CharShapeId(0)));
        p.add_run(TextRun::new("world", CharShapeId(4)));
        p.add_run(TextRun::new("!", CharShapeId(0)));

        assert_eq!(p.text(), "Hello world!");
        assert!(!p.is_empty());
    }

    #[test]
    fn test_empty_paragraph() {
        let p = Paragraph::with_text(ParaShapeId(10), CharShapeId(0), "");
        assert!(p.is_empty());
        assert_eq!(p.runs.len(), 1);
    }

    #[test]
    fn test_run_from_raw_escapes() {
        let run = TextRun::from_raw("a < b & \"c\"", CharShapeId(0));
        assert_eq!(run.text, "a &lt; b &amp; &quot;c&quot;");
    }
}
