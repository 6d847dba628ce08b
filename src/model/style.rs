//! Style catalog references.
//!
//! The HWPML template defines every paragraph shape and char shape the
//! converter may reference. Generated content only ever carries the
//! identifiers collected here, so a catalog must stay in sync with the
//! template it is rendered into.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a paragraph shape (`ParaShape` attribute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParaShapeId(pub u16);

/// Identifier of a character shape (`CharShape` attribute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharShapeId(pub u16);

impl fmt::Display for ParaShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CharShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of list nesting levels the catalog defines.
pub const LIST_LEVELS: usize = 6;

/// How heading levels 5 and 6 are styled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingStyleMode {
    /// Levels 5 and 6 reuse the level-4 char shape
    #[default]
    ReuseLevelFour,
    /// Levels 5 and 6 get their own char shapes
    Dedicated,
}

/// Paragraph and character shape identifiers used by generated content.
#[derive(Debug, Clone)]
pub struct StyleCatalog {
    /// Default body paragraph
    pub body: ParaShapeId,

    /// Bulleted list paragraphs, one per nesting depth
    pub list_levels: [ParaShapeId; LIST_LEVELS],

    /// Centered paragraph (table columns aligned `:---:`)
    pub center: ParaShapeId,

    /// Right-aligned paragraph (table columns aligned `---:`)
    pub right: ParaShapeId,

    /// Code line paragraph (indented, shaded)
    pub code: ParaShapeId,

    /// Empty paragraph with a bottom border
    pub rule: ParaShapeId,

    /// Block quote paragraph
    pub quote: ParaShapeId,

    /// Ordered list item
    pub ordered: ParaShapeId,

    /// Ordered list item nested one level
    pub nested_ordered: ParaShapeId,

    /// Default ("normal") character shape
    pub normal: CharShapeId,

    /// Heading char shapes for levels 1 to 4
    pub headings: [CharShapeId; 4],

    /// Dedicated heading char shapes for levels 5 and 6
    pub minor_headings: [CharShapeId; 2],

    /// Mapping used for heading levels 5 and 6
    pub heading_mode: HeadingStyleMode,

    /// Bold emphasis
    pub bold: CharShapeId,

    /// Italic emphasis
    pub italic: CharShapeId,

    /// Monospace text (inline code and code blocks)
    pub monospace: CharShapeId,

    /// Muted italic text for block quotes
    pub quote_text: CharShapeId,

    /// Literal prefixes written before bulleted items, one per depth
    pub list_glyphs: [&'static str; LIST_LEVELS],

    /// Border fill of tables and code boxes
    pub table_border_fill: u16,
}

impl StyleCatalog {
    /// Create the catalog matching the built-in HWPML template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading mode.
    pub fn with_heading_mode(mut self, mode: HeadingStyleMode) -> Self {
        self.heading_mode = mode;
        self
    }

    /// Char shape for a heading level (clamped to 1..=6).
    pub fn heading(&self, level: u8) -> CharShapeId {
        match (level.clamp(1, 6), self.heading_mode) {
            (level @ 1..=4, _) => self.headings[usize::from(level) - 1],
            (_, HeadingStyleMode::ReuseLevelFour) => self.headings[3],
            (5, HeadingStyleMode::Dedicated) => self.minor_headings[0],
            (_, HeadingStyleMode::Dedicated) => self.minor_headings[1],
        }
    }

    /// Paragraph shape for a bulleted item at `depth` (capped at the deepest level).
    pub fn list_level(&self, depth: usize) -> ParaShapeId {
        self.list_levels[depth.min(self.max_list_depth())]
    }

    /// Glyph prefix for a bulleted item at `depth`.
    pub fn list_glyph(&self, depth: usize) -> &'static str {
        self.list_glyphs[depth.min(self.max_list_depth())]
    }

    /// Deepest list depth the catalog defines (0-based).
    pub fn max_list_depth(&self) -> usize {
        LIST_LEVELS - 1
    }

    /// Whether `shape` is the default character shape.
    pub fn is_normal(&self, shape: CharShapeId) -> bool {
        shape == self.normal
    }

    /// Every paragraph shape referenced by generated content.
    pub fn para_shapes(&self) -> Vec<ParaShapeId> {
        let mut shapes = vec![self.body];
        shapes.extend_from_slice(&self.list_levels);
        shapes.extend([
            self.center,
            self.right,
            self.code,
            self.rule,
            self.quote,
            self.ordered,
            self.nested_ordered,
        ]);
        shapes
    }

    /// Every char shape referenced by generated content.
    pub fn char_shapes(&self) -> Vec<CharShapeId> {
        let mut shapes = vec![self.normal];
        shapes.extend_from_slice(&self.headings);
        shapes.extend_from_slice(&self.minor_headings);
        shapes.extend([self.bold, self.italic, self.monospace, self.quote_text]);
        shapes
    }
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self {
            body: ParaShapeId(0),
            list_levels: [
                ParaShapeId(1),
                ParaShapeId(2),
                ParaShapeId(3),
                ParaShapeId(4),
                ParaShapeId(5),
                ParaShapeId(6),
            ],
            center: ParaShapeId(7),
            right: ParaShapeId(8),
            code: ParaShapeId(9),
            rule: ParaShapeId(10),
            quote: ParaShapeId(11),
            ordered: ParaShapeId(12),
            nested_ordered: ParaShapeId(13),
            normal: CharShapeId(0),
            headings: [CharShapeId(1), CharShapeId(2), CharShapeId(3), CharShapeId(4)],
            minor_headings: [CharShapeId(5), CharShapeId(9)],
            heading_mode: HeadingStyleMode::default(),
            bold: CharShapeId(4),
            italic: CharShapeId(6),
            monospace: CharShapeId(7),
            quote_text: CharShapeId(8),
            list_glyphs: [
                "* ",
                "  - ",
                "    + ",
                "      * ",
                "        - ",
                "          + ",
            ],
            table_border_fill: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_reuse_level_four() {
        let styles = StyleCatalog::new();
        assert_eq!(styles.heading(1), CharShapeId(1));
        assert_eq!(styles.heading(4), CharShapeId(4));
        assert_eq!(styles.heading(5), CharShapeId(4));
        assert_eq!(styles.heading(6), CharShapeId(4));
    }

    #[test]
    fn test_heading_dedicated() {
        let styles = StyleCatalog::new().with_heading_mode(HeadingStyleMode::Dedicated);
        assert_eq!(styles.heading(4), CharShapeId(4));
        assert_eq!(styles.heading(5), CharShapeId(5));
        assert_eq!(styles.heading(6), CharShapeId(9));
        // Out of range levels clamp
        assert_eq!(styles.heading(9), CharShapeId(9));
        assert_eq!(styles.heading(0), CharShapeId(1));
    }

    #[test]
    fn test_list_level_capped() {
        let styles = StyleCatalog::new();
        assert_eq!(styles.list_level(0), ParaShapeId(1));
        assert_eq!(styles.list_level(5), ParaShapeId(6));
        assert_eq!(styles.list_level(12), ParaShapeId(6));
        assert_eq!(styles.list_glyph(12), "          + ");
    }

    #[test]
    fn test_shape_lists() {
        let styles = StyleCatalog::new();
        assert_eq!(styles.para_shapes().len(), 14);
        assert!(styles.char_shapes().contains(&CharShapeId(9)));
    }
}
