//! Rendering result with metadata and statistics.

use crate::model::{Block, Metadata};
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (HWPML or JSON)
    pub content: String,

    /// Document metadata (copied from source document)
    pub metadata: Metadata,

    /// Conversion statistics
    pub stats: ConversionStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, metadata: Metadata, stats: ConversionStats) -> Self {
        Self {
            content,
            metadata,
            stats,
        }
    }

    /// Create a simple result with just content.
    pub fn content_only(content: String) -> Self {
        Self {
            content,
            metadata: Metadata::default(),
            stats: ConversionStats::default(),
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected while converting a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Number of top-level paragraphs
    pub paragraph_count: u32,

    /// Number of headings
    pub heading_count: u32,

    /// Number of bulleted and ordered list items
    pub list_item_count: u32,

    /// Number of pipe tables
    pub table_count: u32,

    /// Number of fenced code blocks
    pub code_block_count: u32,

    /// Number of non-empty code lines
    pub code_line_count: u32,

    /// Number of block quotes
    pub quote_count: u32,

    /// Number of horizontal rules
    pub horizontal_rule_count: u32,

    /// Number of embedded images
    pub image_count: u32,

    /// Number of images that could not be embedded
    pub failed_image_count: u32,

    /// Number of table-like blocks passed through as text
    pub malformed_table_count: u32,
}

impl ConversionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment list item count.
    pub fn add_list_item(&mut self) {
        self.list_item_count += 1;
    }

    /// Increment table count.
    pub fn add_table(&mut self) {
        self.table_count += 1;
    }

    /// Count one code block and its lines.
    pub fn add_code_block(&mut self, line_count: usize) {
        self.code_block_count += 1;
        self.code_line_count += u32::try_from(line_count).unwrap_or(u32::MAX);
    }

    /// Increment quote count.
    pub fn add_quote(&mut self) {
        self.quote_count += 1;
    }

    /// Increment horizontal rule count.
    pub fn add_horizontal_rule(&mut self) {
        self.horizontal_rule_count += 1;
    }

    /// Increment embedded image count.
    pub fn add_image(&mut self) {
        self.image_count += 1;
    }

    /// Increment failed image count.
    pub fn add_failed_image(&mut self) {
        self.failed_image_count += 1;
    }

    /// Increment malformed table count.
    pub fn add_malformed_table(&mut self) {
        self.malformed_table_count += 1;
    }

    /// Set the paragraph count from the finished blocks.
    pub fn count_paragraphs(&mut self, blocks: &[Block]) {
        let count = blocks.iter().filter(|b| b.is_paragraph()).count();
        self.paragraph_count = u32::try_from(count).unwrap_or(u32::MAX);
    }

    /// Human-readable multi-line summary.
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Paragraphs:  {}", self.paragraph_count),
            format!("Headings:    {}", self.heading_count),
            format!("List items:  {}", self.list_item_count),
            format!("Tables:      {}", self.table_count),
            format!(
                "Code blocks: {} ({} lines)",
                self.code_block_count, self.code_line_count
            ),
            format!("Quotes:      {}", self.quote_count),
            format!("Rules:       {}", self.horizontal_rule_count),
            format!("Images:      {}", self.image_count),
        ];
        if self.failed_image_count > 0 {
            lines.push(format!("Missing images: {}", self.failed_image_count));
        }
        if self.malformed_table_count > 0 {
            lines.push(format!("Malformed tables: {}", self.malformed_table_count));
        }
        lines.join("\n")
    }
}
