//! Document-level types.

use super::{Block, ResourceEntry};
use crate::render::ConversionStats;
use serde::{Deserialize, Serialize};

/// Title used when the front matter has none.
pub const DEFAULT_TITLE: &str = "No Title";

/// Author and date used when the front matter has none.
pub const DEFAULT_UNKNOWN: &str = "Unknown";

/// A converted document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, author, date)
    pub metadata: Metadata,

    /// Body blocks in source order
    pub blocks: Vec<Block>,

    /// Embedded resources in identifier order
    pub resources: Vec<ResourceEntry>,

    /// Counts collected while converting
    #[serde(default)]
    pub stats: ConversionStats,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a block to the document.
    pub fn add_block(&mut self, block: impl Into<Block>) {
        self.blocks.push(block.into());
    }

    /// Get the number of top-level blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Escaped text of the whole body, blocks on separate lines.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Document metadata.
///
/// Values are XML-escaped and substituted verbatim into the summary fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: String,

    /// Document author
    pub author: String,

    /// Document date
    pub date: String,
}

impl Metadata {
    /// Create metadata from escaped values.
    pub fn new(title: impl Into<String>, author: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            date: date.into(),
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the date.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, DEFAULT_UNKNOWN, DEFAULT_UNKNOWN)
    }
}
