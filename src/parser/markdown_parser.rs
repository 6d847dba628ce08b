//! Markdown document parser.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use unicode_normalization::UnicodeNormalization;

use crate::error::Result;
use crate::model::{Document, FsResourceStore, ResourceRegistry, ResourceStore};

use super::context::Conversion;
use super::escape::escape_xml;
use super::inline::InlineFormatter;
use super::options::ParseOptions;
use super::patterns::Patterns;
use super::{blocks, code, front_matter, image, list, node, table, wrap};

/// Markdown document parser.
///
/// Converts Markdown with optional front matter into the document model.
/// The passes run in a fixed order: images, code blocks, rules, links,
/// list items, task markers, quotes, tables and headings, then paragraph
/// wrapping, run closing and inline emphasis.
pub struct MarkdownParser {
    source: String,
    options: ParseOptions,
    patterns: Patterns,
}

impl MarkdownParser {
    /// Create a parser for Markdown text.
    pub fn new(source: impl Into<String>) -> Self {
        Self::with_options(source, ParseOptions::default())
    }

    /// Create a parser for Markdown text with custom options.
    pub fn with_options(source: impl Into<String>, options: ParseOptions) -> Self {
        Self {
            source: source.into(),
            options,
            patterns: Patterns::new(),
        }
    }

    /// Open a Markdown file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a Markdown file with custom options.
    ///
    /// Image paths resolve against the file's directory.
    pub fn open_with_options<P: AsRef<Path>>(path: P, mut options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        if let Some(parent) = path.parent() {
            options.resource_dir = parent.join(&options.resource_dir);
        }
        Self::from_bytes_with_options(&data, options)
    }

    /// Create a parser from UTF-8 bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Create a parser from UTF-8 bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        let source = String::from_utf8(data.to_vec())?;
        Ok(Self::with_options(source, options))
    }

    /// Get the parse options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse the document, reading images from the resource directory.
    pub fn parse(&self) -> Result<Document> {
        let store = FsResourceStore::new(&self.options.resource_dir);
        self.parse_with_store(Box::new(store))
    }

    /// Parse the document, reading images from `store`.
    pub fn parse_with_store(&self, store: Box<dyn ResourceStore>) -> Result<Document> {
        let text = self.normalized();
        let (metadata, body) = front_matter::split(&text, self.options.date_fallback);
        let escaped = escape_xml(body);

        let mut cx = Conversion::new(&self.patterns, &self.options, ResourceRegistry::new(store));

        let nodes = node::lines(&escaped);
        let nodes = image::embed_images(nodes, &mut cx);
        let nodes = code::extract_code_blocks(nodes, &mut cx);
        let nodes = blocks::horizontal_rules(nodes, &mut cx);
        let nodes = blocks::flatten_links(nodes, &cx);
        let nodes = list::list_items(nodes, &mut cx);
        let nodes = blocks::task_markers(nodes);
        let nodes = blocks::block_quotes(nodes, &mut cx);
        let nodes = table::tables(nodes, &mut cx);
        let nodes = blocks::headings(nodes, &mut cx);

        let wrapped = wrap::wrap_paragraphs(nodes, &cx);
        let closed = wrap::close_runs(wrapped);
        let blocks = InlineFormatter::new(&self.patterns, &self.options.styles).format_blocks(closed);

        let mut stats = cx.stats;
        stats.count_paragraphs(&blocks);
        let resources = cx.registry.into_manifest();

        log::debug!(
            "Converted {} block(s), {} embedded resource(s)",
            blocks.len(),
            resources.len()
        );

        Ok(Document {
            metadata,
            blocks,
            resources,
            stats,
        })
    }

    /// Source text with line endings unified and, optionally, NFC applied.
    fn normalized(&self) -> Cow<'_, str> {
        let source = self.source.trim_start_matches('\u{feff}');
        let mut text = if source.contains('\r') {
            Cow::Owned(source.replace('\r', ""))
        } else {
            Cow::Borrowed(source)
        };
        if self.options.normalize_unicode {
            text = Cow::Owned(text.nfc().collect());
        }
        text
    }
}
