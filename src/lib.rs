//! # md2hml
//!
//! Markdown to HWPML converter for Rust.
//!
//! This library converts Markdown with an optional front-matter block into
//! HWPML 2.x, the XML form of Hangul word processor documents. Images are
//! embedded as Base64 resources.
//!
//! ## Quick Start
//!
//! ```no_run
//! use md2hml::{parse_file, render};
//!
//! fn main() -> md2hml::Result<()> {
//!     // Parse a Markdown file
//!     let doc = parse_file("README.md")?;
//!
//!     // Render to HWPML
//!     let options = render::RenderOptions::default();
//!     let hml = render::to_hml(&doc, &options)?;
//!     std::fs::write("readme.hml", hml)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Block structure**: headings, lists, ordered lists, task lists, quotes,
//!   rules, pipe tables and fenced code blocks
//! - **Inline emphasis**: bold, italic and code spans
//! - **Embedded images**: read, encoded and listed in the resource manifest
//! - **Front matter**: title, author and date in the document summary
//! - **JSON dump**: the intermediate document model for debugging

pub mod convert;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{
    ConvertOptions, ConvertResult, DocumentConverter, MarkdownConverter, OutputFormat,
};
pub use error::{Error, Result};
pub use model::{
    Block, CharShapeId, Document, HeadingStyleMode, Metadata, ParaShapeId, Paragraph,
    ResourceEntry, StyleCatalog, Table, TableCell, TableRow, TextRun,
};
pub use parser::{CodeBlockStyle, DateFallback, MarkdownParser, ParseOptions};
pub use render::{ConversionStats, JsonFormat, RenderOptions};

use std::path::Path;

/// Parse Markdown text into a document.
///
/// Images resolve against the current directory.
///
/// # Example
///
/// ```
/// use md2hml::parse_str;
///
/// let doc = parse_str("# Title\n\nHello **world**.").unwrap();
/// assert_eq!(doc.block_count(), 2);
/// ```
pub fn parse_str(text: &str) -> Result<Document> {
    MarkdownParser::new(text).parse()
}

/// Parse Markdown text with custom options.
pub fn parse_str_with_options(text: &str, options: ParseOptions) -> Result<Document> {
    MarkdownParser::with_options(text, options).parse()
}

/// Parse a Markdown file into a document.
///
/// Images resolve against the file's directory.
///
/// # Example
///
/// ```no_run
/// use md2hml::parse_file;
///
/// let doc = parse_file("README.md").unwrap();
/// println!("Title: {}", doc.metadata.title);
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let parser = MarkdownParser::open(path)?;
    parser.parse()
}

/// Parse a Markdown file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    let parser = MarkdownParser::open_with_options(path, options)?;
    parser.parse()
}

/// Convert Markdown text to HWPML.
///
/// # Example
///
/// ```
/// use md2hml::convert_str;
///
/// let hml = convert_str("Body text").unwrap();
/// assert!(hml.contains("<CHAR>Body text</CHAR>"));
/// ```
pub fn convert_str(text: &str) -> Result<String> {
    let doc = parse_str(text)?;
    render::to_hml(&doc, &RenderOptions::default())
}

/// Convert a Markdown file to HWPML.
///
/// # Example
///
/// ```no_run
/// use md2hml::convert_file;
///
/// let hml = convert_file("README.md").unwrap();
/// std::fs::write("readme.hml", hml).unwrap();
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_hml(&doc, &RenderOptions::default())
}

/// Convert a Markdown file to a JSON dump of the document model.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_json(&doc, format)
}

/// Builder for parsing and converting Markdown documents.
///
/// # Example
///
/// ```no_run
/// use md2hml::Md2Hml;
///
/// let hml = Md2Hml::new()
///     .dedicated_headings()
///     .stamp_date()
///     .parse_file("README.md")?
///     .to_hml()?;
/// # Ok::<(), md2hml::Error>(())
/// ```
pub struct Md2Hml {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Md2Hml {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Set the code block layout.
    pub fn with_code_style(mut self, style: CodeBlockStyle) -> Self {
        self.parse_options = self.parse_options.with_code_block_style(style);
        self
    }

    /// Give heading levels 5 and 6 their own char shapes.
    pub fn dedicated_headings(mut self) -> Self {
        self.parse_options = self
            .parse_options
            .with_heading_mode(HeadingStyleMode::Dedicated);
        self
    }

    /// Stamp the current time when the front matter has no date.
    pub fn stamp_date(mut self) -> Self {
        self.parse_options = self.parse_options.stamp_date();
        self
    }

    /// Keep blank source lines as empty paragraphs.
    pub fn keep_blank_lines(mut self) -> Self {
        self.parse_options = self.parse_options.with_blank_lines(true);
        self
    }

    /// Set the directory images are resolved against.
    pub fn with_resource_dir(mut self, dir: impl Into<std::path::PathBuf>) -> Self {
        self.parse_options = self.parse_options.with_resource_dir(dir);
        self
    }

    /// Leave the resource manifest out of the output.
    pub fn without_manifest(mut self) -> Self {
        self.render_options = self.render_options.with_manifest(false);
        self
    }

    /// Set all parse options at once.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Set all render options at once.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Parse Markdown text and return a result wrapper.
    pub fn parse_str(self, text: &str) -> Result<Md2HmlResult> {
        let document = MarkdownParser::with_options(text, self.parse_options).parse()?;
        Ok(Md2HmlResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse a Markdown file and return a result wrapper.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<Md2HmlResult> {
        let parser = MarkdownParser::open_with_options(path, self.parse_options)?;
        let document = parser.parse()?;
        Ok(Md2HmlResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse Markdown from UTF-8 bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<Md2HmlResult> {
        let parser = MarkdownParser::from_bytes_with_options(data, self.parse_options)?;
        let document = parser.parse()?;
        Ok(Md2HmlResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for Md2Hml {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a Markdown document.
pub struct Md2HmlResult {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl Md2HmlResult {
    /// Render to HWPML.
    pub fn to_hml(&self) -> Result<String> {
        render::to_hml(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Statistics collected while converting.
    pub fn stats(&self) -> &ConversionStats {
        &self.document.stats
    }

    /// Escaped body text without markup.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
