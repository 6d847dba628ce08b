//! One-call conversion: parse, then render to the selected output format.
//!
//! # Example
//!
//! ```no_run
//! use md2hml::convert::{ConvertOptions, DocumentConverter, MarkdownConverter};
//! use std::path::Path;
//!
//! fn main() -> md2hml::Result<()> {
//!     let converter = MarkdownConverter::new();
//!     let result = converter.convert(Path::new("README.md"), &ConvertOptions::default())?;
//!     std::fs::write("readme.hml", result.content)?;
//!     Ok(())
//! }
//! ```

mod markdown;

pub use markdown::MarkdownConverter;

use crate::error::Result;
use crate::model::Metadata;
use crate::parser::ParseOptions;
use crate::render::{ConversionStats, RenderOptions};
use std::path::Path;

/// Options for document conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Parsing options
    pub parse: ParseOptions,

    /// Rendering options
    pub render: RenderOptions,

    /// Output format
    pub output_format: OutputFormat,

    /// Whether to attach statistics to the result
    pub collect_stats: bool,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set parsing options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse = options;
        self
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Enable statistics collection.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }
}

/// Output format for conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// HWPML document
    #[default]
    Hml,

    /// JSON dump of the document model
    Json,
}

impl OutputFormat {
    /// MIME type of the output.
    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Hml => "application/xml",
            OutputFormat::Json => "application/json",
        }
    }
}

/// Result of document conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Converted content
    pub content: String,

    /// Source document metadata
    pub metadata: Metadata,

    /// Conversion statistics (if collected)
    pub stats: Option<ConversionStats>,

    /// MIME type of the output
    pub mime_type: &'static str,
}

impl ConvertResult {
    /// Create a new conversion result.
    pub fn new(content: String, metadata: Metadata) -> Self {
        Self {
            content,
            metadata,
            stats: None,
            mime_type: OutputFormat::Hml.mime_type(),
        }
    }

    /// Set conversion statistics.
    pub fn with_stats(mut self, stats: ConversionStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Set MIME type.
    pub fn with_mime_type(mut self, mime_type: &'static str) -> Self {
        self.mime_type = mime_type;
        self
    }

    /// Get content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Trait for document converters.
pub trait DocumentConverter: Send + Sync {
    /// Supported file extensions, lowercase without the leading dot.
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this converter.
    fn name(&self) -> &str;

    /// Convert a file at the given path.
    fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult>;

    /// Convert from bytes.
    fn convert_bytes(&self, bytes: &[u8], options: &ConvertOptions) -> Result<ConvertResult>;

    /// Check if this converter supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}
