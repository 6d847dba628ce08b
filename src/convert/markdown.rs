//! Markdown document converter implementation.

use crate::error::Result;
use crate::model::Document;
use crate::parser::MarkdownParser;
use crate::render::{to_json, HmlRenderer, JsonFormat};
use std::path::Path;

use super::{ConvertOptions, ConvertResult, DocumentConverter, OutputFormat};

/// Markdown to HWPML converter.
///
/// Every call parses with a fresh resource registry, so one converter can
/// be reused for any number of documents.
#[derive(Debug, Clone, Default)]
pub struct MarkdownConverter {
    _private: (),
}

impl MarkdownConverter {
    /// Create a new Markdown converter.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Convert Markdown text.
    ///
    /// Images resolve against `options.parse.resource_dir`.
    pub fn convert_str(&self, text: &str, options: &ConvertOptions) -> Result<ConvertResult> {
        let parser = MarkdownParser::with_options(text, options.parse.clone());
        self.convert_parser(&parser, options)
    }

    fn convert_parser(&self, parser: &MarkdownParser, options: &ConvertOptions) -> Result<ConvertResult> {
        let renderer = HmlRenderer::new(options.render.clone());
        renderer.template().check_catalog(&options.parse.styles)?;

        let doc = parser.parse()?;
        self.convert_document(&renderer, doc, options)
    }

    fn convert_document(
        &self,
        renderer: &HmlRenderer,
        doc: Document,
        options: &ConvertOptions,
    ) -> Result<ConvertResult> {
        let content = match options.output_format {
            OutputFormat::Hml => renderer.render(&doc)?,
            OutputFormat::Json => to_json(&doc, JsonFormat::Pretty)?,
        };

        let mut result = ConvertResult::new(content, doc.metadata)
            .with_mime_type(options.output_format.mime_type());
        if options.collect_stats {
            result = result.with_stats(doc.stats);
        }
        Ok(result)
    }
}

impl DocumentConverter for MarkdownConverter {
    fn supported_extensions(&self) -> &[&str] {
        &["md", "markdown", "txt"]
    }

    fn name(&self) -> &str {
        "markdown"
    }

    fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
        let parser = MarkdownParser::open_with_options(path, options.parse.clone())?;
        self.convert_parser(&parser, options)
    }

    fn convert_bytes(&self, bytes: &[u8], options: &ConvertOptions) -> Result<ConvertResult> {
        let parser = MarkdownParser::from_bytes_with_options(bytes, options.parse.clone())?;
        self.convert_parser(&parser, options)
    }
}
