//! Parsing options and configuration.

use crate::model::{HeadingStyleMode, StyleCatalog};
use chrono::{FixedOffset, Utc};
use std::path::PathBuf;

/// Default total table width in HWP units.
pub const DEFAULT_TABLE_WIDTH: u32 = 41954;

/// Default seed of the list instance counter.
pub const DEFAULT_LIST_INSTANCE_BASE: u32 = 1000;

/// Offset of Korea Standard Time from UTC, in hours.
pub const KST_OFFSET_HOURS: i32 = 9;

/// Options for converting Markdown into the document model.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// How fenced code blocks are laid out
    pub code_block_style: CodeBlockStyle,

    /// Paragraph and char shape identifiers used for each construct
    pub styles: StyleCatalog,

    /// Base directory image paths are resolved against
    pub resource_dir: PathBuf,

    /// Date used when the front matter has none
    pub date_fallback: DateFallback,

    /// Emit an empty paragraph for every blank source line
    pub keep_blank_lines: bool,

    /// Normalize the input to Unicode NFC before conversion
    pub normalize_unicode: bool,

    /// Total table width in HWP units
    pub table_width: u32,

    /// First list instance identifier handed out
    pub list_instance_base: u32,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the code block layout.
    pub fn with_code_block_style(mut self, style: CodeBlockStyle) -> Self {
        self.code_block_style = style;
        self
    }

    /// Lay code blocks out as plain shaded paragraphs.
    pub fn paragraph_code_blocks(mut self) -> Self {
        self.code_block_style = CodeBlockStyle::Paragraphs;
        self
    }

    /// Set the style catalog.
    pub fn with_styles(mut self, styles: StyleCatalog) -> Self {
        self.styles = styles;
        self
    }

    /// Set how heading levels 5 and 6 are styled.
    pub fn with_heading_mode(mut self, mode: HeadingStyleMode) -> Self {
        self.styles.heading_mode = mode;
        self
    }

    /// Set the directory images are resolved against.
    pub fn with_resource_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resource_dir = dir.into();
        self
    }

    /// Set the date fallback.
    pub fn with_date_fallback(mut self, fallback: DateFallback) -> Self {
        self.date_fallback = fallback;
        self
    }

    /// Stamp the current time in Korea Standard Time when no date is given.
    pub fn stamp_date(mut self) -> Self {
        self.date_fallback = DateFallback::CurrentTime {
            utc_offset_hours: KST_OFFSET_HOURS,
        };
        self
    }

    /// Keep or drop blank source lines.
    pub fn with_blank_lines(mut self, keep: bool) -> Self {
        self.keep_blank_lines = keep;
        self
    }

    /// Enable or disable NFC normalization.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Set the total table width.
    pub fn with_table_width(mut self, width: u32) -> Self {
        self.table_width = width;
        self
    }

    /// Set the seed of the list instance counter.
    pub fn with_list_instance_base(mut self, base: u32) -> Self {
        self.list_instance_base = base;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            code_block_style: CodeBlockStyle::default(),
            styles: StyleCatalog::default(),
            resource_dir: PathBuf::from("."),
            date_fallback: DateFallback::default(),
            keep_blank_lines: false,
            normalize_unicode: true,
            table_width: DEFAULT_TABLE_WIDTH,
            list_instance_base: DEFAULT_LIST_INSTANCE_BASE,
        }
    }
}

/// Layout of fenced code blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeBlockStyle {
    /// A single-cell bordered table, one paragraph per line
    #[default]
    Table,
    /// One shaded code paragraph per line
    Paragraphs,
}

/// Date written when the front matter does not carry one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFallback {
    /// The fixed "Unknown" placeholder
    #[default]
    Placeholder,
    /// The current time at a fixed UTC offset
    CurrentTime {
        /// Hours east of UTC
        utc_offset_hours: i32,
    },
}

impl DateFallback {
    /// Resolve the fallback to a date string, or `None` for the placeholder.
    pub fn resolve(&self) -> Option<String> {
        match *self {
            DateFallback::Placeholder => None,
            DateFallback::CurrentTime { utc_offset_hours } => {
                let offset = FixedOffset::east_opt(utc_offset_hours.saturating_mul(3600))
                    .or_else(|| FixedOffset::east_opt(0))?;
                Some(
                    Utc::now()
                        .with_timezone(&offset)
                        .format("%Y-%m-%d %H:%M:%S")
                        .to_string(),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new()
            .paragraph_code_blocks()
            .with_heading_mode(HeadingStyleMode::Dedicated)
            .with_blank_lines(true)
            .with_table_width(30000)
            .stamp_date();

        assert_eq!(options.code_block_style, CodeBlockStyle::Paragraphs);
        assert_eq!(options.styles.heading_mode, HeadingStyleMode::Dedicated);
        assert!(options.keep_blank_lines);
        assert_eq!(options.table_width, 30000);
        assert_eq!(
            options.date_fallback,
            DateFallback::CurrentTime { utc_offset_hours: 9 }
        );
    }

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.code_block_style, CodeBlockStyle::Table);
        assert_eq!(options.date_fallback, DateFallback::Placeholder);
        assert!(options.normalize_unicode);
        assert!(!options.keep_blank_lines);
        assert_eq!(options.table_width, 41954);
        assert_eq!(options.list_instance_base, 1000);
    }

    #[test]
    fn test_date_fallback_resolve() {
        assert_eq!(DateFallback::Placeholder.resolve(), None);
        let stamped = DateFallback::CurrentTime { utc_offset_hours: 9 }
            .resolve()
            .unwrap();
        // "YYYY-MM-DD HH:MM:SS"
        assert_eq!(stamped.len(), 19);
        assert_eq!(&stamped[4..5], "-");
    }
}
