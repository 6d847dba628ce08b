//! Markdown parsing module.

mod blocks;
mod code;
mod context;
mod escape;
mod front_matter;
mod image;
mod inline;
mod list;
mod markdown_parser;
mod node;
mod options;
mod patterns;
mod table;
mod wrap;

pub use escape::{escape_xml, unescape_xml};
pub use front_matter::{split as split_front_matter, FRONT_MATTER_MARKER};
pub use inline::InlineFormatter;
pub use list::{indent_width, nesting_depth, INDENT_WIDTH};
pub use markdown_parser::MarkdownParser;
pub use options::{
    CodeBlockStyle, DateFallback, ParseOptions, DEFAULT_LIST_INSTANCE_BASE, DEFAULT_TABLE_WIDTH,
    KST_OFFSET_HOURS,
};
pub use patterns::Patterns;
pub use table::{is_table_row, split_cells, ColumnAlign};
