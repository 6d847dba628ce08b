//! Document model types for converted Markdown content.
//!
//! This module defines the intermediate representation (IR) that bridges
//! Markdown parsing and HWPML rendering. Text held by the model is already
//! XML-escaped; renderers write it out verbatim.

mod block;
mod document;
mod paragraph;
mod resource;
mod style;
mod table;

pub use block::Block;
pub use document::{Document, Metadata, DEFAULT_TITLE, DEFAULT_UNKNOWN};
pub use paragraph::{Paragraph, TextRun};
pub use resource::{
    format_tag, FsResourceStore, MemoryResourceStore, ResourceEntry, ResourceRegistry,
    ResourceStore, EMBEDDING,
};
pub use style::{CharShapeId, HeadingStyleMode, ParaShapeId, StyleCatalog, LIST_LEVELS};
pub use table::{Table, TableCell, TableKind, TableRow};
