//! Rendering options and configuration.

use super::template::PageGeometry;

/// Options for rendering a document to HWPML.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Put a newline between top-level blocks
    pub block_separator: bool,

    /// Embed the resource manifest in the mapping table
    pub manifest: bool,

    /// Page geometry of the section definition
    pub page: PageGeometry,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the newline between blocks.
    pub fn with_block_separator(mut self, separate: bool) -> Self {
        self.block_separator = separate;
        self
    }

    /// Enable or disable the resource manifest.
    pub fn with_manifest(mut self, manifest: bool) -> Self {
        self.manifest = manifest;
        self
    }

    /// Set the page geometry.
    pub fn with_page(mut self, page: PageGeometry) -> Self {
        self.page = page;
        self
    }

    /// Text written between two top-level blocks.
    pub fn separator(&self) -> &'static str {
        if self.block_separator {
            "\n"
        } else {
            ""
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            block_separator: true,
            manifest: true,
            page: PageGeometry::default(),
        }
    }
}
