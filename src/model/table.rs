//! Table types.

use super::{Block, Paragraph};
use serde::{Deserialize, Serialize};

/// What a table was generated from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    /// A pipe table from the source
    #[default]
    Data,
    /// A one-cell box holding a fenced code block
    Code,
}

/// A table structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table
    pub rows: Vec<TableRow>,

    /// Number of columns (fixed by the header row)
    pub col_count: usize,

    /// Total width in HWP units
    pub width: u32,

    /// Border fill applied to the table and its cells
    pub border_fill: u16,

    /// Shape stacking order, unique per conversion run
    pub z_order: u32,

    /// Origin of the table
    pub kind: TableKind,
}

impl Table {
    /// Create a new empty table.
    pub fn new(col_count: usize, width: u32, border_fill: u16, z_order: u32) -> Self {
        Self {
            rows: Vec::new(),
            col_count,
            width,
            border_fill,
            z_order,
            kind: TableKind::Data,
        }
    }

    /// Create a single-cell table holding one paragraph per code line.
    pub fn code_box(lines: Vec<Paragraph>, width: u32, border_fill: u16, z_order: u32) -> Self {
        let mut table = Self::new(1, width, border_fill, z_order);
        table.kind = TableKind::Code;
        let content = lines.into_iter().map(Block::Paragraph).collect();
        table.add_row(TableRow::new(vec![TableCell::with_content(content, width)]));
        table
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of one column when the total width is split evenly.
    pub fn column_width(&self) -> u32 {
        match u32::try_from(self.col_count) {
            Ok(0) | Err(_) => self.width,
            Ok(cols) => self.width / cols,
        }
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether this table boxes a code block.
    pub fn is_code(&self) -> bool {
        self.kind == TableKind::Code
    }

    /// Escaped text of the table, rows on separate lines.
    pub fn text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,

    /// Whether this is a header row
    pub is_header: bool,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            is_header: false,
        }
    }

    /// Create a header row.
    pub fn header(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            is_header: true,
        }
    }

    /// Escaped text, cells separated by tabs.
    pub fn text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.text())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell.
///
/// Cells hold blocks, never runs directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell content
    pub content: Vec<Block>,

    /// Cell width in HWP units
    pub width: u32,
}

impl TableCell {
    /// Create a cell holding a single paragraph.
    pub fn paragraph(paragraph: Paragraph, width: u32) -> Self {
        Self::with_content(vec![Block::Paragraph(paragraph)], width)
    }

    /// Create a cell with arbitrary block content.
    pub fn with_content(content: Vec<Block>, width: u32) -> Self {
        Self { content, width }
    }

    /// Escaped text of the cell.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .map(|b| b.text())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Check if the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.text().trim().is_empty()
    }
}
