//! Pipe tables.

use super::context::Conversion;
use super::node::Node;
use crate::error::{Error, Result};
use crate::model::{ParaShapeId, Paragraph, StyleCatalog, Table, TableCell, TableRow};

/// Column alignment selected by the separator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl ColumnAlign {
    fn para_shape(self, styles: &StyleCatalog) -> ParaShapeId {
        match self {
            ColumnAlign::Left => styles.body,
            ColumnAlign::Center => styles.center,
            ColumnAlign::Right => styles.right,
        }
    }
}

/// Whether a line looks like a table row (`|` at both ends).
pub fn is_table_row(line: &str) -> bool {
    let line = line.trim_end();
    line.len() >= 2 && line.starts_with('|') && line.ends_with('|')
}

/// Split a row into trimmed cell texts.
pub fn split_cells(line: &str) -> Vec<&str> {
    let line = line.trim();
    let inner = line.strip_prefix('|').unwrap_or(line);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(str::trim).collect()
}

/// Convert every maximal run of table rows into a table.
///
/// A run of a single row is not a table; it is passed through unchanged.
pub(crate) fn tables(nodes: Vec<Node>, cx: &mut Conversion<'_>) -> Vec<Node> {
    let mut out = Vec::with_capacity(nodes.len());
    let mut pending: Vec<String> = Vec::new();

    for node in nodes {
        match node {
            Node::Text(line) if is_table_row(&line) => pending.push(line),
            other => {
                flush(&mut pending, &mut out, cx);
                out.push(other);
            }
        }
    }
    flush(&mut pending, &mut out, cx);

    out
}

fn flush(pending: &mut Vec<String>, out: &mut Vec<Node>, cx: &mut Conversion<'_>) {
    if pending.is_empty() {
        return;
    }
    let rows = std::mem::take(pending);
    match build_table(&rows, cx) {
        Ok(table) => {
            cx.stats.add_table();
            out.push(Node::Block(table.into()));
        }
        Err(err) => {
            log::debug!("{}; passing the rows through", err);
            cx.stats.add_malformed_table();
            out.extend(rows.into_iter().map(Node::Text));
        }
    }
}

/// Build a table from a header row, a separator row and data rows.
fn build_table(lines: &[String], cx: &mut Conversion<'_>) -> Result<Table> {
    if lines.len() < 2 {
        return Err(Error::MalformedTable(lines.len()));
    }

    let styles = cx.styles();
    let header = split_cells(&lines[0]);
    let col_count = header.len();
    let aligns = column_aligns(&lines[1], col_count, cx);

    let mut table = Table::new(
        col_count,
        cx.options.table_width,
        styles.table_border_fill,
        cx.next_z_order(),
    );
    let width = table.column_width();

    let cells_of = |texts: Vec<&str>| -> Vec<TableCell> {
        let mut texts = texts;
        texts.resize(col_count, "");
        texts
            .into_iter()
            .zip(&aligns)
            .map(|(text, align)| {
                let paragraph = Paragraph::with_text(align.para_shape(styles), styles.normal, text);
                TableCell::paragraph(paragraph, width)
            })
            .collect()
    };

    table.add_row(TableRow::header(cells_of(header)));
    for line in &lines[2..] {
        table.add_row(TableRow::new(cells_of(split_cells(line))));
    }

    Ok(table)
}

/// Read column alignments from the separator row.
///
/// A second row that is not a separator still gets discarded; every column
/// is then left-aligned.
fn column_aligns(line: &str, col_count: usize, cx: &Conversion<'_>) -> Vec<ColumnAlign> {
    let cells = split_cells(line);
    let separator = &cx.patterns.table_separator;
    let is_separator = cells.iter().all(|c| separator.is_match(c));
    if !is_separator {
        log::debug!("Second table row is not a separator row; discarding it");
    }

    (0..col_count)
        .map(|i| {
            let caps = cells
                .get(i)
                .filter(|_| is_separator)
                .and_then(|cell| separator.captures(cell));
            match caps {
                Some(caps) => match (!caps[1].is_empty(), !caps[2].is_empty()) {
                    (true, true) => ColumnAlign::Center,
                    (false, true) => ColumnAlign::Right,
                    _ => ColumnAlign::Left,
                },
                None => ColumnAlign::Left,
            }
        })
        .collect()
}
