//! HWPML rendering for converted documents.
//!
//! Run text in the model is already escaped, so it is written verbatim.
//! Metadata placeholders in the template prefix are substituted once each.

use crate::error::Result;
use crate::model::{Block, Document, Metadata, Paragraph, ResourceEntry, Table, TableCell};

use super::template::{
    HwpmlTemplate, TemplateProvider, AUTHOR_PLACEHOLDER, DATE_PLACEHOLDER, TITLE_PLACEHOLDER,
};
use super::{RenderOptions, RenderResult};

/// Paragraph shape of the paragraph anchoring a table.
const ANCHOR_PARA_SHAPE: u16 = 0;

/// Char shape of the paragraph anchoring a table.
const ANCHOR_CHAR_SHAPE: u16 = 0;

/// Fixed row height of generated cells.
const CELL_HEIGHT: u32 = 282;

const CELL_MARGIN: &str = r#"<CELLMARGIN Bottom="141" Left="510" Right="510" Top="141"/>"#;

const PARA_LIST: &str = r#"<PARALIST LineWrap="Break" LinkListID="0" LinkListIDNext="0" TextDirection="0" VertAlign="Center">"#;

/// Convert a document to HWPML.
pub fn to_hml(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = HmlRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to HWPML, returning its statistics alongside.
pub fn to_hml_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let renderer = HmlRenderer::new(options.clone());
    renderer.render_with_stats(doc)
}

/// HWPML renderer.
pub struct HmlRenderer {
    options: RenderOptions,
    template: Box<dyn TemplateProvider>,
}

impl HmlRenderer {
    /// Create a renderer using the built-in template.
    pub fn new(options: RenderOptions) -> Self {
        let template = HwpmlTemplate::new().with_page(options.page);
        Self {
            options,
            template: Box::new(template),
        }
    }

    /// Use a different template.
    pub fn with_template(mut self, template: impl TemplateProvider + 'static) -> Self {
        self.template = Box::new(template);
        self
    }

    /// The template in use.
    pub fn template(&self) -> &dyn TemplateProvider {
        self.template.as_ref()
    }

    /// Render a document to HWPML.
    pub fn render(&self, doc: &Document) -> Result<String> {
        let manifest = if self.options.manifest {
            manifest(&doc.resources)
        } else {
            String::new()
        };
        let parts = self.template.wrap(&manifest);

        let prefix = fill_metadata(&parts.prefix, &doc.metadata);

        let body = self.render_body(&doc.blocks);

        let mut output = String::with_capacity(prefix.len() + body.len() + parts.suffix.len() + 2);
        output.push_str(&prefix);
        output.push_str(&body);
        output.push_str(self.options.separator());
        output.push_str(&parts.suffix);
        Ok(output)
    }

    /// Render a document to HWPML with its conversion statistics.
    pub fn render_with_stats(&self, doc: &Document) -> Result<RenderResult> {
        let content = self.render(doc)?;
        Ok(RenderResult::new(
            content,
            doc.metadata.clone(),
            doc.stats.clone(),
        ))
    }

    /// Render top-level blocks, one per line unless separators are off.
    pub fn render_body(&self, blocks: &[Block]) -> String {
        let separator = self.options.separator();
        let mut output = String::new();
        for block in blocks {
            output.push_str(separator);
            write_block(&mut output, block);
        }
        output
    }
}

/// Resource manifest, empty when there are no resources.
pub fn manifest(resources: &[ResourceEntry]) -> String {
    if resources.is_empty() {
        return String::new();
    }
    let mut output = format!(r#"<BINDATALIST Count="{}">"#, resources.len());
    for entry in resources {
        output.push_str(&format!(
            r#"<BINITEM Id="{}" BinData="{}" Format="{}" Type="{}" />"#,
            entry.id, entry.data, entry.format, entry.kind
        ));
    }
    output.push_str("</BINDATALIST>");
    output
}

/// Substitute each metadata placeholder once, in a single left-to-right
/// pass. Substituted values are never scanned again.
fn fill_metadata(prefix: &str, metadata: &Metadata) -> String {
    let mut slots = [
        (TITLE_PLACEHOLDER, metadata.title.as_str(), false),
        (AUTHOR_PLACEHOLDER, metadata.author.as_str(), false),
        (DATE_PLACEHOLDER, metadata.date.as_str(), false),
    ];
    let mut output = String::with_capacity(prefix.len());
    let mut rest = prefix;

    loop {
        let next = slots
            .iter()
            .enumerate()
            .filter(|(_, (_, _, used))| !used)
            .filter_map(|(i, (placeholder, _, _))| rest.find(placeholder).map(|pos| (pos, i)))
            .min();
        let Some((pos, i)) = next else {
            break;
        };
        let (placeholder, value, used) = &mut slots[i];
        output.push_str(&rest[..pos]);
        output.push_str(value);
        rest = &rest[pos + placeholder.len()..];
        *used = true;
    }

    output.push_str(rest);
    output
}

fn write_block(output: &mut String, block: &Block) {
    match block {
        Block::Paragraph(p) => write_paragraph(output, p),
        Block::Table(t) => write_table(output, t),
    }
}

fn write_paragraph(output: &mut String, para: &Paragraph) {
    output.push_str(&format!(r#"<P ParaShape="{}" Style="0""#, para.para_shape));
    if let Some(id) = para.instance_id {
        output.push_str(&format!(r#" InstId="{}""#, id));
    }
    output.push('>');
    for run in &para.runs {
        output.push_str(&format!(
            r#"<TEXT CharShape="{}"><CHAR>{}</CHAR></TEXT>"#,
            run.char_shape, run.text
        ));
    }
    output.push_str("</P>");
}

fn write_table(output: &mut String, table: &Table) {
    output.push_str(&format!(
        r#"<P ParaShape="{}" Style="0"><TEXT CharShape="{}">"#,
        ANCHOR_PARA_SHAPE, ANCHOR_CHAR_SHAPE
    ));
    output.push_str(&format!(
        r#"<TABLE BorderFill="{}" CellSpacing="0" ColCount="{}" PageBreak="Cell" RepeatHeader="true" RowCount="{}">"#,
        table.border_fill,
        table.col_count,
        table.row_count()
    ));
    output.push('\n');
    output.push_str(&format!(
        r#"<SHAPEOBJECT Lock="false" NumberingType="Table" TextWrap="TopAndBottom" ZOrder="{}">"#,
        table.z_order
    ));
    output.push('\n');
    output.push_str(&format!(
        r#"<SIZE Height="0" HeightRelTo="Absolute" Protect="false" Width="{}" WidthRelTo="Absolute"/>"#,
        table.width
    ));
    output.push('\n');
    output.push_str(concat!(
        r#"<POSITION AffectLSpacing="false" AllowOverlap="false" FlowWithText="true" HoldAnchorAndSO="false" "#,
        r#"HorzAlign="Left" HorzOffset="0" HorzRelTo="Column" TreatAsChar="false" VertAlign="Top" VertOffset="0" VertRelTo="Para"/>"#,
        "\n",
        r#"<OUTSIDEMARGIN Bottom="283" Left="283" Right="283" Top="283"/>"#,
        "\n</SHAPEOBJECT>\n",
        r#"<INSIDEMARGIN Bottom="141" Left="510" Right="510" Top="141"/>"#,
        "\n",
    ));

    for (row_addr, row) in table.rows.iter().enumerate() {
        output.push_str("<ROW>");
        for (col_addr, cell) in row.cells.iter().enumerate() {
            write_cell(output, table, cell, row_addr, col_addr, row.is_header);
        }
        output.push_str("</ROW>");
    }

    output.push_str("\n</TABLE><CHAR/></TEXT></P>");
}

fn write_cell(
    output: &mut String,
    table: &Table,
    cell: &TableCell,
    row_addr: usize,
    col_addr: usize,
    header: bool,
) {
    output.push_str(&format!(
        concat!(
            r#"<CELL BorderFill="{}" ColAddr="{}" ColSpan="1" Dirty="false" Editable="false" HasMargin="false" "#,
            r#"Header="{}" Height="{}" Protect="false" RowAddr="{}" RowSpan="1" Width="{}">"#,
        ),
        table.border_fill, col_addr, header, CELL_HEIGHT, row_addr, cell.width
    ));
    output.push('\n');
    output.push_str(CELL_MARGIN);
    output.push('\n');
    output.push_str(PARA_LIST);
    output.push('\n');
    for block in &cell.content {
        write_block(output, block);
    }
    output.push_str("\n</PARALIST>\n</CELL>");
}
