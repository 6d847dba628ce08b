//! Fenced code blocks.

use super::context::Conversion;
use super::node::Node;
use super::options::CodeBlockStyle;
use crate::model::{Block, CharShapeId, ParaShapeId, Paragraph, Table, TextRun};

const FENCE: &str = "```";

/// Replace every fenced code block with code paragraphs or a code box.
///
/// The opening fence may carry an info string; the closing fence must be
/// bare. A fence that is never closed is left untouched.
pub(crate) fn extract_code_blocks(nodes: Vec<Node>, cx: &mut Conversion<'_>) -> Vec<Node> {
    let mut out = Vec::with_capacity(nodes.len());
    let mut iter = nodes.into_iter();

    while let Some(node) = iter.next() {
        let opens = node
            .as_text()
            .is_some_and(|line| cx.patterns.fence_open.is_match(line.trim_end()));
        if !opens {
            out.push(node);
            continue;
        }

        // Collect up to the closing fence.
        let mut body: Vec<Node> = Vec::new();
        let mut closed = false;
        for inner in iter.by_ref() {
            if inner.as_text().is_some_and(|l| l.trim_end() == FENCE) {
                closed = true;
                break;
            }
            body.push(inner);
        }

        if closed {
            let code_lines: Vec<String> = body
                .into_iter()
                .filter_map(|n| match n {
                    Node::Text(line) => Some(line),
                    _ => None,
                })
                .filter(|line| !line.is_empty())
                .collect();
            out.extend(code_block(code_lines, cx));
        } else {
            log::debug!("Unclosed code fence; passing {} line(s) through", body.len() + 1);
            out.push(node);
            out.extend(body);
        }
    }

    out
}

/// Build the nodes of one code block from its non-empty lines.
fn code_block(lines: Vec<String>, cx: &mut Conversion<'_>) -> Vec<Node> {
    let styles = cx.styles();
    cx.stats.add_code_block(lines.len());

    match cx.options.code_block_style {
        CodeBlockStyle::Paragraphs => lines
            .into_iter()
            .map(|line| Node::Block(Block::Paragraph(code_line(line, styles.code, styles.monospace))))
            .collect(),
        CodeBlockStyle::Table => {
            if lines.is_empty() {
                return Vec::new();
            }
            let paragraphs = lines
                .into_iter()
                .map(|line| code_line(line, styles.body, styles.monospace))
                .collect();
            let table = Table::code_box(
                paragraphs,
                cx.options.table_width,
                styles.table_border_fill,
                cx.next_z_order(),
            );
            vec![Node::Block(Block::Table(table))]
        }
    }
}

fn code_line(line: String, para_shape: ParaShapeId, char_shape: CharShapeId) -> Paragraph {
    let mut paragraph = Paragraph::new(para_shape);
    paragraph.add_run(TextRun::new(line, char_shape));
    paragraph
}
