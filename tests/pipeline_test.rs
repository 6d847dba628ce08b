//! Properties of the conversion passes, checked through the public API.

use md2hml::model::{Block, MemoryResourceStore, Paragraph, StyleCatalog};
use md2hml::{convert_str, CodeBlockStyle, Document, MarkdownParser, ParseOptions};

fn parse(text: &str) -> Document {
    parse_with(text, ParseOptions::default())
}

fn parse_with(text: &str, options: ParseOptions) -> Document {
    MarkdownParser::with_options(text, options)
        .parse_with_store(Box::new(MemoryResourceStore::new()))
        .unwrap()
}

fn all_paragraphs(blocks: &[Block]) -> Vec<&Paragraph> {
    let mut out = Vec::new();
    for block in blocks {
        match block {
            Block::Paragraph(p) => out.push(p),
            Block::Table(t) => {
                for row in &t.rows {
                    for cell in &row.cells {
                        out.extend(all_paragraphs(&cell.content));
                    }
                }
            }
        }
    }
    out
}

/// Every `&` starts one of the five predefined entities and no `<`, `>` or
/// quote appears raw.
fn is_escaped(text: &str) -> bool {
    const ENTITIES: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"];
    let raw_free = !text.contains(['<', '>', '"', '\'']);
    let amps_ok = text
        .match_indices('&')
        .all(|(i, _)| ENTITIES.iter().any(|e| text[i..].starts_with(e)));
    raw_free && amps_ok
}

#[test]
fn test_list_depth_thresholds() {
    let styles = StyleCatalog::new();
    for indent in 0..=23 {
        let doc = parse(&format!("{}- item", " ".repeat(indent)));
        let para = doc.blocks[0].as_paragraph().unwrap();
        let depth = (indent / 4).min(5);
        assert_eq!(para.para_shape, styles.list_level(depth), "indent {}", indent);
        assert_eq!(para.runs[0].text, styles.list_glyph(depth));
    }
}

#[test]
fn test_list_depth_capped_beyond_deepest_level() {
    let doc = parse(&format!("{}- deep", " ".repeat(40)));
    let para = doc.blocks[0].as_paragraph().unwrap();
    assert_eq!(para.para_shape, StyleCatalog::new().list_level(5));
}

#[test]
fn test_nested_items_share_instance() {
    let doc = parse("- a\n    - b\n    - c\n- d\n    - e");
    let ids: Vec<Option<u32>> = doc
        .blocks
        .iter()
        .map(|b| b.as_paragraph().unwrap().instance_id)
        .collect();
    assert_eq!(ids, vec![None, Some(1000), Some(1000), None, Some(1001)]);
}

#[test]
fn test_code_line_counts() {
    let source = "```rust\nfn main() {\n\n    println!(\"hi\");\n}\n\n```\n\n```\nsingle\n```";
    for style in [CodeBlockStyle::Table, CodeBlockStyle::Paragraphs] {
        let options = ParseOptions::new().with_code_block_style(style);
        let doc = parse_with(source, options);
        assert_eq!(doc.stats.code_block_count, 2);
        assert_eq!(doc.stats.code_line_count, 4);

        let styles = StyleCatalog::new();
        let code_lines: Vec<String> = all_paragraphs(&doc.blocks)
            .into_iter()
            .filter(|p| p.runs.iter().all(|r| r.char_shape == styles.monospace))
            .map(Paragraph::text)
            .collect();
        assert_eq!(
            code_lines,
            vec![
                "fn main() {",
                "    println!(&quot;hi&quot;);",
                "}",
                "single"
            ]
        );
    }
}

#[test]
fn test_code_table_per_block() {
    let doc = parse("```\na\nb\n```\n```\nc\n```");
    let tables: Vec<_> = doc.blocks.iter().filter_map(Block::as_table).collect();
    assert_eq!(tables.len(), 2);
    assert!(tables.iter().all(|t| t.is_code()));
    assert_eq!(tables[0].z_order, 0);
    assert_eq!(tables[1].z_order, 1);
    assert_eq!(tables[0].rows[0].cells[0].content.len(), 2);
}

#[test]
fn test_markdown_inside_code_is_literal() {
    let doc = parse("```\n# not a heading\n- [ ] not a task\n**not bold**\n```");
    assert_eq!(doc.stats.heading_count, 0);
    assert_eq!(doc.stats.list_item_count, 0);
    let texts: Vec<String> = all_paragraphs(&doc.blocks)
        .into_iter()
        .map(Paragraph::text)
        .collect();
    assert_eq!(texts, vec!["# not a heading", "- [ ] not a task", "**not bold**"]);
}

#[test]
fn test_unclosed_fence_passes_through() {
    let doc = parse("```\nstill text");
    assert_eq!(doc.stats.code_block_count, 0);
    assert_eq!(doc.blocks.len(), 2);
    assert_eq!(doc.blocks[0].text(), "```");
    assert_eq!(doc.blocks[1].text(), "still text");
}

#[test]
fn test_single_row_table_passes_through() {
    let doc = parse("| lonely |\n\nafter");
    assert_eq!(doc.stats.table_count, 0);
    assert_eq!(doc.stats.malformed_table_count, 1);
    assert_eq!(doc.blocks[0].text(), "| lonely |");
}

#[test]
fn test_no_unescaped_metacharacters() {
    let inputs = [
        "a < b && c > d",
        "# <script>alert('x')</script>",
        "- item with \"quotes\" & 'apostrophes'",
        "> quote & <tag>",
        "| <a> | \"b\" |\n|---|---|\n| & | ' |",
        "```\n<xml attr=\"v\"/>\n```",
        "**<b>** and *&* and `<code>`",
        "[link <x>](http://a?b=1&c=2)",
        "![alt <x>](missing&.png)",
        "&amp; already escaped &lt;",
    ];
    for input in inputs {
        let doc = parse(input);
        for para in all_paragraphs(&doc.blocks) {
            for run in &para.runs {
                assert!(is_escaped(&run.text), "{:?} produced {:?}", input, run.text);
            }
        }
    }
}

#[test]
fn test_metadata_is_escaped() {
    let doc = parse("---\ntitle: A & B <draft>\n---\nx");
    assert_eq!(doc.metadata.title, "A &amp; B &lt;draft&gt;");
}

#[test]
fn test_converting_output_again_does_not_fail() {
    let first = convert_str("# Title\n\n- a\n\n| x | y |\n|---|---|\n| 1 | 2 |").unwrap();
    let second = convert_str(&first).unwrap();
    assert!(second.len() > first.len());
    assert!(second.contains("&lt;HWPML"));
}

#[test]
fn test_repeated_conversions_are_identical() {
    let source = "- a\n    - b\n\n| x |\n|---|\n| 1 |\n\n```\ncode\n```";
    let parser = MarkdownParser::new(source);
    let first = parser
        .parse_with_store(Box::new(MemoryResourceStore::new()))
        .unwrap();
    let second = parser
        .parse_with_store(Box::new(MemoryResourceStore::new()))
        .unwrap();
    assert_eq!(first.blocks, second.blocks);
    assert_eq!(first.stats, second.stats);
}

#[test]
fn test_list_marker_not_italic() {
    let doc = parse("* one\n* two *three*");
    let styles = StyleCatalog::new();
    let first = doc.blocks[0].as_paragraph().unwrap();
    assert!(first.runs.iter().all(|r| r.char_shape == styles.normal));
    let second = doc.blocks[1].as_paragraph().unwrap();
    assert_eq!(
        second.runs.iter().filter(|r| r.char_shape == styles.italic).count(),
        1
    );
}

#[test]
fn test_blank_lines_configurable() {
    assert_eq!(parse("a\n\n\nb").block_count(), 2);
    let kept = parse_with("a\n\n\nb", ParseOptions::new().with_blank_lines(true));
    assert_eq!(kept.block_count(), 4);
}
