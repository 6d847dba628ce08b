//! End-to-end conversion tests.

use std::fs;
use std::path::Path;

use md2hml::convert::{ConvertOptions, DocumentConverter, MarkdownConverter, OutputFormat};
use md2hml::model::{Block, CharShapeId, MemoryResourceStore, ParaShapeId};
use md2hml::{convert_file, convert_str, parse_file, Error, MarkdownParser, Md2Hml};

fn runs(block: &Block) -> Vec<(String, u16)> {
    block
        .as_paragraph()
        .expect("paragraph")
        .runs
        .iter()
        .map(|r| (r.text.clone(), r.char_shape.0))
        .collect()
}

fn write_file(dir: &Path, name: &str, bytes: &[u8]) {
    fs::write(dir.join(name), bytes).unwrap();
}

#[test]
fn test_heading_and_bold_scenario() {
    let doc = MarkdownParser::new("# Title\n\nHello **world**.")
        .parse_with_store(Box::new(MemoryResourceStore::new()))
        .unwrap();

    assert_eq!(doc.block_count(), 2);
    assert_eq!(runs(&doc.blocks[0]), vec![("Title".to_string(), 1)]);
    assert_eq!(
        runs(&doc.blocks[1]),
        vec![
            ("Hello ".to_string(), 0),
            ("world".to_string(), 4),
            (".".to_string(), 0)
        ]
    );
}

#[test]
fn test_front_matter_scenario() {
    let doc = MarkdownParser::new("---\ntitle: Report\nauthor: Jane\n---\nBody text")
        .parse_with_store(Box::new(MemoryResourceStore::new()))
        .unwrap();

    assert_eq!(doc.metadata.title, "Report");
    assert_eq!(doc.metadata.author, "Jane");
    assert_eq!(doc.metadata.date, "Unknown");
    assert_eq!(doc.block_count(), 1);
    assert_eq!(doc.blocks[0].text(), "Body text");

    let hml = convert_str("---\ntitle: Report\nauthor: Jane\n---\nBody text").unwrap();
    assert!(hml.contains("<TITLE>Report</TITLE><AUTHOR>Jane</AUTHOR><DATE>Unknown</DATE>"));
    assert!(!hml.contains("title: Report"));
}

#[test]
fn test_missing_image_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("doc.md");
    fs::write(&input, "![logo](missing.png)").unwrap();

    let doc = parse_file(&input).unwrap();
    assert!(doc.resources.is_empty());
    assert_eq!(doc.blocks[0].text(), "[Image not found: missing.png]");
    assert_eq!(doc.stats.failed_image_count, 1);

    let hml = convert_file(&input).unwrap();
    assert!(!hml.contains("<BINDATALIST"));
    assert!(hml.contains("[Image not found: missing.png]"));
}

#[test]
fn test_short_table_row_scenario() {
    let doc = MarkdownParser::new("| A | B | C |\n|---|---|---|\n| 1 | 2 | 3 |\n| 4 |")
        .parse_with_store(Box::new(MemoryResourceStore::new()))
        .unwrap();

    let table = doc.blocks[0].as_table().expect("table");
    assert_eq!(table.col_count, 3);
    assert_eq!(table.row_count(), 3);
    assert!(table.rows[0].is_header);

    let short = &table.rows[2];
    assert_eq!(short.cells.len(), 3);
    assert_eq!(short.cells[0].text(), "4");
    assert!(short.cells[1].is_empty());
    assert!(short.cells[2].is_empty());
}

#[test]
fn test_image_identifiers_skip_failures() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "a.png", &[0x89, 0x50, 0x4e, 0x47]);
    write_file(dir.path(), "b.JPEG", &[0xff, 0xd8, 0xff]);
    let input = dir.path().join("doc.md");
    fs::write(&input, "![a](a.png)\n\n![gone](gone.png)\n\n![b](b.JPEG)\n\n![a again](a.png)").unwrap();

    let doc = parse_file(&input).unwrap();
    let ids: Vec<u32> = doc.resources.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(doc.resources[1].format, "jpg");
    assert_eq!(doc.blocks[0].text(), "[Image Embedded: a (ID: 1)]");
    assert_eq!(doc.blocks[2].text(), "[Image Embedded: b (ID: 2)]");
    assert_eq!(doc.blocks[3].text(), "[Image Embedded: a again (ID: 3)]");

    let hml = convert_file(&input).unwrap();
    assert!(hml.contains(r#"<BINDATALIST Count="3">"#));
    assert!(hml.contains(r#"<BINITEM Id="1" BinData="iVBORw==" Format="png" Type="Embedding" />"#));
    assert!(hml.contains(r#"<BINITEM Id="2" BinData="/9j/" Format="jpg" Type="Embedding" />"#));
}

#[test]
fn test_image_in_subdirectory() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("img")).unwrap();
    write_file(&dir.path().join("img"), "pic.gif", b"GIF89a");
    let input = dir.path().join("doc.md");
    fs::write(&input, "See ![pic](img/pic.gif) here").unwrap();

    let doc = parse_file(&input).unwrap();
    assert_eq!(doc.resources.len(), 1);
    assert_eq!(doc.resources[0].format, "gif");
    assert_eq!(doc.blocks[0].text(), "See [Image Embedded: pic (ID: 1)] here");
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = convert_file(dir.path().join("absent.md"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_converter_trait_object() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.markdown");
    fs::write(&input, "- one\n- two\n\n```\nlet x = 1;\n```").unwrap();

    let converter: Box<dyn DocumentConverter> = Box::new(MarkdownConverter::new());
    assert!(converter.supports_extension("markdown"));

    let options = ConvertOptions::new().with_stats(true);
    let result = converter.convert(&input, &options).unwrap();
    let stats = result.stats.expect("stats");
    assert_eq!(stats.list_item_count, 2);
    assert_eq!(stats.code_block_count, 1);
    assert_eq!(stats.table_count, 0);
    assert!(result.content.contains(r#"<TEXT CharShape="7"><CHAR>let x = 1;</CHAR></TEXT>"#));
    assert!(result.content.contains(r#"<TABLE BorderFill="3" CellSpacing="0" ColCount="1""#));
}

#[test]
fn test_json_output() {
    let options = ConvertOptions::new().with_format(OutputFormat::Json);
    let result = MarkdownConverter::new()
        .convert_bytes("> quoted".as_bytes(), &options)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&result.content).unwrap();
    let block = &value["blocks"][0];
    assert_eq!(block["type"], "paragraph");
    assert_eq!(block["para_shape"], 11);
    assert_eq!(block["runs"][0]["char_shape"], 8);
}

#[test]
fn test_builder_round() {
    let result = Md2Hml::new()
        .keep_blank_lines()
        .parse_str("a\n\nb")
        .unwrap();
    assert_eq!(result.document().block_count(), 3);
    assert!(result.document().blocks[1]
        .as_paragraph()
        .is_some_and(|p| p.para_shape == ParaShapeId(0) && p.is_empty()));
}

#[test]
fn test_full_document() {
    let source = "\
---
title: Guide
author: Kim
date: 2024-03-01
---
# Intro

Some *italic*, __bold__ and `code`.

- first
    - nested
        - deeper
- back

1. step
    1. sub-step

- [ ] todo
- [x] done

> a quote

---

| Name | Score |
|:----:|------:|
| Lee | 10 |
";
    let doc = MarkdownParser::new(source)
        .parse_with_store(Box::new(MemoryResourceStore::new()))
        .unwrap();
    let stats = &doc.stats;
    assert_eq!(stats.heading_count, 1);
    assert_eq!(stats.list_item_count, 8);
    assert_eq!(stats.quote_count, 1);
    assert_eq!(stats.horizontal_rule_count, 1);
    assert_eq!(stats.table_count, 1);

    let italic = doc.blocks[1]
        .as_paragraph()
        .unwrap()
        .runs
        .iter()
        .any(|r| r.text == "italic" && r.char_shape == CharShapeId(6));
    assert!(italic);

    let table = doc.blocks.iter().find_map(Block::as_table).unwrap();
    let header = &table.rows[0].cells;
    let para = |cell: &md2hml::TableCell| cell.content[0].as_paragraph().unwrap().para_shape;
    assert_eq!(para(&header[0]), ParaShapeId(7));
    assert_eq!(para(&header[1]), ParaShapeId(8));

    let texts: Vec<String> = doc.blocks.iter().map(Block::text).collect();
    assert!(texts.iter().any(|t| t == "* \u{2610} todo"));
    assert!(texts.iter().any(|t| t == "* \u{2611} done"));
    assert!(texts.iter().any(|t| t == "1. sub-step"));
}

#[test]
fn test_link_after_missing_image() {
    let doc = MarkdownParser::new("![a](x.png) see [b](u)")
        .parse_with_store(Box::new(MemoryResourceStore::new()))
        .unwrap();
    assert_eq!(doc.blocks[0].text(), "[Image not found: x.png] see b (u)");
}
