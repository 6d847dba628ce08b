//! Benchmarks for md2hml conversion performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks convert synthetic Markdown held in memory, so no file
//! system access is measured.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use md2hml::model::MemoryResourceStore;
use md2hml::{render, CodeBlockStyle, MarkdownParser, ParseOptions, RenderOptions};

/// Creates a synthetic Markdown document with the given number of sections.
fn create_test_markdown(section_count: usize) -> String {
    let mut content = String::from("---\ntitle: Benchmark\nauthor: md2hml\n---\n");

    for i in 0..section_count {
        content.push_str(&format!("# Section {}\n\n", i + 1));
        content.push_str("Some **bold**, *italic* and `code` text with a [link](http://example.com).\n\n");
        content.push_str("- first item\n    - nested item\n        - deeper item\n- back out\n\n");
        content.push_str("1. step one\n2. step two\n\n");
        content.push_str("- [ ] open task\n- [x] closed task\n\n");
        content.push_str("> quoted line with <angle> & ampersand\n\n");
        content.push_str("| Name | Score | Note |\n|:-----|:-----:|-----:|\n| Lee | 10 | ok |\n| Kim | 9 |\n\n");
        content.push_str("```rust\nfn main() {\n    println!(\"hello\");\n}\n```\n\n");
        content.push_str("![diagram](diagram.png)\n\n---\n\n");
    }

    content
}

fn store() -> Box<MemoryResourceStore> {
    Box::new(MemoryResourceStore::new().with_file("diagram.png", vec![0x89, 0x50, 0x4e, 0x47]))
}

/// Benchmark parsing at various sizes.
fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("markdown_parsing");

    for section_count in [1, 10, 100].iter() {
        let source = create_test_markdown(*section_count);
        let parser = MarkdownParser::new(source);

        group.bench_function(format!("{}_sections", section_count), |b| {
            b.iter(|| parser.parse_with_store(store()).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the two code block layouts.
fn bench_code_styles(c: &mut Criterion) {
    let source = create_test_markdown(10);

    for style in [CodeBlockStyle::Table, CodeBlockStyle::Paragraphs] {
        let options = ParseOptions::new().with_code_block_style(style);
        let parser = MarkdownParser::with_options(source.clone(), options);

        c.bench_function(&format!("code_style_{:?}", style), |b| {
            b.iter(|| parser.parse_with_store(store()).unwrap());
        });
    }
}

/// Benchmark HWPML rendering of an already parsed document.
fn bench_rendering(c: &mut Criterion) {
    let doc = MarkdownParser::new(create_test_markdown(10))
        .parse_with_store(store())
        .unwrap();
    let options = RenderOptions::default();

    c.bench_function("render_hml", |b| {
        b.iter(|| render::to_hml(black_box(&doc), &options).unwrap());
    });
}

criterion_group!(benches, bench_parsing, bench_code_styles, bench_rendering);
criterion_main!(benches);
