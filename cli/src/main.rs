//! md2hml CLI - Markdown to HWPML converter

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use md2hml::{
    CodeBlockStyle, ConvertOptions, DocumentConverter, HeadingStyleMode, MarkdownConverter,
    OutputFormat, ParseOptions,
};

const DEFAULT_INPUT: &str = "README.md";
const DEFAULT_OUTPUT: &str = "readme.hml";

#[derive(Parser)]
#[command(name = "md2hml")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert Markdown to HWPML documents", long_about = None)]
struct Cli {
    /// Input Markdown file
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Code block layout
    #[arg(long, value_enum, default_value = "table")]
    code_style: CodeStyle,

    /// Give heading levels 5 and 6 their own styles
    #[arg(long)]
    dedicated_headings: bool,

    /// Use the current time (KST) when the front matter has no date
    #[arg(long)]
    stamp_date: bool,

    /// Keep blank lines as empty paragraphs
    #[arg(long)]
    keep_blank_lines: bool,

    /// Write the document model as JSON instead of HWPML
    #[arg(long)]
    json: bool,

    /// Print conversion statistics
    #[arg(long)]
    stats: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show document information
    Info {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CodeStyle {
    /// Single-cell bordered table
    Table,
    /// Shaded paragraphs
    Paragraphs,
}

impl From<CodeStyle> for CodeBlockStyle {
    fn from(style: CodeStyle) -> Self {
        match style {
            CodeStyle::Table => CodeBlockStyle::Table,
            CodeStyle::Paragraphs => CodeBlockStyle::Paragraphs,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Info { ref input }) => cmd_info(input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => cmd_convert(&cli),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_options(cli: &Cli) -> ConvertOptions {
    let mut parse = ParseOptions::new()
        .with_code_block_style(cli.code_style.into())
        .with_blank_lines(cli.keep_blank_lines);
    if cli.dedicated_headings {
        parse = parse.with_heading_mode(HeadingStyleMode::Dedicated);
    }
    if cli.stamp_date {
        parse = parse.stamp_date();
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Hml
    };

    ConvertOptions::new()
        .with_parse_options(parse)
        .with_format(format)
        .with_stats(cli.stats)
}

fn cmd_convert(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let input = cli
        .input
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    println!("in:{} -> out:{}", input.display(), output.display());

    let options = build_options(cli);
    let result = MarkdownConverter::new().convert(&input, &options)?;

    // Nothing is written unless the whole document converted.
    fs::write(&output, &result.content)?;
    log::debug!("Wrote {} bytes to {}", result.content_len(), output.display());

    if let Some(stats) = result.stats {
        println!();
        println!("{}", "Conversion Statistics".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        println!("{}", stats.summary());
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = md2hml::parse_file(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Title".bold(), doc.metadata.title);
    println!("{}: {}", "Author".bold(), doc.metadata.author);
    println!("{}: {}", "Date".bold(), doc.metadata.date);

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}", doc.stats.summary());

    if !doc.resources.is_empty() {
        println!();
        println!("{}", "Embedded Resources".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        for entry in &doc.resources {
            println!(
                "  {} {} ({}, {} bytes)",
                format!("#{}", entry.id).dimmed(),
                entry.source.display(),
                entry.format,
                entry.size
            );
        }
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "md2hml".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Markdown to HWPML converter");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/md2hml".dimmed());
    println!("License: MIT");
}
