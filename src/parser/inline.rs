//! Inline emphasis: bold, italic and code spans.
//!
//! Only runs carrying the normal char shape are rewritten; headings, quotes
//! and code keep their text as is. Each match splits a run into the plain
//! prefix, a styled run for the span and the plain remainder, which is
//! scanned again. Bold takes priority: an italic or code span is used only
//! when it ends before the earliest bold span starts. Among those, the
//! earliest match wins and ties go to italic before code.

use super::patterns::Patterns;
use crate::model::{Block, CharShapeId, Paragraph, StyleCatalog, TextRun};
use regex::Regex;

/// Which characters may surround a delimiter.
#[derive(Debug, Clone, Copy)]
enum Flank {
    /// No restriction
    Any,
    /// Not directly next to another `*`
    NoStar,
    /// Not inside a word or next to another `_`
    WordBoundary,
}

impl Flank {
    fn allows(self, text: &str, start: usize, end: usize) -> bool {
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        let ok = |c: Option<char>| match (self, c) {
            (_, None) | (Flank::Any, _) => true,
            (Flank::NoStar, Some(c)) => c != '*',
            (Flank::WordBoundary, Some(c)) => c != '_' && !c.is_alphanumeric(),
        };
        ok(before) && ok(after)
    }
}

/// A styled span found in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Span {
    /// Byte range of the whole match, delimiters included
    start: usize,
    end: usize,
    /// Byte range of the content
    inner_start: usize,
    inner_end: usize,
    char_shape: CharShapeId,
}

/// Rewrites emphasis markers in normal runs into styled runs.
pub struct InlineFormatter<'a> {
    bold: Vec<Rule<'a>>,
    rest: Vec<Rule<'a>>,
    normal: CharShapeId,
}

type Rule<'a> = (&'a Regex, Flank, CharShapeId);

impl<'a> InlineFormatter<'a> {
    /// Create a formatter, listing rules in precedence order.
    pub fn new(patterns: &'a Patterns, styles: &StyleCatalog) -> Self {
        Self {
            bold: vec![
                (&patterns.bold_star, Flank::Any, styles.bold),
                (&patterns.bold_underscore, Flank::WordBoundary, styles.bold),
            ],
            rest: vec![
                (&patterns.italic_star, Flank::NoStar, styles.italic),
                (&patterns.italic_underscore, Flank::WordBoundary, styles.italic),
                (&patterns.code_span, Flank::Any, styles.monospace),
            ],
            normal: styles.normal,
        }
    }

    /// Format every top-level paragraph. Table cells are left alone.
    pub fn format_blocks(&self, blocks: Vec<Block>) -> Vec<Block> {
        blocks
            .into_iter()
            .map(|block| match block {
                Block::Paragraph(p) => Block::Paragraph(self.format_paragraph(p)),
                table => table,
            })
            .collect()
    }

    /// Split the normal runs of one paragraph.
    ///
    /// Empty runs are dropped, but the paragraph keeps at least one run.
    pub fn format_paragraph(&self, mut paragraph: Paragraph) -> Paragraph {
        let mut runs = Vec::with_capacity(paragraph.runs.len());
        for run in std::mem::take(&mut paragraph.runs) {
            if run.char_shape == self.normal {
                runs.extend(self.split_run(&run.text));
            } else {
                runs.push(run);
            }
        }
        if runs.is_empty() {
            runs.push(TextRun::new("", self.normal));
        }
        paragraph.runs = runs;
        paragraph
    }

    /// Split one normal run's text into styled runs.
    pub fn split_run(&self, text: &str) -> Vec<TextRun> {
        let mut runs = Vec::new();
        let mut rest = text;

        while let Some(span) = self.next_span(rest) {
            if span.start > 0 {
                runs.push(TextRun::new(&rest[..span.start], self.normal));
            }
            runs.push(TextRun::new(
                &rest[span.inner_start..span.inner_end],
                span.char_shape,
            ));
            rest = &rest[span.end..];
        }
        if !rest.is_empty() {
            runs.push(TextRun::new(rest, self.normal));
        }

        runs
    }

    /// Next span to style in `text`.
    fn next_span(&self, text: &str) -> Option<Span> {
        let bold = earliest(&self.bold, text, text.len());
        let limit = bold.as_ref().map_or(text.len(), |b| b.start);
        match earliest(&self.rest, text, limit) {
            Some(span) => Some(span),
            None => bold,
        }
    }
}

/// Earliest span of any rule that ends at or before `limit`.
fn earliest(rules: &[Rule<'_>], text: &str, limit: usize) -> Option<Span> {
    let mut best: Option<Span> = None;
    for &(regex, flank, char_shape) in rules {
        let Some(span) = find_span(regex, flank, char_shape, text, limit) else {
            continue;
        };
        if best.as_ref().map_or(true, |b| span.start < b.start) {
            best = Some(span);
        }
    }
    best
}

/// First match of `regex` whose delimiters are allowed by `flank` and that
/// ends at or before `limit`.
fn find_span(
    regex: &Regex,
    flank: Flank,
    char_shape: CharShapeId,
    text: &str,
    limit: usize,
) -> Option<Span> {
    let mut at = 0;
    while at < limit {
        let caps = regex.captures_at(text, at)?;
        let whole = caps.get(0)?;
        let inner = caps.get(1)?;
        if whole.start() >= limit {
            return None;
        }
        if whole.end() <= limit && flank.allows(text, whole.start(), whole.end()) {
            return Some(Span {
                start: whole.start(),
                end: whole.end(),
                inner_start: inner.start(),
                inner_end: inner.end(),
                char_shape,
            });
        }
        // Delimiters are ASCII, so the next byte is a char boundary.
        at = whole.start() + 1;
    }
    None
}
