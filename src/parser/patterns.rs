//! Line and inline patterns recognised by the passes.
//!
//! All patterns match against XML-escaped text: a quote marker is `&gt;`,
//! never `>`.

use regex::Regex;

/// Compiled patterns, built once per parser.
#[derive(Debug, Clone)]
pub struct Patterns {
    /// `![alt](path)`
    pub image: Regex,
    /// Opening code fence, optional info string
    pub fence_open: Regex,
    /// Three or more dashes
    pub rule: Regex,
    /// `[text](url)`
    pub link: Regex,
    /// Bulleted item: indent, marker, text
    pub bullet: Regex,
    /// `N. text`
    pub ordered: Regex,
    /// `N. text` indented one unit
    pub nested_ordered: Regex,
    /// `> text`
    pub quote: Regex,
    /// Alignment/separator cell of a table (`:---:`)
    pub table_separator: Regex,
    /// `# text` .. `###### text`
    pub heading: Regex,
    /// `**text**`
    pub bold_star: Regex,
    /// `__text__`
    pub bold_underscore: Regex,
    /// `*text*`
    pub italic_star: Regex,
    /// `_text_`
    pub italic_underscore: Regex,
    /// `` `text` ``
    pub code_span: Regex,
}

impl Patterns {
    /// Compile every pattern.
    pub fn new() -> Self {
        Self {
            image: Regex::new(r"!\[(.*?)\]\((.*?)\)").unwrap(),
            fence_open: Regex::new(r"^```\s*([^`]*)$").unwrap(),
            rule: Regex::new(r"^-{3,}\s*$").unwrap(),
            link: Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").unwrap(),
            bullet: Regex::new(r"^([ \t]*)[-+*] (.*)$").unwrap(),
            ordered: Regex::new(r"^(\d+)\. (.*)$").unwrap(),
            nested_ordered: Regex::new(r"^ {4}(\d+)\. (.*)$").unwrap(),
            quote: Regex::new(r"^&gt; ?(.*)$").unwrap(),
            table_separator: Regex::new(r"^(:?)-+(:?)$").unwrap(),
            heading: Regex::new(r"^(#{1,6}) (.*)$").unwrap(),
            bold_star: Regex::new(r"\*\*(\S|\S.*?\S)\*\*").unwrap(),
            bold_underscore: Regex::new(r"__(\S|\S.*?\S)__").unwrap(),
            italic_star: Regex::new(r"\*(\S|\S.*?\S)\*").unwrap(),
            italic_underscore: Regex::new(r"_(\S|\S.*?\S)_").unwrap(),
            code_span: Regex::new(r"`([^`]+)`").unwrap(),
        }
    }
}

impl Default for Patterns {
    fn default() -> Self {
        Self::new()
    }
}
