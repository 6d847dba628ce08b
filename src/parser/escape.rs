//! XML escaping of user text.

use std::borrow::Cow;

/// Escape `& < > " '` as named entities.
///
/// The converter applies this exactly once to the Markdown body before any
/// pass runs; every later pass works on escaped text.
///
/// # Examples
///
/// ```
/// use md2hml::parser::escape_xml;
/// assert_eq!(escape_xml("a < b & 'c'"), "a &lt; b &amp; &apos;c&apos;");
/// ```
pub fn escape_xml(raw: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(raw)
}

/// Reverse [`escape_xml`].
///
/// Text with a malformed entity is returned unchanged.
pub fn unescape_xml(escaped: &str) -> Cow<'_, str> {
    quick_xml::escape::unescape(escaped).unwrap_or(Cow::Borrowed(escaped))
}
