//! Front matter extraction.

use super::escape::escape_xml;
use super::options::DateFallback;
use crate::model::Metadata;

/// Marker line opening and closing the front matter block.
pub const FRONT_MATTER_MARKER: &str = "---";

/// Split a document into its metadata and the remaining body.
///
/// Front matter is recognised only when the first line is `---`; the block
/// ends at the next `---` line. Without a closing marker the whole input is
/// body text. Missing or empty fields fall back to the defaults, and the
/// date additionally to `date_fallback`.
pub fn split(input: &str, date_fallback: DateFallback) -> (Metadata, &str) {
    let mut metadata = Metadata::default();
    if let Some(date) = date_fallback.resolve() {
        metadata.date = escape_xml(&date).into_owned();
    }

    let Some((block, body)) = find_block(input) else {
        return (metadata, input);
    };

    for line in block.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = unquote(value.trim());
        if value.is_empty() {
            continue;
        }
        let value = escape_xml(value).into_owned();
        match key.trim() {
            "title" => metadata.title = value,
            "author" => metadata.author = value,
            "date" => metadata.date = value,
            other => log::debug!("Ignoring front matter key '{}'", other),
        }
    }

    (metadata, body)
}

/// Locate the front matter block, returning its inner text and the body after it.
fn find_block(input: &str) -> Option<(&str, &str)> {
    let rest = input
        .strip_prefix(FRONT_MATTER_MARKER)?
        .trim_start_matches([' ', '\t']);
    let rest = rest.strip_prefix('\n')?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FRONT_MATTER_MARKER {
            let block = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((block, body));
        }
        offset += line.len();
    }

    log::debug!("Front matter opened but never closed; treating it as body text");
    None
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
