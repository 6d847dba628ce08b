//! Image references.
//!
//! `![alt](path)` resolves in place to a bracketed placeholder; the image
//! bytes go into the resource registry and from there into the manifest.

use super::context::Conversion;
use super::escape::{escape_xml, unescape_xml};
use super::node::{map_text, Node};
use crate::error::Error;
use regex::Captures;

/// Replace every image reference in unclaimed lines with its placeholder.
pub(crate) fn embed_images(nodes: Vec<Node>, cx: &mut Conversion<'_>) -> Vec<Node> {
    let patterns = cx.patterns;
    map_text(nodes, |line| {
        let pattern = &patterns.image;
        if !line.contains("![") {
            return Node::Text(line);
        }
        let replaced = pattern
            .replace_all(&line, |caps: &Captures<'_>| placeholder(&caps[1], &caps[2], cx))
            .into_owned();
        Node::Text(replaced)
    })
}

/// Register one image and describe the outcome.
///
/// `alt` and `path` are escaped source text; the returned placeholder is
/// escaped as well.
fn placeholder(alt: &str, path: &str, cx: &mut Conversion<'_>) -> String {
    let real_path = unescape_xml(path);
    match cx.registry.register(real_path.as_ref()) {
        Ok(entry) => {
            let id = entry.id;
            cx.stats.add_image();
            format!("[Image Embedded: {} (ID: {})]", alt, id)
        }
        Err(Error::ResourceNotFound(_)) => {
            log::warn!("Image not found: {}", real_path);
            cx.stats.add_failed_image();
            format!("[Image not found: {}]", path)
        }
        Err(err) => {
            log::warn!("Image could not be embedded: {}", err);
            cx.stats.add_failed_image();
            format!("[Image error: {}]", escape_xml(&err.to_string()))
        }
    }
}
