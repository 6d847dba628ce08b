//! Single-line rewrites: rules, links, task markers, quotes and headings.

use super::context::Conversion;
use super::node::{map_text, Node, OpenParagraph};
use crate::model::{Block, Paragraph};

const UNCHECKED_BOX: &str = "\u{2610}";
const CHECKED_BOX: &str = "\u{2611}";

/// Turn `---` lines into empty ruled paragraphs.
pub(crate) fn horizontal_rules(nodes: Vec<Node>, cx: &mut Conversion<'_>) -> Vec<Node> {
    let patterns = cx.patterns;
    let styles = cx.styles();
    map_text(nodes, |line| {
        if !patterns.rule.is_match(&line) {
            return Node::Text(line);
        }
        cx.stats.add_horizontal_rule();
        Block::Paragraph(Paragraph::with_text(styles.rule, styles.normal, "")).into()
    })
}

/// Rewrite `[text](url)` to `text (url)`.
pub(crate) fn flatten_links(nodes: Vec<Node>, cx: &Conversion<'_>) -> Vec<Node> {
    let pattern = &cx.patterns.link;
    map_text(nodes, |line| {
        if !line.contains("](") {
            return Node::Text(line);
        }
        Node::Text(pattern.replace_all(&line, "$1 ($2)").into_owned())
    })
}

/// Substitute checkbox glyphs for `[ ]`, `[x]` and `[X]`.
///
/// Applies to unclaimed lines and open runs; finished blocks such as code
/// are left alone.
pub(crate) fn task_markers(nodes: Vec<Node>) -> Vec<Node> {
    nodes
        .into_iter()
        .map(|node| match node {
            Node::Text(text) => Node::Text(checkboxes(text)),
            Node::Open(mut open) => {
                open.text = checkboxes(open.text);
                Node::Open(open)
            }
            block => block,
        })
        .collect()
}

fn checkboxes(text: String) -> String {
    if !text.contains('[') {
        return text;
    }
    text.replace("[ ]", UNCHECKED_BOX)
        .replace("[x]", CHECKED_BOX)
        .replace("[X]", CHECKED_BOX)
}

/// Turn `> text` lines into quote paragraphs.
pub(crate) fn block_quotes(nodes: Vec<Node>, cx: &mut Conversion<'_>) -> Vec<Node> {
    let patterns = cx.patterns;
    let styles = cx.styles();
    map_text(nodes, |line| {
        let Some(caps) = patterns.quote.captures(&line) else {
            return Node::Text(line);
        };
        cx.stats.add_quote();
        Block::Paragraph(Paragraph::with_text(styles.quote, styles.quote_text, &caps[1])).into()
    })
}

/// Turn `#` .. `######` lines into heading paragraphs.
pub(crate) fn headings(nodes: Vec<Node>, cx: &mut Conversion<'_>) -> Vec<Node> {
    let patterns = cx.patterns;
    let styles = cx.styles();
    map_text(nodes, |line| {
        let Some(caps) = patterns.heading.captures(&line) else {
            return Node::Text(line);
        };
        let level = u8::try_from(caps[1].len()).unwrap_or(6);
        cx.stats.add_heading();
        OpenParagraph::new(styles.body, styles.heading(level), &caps[2]).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CharShapeId, HeadingStyleMode, MemoryResourceStore, ParaShapeId, ResourceRegistry};
    use crate::parser::node::lines;
    use crate::parser::options::ParseOptions;
    use crate::parser::patterns::Patterns;

    fn with_cx<F>(options: ParseOptions, f: F) -> Vec<Node>
    where
        F: FnOnce(&mut Conversion<'_>) -> Vec<Node>,
    {
        let patterns = Patterns::new();
        let registry = ResourceRegistry::new(Box::new(MemoryResourceStore::new()));
        let mut cx = Conversion::new(&patterns, &options, registry);
        f(&mut cx)
    }

    #[test]
    fn test_rule() {
        let nodes = with_cx(ParseOptions::new(), |cx| horizontal_rules(lines("a\n---\n- b"), cx));
        let Node::Block(Block::Paragraph(p)) = &nodes[1] else {
            panic!("expected a rule paragraph");
        };
        assert_eq!(p.para_shape, ParaShapeId(10));
        assert!(p.is_empty());
        assert!(nodes[2].as_text().is_some());
    }

    #[test]
    fn test_links() {
        let nodes = with_cx(ParseOptions::new(), |cx| {
            flatten_links(lines("see [docs](https://x.io/a?b=1&amp;c=2) now"), cx)
        });
        assert_eq!(
            nodes[0].as_text(),
            Some("see docs (https://x.io/a?b=1&amp;c=2) now")
        );
    }

    #[test]
    fn test_link_does_not_start_inside_image_placeholder() {
        let nodes = with_cx(ParseOptions::new(), |cx| {
            flatten_links(lines("[Image not found: x.png] see [b](u)"), cx)
        });
        assert_eq!(nodes[0].as_text(), Some("[Image not found: x.png] see b (u)"));
    }

    #[test]
    fn test_task_markers() {
        let open = OpenParagraph::new(ParaShapeId(1), CharShapeId(0), "[x] done");
        let nodes = task_markers(vec![Node::Text("[ ] todo [X] ok".into()), Node::Open(open)]);
        assert_eq!(nodes[0].as_text(), Some("\u{2610} todo \u{2611} ok"));
        let Node::Open(open) = &nodes[1] else {
            panic!("expected an open paragraph");
        };
        assert_eq!(open.text, "\u{2611} done");
    }

    #[test]
    fn test_task_markers_skip_blocks() {
        let code = Block::Paragraph(Paragraph::with_text(ParaShapeId(9), CharShapeId(7), "[ ]"));
        let nodes = task_markers(vec![Node::Block(code.clone())]);
        assert_eq!(nodes[0], Node::Block(code));
    }

    #[test]
    fn test_quote() {
        let nodes = with_cx(ParseOptions::new(), |cx| block_quotes(lines("&gt; wise &amp; old"), cx));
        let Node::Block(Block::Paragraph(p)) = &nodes[0] else {
            panic!("expected a quote paragraph");
        };
        assert_eq!(p.para_shape, ParaShapeId(11));
        assert_eq!(p.runs[0].char_shape, CharShapeId(8));
        assert_eq!(p.text(), "wise &amp; old");
    }

    #[test]
    fn test_headings() {
        let nodes = with_cx(ParseOptions::new(), |cx| headings(lines("# One\n### Three\n###### Six"), cx));
        let shapes: Vec<CharShapeId> = nodes
            .iter()
            .map(|n| match n {
                Node::Open(open) => open.char_shape,
                _ => panic!("expected headings"),
            })
            .collect();
        assert_eq!(shapes, vec![CharShapeId(1), CharShapeId(3), CharShapeId(4)]);
    }

    #[test]
    fn test_dedicated_minor_headings() {
        let options = ParseOptions::new().with_heading_mode(HeadingStyleMode::Dedicated);
        let nodes = with_cx(options, |cx| headings(lines("##### Five"), cx));
        let Node::Open(open) = &nodes[0] else {
            panic!("expected a heading");
        };
        assert_eq!(open.char_shape, CharShapeId(5));
        assert_eq!(open.text, "Five");
    }
}
