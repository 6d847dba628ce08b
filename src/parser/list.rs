//! Bulleted and ordered list items.
//!
//! Nesting depth comes from the indent width: every four columns (a tab
//! counts as four) is one level, capped at the deepest level the style
//! catalog defines. Items below the top level share a list instance
//! identifier per group; a group starts at the first nested item after a
//! top-level item and ends at the next top-level item or non-list line.
//! Blank lines do not end a group.

use super::context::Conversion;
use super::node::{Node, OpenParagraph};
use crate::model::TextRun;

/// Columns per nesting level.
pub const INDENT_WIDTH: usize = 4;

/// Tracks the instance identifier of the current nested group.
#[derive(Debug, Default)]
struct InstanceGroup {
    current: Option<u32>,
}

impl InstanceGroup {
    /// Identifier for an item at `depth`, minting one for a new group.
    fn for_depth(&mut self, depth: usize, cx: &mut Conversion<'_>) -> Option<u32> {
        if depth == 0 {
            self.current = None;
            None
        } else {
            Some(*self.current.get_or_insert_with(|| cx.mint_instance()))
        }
    }

    fn reset(&mut self) {
        self.current = None;
    }
}

/// Indent width of a leading whitespace run.
pub fn indent_width(indent: &str) -> usize {
    indent
        .chars()
        .map(|c| if c == '\t' { INDENT_WIDTH } else { 1 })
        .sum()
}

/// Nesting depth of a leading whitespace run, before capping.
pub fn nesting_depth(indent: &str) -> usize {
    indent_width(indent) / INDENT_WIDTH
}

/// Convert bulleted and ordered items into list paragraphs.
pub(crate) fn list_items(nodes: Vec<Node>, cx: &mut Conversion<'_>) -> Vec<Node> {
    let patterns = cx.patterns;
    let styles = cx.styles();
    let mut group = InstanceGroup::default();
    let mut out = Vec::with_capacity(nodes.len());

    for node in nodes {
        if node.is_blank() {
            out.push(node);
            continue;
        }
        let line = match node {
            Node::Text(line) => line,
            claimed => {
                group.reset();
                out.push(claimed);
                continue;
            }
        };

        if let Some(caps) = patterns.bullet.captures(&line) {
            let depth = nesting_depth(&caps[1]).min(styles.max_list_depth());
            let instance = group.for_depth(depth, cx);
            cx.stats.add_list_item();
            let open = OpenParagraph::new(styles.list_level(depth), styles.normal, &caps[2])
                .with_lead(TextRun::from_raw(styles.list_glyph(depth), styles.normal))
                .with_instance(instance);
            out.push(open.into());
        } else if let Some(caps) = patterns.ordered.captures(&line) {
            group.reset();
            cx.stats.add_list_item();
            let text = format!("{}. {}", &caps[1], &caps[2]);
            out.push(OpenParagraph::new(styles.ordered, styles.normal, text).into());
        } else if let Some(caps) = patterns.nested_ordered.captures(&line) {
            let instance = group.for_depth(1, cx);
            cx.stats.add_list_item();
            let text = format!("{}. {}", &caps[1], &caps[2]);
            let open = OpenParagraph::new(styles.nested_ordered, styles.normal, text)
                .with_instance(instance);
            out.push(open.into());
        } else {
            group.reset();
            out.push(Node::Text(line));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MemoryResourceStore, ParaShapeId, ResourceRegistry};
    use crate::parser::node::lines;
    use crate::parser::options::ParseOptions;
    use crate::parser::patterns::Patterns;

    fn run(text: &str) -> Vec<Node> {
        let patterns = Patterns::new();
        let options = ParseOptions::new();
        let registry = ResourceRegistry::new(Box::new(MemoryResourceStore::new()));
        let mut cx = Conversion::new(&patterns, &options, registry);
        list_items(lines(text), &mut cx)
    }

    fn open(node: &Node) -> &OpenParagraph {
        match node {
            Node::Open(open) => open,
            other => panic!("expected an open paragraph, got {:?}", other),
        }
    }

    #[test]
    fn test_depth_thresholds() {
        for (indent, depth) in [(0, 0), (3, 0), (4, 1), (8, 2), (12, 3), (16, 4), (20, 5), (23, 5)] {
            assert_eq!(nesting_depth(&" ".repeat(indent)), depth, "indent {}", indent);
        }
        assert_eq!(nesting_depth("\t\t"), 2);
    }

    #[test]
    fn test_levels_and_glyphs() {
        let nodes = run("- a\n    + b\n        * c\n                            - deep");
        assert_eq!(open(&nodes[0]).para_shape, ParaShapeId(1));
        assert_eq!(open(&nodes[1]).para_shape, ParaShapeId(2));
        assert_eq!(open(&nodes[2]).para_shape, ParaShapeId(3));
        assert_eq!(open(&nodes[3]).para_shape, ParaShapeId(6));

        let lead = open(&nodes[0]).lead.as_ref().unwrap();
        assert_eq!(lead.text, "* ");
        assert_eq!(open(&nodes[0]).text, "a");
        assert_eq!(open(&nodes[1]).lead.as_ref().unwrap().text, "  - ");
    }

    #[test]
    fn test_instance_groups() {
        let nodes = run("- a\n    - b\n\n    - c\n- d\n    - e\ntext\n    - f");
        assert_eq!(open(&nodes[0]).instance_id, None);
        assert_eq!(open(&nodes[1]).instance_id, Some(1000));
        // Blank line keeps the group
        assert_eq!(open(&nodes[3]).instance_id, Some(1000));
        assert_eq!(open(&nodes[4]).instance_id, None);
        assert_eq!(open(&nodes[5]).instance_id, Some(1001));
        assert!(nodes[6].as_text().is_some());
        assert_eq!(open(&nodes[7]).instance_id, Some(1002));
    }

    #[test]
    fn test_ordered_items() {
        let nodes = run("1. first\n    1. inner\n2. second");
        let first = open(&nodes[0]);
        assert_eq!(first.para_shape, ParaShapeId(12));
        assert_eq!(first.text, "1. first");
        assert_eq!(first.instance_id, None);

        let inner = open(&nodes[1]);
        assert_eq!(inner.para_shape, ParaShapeId(13));
        assert_eq!(inner.instance_id, Some(1000));
        assert_eq!(open(&nodes[2]).text, "2. second");
    }

    #[test]
    fn test_emphasis_is_not_a_bullet() {
        let nodes = run("*not a list*\n**bold** start");
        assert!(nodes.iter().all(|n| n.as_text().is_some()));
    }
}
