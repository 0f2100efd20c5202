//! Best-effort reconstruction of Markdown source from a parsed tree.
//!
//! Inline constructs round-trip; container kinds emit their children
//! transparently, so block delimiters (heading markers, list bullets, fence
//! lines) are not reconstructed. This is by contract lossy - good enough for
//! clipboard-style export of inline runs, not a formatter.

use crate::ast::{Node, NodeKind, attr};

/// Serialize a node and everything below it.
pub fn node_to_markdown(node: &Node) -> String {
    let mut out = String::new();
    append_node(node, &mut out);
    out
}

/// Serialize only the children of `node`, in order.
pub fn children_to_markdown(node: &Node) -> String {
    let mut out = String::new();
    append_children(node, &mut out);
    out
}

fn append_node(node: &Node, out: &mut String) {
    match node.kind {
        NodeKind::Text => out.push_str(&node.content),
        NodeKind::LineBreak => out.push('\n'),
        NodeKind::Strong => delimit(node, out, "**"),
        NodeKind::Emphasis => delimit(node, out, "*"),
        NodeKind::Strikethrough => delimit(node, out, "~~"),
        NodeKind::Code => delimit(node, out, "`"),
        NodeKind::Link => {
            out.push('[');
            append_children(node, out);
            out.push_str("](");
            out.push_str(node.attribute(attr::URL).unwrap_or_default());
            out.push(')');
        }
        NodeKind::Image => {
            out.push_str("![");
            append_children(node, out);
            out.push_str("](");
            out.push_str(node.attribute(attr::URL).unwrap_or_default());
            if let Some(title) = node.attribute(attr::TITLE) {
                out.push_str(" \"");
                out.push_str(title);
                out.push('"');
            }
            out.push(')');
        }
        _ => append_children(node, out),
    }
}

fn append_children(node: &Node, out: &mut String) {
    for child in &node.children {
        append_node(child, out);
    }
}

fn delimit(node: &Node, out: &mut String, marker: &str) {
    out.push_str(marker);
    append_children(node, out);
    out.push_str(marker);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("**bold**")]
    #[case("*em*")]
    #[case("~~gone~~")]
    #[case("`code`")]
    #[case("[x](http://example.com)")]
    #[case("**bold *nested* run**")]
    fn inline_constructs_round_trip(#[case] markdown: &str) {
        let tree = parse(markdown);
        assert_eq!(children_to_markdown(&tree), markdown);
    }

    #[test]
    fn image_includes_title_when_present() {
        let tree = parse("![alt](img.png \"caption\")");
        assert_eq!(children_to_markdown(&tree), "![alt](img.png \"caption\")");
    }

    #[test]
    fn link_without_url_serializes_empty_destination() {
        let mut link = Node::new(NodeKind::Link);
        link.add_child(Node::text("x"));
        assert_eq!(node_to_markdown(&link), "[x]()");
    }

    #[test]
    fn containers_emit_children_transparently() {
        // Block delimiters are not reconstructed; the paragraph content
        // passes straight through.
        let tree = parse("plain *styled* text");
        assert_eq!(children_to_markdown(&tree), "plain *styled* text");
    }
}
