use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attribute keys written by the tree builder.
///
/// Each node kind draws from a small fixed vocabulary: headings carry
/// `level`, links and images carry `url`/`title`, code blocks carry
/// `fenceChar`/`language`. An absent key means "not specified" - empty
/// values are never stored.
pub mod attr {
    pub const LEVEL: &str = "level";
    pub const URL: &str = "url";
    pub const TITLE: &str = "title";
    pub const FENCE_CHAR: &str = "fenceChar";
    pub const LANGUAGE: &str = "language";
}

/// The kind of an AST node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Document,
    Paragraph,
    Text,
    Link,
    Heading,
    LineBreak,
    Strong,
    Emphasis,
    Code,
    Image,
    Blockquote,
    UnorderedList,
    OrderedList,
    ListItem,
    CodeBlock,
    ThematicBreak,
    Strikethrough,
}

/// A node in the parsed Markdown tree.
///
/// Children are owned exclusively by their parent; there are no parent
/// back-references and no shared ownership, so a finished tree can be moved,
/// sent across threads, or dropped freely by whoever receives the root.
/// `content` is only meaningful for [`NodeKind::Text`] nodes; container
/// kinds leave it empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Create a node with empty content, attributes and children.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            content: String::new(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Create a Text node carrying `content`.
    pub fn text(content: impl Into<String>) -> Self {
        let mut node = Self::new(NodeKind::Text);
        node.content = content.into();
        node
    }

    /// Append `child` to this node's children. Insertion order is rendering
    /// order and is preserved.
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Set an attribute with mapping semantics: last write wins, no error on
    /// overwrite. Empty values are dropped - absence is the only
    /// representation of "not specified".
    pub fn set_attribute(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        self.attributes.insert(key.to_owned(), value);
    }

    /// Look up an attribute value.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_node_is_empty() {
        let node = Node::new(NodeKind::Paragraph);
        assert_eq!(node.kind, NodeKind::Paragraph);
        assert!(node.content.is_empty());
        assert!(node.attributes.is_empty());
        assert!(node.children.is_empty());
    }

    #[test]
    fn add_child_preserves_insertion_order() {
        let mut parent = Node::new(NodeKind::Paragraph);
        parent.add_child(Node::text("a"));
        parent.add_child(Node::new(NodeKind::Emphasis));
        parent.add_child(Node::text("c"));

        let kinds: Vec<NodeKind> = parent.children.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![NodeKind::Text, NodeKind::Emphasis, NodeKind::Text]);
    }

    #[test]
    fn set_attribute_last_write_wins() {
        let mut node = Node::new(NodeKind::Heading);
        node.set_attribute(attr::LEVEL, "1");
        node.set_attribute(attr::LEVEL, "3");
        assert_eq!(node.attribute(attr::LEVEL), Some("3"));
    }

    #[test]
    fn empty_attribute_values_are_not_stored() {
        let mut node = Node::new(NodeKind::Link);
        node.set_attribute(attr::URL, "");
        assert_eq!(node.attribute(attr::URL), None);
        assert!(node.attributes.is_empty());
    }

    #[test]
    fn absent_attribute_is_none() {
        let node = Node::new(NodeKind::CodeBlock);
        assert_eq!(node.attribute(attr::LANGUAGE), None);
    }
}
