use crate::ast::{Node, NodeKind, attr};

use super::events::{BlockEvent, EventSink, SpanEvent, TextEvent};

/// Stack depth that covers typical documents without reallocation.
const BASE_DEPTH: usize = 12;
/// Upper bound for the pre-sizing heuristic. The stack itself still grows
/// past this when the input nests deeper.
const MAX_PRESIZED_DEPTH: usize = 64;

/// The tree-building state machine.
///
/// Consumes ordered block/span/text events (as an [`EventSink`]) and builds
/// a single Document tree. State is a stack of open nodes - the Document
/// root at the bottom, the current insertion point on top - plus a
/// pending-text accumulator that coalesces consecutive text events into one
/// Text node per structural boundary.
///
/// Nodes attach to their parent when their frame is popped. With exclusive
/// ownership that is the natural expression of "append child, then descend":
/// text flushed before an enter lands in the parent, the container itself
/// lands after it on pop, and later siblings follow, so source order is
/// preserved exactly.
pub struct TreeBuilder {
    /// Open nodes, innermost last. Never empty: index 0 is the Document
    /// root, which no pop may remove.
    stack: Vec<Node>,
    pending_text: String,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::with_input_len(0)
    }

    /// Create a builder sized for an input of `input_len` bytes.
    ///
    /// The estimate (baseline 12, +1 per 1000 bytes, capped at 64) is a
    /// performance hint only; correctness never depends on it.
    pub fn with_input_len(input_len: usize) -> Self {
        let estimate = (BASE_DEPTH + input_len / 1000).min(MAX_PRESIZED_DEPTH);
        let mut stack = Vec::with_capacity(estimate);
        stack.push(Node::new(NodeKind::Document));
        Self {
            stack,
            pending_text: String::with_capacity(256),
        }
    }

    /// Materialize the pending text into a Text node under the current
    /// insertion point. Called before every structural push/pop so a text
    /// run is never split across two parent contexts.
    fn flush_text(&mut self) {
        if self.pending_text.is_empty() {
            return;
        }
        let Some(top) = self.stack.last_mut() else {
            return;
        };
        top.add_child(Node::text(std::mem::take(&mut self.pending_text)));
    }

    /// Open a container: flush, then make `node` the new insertion point.
    fn push_node(&mut self, node: Node) {
        self.flush_text();
        self.stack.push(node);
    }

    /// Close the current container: flush, then pop it and attach it to its
    /// parent. The Document root is never popped, so surplus leave events
    /// from a malformed stream are harmless no-ops.
    fn pop_node(&mut self) {
        self.flush_text();
        if self.stack.len() > 1
            && let Some(node) = self.stack.pop()
            && let Some(parent) = self.stack.last_mut()
        {
            parent.add_child(node);
        }
    }

    /// Append an atomic inline node (no children, nothing pushed).
    ///
    /// Deliberately does not flush: a line break arriving mid-run leaves the
    /// accumulator collecting, and the merged text flushes on the next
    /// structural event. This preserves the observed ordering of the
    /// reference implementation (the break precedes the merged text run).
    fn add_inline_node(&mut self, node: Node) {
        if let Some(top) = self.stack.last_mut() {
            top.add_child(node);
        }
    }

    /// Flush trailing text, fold any frames the tokenizer left open down
    /// into the root, and return the finished Document.
    pub fn finish(mut self) -> Node {
        self.flush_text();
        while self.stack.len() > 1 {
            self.pop_node();
        }
        self.stack
            .pop()
            .unwrap_or_else(|| Node::new(NodeKind::Document))
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for TreeBuilder {
    fn enter_block(&mut self, event: BlockEvent) {
        let node = match event {
            BlockEvent::Paragraph => Node::new(NodeKind::Paragraph),
            BlockEvent::Heading { level } => {
                let mut node = Node::new(NodeKind::Heading);
                // Out-of-range levels are clamped, never rejected.
                node.set_attribute(attr::LEVEL, level.clamp(1, 6).to_string());
                node
            }
            BlockEvent::Blockquote => Node::new(NodeKind::Blockquote),
            BlockEvent::UnorderedList => Node::new(NodeKind::UnorderedList),
            BlockEvent::OrderedList => Node::new(NodeKind::OrderedList),
            BlockEvent::ListItem => Node::new(NodeKind::ListItem),
            BlockEvent::CodeBlock { fence, language } => {
                let mut node = Node::new(NodeKind::CodeBlock);
                if let Some(fence) = fence {
                    node.set_attribute(attr::FENCE_CHAR, fence.to_string());
                }
                if let Some(language) = language {
                    node.set_attribute(attr::LANGUAGE, language);
                }
                node
            }
            BlockEvent::ThematicBreak => Node::new(NodeKind::ThematicBreak),
        };
        self.push_node(node);
    }

    fn leave_block(&mut self) {
        self.pop_node();
    }

    fn enter_span(&mut self, event: SpanEvent) {
        let node = match event {
            SpanEvent::Link { url } => {
                let mut node = Node::new(NodeKind::Link);
                if let Some(url) = url {
                    node.set_attribute(attr::URL, url);
                }
                node
            }
            SpanEvent::Strong => Node::new(NodeKind::Strong),
            SpanEvent::Emphasis => Node::new(NodeKind::Emphasis),
            SpanEvent::Code => Node::new(NodeKind::Code),
            SpanEvent::Strikethrough => Node::new(NodeKind::Strikethrough),
            SpanEvent::Image { url, title } => {
                let mut node = Node::new(NodeKind::Image);
                if let Some(url) = url {
                    node.set_attribute(attr::URL, url);
                }
                if let Some(title) = title {
                    node.set_attribute(attr::TITLE, title);
                }
                node
            }
        };
        self.push_node(node);
    }

    fn leave_span(&mut self) {
        self.pop_node();
    }

    fn text(&mut self, event: TextEvent<'_>) {
        match event {
            TextEvent::SoftBreak | TextEvent::HardBreak => {
                self.add_inline_node(Node::new(NodeKind::LineBreak));
            }
            TextEvent::Normal(text) | TextEvent::InlineCode(text) => {
                self.pending_text.push_str(text);
            }
        }
    }
}
