pub mod builder;
pub mod cmark;
pub mod events;

use serde::{Deserialize, Serialize};

use crate::ast::{Node, NodeKind};
use builder::TreeBuilder;
use cmark::CmarkTokenizer;
use events::Tokenizer;

/// Caller-supplied tokenizer options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseFlags {
    /// Enable the non-standard `__underline__` span extension. Requires
    /// tokenizer cooperation; when the tokenizer lacks support the flag is
    /// accepted but has no effect.
    #[serde(default)]
    pub underline: bool,
}

/// Parse Markdown with default flags.
pub fn parse(markdown: &str) -> Node {
    parse_with_flags(markdown, ParseFlags::default())
}

/// Parse Markdown into a Document tree.
///
/// Always returns a valid tree: empty input yields an empty Document without
/// invoking the tokenizer, and a tokenizer failure is collapsed to an empty
/// Document rather than surfaced as an error. Each call is independent - a
/// fresh builder per parse, no state retained between calls.
pub fn parse_with_flags(markdown: &str, flags: ParseFlags) -> Node {
    if markdown.is_empty() {
        return Node::new(NodeKind::Document);
    }
    let tokenizer = CmarkTokenizer::new(&flags);
    parse_with_tokenizer(&tokenizer, markdown)
}

/// Run an arbitrary tokenizer over `markdown` and extract the finished tree.
///
/// This is the seam for alternate event sources; [`parse_with_flags`] routes
/// through it with the bundled pulldown-cmark adapter.
pub fn parse_with_tokenizer(tokenizer: &dyn Tokenizer, markdown: &str) -> Node {
    let mut builder = TreeBuilder::with_input_len(markdown.len());
    match tokenizer.tokenize(markdown, &mut builder) {
        Ok(()) => builder.finish(),
        Err(_) => Node::new(NodeKind::Document),
    }
}
