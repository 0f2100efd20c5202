//! Markdown-to-AST parsing core.
//!
//! richmark turns a UTF-8 Markdown string into an owned tree of [`Node`]s
//! that rich-text renderers, layout engines and accessibility builders can
//! traverse. The pipeline is event driven: a CommonMark tokenizer pushes
//! block/span/text events into a [`parsing::builder::TreeBuilder`], which
//! maintains a node stack and a pending-text accumulator and emits a single
//! Document root per parse call.
//!
//! The contract of [`parse`] is "always a valid tree": empty input and
//! tokenizer failures both yield an empty Document rather than an error, so
//! per-keystroke callers never need a failure path.

pub mod ast;
pub mod parsing;
pub mod serialize;

pub use ast::{Node, NodeKind};
pub use parsing::{ParseFlags, parse, parse_with_flags, parse_with_tokenizer};
