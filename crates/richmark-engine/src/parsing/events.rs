use thiserror::Error;

/// A block-level "enter" event with the attributes the tokenizer extracted.
///
/// Leaves carry no payload: the builder pops unconditionally, so the matching
/// leave for any of these is just [`EventSink::leave_block`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockEvent {
    Paragraph,
    Heading {
        level: u8,
    },
    Blockquote,
    UnorderedList,
    OrderedList,
    ListItem,
    CodeBlock {
        /// Delimiter character of a fenced block, when the tokenizer exposes
        /// it. `None` for indented blocks or tokenizers that don't report it.
        fence: Option<char>,
        /// First word of the fence info string, if non-empty.
        language: Option<String>,
    },
    /// Atomic: the tokenizer emits enter immediately followed by leave.
    ThematicBreak,
}

/// A span-level "enter" event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanEvent {
    Link { url: Option<String> },
    Strong,
    Emphasis,
    Code,
    Strikethrough,
    Image {
        url: Option<String>,
        title: Option<String>,
    },
}

/// A text-level event. Text borrows from the tokenizer's buffer; the sink
/// copies what it keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEvent<'a> {
    Normal(&'a str),
    InlineCode(&'a str),
    SoftBreak,
    HardBreak,
}

/// The narrow callback surface a tokenizer drives.
///
/// This is a push-parser (SAX-style) consumer: the tokenizer calls into the
/// sink for every structural and textual event, in source order, on the
/// calling thread. Anything a tokenizer cannot express in these five calls
/// it must drop before reaching the sink.
pub trait EventSink {
    fn enter_block(&mut self, event: BlockEvent);
    fn leave_block(&mut self);
    fn enter_span(&mut self, event: SpanEvent);
    fn leave_span(&mut self);
    fn text(&mut self, event: TextEvent<'_>);
}

#[derive(Debug, Error)]
pub enum TokenizeError {
    #[error("tokenizer rejected input: {0}")]
    Failed(String),
}

/// An event-based CommonMark tokenizer.
///
/// Implementations run synchronously over the whole input, pushing ordered
/// events into the sink, and report overall success or failure. The façade
/// collapses failure to an empty Document, so implementations should prefer
/// emitting what they can over erroring.
pub trait Tokenizer {
    fn tokenize(&self, input: &str, sink: &mut dyn EventSink) -> Result<(), TokenizeError>;
}
