use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use super::ParseFlags;
use super::events::{BlockEvent, EventSink, SpanEvent, TextEvent, TokenizeError, Tokenizer};

/// Tokenizer adapter over `pulldown-cmark`.
///
/// Translates the library's pull-based `Event` stream into the push-based
/// [`EventSink`] callbacks. The capability set is fixed: strikethrough is
/// enabled, raw HTML is never forwarded. Block and span kinds the tree does
/// not model (tables, footnotes, math, metadata) are dropped symmetrically -
/// neither their enter nor their leave reaches the sink.
pub struct CmarkTokenizer {
    options: Options,
}

impl CmarkTokenizer {
    pub fn new(flags: &ParseFlags) -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);
        // `underline` needs tokenizer cooperation that pulldown-cmark does
        // not offer; the flag is accepted but inert with this adapter.
        let _ = flags.underline;
        Self { options }
    }
}

impl Tokenizer for CmarkTokenizer {
    fn tokenize(&self, input: &str, sink: &mut dyn EventSink) -> Result<(), TokenizeError> {
        for event in Parser::new_ext(input, self.options) {
            match event {
                Event::Start(tag) => enter(tag, sink),
                Event::End(tag) => leave(tag, sink),
                Event::Text(text) => sink.text(TextEvent::Normal(&text)),
                Event::Code(text) => {
                    // pulldown-cmark collapses inline code into one event;
                    // re-expand it so every span reaches the sink with the
                    // same enter/text/leave shape.
                    sink.enter_span(SpanEvent::Code);
                    sink.text(TextEvent::InlineCode(&text));
                    sink.leave_span();
                }
                Event::SoftBreak => sink.text(TextEvent::SoftBreak),
                Event::HardBreak => sink.text(TextEvent::HardBreak),
                Event::Rule => {
                    // Thematic breaks are atomic: enter and leave back to back.
                    sink.enter_block(BlockEvent::ThematicBreak);
                    sink.leave_block();
                }
                // Raw HTML, math, footnote references, task list markers:
                // not modelled by the tree.
                _ => {}
            }
        }
        Ok(())
    }
}

fn enter(tag: Tag<'_>, sink: &mut dyn EventSink) {
    match tag {
        Tag::Paragraph => sink.enter_block(BlockEvent::Paragraph),
        Tag::Heading { level, .. } => sink.enter_block(BlockEvent::Heading {
            level: level as u8,
        }),
        Tag::BlockQuote(_) => sink.enter_block(BlockEvent::Blockquote),
        Tag::List(Some(_)) => sink.enter_block(BlockEvent::OrderedList),
        Tag::List(None) => sink.enter_block(BlockEvent::UnorderedList),
        Tag::Item => sink.enter_block(BlockEvent::ListItem),
        Tag::CodeBlock(kind) => {
            let language = match &kind {
                CodeBlockKind::Fenced(info) => {
                    info.split_whitespace().next().map(str::to_owned)
                }
                CodeBlockKind::Indented => None,
            };
            // The fence character is not exposed by pulldown-cmark, so it
            // stays unset for this tokenizer.
            sink.enter_block(BlockEvent::CodeBlock {
                fence: None,
                language,
            });
        }
        Tag::Emphasis => sink.enter_span(SpanEvent::Emphasis),
        Tag::Strong => sink.enter_span(SpanEvent::Strong),
        Tag::Strikethrough => sink.enter_span(SpanEvent::Strikethrough),
        Tag::Link { dest_url, .. } => sink.enter_span(SpanEvent::Link {
            url: non_empty(dest_url.as_ref()),
        }),
        Tag::Image {
            dest_url, title, ..
        } => sink.enter_span(SpanEvent::Image {
            url: non_empty(dest_url.as_ref()),
            title: non_empty(title.as_ref()),
        }),
        _ => {}
    }
}

fn leave(tag: TagEnd, sink: &mut dyn EventSink) {
    match tag {
        TagEnd::Paragraph
        | TagEnd::Heading(_)
        | TagEnd::BlockQuote(_)
        | TagEnd::List(_)
        | TagEnd::Item
        | TagEnd::CodeBlock => sink.leave_block(),
        TagEnd::Emphasis
        | TagEnd::Strong
        | TagEnd::Strikethrough
        | TagEnd::Link
        | TagEnd::Image => sink.leave_span(),
        _ => {}
    }
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_owned())
    }
}
