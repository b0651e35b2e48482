//! Convert Markdown into an ADF document
//!
//! The input is parsed with `pulldown-cmark` (CommonMark plus strikethrough) and
//! the event stream is folded into builder primitives. Headings, bullet and
//! ordered lists (nested too), fenced or indented code blocks and paragraphs map
//! to blocks. Strong, emphasis, strikethrough, inline code and links map to marks
//! and stack when nested. Block quotes are flattened into their paragraphs.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use super::builder::{bullet_list, code_block, document, heading, ordered_list, paragraph, text_to_document};
use super::node::{Block, Document, Inline, ListItem, ListItemType, Mark};

/// Parse Markdown into a document. Input without any block yields a single empty paragraph.
pub fn markdown_to_document(input: &str) -> Document {
    let mut converter = Converter::default();

    for event in Parser::new_ext(input, Options::ENABLE_STRIKETHROUGH) {
        converter.process_event(event);
    }

    let blocks = converter.finish();
    if blocks.is_empty() {
        return text_to_document(None);
    }

    document(blocks)
}

/// Parse a single line of inline Markdown into text runs
pub fn parse_inline(input: &str) -> Vec<Inline> {
    markdown_to_document(input)
        .content
        .into_iter()
        .flat_map(|block| match block {
            Block::Paragraph { content } | Block::Heading { content, .. } => content,
            _ => Vec::new(),
        })
        .collect()
}

/// Open list or list item, innermost last
enum Container {
    List { ordered: bool, items: Vec<ListItem> },
    Item { blocks: Vec<Block> },
}

#[derive(Default)]
struct Converter {
    /// Completed top-level blocks
    blocks: Vec<Block>,

    containers: Vec<Container>,

    /// Runs of the paragraph, heading or tight list item being read
    inline: Vec<Inline>,

    /// Marks of the enclosing inline tags, outermost first
    marks: Vec<Mark>,

    /// Language and text of the code block being read
    code: Option<(Option<String>, String)>,
}

impl Converter {
    fn process_event(&mut self, event: Event) {
        match event {
            Event::Start(Tag::Paragraph) | Event::Start(Tag::Heading { .. }) => {
                self.flush_inline();
            }
            Event::End(TagEnd::Paragraph) | Event::End(TagEnd::HtmlBlock) => {
                self.flush_inline();
            }
            Event::End(TagEnd::Heading(level)) => {
                let content = std::mem::take(&mut self.inline);
                self.push_block(heading(level as u8, content));
            }
            Event::Start(Tag::List(first_number)) => {
                self.flush_inline();
                self.containers.push(Container::List {
                    ordered: first_number.is_some(),
                    items: Vec::new(),
                });
            }
            Event::End(TagEnd::List(_)) => {
                if let Some(Container::List { ordered, items }) = self.containers.pop() {
                    let block = if ordered {
                        ordered_list(items)
                    } else {
                        bullet_list(items)
                    };
                    self.push_block(block);
                }
            }
            Event::Start(Tag::Item) => {
                self.containers.push(Container::Item { blocks: Vec::new() });
            }
            Event::End(TagEnd::Item) => {
                self.flush_inline();
                if let Some(Container::Item { mut blocks }) = self.containers.pop() {
                    if blocks.is_empty() {
                        blocks.push(paragraph(Vec::new()));
                    }
                    if let Some(Container::List { items, .. }) = self.containers.last_mut() {
                        items.push(ListItem {
                            kind: ListItemType::ListItem,
                            content: blocks,
                        });
                    }
                }
            }
            Event::Start(Tag::CodeBlock(kind)) => {
                self.flush_inline();
                let language = match kind {
                    CodeBlockKind::Fenced(info) => {
                        info.split_whitespace().next().map(str::to_string)
                    }
                    CodeBlockKind::Indented => None,
                };
                self.code = Some((language, String::new()));
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((language, code)) = self.code.take() {
                    let code = code.strip_suffix('\n').unwrap_or(&code);
                    self.push_block(code_block(code, language.as_deref()));
                }
            }
            Event::Start(Tag::Strong) => self.marks.push(Mark::Strong),
            Event::Start(Tag::Emphasis) => self.marks.push(Mark::Em),
            Event::Start(Tag::Strikethrough) => self.marks.push(Mark::Strike),
            Event::Start(Tag::Link { dest_url, .. }) => self.marks.push(Mark::link(dest_url.to_string())),
            Event::End(TagEnd::Strong)
            | Event::End(TagEnd::Emphasis)
            | Event::End(TagEnd::Strikethrough)
            | Event::End(TagEnd::Link) => {
                self.marks.pop();
            }
            Event::Text(text) => match self.code.as_mut() {
                Some((_, code)) => code.push_str(&text),
                None => self.push_text(&text, None),
            },
            Event::Code(code) => self.push_text(&code, Some(Mark::Code)),
            Event::Html(html) | Event::InlineHtml(html) => {
                self.push_text(html.trim_end_matches('\n'), None)
            }
            Event::SoftBreak => self.push_text(" ", None),
            Event::HardBreak => self.push_text("\n", None),
            _ => {}
        }
    }

    /// Append a run, merging it into the previous one when the marks match
    fn push_text(&mut self, value: &str, extra: Option<Mark>) {
        if value.is_empty() {
            return;
        }

        let mut marks = self.marks.clone();
        marks.extend(extra);

        if let Some(Inline::Text { text, marks: last }) = self.inline.last_mut() {
            if *last == marks {
                text.push_str(value);
                return;
            }
        }

        self.inline.push(Inline::Text {
            text: value.to_string(),
            marks,
        });
    }

    /// Close pending runs as a paragraph (tight list items carry no paragraph events)
    fn flush_inline(&mut self) {
        if !self.inline.is_empty() {
            let content = std::mem::take(&mut self.inline);
            self.push_block(paragraph(content));
        }
    }

    fn push_block(&mut self, block: Block) {
        match self.containers.last_mut() {
            Some(Container::Item { blocks }) => blocks.push(block),
            // Lists only hold items; anything else lands at the top level
            Some(Container::List { .. }) | None => self.blocks.push(block),
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush_inline();
        self.blocks
    }
}
