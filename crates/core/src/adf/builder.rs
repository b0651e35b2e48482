//! Document Builder
//!
//! Pure constructors that turn plain text and simple structures into ADF trees.
//! None of these functions fail: empty input degrades to empty nodes instead.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::node::{Block, CodeBlockAttrs, Document, HeadingAttrs, Inline, ListItem, ListItemType, Mark};

/// Blank line between paragraphs: two line breaks with only spaces or tabs between them
static PARAGRAPH_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n[ \t]*\r?\n").expect("paragraph separator regex"));

/// Lowest heading level Jira renders
pub const MIN_HEADING_LEVEL: u8 = 1;

/// Highest heading level Jira renders
pub const MAX_HEADING_LEVEL: u8 = 6;

/// A run of text with its marks, as accepted by [`formatted_paragraph_to_document`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    #[serde(default)]
    pub marks: Vec<Mark>,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: Vec::new(),
        }
    }

    pub fn marked(text: impl Into<String>, marks: Vec<Mark>) -> Self {
        Self {
            text: text.into(),
            marks,
        }
    }
}

// Primitives

/// Unformatted text node
pub fn text(value: impl Into<String>) -> Inline {
    styled_text(value, Vec::new())
}

/// Text node carrying `marks` in the given order
pub fn styled_text(value: impl Into<String>, marks: Vec<Mark>) -> Inline {
    Inline::Text {
        text: value.into(),
        marks,
    }
}

/// Text node linked to `href`
pub fn link_text(value: impl Into<String>, href: impl Into<String>) -> Inline {
    styled_text(value, vec![Mark::link(href)])
}

/// Paragraph holding `content`; an empty vector is a blank line
pub fn paragraph(content: Vec<Inline>) -> Block {
    Block::Paragraph { content }
}

/// Paragraph with a single unformatted run, or an empty paragraph for empty text
pub fn text_paragraph(value: &str) -> Block {
    paragraph(non_empty_text(value).into_iter().collect())
}

/// Heading block. Levels outside 1..=6 are clamped into range.
pub fn heading(level: u8, content: Vec<Inline>) -> Block {
    Block::Heading {
        attrs: HeadingAttrs {
            level: level.clamp(MIN_HEADING_LEVEL, MAX_HEADING_LEVEL),
        },
        content,
    }
}

/// List entry wrapping `content` in a paragraph
pub fn list_item(content: Vec<Inline>) -> ListItem {
    ListItem {
        kind: ListItemType::ListItem,
        content: vec![paragraph(content)],
    }
}

pub fn bullet_list(items: Vec<ListItem>) -> Block {
    Block::BulletList { content: items }
}

pub fn ordered_list(items: Vec<ListItem>) -> Block {
    Block::OrderedList { content: items }
}

/// Code block holding `code` verbatim as a single run
pub fn code_block(code: &str, language: Option<&str>) -> Block {
    Block::CodeBlock {
        attrs: CodeBlockAttrs {
            language: language
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string),
        },
        content: non_empty_text(code).into_iter().collect(),
    }
}

/// Wrap blocks into a version 1 document
pub fn document(content: Vec<Block>) -> Document {
    Document::new(content)
}

fn non_empty_text(value: &str) -> Option<Inline> {
    if value.is_empty() {
        None
    } else {
        Some(text(value))
    }
}

// Conversions

/// Convert plain text into a document, one paragraph per blank-line separated segment
///
/// Segments are kept verbatim, whitespace included. An empty segment (between two
/// adjacent separators) becomes an empty paragraph. Empty or missing input yields
/// a single empty paragraph, never an empty document.
pub fn text_to_document(input: Option<&str>) -> Document {
    let input = input.unwrap_or_default();
    if input.is_empty() {
        return document(vec![paragraph(Vec::new())]);
    }

    let blocks = PARAGRAPH_SEPARATOR.split(input).map(text_paragraph).collect();

    document(blocks)
}

/// Convert a sequence of text runs into a single formatted paragraph
///
/// Marks are passed through as given. Runs with empty text are skipped.
pub fn formatted_paragraph_to_document(runs: Vec<TextRun>) -> Document {
    let content = runs
        .into_iter()
        .filter(|run| !run.text.is_empty())
        .map(|run| styled_text(run.text, run.marks))
        .collect();

    document(vec![paragraph(content)])
}

/// Convert strings into a bullet list document, one item per string
pub fn bullet_list_to_document<S: AsRef<str>>(items: &[S]) -> Document {
    document(vec![bullet_list(text_items(items))])
}

/// Convert strings into an ordered list document, one item per string
pub fn ordered_list_to_document<S: AsRef<str>>(items: &[S]) -> Document {
    document(vec![ordered_list(text_items(items))])
}

fn text_items<S: AsRef<str>>(items: &[S]) -> Vec<ListItem> {
    items
        .iter()
        .map(|item| list_item(non_empty_text(item.as_ref()).into_iter().collect()))
        .collect()
}

/// Heading followed by a body paragraph
pub fn heading_to_document(heading_text: &str, level: u8, body: &str) -> Document {
    document(vec![
        heading(level, non_empty_text(heading_text).into_iter().collect()),
        text_paragraph(body),
    ])
}

/// Single code block document. The code is never split on newlines.
pub fn code_block_to_document(code: &str, language: Option<&str>) -> Document {
    document(vec![code_block(code, language)])
}

/// Paragraph containing one linked run. Empty link text falls back to the URL.
pub fn link_to_document(link: &str, url: &str) -> Document {
    let label = if link.is_empty() { url } else { link };
    document(vec![paragraph(vec![link_text(label, url)])])
}

/// Assemble pre-built blocks into a document without reordering or merging them
pub fn combine_blocks(blocks: Vec<Block>) -> Document {
    document(blocks)
}
