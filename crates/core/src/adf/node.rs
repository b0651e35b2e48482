//! Typed node model for ADF (Atlassian Document Format) version 1
//!
//! Every node category is a closed enum, tagged on the wire by its `type` field.
//! Field names (`type`, `version`, `content`, `attrs`, `text`, `marks`, `href`,
//! `level`) match what Jira's v3 API expects for rich-text fields.

use serde::{Deserialize, Serialize};

/// Format version written into every document
pub const FORMAT_VERSION: u32 = 1;

/// Discriminator of the root node
pub const DOC_TYPE: &str = "doc";

/// Block `type` values accepted at the top level of a document
pub const BLOCK_TYPES: [&str; 5] = [
    "paragraph",
    "heading",
    "bulletList",
    "orderedList",
    "codeBlock",
];

/// Marker for the root `"type": "doc"` field
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocType {
    #[default]
    #[serde(rename = "doc")]
    Doc,
}

/// Root container of an ADF tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "type")]
    pub kind: DocType,
    pub version: u32,
    pub content: Vec<Block>,
}

impl Document {
    /// Create a version 1 document holding `content` as-is
    pub fn new(content: Vec<Block>) -> Self {
        Self {
            kind: DocType::Doc,
            version: FORMAT_VERSION,
            content,
        }
    }

    /// Serialize into the JSON shape sent to Jira
    pub fn to_value(&self) -> serde_json::Value {
        // Every field is a plain string, integer or sequence, so this cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Top-level structural node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    Paragraph {
        #[serde(default)]
        content: Vec<Inline>,
    },
    Heading {
        attrs: HeadingAttrs,
        #[serde(default)]
        content: Vec<Inline>,
    },
    BulletList {
        #[serde(default)]
        content: Vec<ListItem>,
    },
    OrderedList {
        #[serde(default)]
        content: Vec<ListItem>,
    },
    CodeBlock {
        #[serde(default, skip_serializing_if = "CodeBlockAttrs::is_empty")]
        attrs: CodeBlockAttrs,
        #[serde(default)]
        content: Vec<Inline>,
    },
}

impl Block {
    /// Wire name of this block's `type` field
    pub fn type_name(&self) -> &'static str {
        match self {
            Block::Paragraph { .. } => "paragraph",
            Block::Heading { .. } => "heading",
            Block::BulletList { .. } => "bulletList",
            Block::OrderedList { .. } => "orderedList",
            Block::CodeBlock { .. } => "codeBlock",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingAttrs {
    pub level: u8,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlockAttrs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl CodeBlockAttrs {
    fn is_empty(&self) -> bool {
        self.language.is_none()
    }
}

/// Marker for the `"type": "listItem"` field
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListItemType {
    #[default]
    #[serde(rename = "listItem")]
    ListItem,
}

/// Entry of a bullet or ordered list, wrapping one paragraph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(rename = "type")]
    pub kind: ListItemType,
    #[serde(default)]
    pub content: Vec<Block>,
}

/// Text-level node nested inside a block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Inline {
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        marks: Vec<Mark>,
    },
}

impl Inline {
    pub fn text(&self) -> &str {
        match self {
            Inline::Text { text, .. } => text,
        }
    }

    pub fn marks(&self) -> &[Mark] {
        match self {
            Inline::Text { marks, .. } => marks,
        }
    }
}

/// Formatting or semantic attribute of a text run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Mark {
    Strong,
    Em,
    Code,
    Strike,
    Underline,
    Link { attrs: LinkAttrs },
}

impl Mark {
    pub fn link(href: impl Into<String>) -> Self {
        Mark::Link {
            attrs: LinkAttrs { href: href.into() },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkAttrs {
    pub href: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_serializes_wire_field_names() {
        // Arrange: A document with a heading and a linked, bold text run
        let doc = Document::new(vec![
            Block::Heading {
                attrs: HeadingAttrs { level: 2 },
                content: vec![Inline::Text {
                    text: "Title".to_string(),
                    marks: vec![],
                }],
            },
            Block::Paragraph {
                content: vec![Inline::Text {
                    text: "docs".to_string(),
                    marks: vec![Mark::Strong, Mark::link("https://example.com")],
                }],
            },
        ]);

        // Act
        let value = doc.to_value();

        // Assert
        assert_eq!(
            value,
            json!({
                "type": "doc",
                "version": 1,
                "content": [
                    {
                        "type": "heading",
                        "attrs": {"level": 2},
                        "content": [{"type": "text", "text": "Title"}]
                    },
                    {
                        "type": "paragraph",
                        "content": [{
                            "type": "text",
                            "text": "docs",
                            "marks": [
                                {"type": "strong"},
                                {"type": "link", "attrs": {"href": "https://example.com"}}
                            ]
                        }]
                    }
                ]
            })
        );
    }

    #[test]
    fn test_code_block_without_language_omits_attrs() {
        let block = Block::CodeBlock {
            attrs: CodeBlockAttrs::default(),
            content: vec![],
        };

        let value = serde_json::to_value(&block).unwrap();

        assert_eq!(value, json!({"type": "codeBlock", "content": []}));
    }

    #[test]
    fn test_deserialize_list_document() {
        // Arrange: A hand-written ordered list
        let value = json!({
            "type": "doc",
            "version": 1,
            "content": [{
                "type": "orderedList",
                "content": [{
                    "type": "listItem",
                    "content": [{
                        "type": "paragraph",
                        "content": [{"type": "text", "text": "one", "marks": [{"type": "em"}]}]
                    }]
                }]
            }]
        });

        // Act
        let doc: Document = serde_json::from_value(value).unwrap();

        // Assert
        let Block::OrderedList { content } = &doc.content[0] else {
            panic!("expected an ordered list");
        };
        assert_eq!(content.len(), 1);
        let Block::Paragraph { content } = &content[0].content[0] else {
            panic!("expected a paragraph");
        };
        assert_eq!(content[0].text(), "one");
        assert_eq!(content[0].marks(), &[Mark::Em]);
    }

    #[test]
    fn test_block_type_names_are_recognized_block_types() {
        let blocks = [
            Block::Paragraph { content: vec![] },
            Block::Heading {
                attrs: HeadingAttrs { level: 1 },
                content: vec![],
            },
            Block::BulletList { content: vec![] },
            Block::OrderedList { content: vec![] },
            Block::CodeBlock {
                attrs: CodeBlockAttrs::default(),
                content: vec![],
            },
        ];

        for block in &blocks {
            assert!(BLOCK_TYPES.contains(&block.type_name()));
        }
    }
}
