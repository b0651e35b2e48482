//! ADF (Atlassian Document Format) construction and validation
//!
//! Jira's v3 API requires rich-text fields (descriptions, comments) as a tree of
//! typed nodes instead of plain strings. This module builds those trees from
//! text, checks arbitrary JSON for structural conformance before it is sent,
//! and renders fetched trees back into text.

pub mod builder;
pub mod markdown;
pub mod node;
pub mod render;
pub mod validate;

pub use builder::{
    bullet_list_to_document, code_block_to_document, combine_blocks,
    formatted_paragraph_to_document, heading_to_document, link_to_document,
    ordered_list_to_document, text_to_document, TextRun,
};
pub use markdown::markdown_to_document;
pub use node::*;
pub use render::{extract_description, render_adf};
pub use validate::{is_valid_document, validate};

#[cfg(test)]
mod tests {
    use super::builder::{bullet_list, code_block, heading, list_item, text, text_paragraph};
    use super::*;

    #[test]
    fn test_combined_document_round_trips_through_json() {
        // Arrange: heading + paragraph + list + code block from individual builders
        let blocks = vec![
            heading(2, vec![text("Steps to reproduce")]),
            text_paragraph("Run the importer twice."),
            bullet_list(vec![
                list_item(vec![text("import")]),
                list_item(vec![text("import again")]),
            ]),
            code_block("importer --all", Some("bash")),
        ];

        // Act
        let doc = combine_blocks(blocks);
        let value = doc.to_value();
        let parsed: Document = serde_json::from_value(value.clone()).unwrap();

        // Assert
        assert!(validate(&value));
        assert_eq!(value["content"].as_array().map(Vec::len), Some(4));
        assert_eq!(parsed, doc);
    }
}
