//! Document Validator
//!
//! A structural gate deciding whether a JSON value is plausibly an ADF document.
//! Only the root and the top-level blocks are checked. Inline nodes and marks
//! are left to the builder that produced them.

use serde_json::Value;

use super::node::{Document, BLOCK_TYPES, DOC_TYPE, FORMAT_VERSION};

/// Check that `value` has the shape of a version 1 document
///
/// Returns `false` for anything that does not conform, including values that
/// are not objects at all. Never panics.
pub fn validate(value: &Value) -> bool {
    let Some(root) = value.as_object() else {
        return false;
    };

    if root.get("type").and_then(Value::as_str) != Some(DOC_TYPE) {
        return false;
    }

    // 1 and 1.0 are the same JSON number
    if root.get("version").and_then(Value::as_f64) != Some(f64::from(FORMAT_VERSION)) {
        return false;
    }

    match root.get("content").and_then(Value::as_array) {
        Some(blocks) => blocks.iter().all(is_block),
        None => false,
    }
}

/// Validate a typed document through its serialized form
pub fn is_valid_document(document: &Document) -> bool {
    validate(&document.to_value())
}

fn is_block(value: &Value) -> bool {
    let Some(block) = value.as_object() else {
        return false;
    };

    let known_type = block
        .get("type")
        .and_then(Value::as_str)
        .is_some_and(|t| BLOCK_TYPES.contains(&t));

    known_type && block.get("content").is_some_and(Value::is_array)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_accepts_minimal_documents() {
        assert!(validate(&json!({"type": "doc", "version": 1, "content": []})));
        assert!(validate(&json!({
            "type": "doc",
            "version": 1,
            "content": [{"type": "paragraph", "content": []}]
        })));
    }

    #[test]
    fn test_validate_accepts_every_block_type() {
        let value = json!({
            "type": "doc",
            "version": 1,
            "content": [
                {"type": "paragraph", "content": []},
                {"type": "heading", "attrs": {"level": 3}, "content": []},
                {"type": "bulletList", "content": []},
                {"type": "orderedList", "content": []},
                {"type": "codeBlock", "attrs": {"language": "go"}, "content": []}
            ]
        });

        assert!(validate(&value));
    }

    #[test]
    fn test_validate_rejects_non_documents() {
        // Arrange: Values of the wrong kind entirely
        let candidates = [
            Value::Null,
            json!("a plain string"),
            json!(42),
            json!([{"type": "doc"}]),
            json!({"type": "doc", "version": 1}),
            json!({"type": "doc", "version": 1, "content": {}}),
            json!({"type": "document", "version": 1, "content": []}),
        ];

        // Act & Assert
        for candidate in &candidates {
            assert!(!validate(candidate), "accepted {candidate}");
        }
    }

    #[test]
    fn test_validate_accepts_float_encoded_version() {
        let value = json!({"type": "doc", "version": 1.0, "content": []});

        assert!(validate(&value));
    }

    #[test]
    fn test_validate_requires_exact_version() {
        for version in [json!(0), json!(2), json!("1"), json!(1.5), Value::Null] {
            let value = json!({"type": "doc", "version": version, "content": []});
            assert!(!validate(&value), "accepted version {version}");
        }
    }

    #[test]
    fn test_validate_rejects_malformed_blocks() {
        let blocks = [
            json!({"content": []}),
            json!({"type": "table", "content": []}),
            json!({"type": "paragraph"}),
            json!({"type": "paragraph", "content": "text"}),
            json!("paragraph"),
            Value::Null,
        ];

        for block in blocks {
            // One bad block fails the whole document
            let value = json!({
                "type": "doc",
                "version": 1,
                "content": [{"type": "paragraph", "content": []}, block]
            });
            assert!(!validate(&value), "accepted {value}");
        }
    }

    #[test]
    fn test_validate_does_not_inspect_inline_nodes() {
        // Arrange: Inline content that no builder would produce
        let value = json!({
            "type": "doc",
            "version": 1,
            "content": [{
                "type": "paragraph",
                "content": [{"type": "mystery", "marks": "not-a-list"}]
            }]
        });

        // Act & Assert: Shallow validation still accepts it
        assert!(validate(&value));
    }
}
