//! Render ADF trees fetched from Jira back into readable text

use serde_json::Value;

/// Convert a description field (plain string or ADF JSON) into plain text
pub fn extract_description(value: Option<Value>) -> Option<String> {
    value.and_then(|v| match &v {
        Value::String(s) => Some(s.clone()),
        Value::Object(_) => {
            if v.get("type").and_then(Value::as_str) == Some(super::DOC_TYPE) {
                render_adf(&v)
            } else {
                None
            }
        }
        _ => None,
    })
}

/// Render an ADF document to text
///
/// Headings become `#` lines, list items `•` or `1.` lines indented by nesting
/// depth, and code blocks fenced with backticks. Unknown nodes contribute the
/// text of their children.
pub fn render_adf(value: &Value) -> Option<String> {
    let mut output = String::new();

    for node in children(value) {
        if let Some(rendered) = render_node(node, 0) {
            output.push_str(&rendered);
            if !rendered.ends_with('\n') {
                output.push('\n');
            }
        }
    }

    let output = output.trim();
    if output.is_empty() {
        None
    } else {
        Some(output.to_string())
    }
}

fn children(node: &Value) -> &[Value] {
    node.get("content")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn inline_text(node: &Value) -> String {
    children(node)
        .iter()
        .filter_map(|child| render_node(child, 0))
        .collect()
}

fn render_list(node: &Value, depth: usize, ordered: bool) -> String {
    let indent = "  ".repeat(depth);
    let mut text = String::new();

    for (index, item) in children(node).iter().enumerate() {
        let marker = if ordered {
            format!("{}.", index + 1)
        } else {
            "•".to_string()
        };

        let mut first_line = String::new();
        let mut nested = String::new();
        for child in children(item) {
            match child.get("type").and_then(Value::as_str) {
                Some("bulletList") => nested.push_str(&render_list(child, depth + 1, false)),
                Some("orderedList") => nested.push_str(&render_list(child, depth + 1, true)),
                _ => first_line.push_str(inline_text(child).trim()),
            }
        }

        text.push_str(&format!("{indent}{marker} {first_line}\n"));
        text.push_str(&nested);
    }

    text
}

fn render_node(node: &Value, depth: usize) -> Option<String> {
    let node_type = node.get("type")?.as_str()?;

    match node_type {
        "paragraph" => Some(format!("{}\n", inline_text(node))),
        "heading" => {
            let level = node
                .get("attrs")
                .and_then(|a| a.get("level"))
                .and_then(Value::as_u64)
                .unwrap_or(1)
                .clamp(1, 6) as usize;
            Some(format!("{} {}\n", "#".repeat(level), inline_text(node).trim()))
        }
        "bulletList" => Some(render_list(node, depth, false)),
        "orderedList" => Some(render_list(node, depth, true)),
        "codeBlock" => {
            let language = node
                .get("attrs")
                .and_then(|a| a.get("language"))
                .and_then(Value::as_str)
                .unwrap_or_default();
            let code = inline_text(node);
            Some(format!("```{language}\n{}\n```\n", code.trim_end_matches('\n')))
        }
        "text" => node.get("text").and_then(Value::as_str).map(str::to_string),
        "hardBreak" => Some("\n".to_string()),
        _ => {
            let text = inline_text(node);
            if text.is_empty() {
                None
            } else {
                Some(text)
            }
        }
    }
}
