//! OpenAPI 3.0 description of the gateway routes, served at `/openapi.json`

use serde_json::{json, Map, Value};

fn error_response(description: &str) -> Value {
    json_response(description, schema_ref("Error"))
}

fn json_response(description: &str, schema: Value) -> Value {
    json!({
        "description": description,
        "content": {"application/json": {"schema": schema}}
    })
}

fn json_body(schema_name: &str) -> Value {
    json!({
        "required": true,
        "content": {"application/json": {"schema": schema_ref(schema_name)}}
    })
}

fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{name}") })
}

fn array_of(name: &str) -> Value {
    json!({"type": "array", "items": schema_ref(name)})
}

fn path_key(description: &str) -> Value {
    json!({
        "name": "key",
        "in": "path",
        "required": true,
        "description": description,
        "schema": {"type": "string"}
    })
}

fn query_param(name: &str, kind: &str) -> Value {
    json!({"name": name, "in": "query", "required": false, "schema": {"type": kind}})
}

/// Object schema with the given properties
fn object(required: &[&str], properties: &[(&str, Value)]) -> Value {
    let properties: Map<String, Value> = properties
        .iter()
        .map(|(name, schema)| (name.to_string(), schema.clone()))
        .collect();

    let mut schema = json!({"type": "object", "properties": properties});
    if !required.is_empty() {
        schema["required"] = json!(required);
    }
    schema
}

fn string() -> Value {
    json!({"type": "string"})
}

fn nullable_string() -> Value {
    json!({"type": "string", "nullable": true})
}

fn string_list() -> Value {
    json!({"type": "array", "items": {"type": "string"}})
}

fn description_format() -> Value {
    json!({"type": "string", "enum": ["text", "markdown"], "default": "text"})
}

fn paths() -> Value {
    let issue_key = path_key("Issue key, e.g. PROJ-123");
    let project_key = path_key("Project key, e.g. PROJ");
    let mut paths = Map::new();

    paths.insert(
        "/health".to_string(),
        json!({
            "get": {
                "summary": "Liveness check",
                "responses": {"200": json_response("Gateway is up", json!({"type": "object"}))}
            }
        }),
    );

    paths.insert(
        "/openapi.json".to_string(),
        json!({
            "get": {
                "summary": "This document",
                "responses": {"200": json_response("OpenAPI document", json!({"type": "object"}))}
            }
        }),
    );

    paths.insert(
        "/issues".to_string(),
        json!({
            "post": {
                "summary": "Create an issue",
                "requestBody": json_body("CreateIssueRequest"),
                "responses": {
                    "201": json_response("Issue created", schema_ref("CreatedIssue")),
                    "400": error_response("Invalid request or description")
                }
            }
        }),
    );

    let delete_subtasks = query_param("deleteSubtasks", "boolean");
    paths.insert(
        "/issues/{key}".to_string(),
        json!({
            "get": {
                "summary": "Get an issue",
                "parameters": [issue_key],
                "responses": {
                    "200": json_response("Issue details", schema_ref("Issue")),
                    "404": error_response("Issue not found")
                }
            },
            "put": {
                "summary": "Update issue fields",
                "parameters": [issue_key],
                "requestBody": json_body("UpdateIssueRequest"),
                "responses": {
                    "204": {"description": "Issue updated"},
                    "400": error_response("Invalid request or description")
                }
            },
            "delete": {
                "summary": "Delete an issue",
                "parameters": [issue_key, delete_subtasks],
                "responses": {
                    "204": {"description": "Issue deleted"},
                    "404": error_response("Issue not found")
                }
            }
        }),
    );

    paths.insert(
        "/issues/{key}/transitions".to_string(),
        json!({
            "get": {
                "summary": "List available transitions",
                "parameters": [issue_key],
                "responses": {"200": json_response("Transitions", array_of("Transition"))}
            },
            "post": {
                "summary": "Execute a transition by id, name or target status",
                "parameters": [issue_key],
                "requestBody": json_body("TransitionRequest"),
                "responses": {
                    "200": json_response("Transition executed", schema_ref("Transition")),
                    "404": error_response("No matching transition")
                }
            }
        }),
    );

    paths.insert(
        "/projects".to_string(),
        json!({
            "post": {
                "summary": "Create a project",
                "requestBody": json_body("CreateProjectRequest"),
                "responses": {
                    "201": json_response("Project created", schema_ref("CreatedProject")),
                    "400": error_response("Invalid request")
                }
            }
        }),
    );

    paths.insert(
        "/projects/{key}".to_string(),
        json!({
            "get": {
                "summary": "Get a project",
                "parameters": [project_key],
                "responses": {
                    "200": json_response("Project details", schema_ref("Project")),
                    "404": error_response("Project not found")
                }
            }
        }),
    );

    let query = query_param("query", "string");
    let include_inactive = query_param("includeInactive", "boolean");
    paths.insert(
        "/users".to_string(),
        json!({
            "get": {
                "summary": "List users",
                "parameters": [query, include_inactive],
                "responses": {"200": json_response("Users", array_of("User"))}
            }
        }),
    );

    Value::Object(paths)
}

fn schemas() -> Value {
    let description = json!({
        "description": "Plain string (converted per descriptionFormat) or an ADF document with type 'doc' and version 1",
        "oneOf": [{"type": "string"}, {"type": "object"}]
    });

    let entries = [
        ("Error", object(&[], &[("error", string())])),
        ("Description", description),
        (
            "CreateIssueRequest",
            object(
                &["projectKey", "summary"],
                &[
                    ("projectKey", string()),
                    ("summary", string()),
                    ("description", schema_ref("Description")),
                    ("descriptionFormat", description_format()),
                    ("issueType", json!({"type": "string", "default": "Task"})),
                    ("priority", string()),
                    ("labels", string_list()),
                    ("assigneeAccountId", string()),
                ],
            ),
        ),
        (
            "UpdateIssueRequest",
            object(
                &[],
                &[
                    ("summary", string()),
                    ("description", schema_ref("Description")),
                    ("descriptionFormat", description_format()),
                    ("priority", string()),
                    ("labels", string_list()),
                    ("assigneeAccountId", string()),
                ],
            ),
        ),
        (
            "CreatedIssue",
            object(&[], &[("id", string()), ("key", string()), ("self", string())]),
        ),
        (
            "Issue",
            object(
                &[],
                &[
                    ("id", string()),
                    ("key", string()),
                    ("summary", string()),
                    ("description", nullable_string()),
                    ("descriptionDocument", json!({"type": "object", "nullable": true})),
                    ("status", nullable_string()),
                    ("priority", nullable_string()),
                    ("issueType", nullable_string()),
                    ("project", nullable_string()),
                    ("assignee", nullable_string()),
                    ("reporter", nullable_string()),
                    ("labels", string_list()),
                    ("created", nullable_string()),
                    ("updated", nullable_string()),
                ],
            ),
        ),
        (
            "TransitionRequest",
            object(
                &["transition"],
                &[
                    (
                        "transition",
                        json!({"type": "string", "description": "Transition id, transition name or target status"}),
                    ),
                    ("comment", string()),
                ],
            ),
        ),
        (
            "Transition",
            object(
                &[],
                &[
                    ("id", string()),
                    ("name", string()),
                    ("toStatus", nullable_string()),
                ],
            ),
        ),
        (
            "CreateProjectRequest",
            object(
                &["key", "name", "leadAccountId"],
                &[
                    ("key", string()),
                    ("name", string()),
                    ("leadAccountId", string()),
                    ("projectTypeKey", json!({"type": "string", "default": "software"})),
                    ("projectTemplateKey", string()),
                    ("description", string()),
                ],
            ),
        ),
        (
            "CreatedProject",
            object(
                &[],
                &[
                    ("id", json!({"type": "integer"})),
                    ("key", string()),
                    ("self", string()),
                ],
            ),
        ),
        (
            "Project",
            object(
                &[],
                &[
                    ("id", string()),
                    ("key", string()),
                    ("name", string()),
                    ("description", nullable_string()),
                    ("projectType", nullable_string()),
                    ("lead", nullable_string()),
                ],
            ),
        ),
        (
            "User",
            object(
                &[],
                &[
                    ("accountId", string()),
                    ("displayName", nullable_string()),
                    ("email", nullable_string()),
                    ("active", json!({"type": "boolean"})),
                ],
            ),
        ),
    ];

    Value::Object(
        entries
            .into_iter()
            .map(|(name, schema)| (name.to_string(), schema))
            .collect(),
    )
}

/// Full OpenAPI document for the gateway
pub fn document() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Jira Gateway",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Simplified REST endpoints for Jira issues, projects, users and transitions. Plain-text and Markdown descriptions are converted to ADF before they reach Jira."
        },
        "paths": paths(),
        "components": {"schemas": schemas()}
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = document();

        let paths = doc["paths"].as_object().unwrap();
        for path in [
            "/health",
            "/openapi.json",
            "/issues",
            "/issues/{key}",
            "/issues/{key}/transitions",
            "/projects",
            "/projects/{key}",
            "/users",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
        assert!(doc["paths"]["/issues/{key}"]["delete"].is_object());
    }

    #[test]
    fn test_every_schema_reference_resolves() {
        let doc = document();
        let text = doc.to_string();
        let schemas = doc["components"]["schemas"].as_object().unwrap();

        for reference in text.split("#/components/schemas/").skip(1) {
            let name: String = reference.chars().take_while(|c| c.is_alphanumeric()).collect();
            assert!(schemas.contains_key(&name), "dangling reference {name}");
        }
    }
}
