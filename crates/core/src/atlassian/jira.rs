//! Pure transformation functions for the Jira REST v3 API
//!
//! Gateway request bodies are turned into Jira payloads here, and Jira responses
//! into the gateway's output models. No I/O happens in this module.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::adf;

// ============================================================================
// Errors
// ============================================================================

/// Reasons a gateway request cannot be turned into a Jira payload
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Description is not a valid ADF document")]
    InvalidDocument,

    #[error("Description must be a string or an ADF document, got {0}")]
    UnsupportedDescription(&'static str),

    #[error("Nothing to update")]
    EmptyUpdate,
}

// ============================================================================
// Gateway Request Models
// ============================================================================

/// How a string description should be interpreted
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DescriptionFormat {
    #[default]
    Text,
    Markdown,
}

/// Body of `POST /issues`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIssueRequest {
    pub project_key: String,
    pub summary: String,
    /// Plain string or a pre-built ADF document
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub description_format: DescriptionFormat,
    #[serde(default = "default_issue_type")]
    pub issue_type: String,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub assignee_account_id: Option<String>,
}

fn default_issue_type() -> String {
    "Task".to_string()
}

/// Body of `PUT /issues/{key}`
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIssueRequest {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub description_format: DescriptionFormat,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    #[serde(default)]
    pub assignee_account_id: Option<String>,
}

/// Body of `POST /projects`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub key: String,
    pub name: String,
    pub lead_account_id: String,
    #[serde(default = "default_project_type")]
    pub project_type_key: String,
    #[serde(default)]
    pub project_template_key: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_project_type() -> String {
    "software".to_string()
}

/// Body of `POST /issues/{key}/transitions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionRequest {
    /// Transition id, transition name, or target status name
    pub transition: String,
    #[serde(default)]
    pub comment: Option<String>,
}

// ============================================================================
// Jira Response Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct JiraNamed {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct JiraProjectRef {
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// User as returned by the user search and embedded in issues/projects
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JiraUser {
    pub account_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct JiraIssueFields {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub status: Option<JiraNamed>,
    #[serde(default)]
    pub priority: Option<JiraNamed>,
    #[serde(default)]
    pub issuetype: Option<JiraNamed>,
    #[serde(default)]
    pub project: Option<JiraProjectRef>,
    #[serde(default)]
    pub assignee: Option<JiraUser>,
    #[serde(default)]
    pub reporter: Option<JiraUser>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
}

/// Response of `GET /rest/api/3/issue/{key}`
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct JiraIssueResponse {
    pub id: String,
    pub key: String,
    pub fields: JiraIssueFields,
}

/// Response of `POST /rest/api/3/issue`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CreatedIssue {
    pub id: String,
    pub key: String,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
}

/// Response of `GET /rest/api/3/project/{key}`
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JiraProjectResponse {
    pub id: String,
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub project_type_key: Option<String>,
    #[serde(default)]
    pub lead: Option<JiraUser>,
}

/// Response of `POST /rest/api/3/project`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CreatedProject {
    pub id: u64,
    pub key: String,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct JiraTransition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub to: Option<JiraNamed>,
}

/// Response of `GET /rest/api/3/issue/{key}/transitions`
#[derive(Debug, Deserialize, Clone)]
pub struct JiraTransitionsResponse {
    #[serde(default)]
    pub transitions: Vec<JiraTransition>,
}

// ============================================================================
// Output Models
// ============================================================================

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IssueOutput {
    pub id: String,
    pub key: String,
    pub summary: String,
    pub description: Option<String>,
    pub description_document: Option<Value>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub issue_type: Option<String>,
    pub project: Option<String>,
    pub assignee: Option<String>,
    pub reporter: Option<String>,
    pub labels: Vec<String>,
    pub created: Option<String>,
    pub updated: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOutput {
    pub id: String,
    pub key: String,
    pub name: String,
    pub description: Option<String>,
    pub project_type: Option<String>,
    pub lead: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserOutput {
    pub account_id: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub active: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransitionOutput {
    pub id: String,
    pub name: String,
    pub to_status: Option<String>,
}

// ============================================================================
// Payload Builders
// ============================================================================

/// Turn a gateway description into the ADF value Jira expects
///
/// A missing description becomes the minimal empty document. Strings are
/// converted as plain text or Markdown. Objects are forwarded only when they
/// pass structural validation.
pub fn resolve_description(
    description: Option<&Value>,
    format: DescriptionFormat,
) -> Result<Value, RequestError> {
    match description {
        None | Some(Value::Null) => Ok(adf::text_to_document(None).to_value()),
        Some(Value::String(s)) => Ok(match format {
            DescriptionFormat::Text => adf::text_to_document(Some(s.as_str())),
            DescriptionFormat::Markdown => adf::markdown_to_document(s),
        }
        .to_value()),
        Some(value @ Value::Object(_)) => {
            if adf::validate(value) {
                Ok(value.clone())
            } else {
                Err(RequestError::InvalidDocument)
            }
        }
        Some(Value::Array(_)) => Err(RequestError::UnsupportedDescription("an array")),
        Some(Value::Bool(_)) => Err(RequestError::UnsupportedDescription("a boolean")),
        Some(Value::Number(_)) => Err(RequestError::UnsupportedDescription("a number")),
    }
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, RequestError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(RequestError::MissingField(field))
    } else {
        Ok(trimmed)
    }
}

/// Build the `{"fields": ...}` payload for issue creation
pub fn build_create_issue_payload(request: &CreateIssueRequest) -> Result<Value, RequestError> {
    let project_key = required(&request.project_key, "projectKey")?;
    let summary = required(&request.summary, "summary")?;
    let issue_type = required(&request.issue_type, "issueType")?;

    let mut fields = json!({
        "project": { "key": project_key },
        "summary": summary,
        "issuetype": { "name": issue_type },
        "description": resolve_description(request.description.as_ref(), request.description_format)?,
    });

    if let Some(priority) = &request.priority {
        fields["priority"] = json!({ "name": priority });
    }

    if !request.labels.is_empty() {
        fields["labels"] = json!(request.labels);
    }

    if let Some(account_id) = &request.assignee_account_id {
        fields["assignee"] = json!({ "id": account_id });
    }

    Ok(json!({ "fields": fields }))
}

/// Build the `{"fields": ...}` payload for an issue edit
///
/// Only the fields present in the request are sent.
pub fn build_update_issue_payload(request: &UpdateIssueRequest) -> Result<Value, RequestError> {
    let mut fields = serde_json::Map::new();

    if let Some(summary) = &request.summary {
        fields.insert("summary".into(), json!(required(summary, "summary")?));
    }

    if request.description.is_some() {
        fields.insert(
            "description".into(),
            resolve_description(request.description.as_ref(), request.description_format)?,
        );
    }

    if let Some(priority) = &request.priority {
        fields.insert("priority".into(), json!({ "name": priority }));
    }

    if let Some(labels) = &request.labels {
        fields.insert("labels".into(), json!(labels));
    }

    if let Some(account_id) = &request.assignee_account_id {
        fields.insert("assignee".into(), json!({ "id": account_id }));
    }

    if fields.is_empty() {
        return Err(RequestError::EmptyUpdate);
    }

    Ok(json!({ "fields": fields }))
}

/// Build the payload for project creation
pub fn build_create_project_payload(request: &CreateProjectRequest) -> Result<Value, RequestError> {
    let mut payload = json!({
        "key": required(&request.key, "key")?.to_uppercase(),
        "name": required(&request.name, "name")?,
        "leadAccountId": required(&request.lead_account_id, "leadAccountId")?,
        "projectTypeKey": required(&request.project_type_key, "projectTypeKey")?,
    });

    if let Some(template) = &request.project_template_key {
        payload["projectTemplateKey"] = json!(template);
    }

    if let Some(description) = &request.description {
        payload["description"] = json!(description);
    }

    Ok(payload)
}

/// Build the payload executing `transition_id`, optionally commenting on the issue
pub fn build_transition_payload(transition_id: &str, comment: Option<&str>) -> Value {
    let mut payload = json!({ "transition": { "id": transition_id } });

    if let Some(comment) = comment.filter(|c| !c.trim().is_empty()) {
        payload["update"] = json!({
            "comment": [{ "add": { "body": adf::text_to_document(Some(comment)).to_value() } }]
        });
    }

    payload
}

// ============================================================================
// Response Transformations
// ============================================================================

fn user_label(user: &JiraUser) -> String {
    user.display_name
        .clone()
        .or_else(|| user.email_address.clone())
        .unwrap_or_else(|| user.account_id.clone())
}

fn non_empty_name(named: Option<JiraNamed>) -> Option<String> {
    named.map(|n| n.name).filter(|n| !n.is_empty())
}

/// Convert a Jira issue into the gateway's output model
pub fn transform_issue_response(issue: JiraIssueResponse) -> IssueOutput {
    let fields = issue.fields;

    IssueOutput {
        id: issue.id,
        key: issue.key,
        summary: fields.summary,
        description: adf::extract_description(fields.description.clone()),
        description_document: fields.description.filter(|d| d.is_object()),
        status: non_empty_name(fields.status),
        priority: non_empty_name(fields.priority),
        issue_type: non_empty_name(fields.issuetype),
        project: fields.project.map(|p| p.key),
        assignee: fields.assignee.as_ref().map(user_label),
        reporter: fields.reporter.as_ref().map(user_label),
        labels: fields.labels,
        created: fields.created,
        updated: fields.updated,
    }
}

pub fn transform_project_response(project: JiraProjectResponse) -> ProjectOutput {
    ProjectOutput {
        id: project.id,
        key: project.key,
        name: project.name,
        description: project.description.filter(|d| !d.is_empty()),
        project_type: project.project_type_key,
        lead: project.lead.as_ref().map(user_label),
    }
}

/// Convert user search results, dropping deactivated accounts unless asked for
pub fn transform_users(users: Vec<JiraUser>, include_inactive: bool) -> Vec<UserOutput> {
    users
        .into_iter()
        .filter(|u| include_inactive || u.active)
        .map(|u| UserOutput {
            account_id: u.account_id,
            display_name: u.display_name,
            email: u.email_address,
            active: u.active,
        })
        .collect()
}

pub fn transform_transition(transition: JiraTransition) -> TransitionOutput {
    TransitionOutput {
        id: transition.id,
        name: transition.name,
        to_status: non_empty_name(transition.to),
    }
}

pub fn transform_transitions(response: JiraTransitionsResponse) -> Vec<TransitionOutput> {
    response
        .transitions
        .into_iter()
        .map(transform_transition)
        .collect()
}

/// Find a transition by id, by its name, or by the status it leads to
///
/// Name comparisons ignore case. An exact id match wins over names.
pub fn find_transition<'a>(
    transitions: &'a [JiraTransition],
    target: &str,
) -> Option<&'a JiraTransition> {
    let target = target.trim();

    transitions
        .iter()
        .find(|t| t.id == target)
        .or_else(|| {
            transitions
                .iter()
                .find(|t| t.name.eq_ignore_ascii_case(target))
        })
        .or_else(|| {
            transitions.iter().find(|t| {
                t.to
                    .as_ref()
                    .is_some_and(|to| to.name.eq_ignore_ascii_case(target))
            })
        })
}

/// Extract a readable message from a Jira error body
///
/// Jira reports `errorMessages` (a list) and `errors` (per field). Both are
/// joined line by line; bodies that are not Jira errors are returned as-is.
pub fn parse_jira_error(body: &str) -> String {
    let Ok(error_json) = serde_json::from_str::<Value>(body) else {
        return body.to_string();
    };

    let mut messages: Vec<String> = error_json
        .get("errorMessages")
        .and_then(Value::as_array)
        .map(|msgs| {
            msgs.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    if let Some(errors) = error_json.get("errors").and_then(Value::as_object) {
        for (field, error) in errors {
            if let Some(text) = error.as_str() {
                messages.push(format!("{field}: {text}"));
            }
        }
    }

    if messages.is_empty() {
        body.to_string()
    } else {
        messages.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request() -> CreateIssueRequest {
        CreateIssueRequest {
            project_key: "PROJ".to_string(),
            summary: "Fix bug in authentication".to_string(),
            description: None,
            description_format: DescriptionFormat::Text,
            issue_type: "Bug".to_string(),
            priority: None,
            labels: vec![],
            assignee_account_id: None,
        }
    }

    fn transition(id: &str, name: &str, to: &str) -> JiraTransition {
        JiraTransition {
            id: id.to_string(),
            name: name.to_string(),
            to: Some(JiraNamed {
                name: to.to_string(),
            }),
        }
    }

    #[test]
    fn test_resolve_description_missing_is_empty_document() {
        let result = resolve_description(None, DescriptionFormat::Text).unwrap();

        assert_eq!(
            result,
            json!({"type": "doc", "version": 1, "content": [{"type": "paragraph", "content": []}]})
        );
    }

    #[test]
    fn test_resolve_description_text_and_markdown() {
        // Arrange
        let value = json!("# Title\n\nbody");

        // Act
        let text = resolve_description(Some(&value), DescriptionFormat::Text).unwrap();
        let markdown = resolve_description(Some(&value), DescriptionFormat::Markdown).unwrap();

        // Assert: Text keeps the hash literally, Markdown makes a heading
        assert_eq!(text["content"][0]["type"], "paragraph");
        assert_eq!(text["content"][0]["content"][0]["text"], "# Title");
        assert_eq!(markdown["content"][0]["type"], "heading");
        assert_eq!(markdown["content"][0]["attrs"]["level"], 1);
    }

    #[test]
    fn test_resolve_description_document_passthrough() {
        let doc = json!({
            "type": "doc",
            "version": 1,
            "content": [{"type": "paragraph", "content": [{"type": "text", "text": "as-is"}]}]
        });

        let result = resolve_description(Some(&doc), DescriptionFormat::Text).unwrap();

        assert_eq!(result, doc);
    }

    #[test]
    fn test_resolve_description_rejects_invalid_values() {
        let bad_doc = json!({"type": "doc", "version": 2, "content": []});

        assert_eq!(
            resolve_description(Some(&bad_doc), DescriptionFormat::Text),
            Err(RequestError::InvalidDocument)
        );
        assert_eq!(
            resolve_description(Some(&json!(7)), DescriptionFormat::Text),
            Err(RequestError::UnsupportedDescription("a number"))
        );
        assert_eq!(
            resolve_description(Some(&json!(["a"])), DescriptionFormat::Text),
            Err(RequestError::UnsupportedDescription("an array"))
        );
    }

    #[test]
    fn test_build_create_issue_payload() {
        // Arrange
        let mut request = create_request();
        request.description = Some(json!("Steps\n\nExpected"));
        request.priority = Some("High".to_string());
        request.labels = vec!["backend".to_string()];
        request.assignee_account_id = Some("abc123".to_string());

        // Act
        let payload = build_create_issue_payload(&request).unwrap();

        // Assert
        let fields = &payload["fields"];
        assert_eq!(fields["project"]["key"], "PROJ");
        assert_eq!(fields["summary"], "Fix bug in authentication");
        assert_eq!(fields["issuetype"]["name"], "Bug");
        assert_eq!(fields["priority"]["name"], "High");
        assert_eq!(fields["labels"], json!(["backend"]));
        assert_eq!(fields["assignee"]["id"], "abc123");
        assert_eq!(fields["description"]["content"].as_array().map(Vec::len), Some(2));
        assert!(adf::validate(&fields["description"]));
    }

    #[test]
    fn test_build_create_issue_payload_defaults_description() {
        let payload = build_create_issue_payload(&create_request()).unwrap();

        assert!(adf::validate(&payload["fields"]["description"]));
        assert!(payload["fields"].get("priority").is_none());
        assert!(payload["fields"].get("labels").is_none());
    }

    #[test]
    fn test_build_create_issue_payload_requires_fields() {
        let mut request = create_request();
        request.summary = "   ".to_string();
        assert_eq!(
            build_create_issue_payload(&request),
            Err(RequestError::MissingField("summary"))
        );

        let mut request = create_request();
        request.project_key = String::new();
        assert_eq!(
            build_create_issue_payload(&request),
            Err(RequestError::MissingField("projectKey"))
        );
    }

    #[test]
    fn test_create_issue_request_defaults() {
        let request: CreateIssueRequest =
            serde_json::from_value(json!({"projectKey": "OPS", "summary": "Rotate keys"})).unwrap();

        assert_eq!(request.issue_type, "Task");
        assert_eq!(request.description_format, DescriptionFormat::Text);
        assert!(request.labels.is_empty());
    }

    #[test]
    fn test_build_update_issue_payload_only_sends_present_fields() {
        let request = UpdateIssueRequest {
            summary: Some("New title".to_string()),
            labels: Some(vec![]),
            ..Default::default()
        };

        let payload = build_update_issue_payload(&request).unwrap();

        assert_eq!(payload, json!({"fields": {"summary": "New title", "labels": []}}));
    }

    #[test]
    fn test_build_update_issue_payload_empty_update() {
        assert_eq!(
            build_update_issue_payload(&UpdateIssueRequest::default()),
            Err(RequestError::EmptyUpdate)
        );
    }

    #[test]
    fn test_build_create_project_payload() {
        let request = CreateProjectRequest {
            key: "ops".to_string(),
            name: "Operations".to_string(),
            lead_account_id: "lead-1".to_string(),
            project_type_key: default_project_type(),
            project_template_key: None,
            description: Some("On-call work".to_string()),
        };

        let payload = build_create_project_payload(&request).unwrap();

        assert_eq!(
            payload,
            json!({
                "key": "OPS",
                "name": "Operations",
                "leadAccountId": "lead-1",
                "projectTypeKey": "software",
                "description": "On-call work"
            })
        );
    }

    #[test]
    fn test_build_transition_payload() {
        assert_eq!(
            build_transition_payload("31", None),
            json!({"transition": {"id": "31"}})
        );

        let with_comment = build_transition_payload("31", Some("Deployed"));
        let body = &with_comment["update"]["comment"][0]["add"]["body"];
        assert!(adf::validate(body));
        assert_eq!(body["content"][0]["content"][0]["text"], "Deployed");
    }

    #[test]
    fn test_transform_issue_response() {
        // Arrange: A Jira issue with an ADF description
        let issue: JiraIssueResponse = serde_json::from_value(json!({
            "id": "10001",
            "key": "PROJ-7",
            "fields": {
                "summary": "Broken export",
                "description": {
                    "type": "doc",
                    "version": 1,
                    "content": [{"type": "paragraph", "content": [{"type": "text", "text": "CSV is empty"}]}]
                },
                "status": {"name": "In Progress"},
                "priority": {"name": ""},
                "issuetype": {"name": "Bug"},
                "project": {"key": "PROJ", "name": "Project"},
                "assignee": {"accountId": "a1", "displayName": "Jane Doe"},
                "reporter": {"accountId": "r1"},
                "labels": ["export"]
            }
        }))
        .unwrap();

        // Act
        let output = transform_issue_response(issue);

        // Assert
        assert_eq!(output.key, "PROJ-7");
        assert_eq!(output.description, Some("CSV is empty".to_string()));
        assert!(output.description_document.is_some());
        assert_eq!(output.status, Some("In Progress".to_string()));
        assert_eq!(output.priority, None);
        assert_eq!(output.project, Some("PROJ".to_string()));
        assert_eq!(output.assignee, Some("Jane Doe".to_string()));
        assert_eq!(output.reporter, Some("r1".to_string()));
        assert_eq!(output.labels, vec!["export"]);
    }

    #[test]
    fn test_transform_project_response() {
        let project: JiraProjectResponse = serde_json::from_value(json!({
            "id": "10000",
            "key": "OPS",
            "name": "Operations",
            "description": "",
            "projectTypeKey": "software",
            "lead": {"accountId": "l1", "displayName": "Lead"}
        }))
        .unwrap();

        let output = transform_project_response(project);

        assert_eq!(output.description, None);
        assert_eq!(output.project_type, Some("software".to_string()));
        assert_eq!(output.lead, Some("Lead".to_string()));
    }

    #[test]
    fn test_transform_users_filters_inactive() {
        let users: Vec<JiraUser> = serde_json::from_value(json!([
            {"accountId": "a", "displayName": "Active", "active": true},
            {"accountId": "b", "displayName": "Gone", "active": false},
            {"accountId": "c"}
        ]))
        .unwrap();

        let active = transform_users(users.clone(), false);
        let all = transform_users(users, true);

        assert_eq!(
            active.iter().map(|u| u.account_id.as_str()).collect::<Vec<_>>(),
            vec!["a", "c"]
        );
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_find_transition_by_id_name_or_status() {
        let transitions = vec![
            transition("11", "Start Progress", "In Progress"),
            transition("21", "Resolve", "Done"),
        ];

        assert_eq!(find_transition(&transitions, "21").map(|t| t.id.as_str()), Some("21"));
        assert_eq!(
            find_transition(&transitions, "start progress").map(|t| t.id.as_str()),
            Some("11")
        );
        assert_eq!(find_transition(&transitions, "DONE").map(|t| t.id.as_str()), Some("21"));
        assert!(find_transition(&transitions, "Blocked").is_none());
    }

    #[test]
    fn test_transform_transitions() {
        let response = JiraTransitionsResponse {
            transitions: vec![transition("11", "Start Progress", "In Progress")],
        };

        let output = transform_transitions(response);

        assert_eq!(
            output,
            vec![TransitionOutput {
                id: "11".to_string(),
                name: "Start Progress".to_string(),
                to_status: Some("In Progress".to_string()),
            }]
        );
    }

    #[test]
    fn test_parse_jira_error() {
        let body = r#"{"errorMessages":["Issue does not exist"],"errors":{"summary":"Summary is required"}}"#;

        assert_eq!(
            parse_jira_error(body),
            "Issue does not exist\nsummary: Summary is required"
        );
        assert_eq!(parse_jira_error("Bad Gateway"), "Bad Gateway");
        assert_eq!(parse_jira_error(r#"{"other":1}"#), r#"{"other":1}"#);
    }
}
