//! Create, read, update and delete Jira issues

use jira_gateway_core::atlassian::jira::{
    build_create_issue_payload, build_update_issue_payload, transform_issue_response,
    CreateIssueRequest, CreatedIssue, IssueOutput, JiraIssueResponse, UpdateIssueRequest,
};

use super::{segment, JiraClient};
use crate::prelude::*;

/// Create an issue, converting its description into ADF first
pub async fn create_issue_data(
    client: &JiraClient,
    request: &CreateIssueRequest,
) -> Result<CreatedIssue, Error> {
    let payload = build_create_issue_payload(request)?;

    let created: CreatedIssue = client
        .post_json("/rest/api/3/issue", &payload, "create issue")
        .await?;

    log::info!("Created issue {}", created.key);
    Ok(created)
}

pub async fn get_issue_data(client: &JiraClient, issue_key: &str) -> Result<IssueOutput, Error> {
    let path = format!("/rest/api/3/issue/{}", segment(issue_key));
    let issue: JiraIssueResponse = client.get_json(&path, "fetch issue").await?;

    Ok(transform_issue_response(issue))
}

/// Edit the fields present in `request`
pub async fn update_issue_data(
    client: &JiraClient,
    issue_key: &str,
    request: &UpdateIssueRequest,
) -> Result<(), Error> {
    let payload = build_update_issue_payload(request)?;
    let path = format!("/rest/api/3/issue/{}", segment(issue_key));

    client.put(&path, &payload, "update issue").await?;

    log::info!("Updated issue {issue_key}");
    Ok(())
}

pub async fn delete_issue_data(
    client: &JiraClient,
    issue_key: &str,
    delete_subtasks: bool,
) -> Result<(), Error> {
    let path = format!(
        "/rest/api/3/issue/{}?deleteSubtasks={delete_subtasks}",
        segment(issue_key)
    );

    client.delete(&path, "delete issue").await?;

    log::info!("Deleted issue {issue_key}");
    Ok(())
}
