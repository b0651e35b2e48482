//! List and execute workflow transitions on an issue

use jira_gateway_core::atlassian::jira::{
    build_transition_payload, find_transition, transform_transition, transform_transitions,
    JiraTransitionsResponse, TransitionOutput, TransitionRequest,
};

use super::{segment, JiraClient};
use crate::prelude::*;

fn transitions_path(issue_key: &str) -> String {
    format!("/rest/api/3/issue/{}/transitions", segment(issue_key))
}

async fn fetch_transitions(
    client: &JiraClient,
    issue_key: &str,
) -> Result<JiraTransitionsResponse, Error> {
    client
        .get_json(&transitions_path(issue_key), "fetch transitions")
        .await
}

pub async fn list_transitions_data(
    client: &JiraClient,
    issue_key: &str,
) -> Result<Vec<TransitionOutput>, Error> {
    let response = fetch_transitions(client, issue_key).await?;
    Ok(transform_transitions(response))
}

/// Execute the transition matching `request.transition` (id, name or target status)
pub async fn execute_transition_data(
    client: &JiraClient,
    issue_key: &str,
    request: &TransitionRequest,
) -> Result<TransitionOutput, Error> {
    if request.transition.trim().is_empty() {
        return Err(Error::InvalidRequest(
            "transition must not be empty".to_string(),
        ));
    }

    let response = fetch_transitions(client, issue_key).await?;

    let transition = find_transition(&response.transitions, &request.transition)
        .ok_or_else(|| {
            Error::NotFound(format!(
                "No transition '{}' on {}. Available: {}",
                request.transition,
                issue_key,
                response
                    .transitions
                    .iter()
                    .map(|t| t.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })?
        .clone();

    let payload = build_transition_payload(&transition.id, request.comment.as_deref());
    client
        .post(&transitions_path(issue_key), &payload, "execute transition")
        .await?;

    log::info!("Moved {issue_key} through '{}'", transition.name);

    Ok(transform_transition(transition))
}
