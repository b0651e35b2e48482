//! Route handlers: one gateway request in, one Jira call (or two) out

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use jira_gateway_core::atlassian::jira::{
    CreateIssueRequest, CreateProjectRequest, CreatedIssue, CreatedProject, IssueOutput,
    ProjectOutput, TransitionOutput, TransitionRequest, UpdateIssueRequest, UserOutput,
};
use serde::Deserialize;

use super::AppState;
use crate::jira::{issue, project, transition, user};
use crate::prelude::*;

type Shared = State<Arc<AppState>>;

/// Unwrap a JSON body, reporting malformed input as a 400
fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, Error> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| Error::InvalidRequest(rejection.body_text()))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn openapi() -> Json<serde_json::Value> {
    Json(super::openapi::document())
}

pub async fn create_issue(
    State(state): Shared,
    payload: Result<Json<CreateIssueRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedIssue>), Error> {
    let request = body(payload)?;
    log::info!("Creating issue in {}", request.project_key);

    let created = issue::create_issue_data(&state.jira, &request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_issue(
    State(state): Shared,
    Path(key): Path<String>,
) -> Result<Json<IssueOutput>, Error> {
    log::info!("Fetching issue {key}");
    Ok(Json(issue::get_issue_data(&state.jira, &key).await?))
}

pub async fn update_issue(
    State(state): Shared,
    Path(key): Path<String>,
    payload: Result<Json<UpdateIssueRequest>, JsonRejection>,
) -> Result<StatusCode, Error> {
    let request = body(payload)?;
    log::info!("Updating issue {key}");

    issue::update_issue_data(&state.jira, &key, &request).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteParams {
    #[serde(default, rename = "deleteSubtasks")]
    delete_subtasks: bool,
}

pub async fn delete_issue(
    State(state): Shared,
    Path(key): Path<String>,
    Query(params): Query<DeleteParams>,
) -> Result<StatusCode, Error> {
    log::info!("Deleting issue {key}");

    issue::delete_issue_data(&state.jira, &key, params.delete_subtasks).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_transitions(
    State(state): Shared,
    Path(key): Path<String>,
) -> Result<Json<Vec<TransitionOutput>>, Error> {
    log::info!("Listing transitions for {key}");
    Ok(Json(
        transition::list_transitions_data(&state.jira, &key).await?,
    ))
}

pub async fn execute_transition(
    State(state): Shared,
    Path(key): Path<String>,
    payload: Result<Json<TransitionRequest>, JsonRejection>,
) -> Result<Json<TransitionOutput>, Error> {
    let request = body(payload)?;
    log::info!("Transitioning {key} via '{}'", request.transition);

    Ok(Json(
        transition::execute_transition_data(&state.jira, &key, &request).await?,
    ))
}

pub async fn create_project(
    State(state): Shared,
    payload: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedProject>), Error> {
    let request = body(payload)?;
    log::info!("Creating project {}", request.key);

    let created = project::create_project_data(&state.jira, &request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_project(
    State(state): Shared,
    Path(key): Path<String>,
) -> Result<Json<ProjectOutput>, Error> {
    log::info!("Fetching project {key}");
    Ok(Json(project::get_project_data(&state.jira, &key).await?))
}

#[derive(Debug, Default, Deserialize)]
pub struct UserParams {
    #[serde(default)]
    query: Option<String>,
    #[serde(default, rename = "includeInactive")]
    include_inactive: bool,
}

pub async fn list_users(
    State(state): Shared,
    Query(params): Query<UserParams>,
) -> Result<Json<Vec<UserOutput>>, Error> {
    log::info!("Listing users");
    Ok(Json(
        user::list_users_data(&state.jira, params.query.as_deref(), params.include_inactive)
            .await?,
    ))
}
