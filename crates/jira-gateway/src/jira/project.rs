use jira_gateway_core::atlassian::jira::{
    build_create_project_payload, transform_project_response, CreateProjectRequest,
    CreatedProject, JiraProjectResponse, ProjectOutput,
};

use super::{segment, JiraClient};
use crate::prelude::*;

pub async fn create_project_data(
    client: &JiraClient,
    request: &CreateProjectRequest,
) -> Result<CreatedProject, Error> {
    let payload = build_create_project_payload(request)?;

    let created: CreatedProject = client
        .post_json("/rest/api/3/project", &payload, "create project")
        .await?;

    log::info!("Created project {}", created.key);
    Ok(created)
}

pub async fn get_project_data(client: &JiraClient, project_key: &str) -> Result<ProjectOutput, Error> {
    let path = format!("/rest/api/3/project/{}", segment(project_key));
    let project: JiraProjectResponse = client.get_json(&path, "fetch project").await?;

    Ok(transform_project_response(project))
}
