use jira_gateway_core::atlassian::jira::{transform_users, JiraUser, UserOutput};

use super::JiraClient;
use crate::prelude::*;

/// List users, optionally narrowed by a name or email query
pub async fn list_users_data(
    client: &JiraClient,
    query: Option<&str>,
    include_inactive: bool,
) -> Result<Vec<UserOutput>, Error> {
    let path = match query.map(str::trim).filter(|q| !q.is_empty()) {
        Some(query) => format!(
            "/rest/api/3/user/search?query={}",
            urlencoding::encode(query)
        ),
        None => "/rest/api/3/users/search".to_string(),
    };

    let users: Vec<JiraUser> = client.get_json(&path, "list users").await?;

    Ok(transform_users(users, include_inactive))
}
