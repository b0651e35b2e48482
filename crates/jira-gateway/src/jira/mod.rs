//! Thin wrappers over the Jira REST v3 API
//!
//! Each submodule maps one gateway operation to one or two Jira calls. Payload
//! building and response shaping live in `jira_gateway_core`.

pub mod issue;
pub mod project;
pub mod transition;
pub mod user;

use jira_gateway_core::atlassian::jira::parse_jira_error;
use serde::de::DeserializeOwned;

use crate::prelude::*;

/// Jira configuration from environment variables
#[derive(Debug, Clone)]
pub struct JiraConfig {
    pub base_url: String,
    pub email: String,
    pub api_token: String,
}

impl JiraConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            base_url: std::env::var("ATLASSIAN_BASE_URL")
                .map_err(|_| eyre!("ATLASSIAN_BASE_URL environment variable not set"))?,
            email: std::env::var("ATLASSIAN_EMAIL")
                .map_err(|_| eyre!("ATLASSIAN_EMAIL environment variable not set"))?,
            api_token: std::env::var("ATLASSIAN_API_TOKEN")
                .map_err(|_| eyre!("ATLASSIAN_API_TOKEN environment variable not set"))?,
        })
    }
}

/// Create an authenticated HTTP client with Basic Auth headers
pub fn create_authenticated_client(config: &JiraConfig) -> Result<reqwest::Client> {
    use base64::Engine;
    use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};

    let auth_string = format!("{}:{}", config.email, config.api_token);
    let auth_encoded = base64::engine::general_purpose::STANDARD.encode(&auth_string);

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Basic {auth_encoded}"))
            .map_err(|e| eyre!("Invalid header value: {}", e))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| eyre!("Failed to build HTTP client: {}", e))
}

/// Authenticated client bound to one Jira site
#[derive(Debug, Clone)]
pub struct JiraClient {
    http: reqwest::Client,
    base_url: String,
}

impl JiraClient {
    pub fn new(config: &JiraConfig) -> Result<Self> {
        Ok(Self {
            http: create_authenticated_client(config)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, context: &str) -> Result<T, Error> {
        log::debug!("GET {path}");
        let request = self.http.get(self.url(path));
        let response = send(request, context).await?;
        parse_json(response, context).await
    }

    pub async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
        context: &str,
    ) -> Result<T, Error> {
        log::debug!("POST {path}");
        let request = self.http.post(self.url(path)).json(body);
        let response = send(request, context).await?;
        parse_json(response, context).await
    }

    /// POST where Jira answers with an empty body (204)
    pub async fn post(&self, path: &str, body: &serde_json::Value, context: &str) -> Result<(), Error> {
        log::debug!("POST {path}");
        send(self.http.post(self.url(path)).json(body), context).await?;
        Ok(())
    }

    pub async fn put(&self, path: &str, body: &serde_json::Value, context: &str) -> Result<(), Error> {
        log::debug!("PUT {path}");
        send(self.http.put(self.url(path)).json(body), context).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str, context: &str) -> Result<(), Error> {
        log::debug!("DELETE {path}");
        send(self.http.delete(self.url(path)), context).await?;
        Ok(())
    }
}

/// Encode a single path segment (issue or project key)
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

async fn send(request: reqwest::RequestBuilder, context: &str) -> Result<reqwest::Response, Error> {
    let response = request
        .send()
        .await
        .map_err(|e| Error::Network(format!("Failed to {context}: {e}")))?;

    check_response(response, context).await
}

/// Check that an HTTP response was successful, returning a descriptive error otherwise.
async fn check_response(response: reqwest::Response, context: &str) -> Result<reqwest::Response, Error> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        format!(
            "Failed to {context}: {}",
            status.canonical_reason().unwrap_or("unknown error")
        )
    } else {
        parse_jira_error(&body)
    };

    Err(Error::Jira {
        status: status.as_u16(),
        message,
    })
}

async fn parse_json<T: DeserializeOwned>(response: reqwest::Response, context: &str) -> Result<T, Error> {
    response
        .json::<T>()
        .await
        .map_err(|e| Error::UnexpectedResponse(format!("Failed to parse {context} response: {e}")))
}
