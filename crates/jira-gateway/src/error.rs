use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use jira_gateway_core::atlassian::jira::RequestError;

/// Failures surfaced by the gateway's HTTP handlers
#[derive(thiserror::Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Jira error [{status}]: {message}")]
    Jira { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response from Jira: {0}")]
    UnexpectedResponse(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::InvalidRequest(_) | Error::Request(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Jira { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Error::Network(_) | Error::UnexpectedResponse(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Error::Jira { .. } | Error::Network(_) | Error::UnexpectedResponse(_) => {
                log::warn!("{self}")
            }
            _ => log::debug!("{self}"),
        }

        let message = match &self {
            Error::Jira { message, .. } => message.clone(),
            other => other.to_string(),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
