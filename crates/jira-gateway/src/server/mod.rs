//! HTTP gateway exposing simplified REST endpoints over Jira

pub mod openapi;
pub mod routes;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::jira::{JiraClient, JiraConfig};
use crate::prelude::*;
use crate::prelude::eprintln;

#[derive(Debug, clap::Parser)]
#[command(name = "serve")]
#[command(about = "Run the HTTP gateway")]
pub struct App {
    /// Port to listen on
    #[arg(short, long, env = "GATEWAY_PORT", default_value = "3000")]
    port: u16,

    /// Host to bind to
    #[arg(long, env = "GATEWAY_HOST", default_value = "127.0.0.1")]
    host: String,
}

/// State shared by every handler
#[derive(Debug)]
pub struct AppState {
    pub jira: JiraClient,
}

/// Build the gateway router around a Jira client
pub fn router(jira: JiraClient) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health))
        .route("/openapi.json", get(routes::openapi))
        .route("/issues", post(routes::create_issue))
        .route(
            "/issues/{key}",
            get(routes::get_issue)
                .put(routes::update_issue)
                .delete(routes::delete_issue),
        )
        .route(
            "/issues/{key}/transitions",
            get(routes::list_transitions).post(routes::execute_transition),
        )
        .route("/projects", post(routes::create_project))
        .route("/projects/{key}", get(routes::get_project))
        .route("/users", get(routes::list_users))
        .layer(cors)
        .with_state(Arc::new(AppState { jira }))
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let config = JiraConfig::from_env()?;
    let jira = JiraClient::new(&config)?;
    let addr = format!("{}:{}", app.host, app.port);

    if global.verbose {
        eprintln!("Forwarding to Jira at {}", jira.base_url());
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Jira gateway listening on http://{addr}");
    log::info!("OpenAPI document: http://{addr}/openapi.json");

    axum::serve(listener, router(jira))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    log::info!("Jira gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
