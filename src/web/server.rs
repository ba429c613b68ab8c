//! HTTP server for the profile card page.
//!
//! One GET route for the initial page, one POST route for submissions, plus a
//! liveness endpoint. Handlers are pure over their inputs; there is no shared
//! application state.

use std::net::SocketAddr;

use axum::response::Html;
use axum::routing::get;
use axum::{Form, Router};
use tower_http::trace::TraceLayer;

use crate::core::processor::process;
use crate::core::{FormInput, PageState};
use crate::utils::error::{AppError, Result};
use crate::web::render;

/// Builds the application router. Public so tests can drive it directly.
pub fn router() -> Router {
    Router::new()
        .route("/", get(index).post(submit))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
}

/// Binds the listener and serves until Ctrl-C (or SIGTERM on Unix).
pub async fn run(addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Starting profile-card server");

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::ServerError {
            message: e.to_string(),
        })?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}

async fn health() -> &'static str {
    "OK"
}

async fn index() -> Html<String> {
    Html(render::page(&PageState::Initial))
}

/// Validation failures are a page state, not an HTTP error: both outcomes
/// return 200 with the appropriate markup.
async fn submit(Form(input): Form<FormInput>) -> Html<String> {
    let state = process(&input);
    match &state {
        PageState::Result { card, .. } => {
            tracing::info!(label = card.bracket.label(), "Profile card generated");
        }
        PageState::ResultWithErrors { .. } => {
            tracing::info!("Submission re-rendered with validation errors");
        }
        PageState::Initial => {}
    }
    Html(render::page(&state))
}
