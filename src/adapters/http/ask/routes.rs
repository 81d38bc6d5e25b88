//! HTTP routes for ask-AI endpoints.

use axum::{routing::post, Router};

use super::handlers::{ask, AskHandlers};

/// Creates the ask-AI router.
pub fn ask_routes(handlers: AskHandlers) -> Router {
    Router::new().route("/", post(ask)).with_state(handlers)
}
