//! HTTP handlers for ask-AI endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::{AskAiRequest, AskAiResponse};
use crate::adapters::http::error::domain_error_response;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::ask_ai::{AskAiCommand, AskAiHandler};
use crate::domain::foundation::UserId;

#[derive(Clone)]
pub struct AskHandlers {
    ask_handler: Arc<AskAiHandler>,
}

impl AskHandlers {
    pub fn new(ask_handler: Arc<AskAiHandler>) -> Self {
        Self { ask_handler }
    }
}

/// POST /api/ask - Consent-gated explanation request.
pub async fn ask(
    State(handlers): State<AskHandlers>,
    RequireAuth(caller): RequireAuth,
    Json(req): Json<AskAiRequest>,
) -> Response {
    let user_id = match UserId::new(req.user_id) {
        Ok(id) => id,
        Err(err) => return domain_error_response(err.into()),
    };

    tracing::info!(user_id = %user_id, caller = %caller.user_id, "received ask-ai request");
    match handlers
        .ask_handler
        .handle(AskAiCommand {
            user_id,
            question: req.question,
            feature_snapshot: req.feature_snapshot,
        })
        .await
    {
        Ok(explanation) => Json(AskAiResponse::from(explanation)).into_response(),
        Err(err) => domain_error_response(err),
    }
}
