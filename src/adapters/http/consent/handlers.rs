//! HTTP handlers for consent endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::ConsentRequest;
use crate::adapters::http::error::domain_error_response;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::consent::{RecordConsentCommand, RecordConsentHandler};
use crate::domain::foundation::UserId;

#[derive(Clone)]
pub struct ConsentHandlers {
    record_handler: Arc<RecordConsentHandler>,
}

impl ConsentHandlers {
    pub fn new(record_handler: Arc<RecordConsentHandler>) -> Self {
        Self { record_handler }
    }
}

/// POST /api/users/:user_id/trust-vault - Record a consent payload.
pub async fn record_consent(
    State(handlers): State<ConsentHandlers>,
    RequireAuth(caller): RequireAuth,
    Path(user_id): Path<String>,
    Json(req): Json<ConsentRequest>,
) -> Response {
    let user_id = match UserId::new(user_id) {
        Ok(id) => id,
        Err(err) => return domain_error_response(err.into()),
    };

    tracing::info!(user_id = %user_id, caller = %caller.user_id, "recording trust-vault consent");
    match handlers
        .record_handler
        .handle(RecordConsentCommand {
            user_id,
            payload: req.consent_payload,
        })
        .await
    {
        Ok(()) => StatusCode::ACCEPTED.into_response(),
        Err(err) => domain_error_response(err),
    }
}
