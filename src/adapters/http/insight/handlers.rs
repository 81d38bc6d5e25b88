//! HTTP handlers for decision insight endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::DecisionInsightResponse;
use crate::adapters::http::error::{domain_error_response, ErrorResponse};
use crate::application::handlers::insight::{BuildInsightHandler, BuildInsightQuery};
use crate::domain::foundation::{ErrorCode, UserId};

#[derive(Clone)]
pub struct InsightHandlers {
    build_handler: Arc<BuildInsightHandler>,
}

impl InsightHandlers {
    pub fn new(build_handler: Arc<BuildInsightHandler>) -> Self {
        Self { build_handler }
    }
}

/// GET /api/decisions/:user_id/insight - The user's decision insight.
pub async fn get_insight(
    State(handlers): State<InsightHandlers>,
    Path(user_id): Path<String>,
) -> Response {
    let user_id = match UserId::new(user_id) {
        Ok(id) => id,
        Err(err) => return domain_error_response(err.into()),
    };

    tracing::info!(user_id = %user_id, "fetching decision insight");
    match handlers
        .build_handler
        .handle(BuildInsightQuery { user_id })
        .await
    {
        Ok(Some(insight)) => Json(DecisionInsightResponse::from(insight)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(
                ErrorCode::ProfileNotFound.to_string(),
                "No insight available for this user",
            )),
        )
            .into_response(),
        Err(err) => domain_error_response(err),
    }
}
