//! HTTP routes for decision insight endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_insight, InsightHandlers};

/// Creates the insight router.
pub fn insight_routes(handlers: InsightHandlers) -> Router {
    Router::new()
        .route("/:user_id/insight", get(get_insight))
        .with_state(handlers)
}
