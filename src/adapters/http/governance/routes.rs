//! HTTP routes for FairGuard governance endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{evict_cache, get_summary, trigger_simulation, GovernanceHandlers};

/// Creates the governance router.
pub fn governance_routes(handlers: GovernanceHandlers) -> Router {
    Router::new()
        .route("/summary", get(get_summary))
        .route("/simulate", post(trigger_simulation))
        .route("/cache", delete(evict_cache))
        .with_state(handlers)
}
