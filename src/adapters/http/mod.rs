//! HTTP surface (axum).
//!
//! Each feature ships a dto / handlers / routes triple; `api_router`
//! assembles them under `/api` behind the bearer-auth middleware. Status
//! mapping is boundary plumbing only; all decisions live below this
//! layer.

pub mod ask;
pub mod consent;
pub mod error;
pub mod governance;
pub mod insight;
pub mod middleware;
pub mod users;

use std::sync::Arc;

use axum::{middleware::from_fn_with_state, routing::get, Router};

use crate::ports::TokenVerifier;

/// Assembles the full API router.
pub fn api_router(
    user_handlers: users::UserHandlers,
    insight_handlers: insight::InsightHandlers,
    consent_handlers: consent::ConsentHandlers,
    ask_handlers: ask::AskHandlers,
    governance_handlers: governance::GovernanceHandlers,
    verifier: Arc<dyn TokenVerifier>,
) -> Router {
    let api = Router::new()
        .nest(
            "/users",
            users::user_routes(user_handlers).merge(consent::consent_routes(consent_handlers)),
        )
        .nest("/decisions", insight::insight_routes(insight_handlers))
        .nest("/ask", ask::ask_routes(ask_handlers))
        .nest("/fairguard", governance::governance_routes(governance_handlers))
        .layer(from_fn_with_state(verifier, middleware::auth_middleware));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest("/api", api)
}
