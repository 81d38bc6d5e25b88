//! HTTP routes for consent endpoints.

use axum::{routing::post, Router};

use super::handlers::{record_consent, ConsentHandlers};

/// Creates the consent router, mounted under `/users`.
pub fn consent_routes(handlers: ConsentHandlers) -> Router {
    Router::new()
        .route("/:user_id/trust-vault", post(record_consent))
        .with_state(handlers)
}
