//! HTTP routes for user endpoints.

use axum::{routing::get, Router};

use super::handlers::{find_user, list_users, UserHandlers};

/// Creates the user router.
pub fn user_routes(handlers: UserHandlers) -> Router {
    Router::new()
        .route("/", get(list_users))
        .route("/:user_id", get(find_user))
        .with_state(handlers)
}
