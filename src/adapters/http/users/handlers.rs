//! HTTP handlers for user endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::ProfileResponse;
use crate::adapters::http::error::{domain_error_response, ErrorResponse};
use crate::application::handlers::user::{FindUserHandler, FindUserQuery, ListUsersHandler};
use crate::domain::foundation::{ErrorCode, UserId};

#[derive(Clone)]
pub struct UserHandlers {
    find_handler: Arc<FindUserHandler>,
    list_handler: Arc<ListUsersHandler>,
}

impl UserHandlers {
    pub fn new(find_handler: Arc<FindUserHandler>, list_handler: Arc<ListUsersHandler>) -> Self {
        Self {
            find_handler,
            list_handler,
        }
    }
}

/// GET /api/users/:user_id - Fetch one profile.
pub async fn find_user(
    State(handlers): State<UserHandlers>,
    Path(user_id): Path<String>,
) -> Response {
    let user_id = match UserId::new(user_id) {
        Ok(id) => id,
        Err(err) => return domain_error_response(err.into()),
    };

    match handlers.find_handler.handle(FindUserQuery { user_id }).await {
        Ok(Some(profile)) => Json(ProfileResponse::from(profile)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(
                ErrorCode::ProfileNotFound.to_string(),
                "No such user",
            )),
        )
            .into_response(),
        Err(err) => domain_error_response(err),
    }
}

/// GET /api/users - The profile roster.
pub async fn list_users(State(handlers): State<UserHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(profiles) => {
            let body: Vec<ProfileResponse> =
                profiles.into_iter().map(ProfileResponse::from).collect();
            Json(body).into_response()
        }
        Err(err) => domain_error_response(err),
    }
}
