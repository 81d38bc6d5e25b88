//! Authentication middleware and extractors for axum.
//!
//! The middleware validates Bearer tokens through the `TokenVerifier`
//! port and injects the authenticated identity into request extensions;
//! the `RequireAuth` extractor reads it back out. Swapping the identity
//! provider never touches this file.

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use super::super::error::ErrorResponse;
use crate::domain::foundation::ErrorCode;
use crate::ports::{AuthenticatedUser, TokenVerifier};

/// Auth middleware state - the token verifier port.
pub type AuthState = Arc<dyn TokenVerifier>;

/// Validates the Bearer token, if present, and injects the identity.
///
/// A missing token passes through without an identity so that optional
/// routes keep working; an invalid token is rejected outright.
pub async fn auth_middleware(
    State(verifier): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_owned);

    match token {
        Some(token) => match verifier.verify(&token).await {
            Ok(user) => {
                request.extensions_mut().insert(user);
                next.run(request).await
            }
            Err(err) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new(err.code.to_string(), err.message)),
            )
                .into_response(),
        },
        None => next.run(request).await,
    }
}

/// Extractor that rejects requests without an authenticated identity.
pub struct RequireAuth(pub AuthenticatedUser);

#[axum::async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(RequireAuth)
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorResponse::new(
                        ErrorCode::Unauthorized.to_string(),
                        "Authentication required",
                    )),
                )
                    .into_response()
            })
    }
}
