//! TokenVerifier port for bearer-token validation.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};

/// Identity attached to a request after successful token validation.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub full_name: Option<String>,
}

/// Validates bearer tokens issued by the external identity provider.
///
/// The gateway never issues tokens; it only verifies them.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Validate a bearer token and return the authenticated identity.
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, DomainError>;
}
