//! Mock token verifier for tests.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::{AuthenticatedUser, TokenVerifier};

/// Accepts any token equal to its configured value.
pub struct MockTokenVerifier {
    accepted_token: String,
    user_id: UserId,
}

impl MockTokenVerifier {
    pub fn new(accepted_token: impl Into<String>, user_id: UserId) -> Self {
        Self {
            accepted_token: accepted_token.into(),
            user_id,
        }
    }
}

#[async_trait]
impl TokenVerifier for MockTokenVerifier {
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, DomainError> {
        if token == self.accepted_token {
            Ok(AuthenticatedUser {
                user_id: self.user_id.clone(),
                full_name: None,
            })
        } else {
            Err(DomainError::new(ErrorCode::InvalidToken, "Invalid token"))
        }
    }
}
