//! JWT implementation of TokenVerifier.
//!
//! Validates HS256 bearer tokens issued by the external identity
//! provider. The gateway shares a secret with the issuer; it never mints
//! tokens itself.

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::{AuthenticatedUser, TokenVerifier};

/// Claims the gateway cares about.
#[derive(Debug, Deserialize)]
struct Claims {
    /// External user id.
    sub: String,
    /// Display name, when the issuer includes one.
    name: Option<String>,
    #[allow(dead_code)]
    exp: usize,
}

/// HS256 token verifier sharing a secret with the identity provider.
pub struct JwtTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenVerifier {
    pub fn new(secret: &Secret<String>, issuer: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer]);
        Self {
            decoding_key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl TokenVerifier for JwtTokenVerifier {
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, DomainError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            tracing::debug!(error = %e, "token validation failed");
            DomainError::new(ErrorCode::InvalidToken, "Invalid or expired token")
        })?;

        Ok(AuthenticatedUser {
            user_id: UserId::new(data.claims.sub)
                .map_err(|_| DomainError::new(ErrorCode::InvalidToken, "Token missing subject"))?,
            full_name: data.claims.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestClaims {
        sub: String,
        name: Option<String>,
        iss: String,
        exp: usize,
    }

    fn secret() -> Secret<String> {
        Secret::new("test-secret-at-least-32-bytes-long".to_string())
    }

    fn token(sub: &str, iss: &str, exp_offset: i64) -> String {
        let exp = (chrono::Utc::now().timestamp() + exp_offset) as usize;
        encode(
            &Header::default(),
            &TestClaims {
                sub: sub.to_string(),
                name: Some("Imani Okafor".to_string()),
                iss: iss.to_string(),
                exp,
            },
            &EncodingKey::from_secret(secret().expose_secret().as_bytes()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn valid_token_yields_the_authenticated_user() {
        let verifier = JwtTokenVerifier::new(&secret(), "fairlend-idp");
        let user = verifier
            .verify(&token("u-1001", "fairlend-idp", 3600))
            .await
            .unwrap();
        assert_eq!(user.user_id.as_str(), "u-1001");
        assert_eq!(user.full_name.as_deref(), Some("Imani Okafor"));
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let verifier = JwtTokenVerifier::new(&secret(), "fairlend-idp");
        let err = verifier
            .verify(&token("u-1001", "fairlend-idp", -3600))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidToken);
    }

    #[tokio::test]
    async fn wrong_issuer_is_rejected() {
        let verifier = JwtTokenVerifier::new(&secret(), "fairlend-idp");
        let err = verifier
            .verify(&token("u-1001", "someone-else", 3600))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidToken);
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() {
        let verifier = JwtTokenVerifier::new(&secret(), "fairlend-idp");
        assert!(verifier.verify("not-a-jwt").await.is_err());
    }
}
