//! VerifyConsent - Query handler checking a payload against stored consent.

use std::sync::Arc;

use crate::domain::consent::{digests_match, sha256_hex};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::ConsentStore;

/// Query asking whether a payload matches the user's recorded consent.
#[derive(Debug, Clone)]
pub struct VerifyConsentQuery {
    pub user_id: UserId,
    pub payload: String,
}

/// Handler comparing the digest of a proposed payload against the most
/// recently recorded digest for the user.
///
/// "No consent on file" is an `Ok(false)`; a store failure is an `Err`.
/// The two must never collapse into one another.
pub struct VerifyConsentHandler {
    store: Arc<dyn ConsentStore>,
}

impl VerifyConsentHandler {
    pub fn new(store: Arc<dyn ConsentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: VerifyConsentQuery) -> Result<bool, DomainError> {
        let Some(record) = self.store.latest_for_user(&query.user_id).await? else {
            tracing::debug!(user_id = %query.user_id, "no consent on file");
            return Ok(false);
        };

        let valid = digests_match(&record.consent_digest, &sha256_hex(&query.payload));
        tracing::debug!(user_id = %query.user_id, valid, "consent validation");
        Ok(valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::consent::ConsentRecord;
    use crate::domain::foundation::ErrorCode;
    use async_trait::async_trait;

    struct MockConsentStore {
        latest: Option<ConsentRecord>,
        fail: bool,
    }

    #[async_trait]
    impl ConsentStore for MockConsentStore {
        async fn latest_for_user(
            &self,
            _user_id: &UserId,
        ) -> Result<Option<ConsentRecord>, DomainError> {
            if self.fail {
                return Err(DomainError::database("connection reset"));
            }
            Ok(self.latest.clone())
        }

        async fn append(&self, _record: &ConsentRecord) -> Result<(), DomainError> {
            unimplemented!()
        }
    }

    fn user() -> UserId {
        UserId::new("u-1001").unwrap()
    }

    fn handler_with(latest: Option<ConsentRecord>, fail: bool) -> VerifyConsentHandler {
        VerifyConsentHandler::new(Arc::new(MockConsentStore { latest, fail }))
    }

    fn stored(payload: &str) -> ConsentRecord {
        ConsentRecord::new(user(), sha256_hex(payload))
    }

    #[tokio::test]
    async fn no_record_on_file_is_false() {
        let h = handler_with(None, false);
        let valid = h
            .handle(VerifyConsentQuery {
                user_id: user(),
                payload: "consent-v1".to_string(),
            })
            .await
            .unwrap();
        assert!(!valid);
    }

    #[tokio::test]
    async fn matching_payload_is_valid_and_deterministic() {
        let h = handler_with(Some(stored("consent-v1")), false);
        for _ in 0..2 {
            let valid = h
                .handle(VerifyConsentQuery {
                    user_id: user(),
                    payload: "consent-v1".to_string(),
                })
                .await
                .unwrap();
            assert!(valid);
        }
    }

    #[tokio::test]
    async fn single_character_change_invalidates() {
        let h = handler_with(Some(stored("consent-v1")), false);
        let valid = h
            .handle(VerifyConsentQuery {
                user_id: user(),
                payload: "consent-v2".to_string(),
            })
            .await
            .unwrap();
        assert!(!valid);
    }

    #[tokio::test]
    async fn store_failure_is_an_error_not_a_denial() {
        let h = handler_with(None, true);
        let err = h
            .handle(VerifyConsentQuery {
                user_id: user(),
                payload: "consent-v1".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
