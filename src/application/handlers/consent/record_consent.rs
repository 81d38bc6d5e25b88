//! RecordConsent - Command handler appending a consent record.

use std::sync::Arc;

use crate::domain::consent::{sha256_hex, ConsentRecord};
use crate::domain::foundation::{DomainError, UserId, ValidationError};
use crate::ports::ConsentStore;

/// Command to record a consent payload for a user.
#[derive(Debug, Clone)]
pub struct RecordConsentCommand {
    pub user_id: UserId,
    pub payload: String,
}

/// Handler that digests and appends consent records.
///
/// Consent history is append-only; this never overwrites prior records.
pub struct RecordConsentHandler {
    store: Arc<dyn ConsentStore>,
}

impl RecordConsentHandler {
    pub fn new(store: Arc<dyn ConsentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: RecordConsentCommand) -> Result<(), DomainError> {
        if cmd.payload.is_empty() {
            return Err(ValidationError::empty_field("consent_payload").into());
        }

        tracing::info!(user_id = %cmd.user_id, "recording consent");
        let record = ConsentRecord::new(cmd.user_id, sha256_hex(&cmd.payload));
        self.store.append(&record).await?;
        tracing::debug!(consent_id = %record.id, "consent persisted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockConsentStore {
        appended: Mutex<Vec<ConsentRecord>>,
    }

    impl MockConsentStore {
        fn new() -> Self {
            Self {
                appended: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ConsentStore for MockConsentStore {
        async fn latest_for_user(
            &self,
            _user_id: &UserId,
        ) -> Result<Option<ConsentRecord>, DomainError> {
            Ok(self.appended.lock().unwrap().last().cloned())
        }

        async fn append(&self, record: &ConsentRecord) -> Result<(), DomainError> {
            self.appended.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn empty_payload_is_rejected_before_any_store_call() {
        let store = Arc::new(MockConsentStore::new());
        let handler = RecordConsentHandler::new(store.clone());

        let err = handler
            .handle(RecordConsentCommand {
                user_id: UserId::new("u-1001").unwrap(),
                payload: String::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::EmptyField);
        assert!(store.appended.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn records_are_appended_not_replaced() {
        let store = Arc::new(MockConsentStore::new());
        let handler = RecordConsentHandler::new(store.clone());
        let user_id = UserId::new("u-1001").unwrap();

        for payload in ["consent-v1", "consent-v2"] {
            handler
                .handle(RecordConsentCommand {
                    user_id: user_id.clone(),
                    payload: payload.to_string(),
                })
                .await
                .unwrap();
        }

        let appended = store.appended.lock().unwrap();
        assert_eq!(appended.len(), 2);
        assert_eq!(appended[0].consent_digest, sha256_hex("consent-v1"));
        assert_eq!(appended[1].consent_digest, sha256_hex("consent-v2"));
    }
}
