//! PostgreSQL adapter for ConsentStore.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::consent::ConsentRecord;
use crate::domain::foundation::{ConsentId, DomainError, Timestamp, UserId};
use crate::ports::ConsentStore;

/// PostgreSQL implementation of ConsentStore.
///
/// `user_consents` is insert-only; nothing here updates or deletes.
pub struct PgConsentStore {
    pool: PgPool,
}

impl PgConsentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConsentStore for PgConsentStore {
    async fn latest_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<ConsentRecord>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_external_id, consent_digest, recorded_at
            FROM user_consents
            WHERE user_external_id = $1
            ORDER BY recorded_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("consent lookup failed: {}", e)))?;

        row.map(|row| {
            let id: uuid::Uuid = row
                .try_get("id")
                .map_err(|e| DomainError::database(e.to_string()))?;
            let user_external_id: String = row
                .try_get("user_external_id")
                .map_err(|e| DomainError::database(e.to_string()))?;
            let recorded_at: chrono::DateTime<chrono::Utc> = row
                .try_get("recorded_at")
                .map_err(|e| DomainError::database(e.to_string()))?;
            Ok(ConsentRecord {
                id: ConsentId::from_uuid(id),
                user_external_id: UserId::new(user_external_id)?,
                consent_digest: row
                    .try_get("consent_digest")
                    .map_err(|e| DomainError::database(e.to_string()))?,
                recorded_at: Timestamp::from_datetime(recorded_at),
            })
        })
        .transpose()
    }

    async fn append(&self, record: &ConsentRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO user_consents (id, user_external_id, consent_digest, recorded_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(record.user_external_id.as_str())
        .bind(&record.consent_digest)
        .bind(record.recorded_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("consent insert failed: {}", e)))?;

        Ok(())
    }
}
