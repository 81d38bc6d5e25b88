//! PostgreSQL adapter for ProfileReader.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::profile::{LoanDecision, UserProfile};
use crate::ports::ProfileReader;

/// PostgreSQL implementation of ProfileReader.
pub struct PgProfileReader {
    pool: PgPool,
}

impl PgProfileReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_profile(row: &sqlx::postgres::PgRow) -> Result<UserProfile, DomainError> {
        let external_id: String = row
            .try_get("external_id")
            .map_err(|e| DomainError::database(e.to_string()))?;
        Ok(UserProfile {
            external_id: UserId::new(external_id)?,
            full_name: row
                .try_get("full_name")
                .map_err(|e| DomainError::database(e.to_string()))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::database(e.to_string()))?,
            credit_score: row
                .try_get("credit_score")
                .map_err(|e| DomainError::database(e.to_string()))?,
            net_monthly_income: row
                .try_get("net_monthly_income")
                .map_err(|e| DomainError::database(e.to_string()))?,
            segment: row
                .try_get("segment")
                .map_err(|e| DomainError::database(e.to_string()))?,
        })
    }
}

#[async_trait]
impl ProfileReader for PgProfileReader {
    async fn find_by_external_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<UserProfile>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT external_id, full_name, email, credit_score, net_monthly_income, segment
            FROM user_profiles
            WHERE external_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("profile lookup failed: {}", e)))?;

        row.as_ref().map(Self::row_to_profile).transpose()
    }

    async fn list_all(&self) -> Result<Vec<UserProfile>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT external_id, full_name, email, credit_score, net_monthly_income, segment
            FROM user_profiles
            ORDER BY full_name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("profile roster failed: {}", e)))?;

        rows.iter().map(Self::row_to_profile).collect()
    }

    async fn decision_history(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<LoanDecision>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT la.product_type, la.requested_amount, la.decision,
                   la.decision_date, la.rationale
            FROM loan_applications la
            JOIN user_profiles up ON up.id = la.user_id
            WHERE up.external_id = $1
            ORDER BY la.decision_date DESC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("decision history failed: {}", e)))?;

        rows.iter()
            .map(|row| {
                Ok(LoanDecision {
                    product_type: row
                        .try_get("product_type")
                        .map_err(|e| DomainError::database(e.to_string()))?,
                    requested_amount: row
                        .try_get("requested_amount")
                        .map_err(|e| DomainError::database(e.to_string()))?,
                    decision: row
                        .try_get("decision")
                        .map_err(|e| DomainError::database(e.to_string()))?,
                    decision_date: row
                        .try_get("decision_date")
                        .map_err(|e| DomainError::database(e.to_string()))?,
                    rationale: row
                        .try_get("rationale")
                        .map_err(|e| DomainError::database(e.to_string()))?,
                })
            })
            .collect()
    }
}
