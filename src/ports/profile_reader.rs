//! ProfileReader port for profile and decision-history queries.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::profile::{LoanDecision, UserProfile};

/// Query operations over user profiles and their loan decisions.
///
/// All operations are read-only; the gateway never mutates profiles.
#[async_trait]
pub trait ProfileReader: Send + Sync {
    /// Find a profile by its external identifier.
    async fn find_by_external_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<UserProfile>, DomainError>;

    /// All profiles ordered by full name, for the roster view.
    async fn list_all(&self) -> Result<Vec<UserProfile>, DomainError>;

    /// Loan decisions for a user, most recent decision date first.
    async fn decision_history(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<LoanDecision>, DomainError>;
}
