//! ConsentStore port for append-only consent persistence.

use async_trait::async_trait;

use crate::domain::consent::ConsentRecord;
use crate::domain::foundation::{DomainError, UserId};

/// Persistence contract for consent records.
///
/// The lookup deliberately has three outcomes - found, not found, failed -
/// so that "no consent on file" can never be conflated with an
/// infrastructure failure.
#[async_trait]
pub trait ConsentStore: Send + Sync {
    /// The most recently recorded consent for a user, if any.
    async fn latest_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<ConsentRecord>, DomainError>;

    /// Appends a new consent record. Prior records are never touched.
    async fn append(&self, record: &ConsentRecord) -> Result<(), DomainError>;
}
