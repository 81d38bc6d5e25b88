//! Consent record value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ConsentId, Timestamp, UserId};

/// A recorded consent: the digest of what the user agreed to, and when.
///
/// Consent history is append-only; records are never overwritten or
/// deleted, and verification only ever reads the most recent one per user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsentRecord {
    pub id: ConsentId,
    pub user_external_id: UserId,
    /// Lowercase hex SHA-256 of the consent payload.
    pub consent_digest: String,
    pub recorded_at: Timestamp,
}

impl ConsentRecord {
    /// Creates a record for a freshly computed digest, stamped now.
    pub fn new(user_external_id: UserId, consent_digest: String) -> Self {
        Self {
            id: ConsentId::new(),
            user_external_id,
            consent_digest,
            recorded_at: Timestamp::now(),
        }
    }
}
