//! HTTP DTOs for consent endpoints.

use serde::{Deserialize, Serialize};

/// Request to record a trust-vault consent payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentRequest {
    pub consent_payload: String,
}
