//! DecisionExplainer port for the AI insights collaborator.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::DomainError;

/// Explanation produced by the external AI backend for a feature snapshot.
///
/// The narrative text is generated by the collaborator; the gateway
/// composes nothing itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    /// Per-feature SHAP attributions, opaque to the gateway.
    pub shap_values: Map<String, Value>,
    /// The model's decision for the snapshot, e.g. "Approved".
    pub decision: String,
    /// Natural-language explanation of the decision.
    pub explanation: String,
}

/// Contract with the AI explanation backend.
#[async_trait]
pub trait DecisionExplainer: Send + Sync {
    /// Request an explanation for a feature snapshot.
    async fn explain(&self, features: Map<String, Value>) -> Result<Explanation, DomainError>;
}
