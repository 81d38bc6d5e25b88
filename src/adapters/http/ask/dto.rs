//! HTTP DTOs for ask-AI endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ports::Explanation;

/// A consent-gated question plus the feature snapshot to explain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskAiRequest {
    pub user_id: String,
    pub question: String,
    #[serde(default)]
    pub feature_snapshot: Map<String, Value>,
}

/// Explanation returned by the AI backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskAiResponse {
    pub shap_values: Map<String, Value>,
    pub decision_summary: String,
    pub explanation: String,
}

impl From<Explanation> for AskAiResponse {
    fn from(explanation: Explanation) -> Self {
        Self {
            shap_values: explanation.shap_values,
            decision_summary: explanation.decision,
            explanation: explanation.explanation,
        }
    }
}
