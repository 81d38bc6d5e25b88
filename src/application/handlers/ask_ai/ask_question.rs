//! AskAi - consent-gated explanation requests.
//!
//! The question payload itself is what the user consented to; the gate
//! runs before any model call is made.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::application::handlers::consent::{VerifyConsentHandler, VerifyConsentQuery};
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::{DecisionExplainer, Explanation};

/// Command carrying a user question and its feature snapshot.
#[derive(Debug, Clone)]
pub struct AskAiCommand {
    pub user_id: UserId,
    pub question: String,
    pub feature_snapshot: Map<String, Value>,
}

/// Handler forwarding consented questions to the AI backend.
pub struct AskAiHandler {
    consent: Arc<VerifyConsentHandler>,
    explainer: Arc<dyn DecisionExplainer>,
}

impl AskAiHandler {
    pub fn new(consent: Arc<VerifyConsentHandler>, explainer: Arc<dyn DecisionExplainer>) -> Self {
        Self { consent, explainer }
    }

    /// Verifies consent for the question payload, then requests an
    /// explanation. A failed consent check is a `ConsentRejected` error,
    /// distinct from a store failure (which propagates as-is).
    pub async fn handle(&self, cmd: AskAiCommand) -> Result<Explanation, DomainError> {
        let consented = self
            .consent
            .handle(VerifyConsentQuery {
                user_id: cmd.user_id.clone(),
                payload: cmd.question.clone(),
            })
            .await?;

        if !consented {
            tracing::warn!(user_id = %cmd.user_id, "consent check failed");
            return Err(DomainError::new(
                ErrorCode::ConsentRejected,
                format!("Consent verification failed for user {}", cmd.user_id),
            ));
        }

        tracing::debug!(
            user_id = %cmd.user_id,
            features = cmd.feature_snapshot.len(),
            "forwarding ask-ai request"
        );
        let explanation = self.explainer.explain(cmd.feature_snapshot).await?;
        tracing::info!(
            user_id = %cmd.user_id,
            decision = %explanation.decision,
            "completed ask-ai request"
        );
        Ok(explanation)
    }
}
