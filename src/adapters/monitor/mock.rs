//! Mock AI backend for tests and local development.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};

use crate::domain::foundation::DomainError;
use crate::domain::governance::{
    CircuitBreakerSnapshot, DimensionSnapshot, DriftSnapshot, FairGuardSummary, GroupSnapshot,
    ShapWatch,
};
use crate::ports::{DecisionExplainer, Explanation, FairnessMonitor};

/// In-memory stand-in for the AI backend.
///
/// Counts calls and can be toggled into a failing state, which is enough
/// to exercise the cache and consent gating without a network.
#[derive(Default)]
pub struct MockAiBackend {
    pub fetch_calls: AtomicUsize,
    pub simulate_calls: AtomicUsize,
    pub explain_calls: AtomicUsize,
    pub failing: AtomicBool,
}

impl MockAiBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the backend into (or out of) a failing state.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn summary() -> FairGuardSummary {
        FairGuardSummary {
            generated_at: Utc::now(),
            window_size: 200,
            drift: DriftSnapshot {
                score: 0.31,
                threshold: 0.2,
                status: "BREACHED".to_string(),
            },
            circuit_breaker: CircuitBreakerSnapshot {
                active: true,
                reason: Some("probability drift above threshold".to_string()),
            },
            alerts: vec!["Probability drift above threshold".to_string()],
            dimensions: vec![DimensionSnapshot {
                attribute: "GENDER".to_string(),
                parity_gap: 0.22,
                threshold: 0.15,
                status: "ALERT".to_string(),
                sample_size: 200,
                groups: vec![
                    GroupSnapshot {
                        value: "M".to_string(),
                        count: 104,
                        approval_rate: 0.68,
                    },
                    GroupSnapshot {
                        value: "F".to_string(),
                        count: 96,
                        approval_rate: 0.12,
                    },
                ],
            }],
            shap_watchlist: vec![ShapWatch {
                feature: "EDUCATION".to_string(),
                weight: -0.41,
            }],
        }
    }

    fn fail_if_toggled(&self, service: &'static str) -> Result<(), DomainError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::downstream(service, "mock backend failing"));
        }
        Ok(())
    }
}

#[async_trait]
impl FairnessMonitor for MockAiBackend {
    async fn fetch_summary(&self) -> Result<FairGuardSummary, DomainError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.fail_if_toggled("AI FairGuard")?;
        Ok(Self::summary())
    }

    async fn trigger_simulation(&self) -> Result<FairGuardSummary, DomainError> {
        self.simulate_calls.fetch_add(1, Ordering::SeqCst);
        self.fail_if_toggled("AI FairGuard")?;
        Ok(Self::summary())
    }
}

#[async_trait]
impl DecisionExplainer for MockAiBackend {
    async fn explain(&self, features: Map<String, Value>) -> Result<Explanation, DomainError> {
        self.explain_calls.fetch_add(1, Ordering::SeqCst);
        self.fail_if_toggled("AI Insights")?;
        Ok(Explanation {
            shap_values: features,
            decision: "Approved".to_string(),
            explanation: "Income comfortably covers the repayment schedule.".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_counts_calls_and_fails_on_demand() {
        let backend = MockAiBackend::new();
        backend.fetch_summary().await.unwrap();
        assert_eq!(backend.fetch_calls.load(Ordering::SeqCst), 1);

        backend.set_failing(true);
        let err = backend.fetch_summary().await.unwrap_err();
        assert_eq!(err.service(), Some("AI FairGuard"));
    }
}
