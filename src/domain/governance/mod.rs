//! FairGuard governance summary snapshot.
//!
//! The summary is computed entirely by the external fairness monitor; the
//! gateway treats it as an opaque value. Snapshots are replaced wholesale
//! on refresh, never mutated in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Externally computed fairness and drift snapshot for the decision model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FairGuardSummary {
    pub generated_at: DateTime<Utc>,
    /// Rolling decision window the monitor aggregated over.
    pub window_size: u32,
    pub drift: DriftSnapshot,
    pub circuit_breaker: CircuitBreakerSnapshot,
    pub alerts: Vec<String>,
    pub dimensions: Vec<DimensionSnapshot>,
    pub shap_watchlist: Vec<ShapWatch>,
}

/// Probability drift relative to the monitor's baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriftSnapshot {
    pub score: f64,
    pub threshold: f64,
    pub status: String,
}

/// Whether the monitor has tripped decisions over to human review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircuitBreakerSnapshot {
    pub active: bool,
    pub reason: Option<String>,
}

/// Fairness breakdown along one protected attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionSnapshot {
    pub attribute: String,
    pub parity_gap: f64,
    pub threshold: f64,
    pub status: String,
    pub sample_size: u64,
    pub groups: Vec<GroupSnapshot>,
}

/// Per-group counts within a dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSnapshot {
    pub value: String,
    pub count: u64,
    pub approval_rate: f64,
}

/// A SHAP feature the monitor flags as consistently depressing approvals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapWatch {
    pub feature: String,
    pub weight: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_round_trips_through_json_with_camel_case_keys() {
        let summary = FairGuardSummary {
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
            alerts: vec!["drift".to_string()],
            dimensions: vec![DimensionSnapshot {
                attribute: "GENDER".to_string(),
                parity_gap: 0.22,
                threshold: 0.15,
                status: "ALERT".to_string(),
                sample_size: 200,
                groups: vec![GroupSnapshot {
                    value: "F".to_string(),
                    count: 96,
                    approval_rate: 0.12,
                }],
            }],
            shap_watchlist: vec![ShapWatch {
                feature: "EDUCATION".to_string(),
                weight: -0.41,
            }],
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("generatedAt").is_some());
        assert!(json.get("circuitBreaker").is_some());
        assert!(json["dimensions"][0].get("parityGap").is_some());

        let back: FairGuardSummary = serde_json::from_value(json).unwrap();
        assert_eq!(back, summary);
    }
}
