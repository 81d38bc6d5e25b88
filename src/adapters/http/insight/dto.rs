//! HTTP DTOs for decision insight endpoints.
//!
//! These decouple the HTTP API from the domain types so the frontend
//! contract can evolve independently.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::insight::{DecisionInsight, DecisionSummary, Driver};

/// One quantified driver, as rendered in the frontend waterfall.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverDto {
    pub key: String,
    pub label: String,
    pub value: String,
    pub impact: f64,
}

impl From<Driver> for DriverDto {
    fn from(driver: Driver) -> Self {
        Self {
            key: driver.key.as_str().to_string(),
            label: driver.label,
            value: driver.value,
            impact: driver.impact,
        }
    }
}

/// Summary of the latest loan decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionSummaryDto {
    pub product_type: String,
    pub requested_amount: Decimal,
    pub decision: String,
    pub decision_date: NaiveDate,
    pub rationale: String,
}

impl From<DecisionSummary> for DecisionSummaryDto {
    fn from(summary: DecisionSummary) -> Self {
        Self {
            product_type: summary.product_type,
            requested_amount: summary.requested_amount,
            decision: summary.decision,
            decision_date: summary.decision_date,
            rationale: summary.rationale,
        }
    }
}

/// The composed decision insight response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionInsightResponse {
    pub user_id: String,
    pub full_name: String,
    pub segment: Option<String>,
    pub summary: DecisionSummaryDto,
    pub drivers: Vec<DriverDto>,
    pub counterfactual: String,
}

impl From<DecisionInsight> for DecisionInsightResponse {
    fn from(insight: DecisionInsight) -> Self {
        Self {
            user_id: insight.user_id.to_string(),
            full_name: insight.full_name,
            segment: insight.segment,
            summary: insight.summary.into(),
            drivers: insight.drivers.into_iter().map(DriverDto::from).collect(),
            counterfactual: insight.counterfactual,
        }
    }
}
