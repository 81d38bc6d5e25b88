//! Composed insight response types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::driver::Driver;
use crate::domain::foundation::UserId;
use crate::domain::profile::LoanDecision;

/// Summary of the latest loan decision, lifted verbatim from the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionSummary {
    pub product_type: String,
    pub requested_amount: Decimal,
    pub decision: String,
    pub decision_date: NaiveDate,
    pub rationale: String,
}

impl DecisionSummary {
    /// Whether the summarized decision was an approval.
    pub fn is_approved(&self) -> bool {
        self.decision.eq_ignore_ascii_case("approved")
    }
}

impl From<&LoanDecision> for DecisionSummary {
    fn from(record: &LoanDecision) -> Self {
        Self {
            product_type: record.product_type.clone(),
            requested_amount: record.requested_amount,
            decision: record.decision.clone(),
            decision_date: record.decision_date,
            rationale: record.rationale.clone(),
        }
    }
}

/// The composed decision insight returned to callers.
///
/// Only ever produced when both a profile and at least one decision record
/// exist for the user; there is no partially-filled variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionInsight {
    pub user_id: UserId,
    pub full_name: String,
    pub segment: Option<String>,
    pub summary: DecisionSummary,
    /// Drivers in construction order: credit score, income, loan burden,
    /// segment.
    pub drivers: Vec<Driver>,
    pub counterfactual: String,
}
