//! Profile and loan-decision value objects.
//!
//! Both are owned by the persistence collaborator; the gateway treats them
//! as read-only snapshots for the duration of a request.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::foundation::UserId;

/// Credit profile of a banking user as stored by the persistence layer.
///
/// `credit_score`, `net_monthly_income` and `segment` are nullable: absence
/// means "unknown", and every consumer must treat unknown as neutral rather
/// than penalizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// External identifier, unique and immutable after creation.
    pub external_id: UserId,
    pub full_name: String,
    pub email: String,
    /// Bureau credit score, domain 300-850.
    pub credit_score: Option<i32>,
    /// Net monthly income in whole currency units.
    pub net_monthly_income: Option<i64>,
    /// Risk segment: "Prime", "Growth", "Watch", or another open value.
    pub segment: Option<String>,
}

/// A single loan decision recorded against a profile.
///
/// Profiles may carry many of these; the insight engine only ever reads
/// the one with the most recent decision date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanDecision {
    pub product_type: String,
    /// Requested principal, non-negative.
    pub requested_amount: Decimal,
    /// Decision outcome: "Approved", "Declined", or another value.
    pub decision: String,
    pub decision_date: NaiveDate,
    pub rationale: String,
}

impl LoanDecision {
    /// Whether the automated policy approved this application.
    pub fn is_approved(&self) -> bool {
        self.decision.eq_ignore_ascii_case("approved")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decision(outcome: &str) -> LoanDecision {
        LoanDecision {
            product_type: "Personal Loan".to_string(),
            requested_amount: Decimal::from(15_000),
            decision: outcome.to_string(),
            decision_date: NaiveDate::from_ymd_opt(2025, 11, 3).unwrap(),
            rationale: "Automated policy".to_string(),
        }
    }

    #[test]
    fn approval_check_is_case_insensitive() {
        assert!(decision("Approved").is_approved());
        assert!(decision("APPROVED").is_approved());
        assert!(decision("approved").is_approved());
        assert!(!decision("Declined").is_approved());
        assert!(!decision("Referred").is_approved());
    }
}
