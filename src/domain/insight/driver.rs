//! Driver normalization.
//!
//! Maps raw profile and loan fields onto bounded impact scores in
//! `[-1.0, +1.0]`. The output order is a presentation contract consumed by
//! the frontend waterfall chart: credit score, income, loan burden,
//! segment. It is not a ranking.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::format::usd;
use crate::domain::profile::{LoanDecision, UserProfile};

/// Credit score band used for linear normalization.
const CREDIT_SCORE_RANGE: (f64, f64) = (540.0, 830.0);

/// Net monthly income band used for linear normalization.
const INCOME_RANGE: (f64, f64) = (3_500.0, 12_000.0);

/// The closed set of decision drivers the gateway quantifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DriverKey {
    CreditScore,
    Income,
    LoanBurden,
    Segment,
}

impl DriverKey {
    /// Wire name of the driver, as the frontend expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverKey::CreditScore => "creditScore",
            DriverKey::Income => "income",
            DriverKey::LoanBurden => "loanBurden",
            DriverKey::Segment => "segment",
        }
    }

    /// Human-readable label shown alongside the driver.
    pub fn label(&self) -> &'static str {
        match self {
            DriverKey::CreditScore => "Credit score",
            DriverKey::Income => "Net monthly income",
            DriverKey::LoanBurden => "Loan size vs income",
            DriverKey::Segment => "Segment risk tier",
        }
    }
}

/// A quantified factor contributing to a decision.
///
/// Constructed fresh per request; has no identity beyond the insight
/// response it is embedded in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub key: DriverKey,
    pub label: String,
    /// Human-readable formatted value, e.g. "742 / 850".
    pub value: String,
    /// Bounded impact score in [-1.0, +1.0], rounded to 2 decimals.
    pub impact: f64,
}

/// Rounds half away from zero to 2 decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Clamps `raw` into `[min, max]` and maps it linearly onto [-1, +1].
///
/// A missing value is neutral, never penalized.
fn normalize(raw: Option<f64>, (min, max): (f64, f64)) -> f64 {
    match raw {
        None => 0.0,
        Some(value) => {
            let clamped = value.clamp(min, max);
            let percent = (clamped - min) / (max - min);
            round2(percent * 2.0 - 1.0)
        }
    }
}

/// Impact of the loan size relative to annual income.
///
/// ratio = amount / (income * 12); raw = 1 - ratio / 5, clamped.
/// Missing amount, missing income, or non-positive income is neutral.
fn loan_burden_impact(requested_amount: &Decimal, net_monthly_income: Option<i64>) -> f64 {
    let amount = match requested_amount.to_f64() {
        Some(a) => a,
        None => return 0.0,
    };
    let income = match net_monthly_income {
        Some(i) if i > 0 => i as f64,
        _ => return 0.0,
    };
    let ratio = amount / (income * 12.0);
    round2((1.0 - ratio / 5.0).clamp(-1.0, 1.0))
}

/// Fixed modifier for the risk segment, matched case-insensitively.
fn segment_impact(segment: Option<&str>) -> f64 {
    match segment.map(|s| s.to_ascii_lowercase()).as_deref() {
        Some("prime") => 0.6,
        Some("growth") => 0.15,
        Some("watch") => -0.45,
        _ => -0.05,
    }
}

fn credit_score_value(score: Option<i32>) -> String {
    match score {
        Some(score) => format!("{} / 850", score),
        None => "unknown".to_string(),
    }
}

fn income_value(income: Option<i64>) -> String {
    match income {
        Some(income) => format!("{} monthly", usd(income as f64)),
        None => "unknown".to_string(),
    }
}

fn loan_to_income_value(requested_amount: &Decimal, net_monthly_income: Option<i64>) -> String {
    let amount = requested_amount.to_f64();
    match (amount, net_monthly_income) {
        (Some(amount), Some(income)) if income > 0 => {
            let ratio = amount / (income as f64 * 12.0);
            format!("{:.1}x annual income", ratio)
        }
        _ => "n/a".to_string(),
    }
}

/// Builds the four drivers for a profile and its latest decision.
///
/// Always exactly four, always in the fixed order
/// [credit score, income, loan burden, segment].
pub fn build_drivers(profile: &UserProfile, decision: &LoanDecision) -> Vec<Driver> {
    let credit_impact = normalize(profile.credit_score.map(f64::from), CREDIT_SCORE_RANGE);
    let income_impact = normalize(
        profile.net_monthly_income.map(|i| i as f64),
        INCOME_RANGE,
    );
    let burden_impact =
        loan_burden_impact(&decision.requested_amount, profile.net_monthly_income);
    let segment_mod = segment_impact(profile.segment.as_deref());

    tracing::debug!(
        user_id = %profile.external_id,
        credit = credit_impact,
        income = income_impact,
        burden = burden_impact,
        segment = segment_mod,
        "computed decision drivers"
    );

    vec![
        Driver {
            key: DriverKey::CreditScore,
            label: DriverKey::CreditScore.label().to_string(),
            value: credit_score_value(profile.credit_score),
            impact: credit_impact,
        },
        Driver {
            key: DriverKey::Income,
            label: DriverKey::Income.label().to_string(),
            value: income_value(profile.net_monthly_income),
            impact: income_impact,
        },
        Driver {
            key: DriverKey::LoanBurden,
            label: DriverKey::LoanBurden.label().to_string(),
            value: loan_to_income_value(&decision.requested_amount, profile.net_monthly_income),
            impact: burden_impact,
        },
        Driver {
            key: DriverKey::Segment,
            label: DriverKey::Segment.label().to_string(),
            value: profile
                .segment
                .clone()
                .unwrap_or_else(|| "Unclassified".to_string()),
            impact: segment_mod,
        },
    ]
}
