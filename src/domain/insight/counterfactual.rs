//! Counterfactual reasoning.
//!
//! Selects the weakest driver behind a non-approved decision and renders a
//! remediation sentence with concrete target values. Every branch degrades
//! to a generic recommendation when the numeric inputs it needs are
//! unknown.

use rust_decimal::prelude::ToPrimitive;

use super::driver::{Driver, DriverKey};
use super::format::usd;
use super::types::DecisionSummary;
use crate::domain::profile::UserProfile;

const INSUFFICIENT_SIGNAL: &str =
    "We do not have enough signal to propose a counterfactual scenario.";

const ALREADY_OPTIMAL: &str =
    "The application already satisfies the automated policy; changes would only improve pricing.";

const ESCALATE_TO_REVIEWER: &str =
    "All tracked drivers are already positive; escalate to a human reviewer.";

/// Produces the counterfactual recommendation for a decision.
///
/// Approved decisions short-circuit to a fixed sentence regardless of the
/// drivers. Otherwise the weakest driver (minimum impact, first occurrence
/// winning ties) selects the remediation template.
pub fn counterfactual(
    profile: &UserProfile,
    summary: &DecisionSummary,
    drivers: &[Driver],
) -> String {
    if drivers.is_empty() {
        return INSUFFICIENT_SIGNAL.to_string();
    }

    if summary.is_approved() {
        return ALREADY_OPTIMAL.to_string();
    }

    // Strict `<` keeps the first occurrence on ties, preserving the fixed
    // driver order as the tie-break.
    let weakest = drivers
        .iter()
        .skip(1)
        .fold(&drivers[0], |best, d| if d.impact < best.impact { d } else { best });

    if weakest.impact >= 0.0 {
        return ESCALATE_TO_REVIEWER.to_string();
    }

    match weakest.key {
        DriverKey::CreditScore => credit_score_counterfactual(profile),
        DriverKey::Income => income_counterfactual(profile),
        DriverKey::LoanBurden => loan_burden_counterfactual(summary, profile),
        DriverKey::Segment => segment_counterfactual(profile),
    }
}

fn credit_score_counterfactual(profile: &UserProfile) -> String {
    let Some(score) = profile.credit_score else {
        return "Provide a valid credit score to unlock a counterfactual recommendation."
            .to_string();
    };
    let target = (score + 25).max(685);
    format!(
        "If {}'s credit score were around {} instead of {}, the automated policy would move this loan into the approval band.",
        profile.full_name, target, score
    )
}

fn income_counterfactual(profile: &UserProfile) -> String {
    let Some(income) = profile.net_monthly_income else {
        return "Submitting verified income would allow us to craft a counterfactual scenario."
            .to_string();
    };
    let target = (income + 1_200).max(7_800);
    format!(
        "If {} documented net monthly income near {} (vs. {}), the affordability checks would pass.",
        profile.full_name,
        usd(target as f64),
        usd(income as f64)
    )
}

fn loan_burden_counterfactual(summary: &DecisionSummary, profile: &UserProfile) -> String {
    let requested = summary.requested_amount.to_f64();
    let income = profile.net_monthly_income.filter(|i| *i > 0);
    let (Some(requested), Some(income)) = (requested, income) else {
        return "Adjusting the requested amount downward would likely improve this decision."
            .to_string();
    };
    let annual_income = income as f64 * 12.0;
    let target = (requested * 0.75).min(annual_income * 3.5);
    format!(
        "If {} reduced the requested amount to about {} (currently {}), the debt-to-income pressure would drop below the rejection threshold.",
        profile.full_name,
        usd(target),
        usd(requested)
    )
}

fn segment_counterfactual(profile: &UserProfile) -> String {
    let current = profile.segment.as_deref();
    let target = match current {
        Some(s) if s.eq_ignore_ascii_case("growth") => "Prime",
        _ => "Growth",
    };
    format!(
        "If {} graduated from the {} segment into the {} tier by improving repayment behavior, this loan would likely be approved.",
        profile.full_name,
        current.unwrap_or("current"),
        target
    )
}
