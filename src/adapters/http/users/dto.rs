//! HTTP DTOs for user endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::profile::UserProfile;

/// Profile as exposed over HTTP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub external_id: String,
    pub full_name: String,
    pub email: String,
    pub credit_score: Option<i32>,
    pub net_monthly_income: Option<i64>,
    pub segment: Option<String>,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            external_id: profile.external_id.to_string(),
            full_name: profile.full_name,
            email: profile.email,
            credit_score: profile.credit_score,
            net_monthly_income: profile.net_monthly_income,
            segment: profile.segment,
        }
    }
}
