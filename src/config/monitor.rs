//! AI backend configuration (FairGuard monitor + explainer)

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Configuration for the AI backend the gateway collaborates with.
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorConfig {
    /// Base URL of the AI backend
    pub base_url: String,

    /// Optional bearer token for backend auth
    pub bearer_token: Option<Secret<String>>,

    /// Timeout for summary fetches, in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    /// Timeout for simulation triggers and explanations, in seconds
    #[serde(default = "default_mutate_timeout")]
    pub mutate_timeout_secs: u64,
}

impl MonitorConfig {
    /// Fetch timeout as a Duration
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Mutating-call timeout as a Duration
    pub fn mutate_timeout(&self) -> Duration {
        Duration::from_secs(self.mutate_timeout_secs)
    }

    /// Validate monitor configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.is_empty() {
            return Err(ValidationError::MissingRequired("monitor.base_url"));
        }
        if self.fetch_timeout_secs == 0 || self.mutate_timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn default_fetch_timeout() -> u64 {
    5
}

fn default_mutate_timeout() -> u64 {
    10
}
