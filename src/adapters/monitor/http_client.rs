//! HTTP client for the AI backend.
//!
//! One reqwest client serves both collaborator contracts: the FairGuard
//! monitor (`/monitor/fairguard`, `/monitor/fairguard/simulate`) and the
//! SHAP explainer (`/explain`). Failures are wrapped as downstream errors
//! naming the collaborator so they can never be mistaken for gateway
//! faults.
//!
//! # Configuration
//!
//! ```ignore
//! let config = AiBackendConfig::new("http://localhost:8000")
//!     .with_bearer_token(token)
//!     .with_fetch_timeout(Duration::from_secs(5));
//!
//! let client = AiBackendClient::new(config)?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::foundation::DomainError;
use crate::domain::governance::FairGuardSummary;
use crate::ports::{DecisionExplainer, Explanation, FairnessMonitor};

/// Collaborator name attached to FairGuard failures.
const FAIRGUARD_SERVICE: &str = "AI FairGuard";

/// Collaborator name attached to explanation failures.
const INSIGHTS_SERVICE: &str = "AI Insights";

/// Configuration for the AI backend client.
#[derive(Debug, Clone)]
pub struct AiBackendConfig {
    /// Base URL of the AI backend.
    pub base_url: String,
    /// Optional bearer token for backend auth.
    bearer_token: Option<Secret<String>>,
    /// Timeout for summary fetches.
    pub fetch_timeout: Duration,
    /// Timeout for simulation triggers and explanations.
    pub mutate_timeout: Duration,
}

impl AiBackendConfig {
    /// Creates a configuration with the observed collaborator timeouts:
    /// seconds-scale fetches, longer mutating calls.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bearer_token: None,
            fetch_timeout: Duration::from_secs(5),
            mutate_timeout: Duration::from_secs(10),
        }
    }

    /// Sets the bearer token sent to the backend.
    pub fn with_bearer_token(mut self, token: Secret<String>) -> Self {
        self.bearer_token = Some(token);
        self
    }

    /// Sets the fetch timeout.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Sets the mutating-call timeout.
    pub fn with_mutate_timeout(mut self, timeout: Duration) -> Self {
        self.mutate_timeout = timeout;
        self
    }
}

/// Reqwest-backed implementation of both AI backend ports.
pub struct AiBackendClient {
    config: AiBackendConfig,
    client: Client,
}

impl AiBackendClient {
    /// Builds the client; fails only on invalid TLS/runtime setup.
    pub fn new(config: AiBackendConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .build()
            .map_err(|e| DomainError::downstream(INSIGHTS_SERVICE, e.to_string()))?;
        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.bearer_token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    async fn decode<T: for<'de> Deserialize<'de>>(
        service: &'static str,
        response: reqwest::Response,
    ) -> Result<T, DomainError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, %body, service, "AI backend responded with an error");
            return Err(DomainError::downstream(
                service,
                format!("AI backend responded with status {}", status),
            ));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| DomainError::downstream(service, format!("malformed response: {}", e)))
    }
}

#[async_trait]
impl FairnessMonitor for AiBackendClient {
    async fn fetch_summary(&self) -> Result<FairGuardSummary, DomainError> {
        tracing::debug!("requesting FairGuard governance summary");
        let response = self
            .apply_auth(self.client.get(self.url("/monitor/fairguard")))
            .timeout(self.config.fetch_timeout)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "FairGuard summary request failed");
                DomainError::downstream(FAIRGUARD_SERVICE, "FairGuard endpoint is unavailable")
            })?;

        Self::decode(FAIRGUARD_SERVICE, response).await
    }

    async fn trigger_simulation(&self) -> Result<FairGuardSummary, DomainError> {
        tracing::info!("triggering FairGuard simulation");
        let response = self
            .apply_auth(self.client.post(self.url("/monitor/fairguard/simulate")))
            .timeout(self.config.mutate_timeout)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "FairGuard simulation request failed");
                DomainError::downstream(FAIRGUARD_SERVICE, "Simulation trigger failed")
            })?;

        Self::decode(FAIRGUARD_SERVICE, response).await
    }
}

#[async_trait]
impl DecisionExplainer for AiBackendClient {
    async fn explain(&self, features: Map<String, Value>) -> Result<Explanation, DomainError> {
        tracing::debug!(features = features.len(), "requesting explanation");
        let response = self
            .apply_auth(self.client.post(self.url("/explain")))
            .timeout(self.config.mutate_timeout)
            .json(&features)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "AI backend call failed");
                DomainError::downstream(INSIGHTS_SERVICE, "AI backend is unavailable")
            })?;

        let body: ExplainResponse = Self::decode(INSIGHTS_SERVICE, response).await?;
        Ok(Explanation {
            shap_values: body.shap_values,
            decision: body.decision.unwrap_or_else(|| "undetermined".to_string()),
            explanation: body.explanation.unwrap_or_default(),
        })
    }
}

/// Wire shape of the `/explain` response.
#[derive(Debug, Deserialize)]
struct ExplainResponse {
    #[serde(default)]
    shap_values: Map<String, Value>,
    decision: Option<String>,
    explanation: Option<String>,
}
