//! HTTP handlers for FairGuard governance endpoints.
//!
//! The summary already crosses the wire as the monitor produced it, so
//! these endpoints serve the domain snapshot directly; a dto layer would
//! only restate it field for field.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::application::governance::GovernanceSummaryCache;

#[derive(Clone)]
pub struct GovernanceHandlers {
    cache: Arc<GovernanceSummaryCache>,
}

impl GovernanceHandlers {
    pub fn new(cache: Arc<GovernanceSummaryCache>) -> Self {
        Self { cache }
    }
}

/// GET /api/fairguard/summary - The cached governance summary.
pub async fn get_summary(State(handlers): State<GovernanceHandlers>) -> Response {
    tracing::info!("fetching FairGuard governance summary");
    match handlers.cache.fetch_summary().await {
        Ok(summary) => Json(summary).into_response(),
        Err(err) => domain_error_response(err),
    }
}

/// POST /api/fairguard/simulate - Trigger a monitor simulation.
pub async fn trigger_simulation(State(handlers): State<GovernanceHandlers>) -> Response {
    tracing::info!("triggering FairGuard simulation");
    match handlers.cache.trigger_simulation().await {
        Ok(summary) => Json(summary).into_response(),
        Err(err) => domain_error_response(err),
    }
}

/// DELETE /api/fairguard/cache - Evict the cached summary.
pub async fn evict_cache(State(handlers): State<GovernanceHandlers>) -> Response {
    handlers.cache.evict().await;
    StatusCode::NO_CONTENT.into_response()
}
