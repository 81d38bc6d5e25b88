//! TTL cache in front of the external fairness monitor.
//!
//! The cached summary and its expiry form a single guarded unit; neither
//! is ever read or written without the other, so no caller can observe a
//! summary paired with the wrong expiry. The write region deliberately
//! covers the upstream fetch: a burst of cold readers serializes behind
//! one refresh instead of stampeding the monitor.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::governance::FairGuardSummary;
use crate::ports::FairnessMonitor;

/// How long a fetched summary stays valid.
const CACHE_TTL_SECS: i64 = 15;

/// Cached summary plus its expiry, guarded together.
struct CacheSlot {
    summary: Option<FairGuardSummary>,
    expires_at: Timestamp,
}

impl CacheSlot {
    fn fresh(&self, now: &Timestamp) -> Option<&FairGuardSummary> {
        match &self.summary {
            Some(summary) if self.expires_at.is_after(now) => Some(summary),
            _ => None,
        }
    }
}

/// Concurrency-safe TTL cache over the FairGuard monitor.
pub struct GovernanceSummaryCache {
    monitor: Arc<dyn FairnessMonitor>,
    slot: RwLock<CacheSlot>,
    ttl_secs: i64,
}

impl GovernanceSummaryCache {
    /// Creates a cache that starts out expired.
    pub fn new(monitor: Arc<dyn FairnessMonitor>) -> Self {
        Self::with_ttl(monitor, CACHE_TTL_SECS)
    }

    fn with_ttl(monitor: Arc<dyn FairnessMonitor>, ttl_secs: i64) -> Self {
        Self {
            monitor,
            slot: RwLock::new(CacheSlot {
                summary: None,
                expires_at: Timestamp::epoch(),
            }),
            ttl_secs,
        }
    }

    /// Returns the cached summary, refreshing it from the monitor when
    /// stale.
    ///
    /// Warm-cache readers take only the shared read lock. Cold readers
    /// re-check under the write lock (another caller may have refreshed
    /// while they waited) before the single upstream fetch happens. A
    /// monitor failure propagates; the stale value is never served in
    /// its place.
    pub async fn fetch_summary(&self) -> Result<FairGuardSummary, DomainError> {
        {
            let slot = self.slot.read().await;
            if let Some(summary) = slot.fresh(&Timestamp::now()) {
                return Ok(summary.clone());
            }
        }

        let mut slot = self.slot.write().await;
        let now = Timestamp::now();
        if let Some(summary) = slot.fresh(&now) {
            return Ok(summary.clone());
        }

        let summary = self.monitor.fetch_summary().await?;
        slot.summary = Some(summary.clone());
        slot.expires_at = now.plus_seconds(self.ttl_secs);
        tracing::debug!(generated_at = %summary.generated_at, "FairGuard summary refreshed");
        Ok(summary)
    }

    /// Triggers a monitor-side simulation and caches the result.
    ///
    /// This is an explicit refresh request, so there is no staleness
    /// check; the upstream call always happens.
    pub async fn trigger_simulation(&self) -> Result<FairGuardSummary, DomainError> {
        let mut slot = self.slot.write().await;
        let summary = self.monitor.trigger_simulation().await?;
        slot.summary = Some(summary.clone());
        slot.expires_at = Timestamp::now().plus_seconds(self.ttl_secs);
        tracing::info!("FairGuard simulation triggered, cache refreshed");
        Ok(summary)
    }

    /// Forces the next `fetch_summary` to refetch.
    pub async fn evict(&self) {
        let mut slot = self.slot.write().await;
        slot.expires_at = Timestamp::epoch();
        tracing::debug!("FairGuard cache evicted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::governance::{CircuitBreakerSnapshot, DriftSnapshot};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    struct MockMonitor {
        fetch_calls: AtomicUsize,
        simulate_calls: AtomicUsize,
        failing: AtomicBool,
        fetch_delay: Duration,
    }

    impl MockMonitor {
        fn new() -> Self {
            Self {
                fetch_calls: AtomicUsize::new(0),
                simulate_calls: AtomicUsize::new(0),
                failing: AtomicBool::new(false),
                fetch_delay: Duration::ZERO,
            }
        }

        fn with_fetch_delay(delay: Duration) -> Self {
            Self {
                fetch_delay: delay,
                ..Self::new()
            }
        }

        fn summary() -> FairGuardSummary {
            FairGuardSummary {
                generated_at: Utc::now(),
                window_size: 200,
                drift: DriftSnapshot {
                    score: 0.05,
                    threshold: 0.2,
                    status: "OK".to_string(),
                },
                circuit_breaker: CircuitBreakerSnapshot {
                    active: false,
                    reason: None,
                },
                alerts: vec![],
                dimensions: vec![],
                shap_watchlist: vec![],
            }
        }
    }

    #[async_trait]
    impl FairnessMonitor for MockMonitor {
        async fn fetch_summary(&self) -> Result<FairGuardSummary, DomainError> {
            self.fetch_calls.fetch_add(1, Ordering::SeqCst);
            if !self.fetch_delay.is_zero() {
                tokio::time::sleep(self.fetch_delay).await;
            }
            if self.failing.load(Ordering::SeqCst) {
                return Err(DomainError::downstream(
                    "FairGuard monitor",
                    "endpoint unavailable",
                ));
            }
            Ok(Self::summary())
        }

        async fn trigger_simulation(&self) -> Result<FairGuardSummary, DomainError> {
            self.simulate_calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.load(Ordering::SeqCst) {
                return Err(DomainError::downstream(
                    "FairGuard monitor",
                    "simulation trigger failed",
                ));
            }
            Ok(Self::summary())
        }
    }

    #[tokio::test]
    async fn warm_cache_serves_without_upstream_call() {
        let monitor = Arc::new(MockMonitor::new());
        let cache = GovernanceSummaryCache::new(monitor.clone());

        cache.fetch_summary().await.unwrap();
        cache.fetch_summary().await.unwrap();

        assert_eq!(monitor.fetch_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn parallel_cold_callers_trigger_exactly_one_fetch() {
        let monitor = Arc::new(MockMonitor::with_fetch_delay(Duration::from_millis(50)));
        let cache = Arc::new(GovernanceSummaryCache::new(monitor.clone()));

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let cache = cache.clone();
                tokio::spawn(async move { cache.fetch_summary().await })
            })
            .collect();

        for task in futures::future::join_all(tasks).await {
            task.unwrap().unwrap();
        }

        assert_eq!(monitor.fetch_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn expired_entry_is_refetched() {
        let monitor = Arc::new(MockMonitor::new());
        // ttl of zero: every stored entry is already expired.
        let cache = GovernanceSummaryCache::with_ttl(monitor.clone(), 0);

        cache.fetch_summary().await.unwrap();
        cache.fetch_summary().await.unwrap();

        assert_eq!(monitor.fetch_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn evict_forces_a_refetch_within_the_ttl_window() {
        let monitor = Arc::new(MockMonitor::new());
        let cache = GovernanceSummaryCache::new(monitor.clone());

        cache.fetch_summary().await.unwrap();
        cache.evict().await;
        cache.fetch_summary().await.unwrap();

        assert_eq!(monitor.fetch_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn simulation_always_calls_upstream_and_refreshes_the_cache() {
        let monitor = Arc::new(MockMonitor::new());
        let cache = GovernanceSummaryCache::new(monitor.clone());

        // Warm the cache, then simulate twice: both must reach upstream.
        cache.fetch_summary().await.unwrap();
        cache.trigger_simulation().await.unwrap();
        cache.trigger_simulation().await.unwrap();
        assert_eq!(monitor.simulate_calls.load(Ordering::SeqCst), 2);

        // The simulation result is cached: no further fetch needed.
        cache.fetch_summary().await.unwrap();
        assert_eq!(monitor.fetch_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn monitor_failure_propagates_instead_of_serving_stale_data() {
        let monitor = Arc::new(MockMonitor::new());
        let cache = GovernanceSummaryCache::new(monitor.clone());

        cache.fetch_summary().await.unwrap();
        cache.evict().await;
        monitor.failing.store(true, Ordering::SeqCst);

        let err = cache.fetch_summary().await.unwrap_err();
        assert_eq!(err.service(), Some("FairGuard monitor"));

        // Recovery: the next successful refresh repopulates the cache.
        monitor.failing.store(false, Ordering::SeqCst);
        cache.fetch_summary().await.unwrap();
        assert_eq!(monitor.fetch_calls.load(Ordering::SeqCst), 3);
    }
}
