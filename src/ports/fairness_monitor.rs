//! FairnessMonitor port for the external FairGuard collaborator.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::governance::FairGuardSummary;

/// Contract with the external fairness monitor.
///
/// Both calls are synchronous request/response; a failure must surface as
/// a downstream error naming the monitor, never as a defaulted summary.
#[async_trait]
pub trait FairnessMonitor: Send + Sync {
    /// Fetch the current governance summary.
    async fn fetch_summary(&self) -> Result<FairGuardSummary, DomainError>;

    /// Trigger a monitor-side simulation and return the refreshed summary.
    ///
    /// This is a mutating call on the monitor.
    async fn trigger_simulation(&self) -> Result<FairGuardSummary, DomainError>;
}
