//! BuildInsight - Query handler composing the decision insight.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::insight::{build_drivers, counterfactual, DecisionInsight, DecisionSummary};
use crate::ports::ProfileReader;

/// Query for a user's decision insight.
#[derive(Debug, Clone)]
pub struct BuildInsightQuery {
    pub user_id: UserId,
}

/// Handler that assembles drivers and the counterfactual for a user's
/// latest loan decision.
///
/// Read-only over its collaborator; requires no synchronization.
pub struct BuildInsightHandler {
    reader: Arc<dyn ProfileReader>,
}

impl BuildInsightHandler {
    pub fn new(reader: Arc<dyn ProfileReader>) -> Self {
        Self { reader }
    }

    /// Builds the insight, or `None` when the user has no profile or no
    /// decision history. The two absences are indistinguishable at this
    /// boundary; the log lines keep them apart for operators.
    pub async fn handle(
        &self,
        query: BuildInsightQuery,
    ) -> Result<Option<DecisionInsight>, DomainError> {
        let Some(profile) = self.reader.find_by_external_id(&query.user_id).await? else {
            tracing::warn!(user_id = %query.user_id, "no profile for decision insight");
            return Ok(None);
        };

        let history = self.reader.decision_history(&query.user_id).await?;
        let Some(latest) = history.first() else {
            tracing::warn!(user_id = %query.user_id, "no loan decisions recorded");
            return Ok(None);
        };

        let summary = DecisionSummary::from(latest);
        let drivers = build_drivers(&profile, latest);
        let counterfactual = counterfactual(&profile, &summary, &drivers);

        Ok(Some(DecisionInsight {
            user_id: profile.external_id.clone(),
            full_name: profile.full_name.clone(),
            segment: profile.segment.clone(),
            summary,
            drivers,
            counterfactual,
        }))
    }
}
