//! FindUser - Query handler for a single profile lookup.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::profile::UserProfile;
use crate::ports::ProfileReader;

/// Query to fetch one profile by external id.
#[derive(Debug, Clone)]
pub struct FindUserQuery {
    pub user_id: UserId,
}

/// Handler for single-profile lookups.
pub struct FindUserHandler {
    reader: Arc<dyn ProfileReader>,
}

impl FindUserHandler {
    pub fn new(reader: Arc<dyn ProfileReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: FindUserQuery,
    ) -> Result<Option<UserProfile>, DomainError> {
        let profile = self.reader.find_by_external_id(&query.user_id).await?;
        tracing::info!(
            user_id = %query.user_id,
            found = profile.is_some(),
            "user lookup"
        );
        Ok(profile)
    }
}
