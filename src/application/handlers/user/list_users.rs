//! ListUsers - Query handler for the profile roster.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::profile::UserProfile;
use crate::ports::ProfileReader;

/// Handler returning all profiles ordered by full name.
pub struct ListUsersHandler {
    reader: Arc<dyn ProfileReader>,
}

impl ListUsersHandler {
    pub fn new(reader: Arc<dyn ProfileReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self) -> Result<Vec<UserProfile>, DomainError> {
        let profiles = self.reader.list_all().await?;
        tracing::info!(count = profiles.len(), "retrieved user profiles");
        Ok(profiles)
    }
}
