//! ListSessionProfilesHandler - Query handler for a session's history.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::record::{ProfileError, ProfileRecord};
use crate::ports::ProfileReader;

#[derive(Debug, Clone)]
pub struct ListSessionProfilesQuery {
    pub session_id: SessionId,
}

/// Lists at most `max_profiles` records, newest first.
pub struct ListSessionProfilesHandler {
    reader: Arc<dyn ProfileReader>,
    max_profiles: u32,
}

impl ListSessionProfilesHandler {
    pub fn new(reader: Arc<dyn ProfileReader>, max_profiles: u32) -> Self {
        Self {
            reader,
            max_profiles,
        }
    }

    pub async fn handle(
        &self,
        query: ListSessionProfilesQuery,
    ) -> Result<Vec<ProfileRecord>, ProfileError> {
        let records = self
            .reader
            .list_by_session(&query.session_id, self.max_profiles)
            .await?;
        Ok(records)
    }
}
