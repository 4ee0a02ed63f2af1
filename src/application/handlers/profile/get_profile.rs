//! GetProfileHandler - Query handler for a single stored profile.

use std::sync::Arc;

use crate::domain::foundation::ProfileId;
use crate::domain::record::{ProfileError, ProfileRecord};
use crate::ports::ProfileRepository;

#[derive(Debug, Clone)]
pub struct GetProfileQuery {
    pub profile_id: ProfileId,
}

pub struct GetProfileHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl GetProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetProfileQuery) -> Result<ProfileRecord, ProfileError> {
        self.repository
            .find_by_id(&query.profile_id)
            .await?
            .ok_or_else(|| ProfileError::not_found(query.profile_id))
    }
}
