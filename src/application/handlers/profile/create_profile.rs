//! CreateProfileHandler - Command handler for generating and storing a profile.

use std::sync::Arc;

use tracing::debug;

use crate::domain::energy::EnergyCenters;
use crate::domain::foundation::SessionId;
use crate::domain::record::{ProfileError, ProfileRecord};
use crate::ports::ProfileRepository;

/// Command to generate a profile and store it under a session.
#[derive(Debug, Clone)]
pub struct CreateProfileCommand {
    /// Session to file the record under; a new one is generated when absent.
    pub session_id: Option<SessionId>,
    pub energy_centers: EnergyCenters,
}

/// Result of successful profile creation.
#[derive(Debug, Clone)]
pub struct CreateProfileResult {
    pub record: ProfileRecord,
}

pub struct CreateProfileHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl CreateProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateProfileCommand) -> Result<CreateProfileResult, ProfileError> {
        let session_id = cmd.session_id.unwrap_or_else(SessionId::generate);

        let record = ProfileRecord::create(session_id, cmd.energy_centers)?;
        self.repository.save(&record).await?;

        debug!(
            profile_id = %record.id(),
            session_id = %record.session_id(),
            level = %record.generated_profile().overall_level,
            "profile stored"
        );

        Ok(CreateProfileResult { record })
    }
}
