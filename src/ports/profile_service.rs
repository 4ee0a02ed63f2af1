//! Profile service port (client side).
//!
//! What a front end needs from the profile backend. The HTTP client adapter
//! implements it against the REST API; tests substitute scripted doubles.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::energy::EnergyCenters;
use crate::domain::foundation::{ProfileId, SessionId};
use crate::domain::profile::SpiritualProfile;
use crate::domain::record::{ProfileRecord, SessionStats};

/// Failures seen by a client of the profile backend. None are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request never produced a usable response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with `success: false` or an error status.
    #[error("request failed ({code}): {message}")]
    Unsuccessful { code: String, message: String },

    /// The requested profile does not exist.
    #[error("profile not found")]
    NotFound,
}

/// Result of generating and storing a profile.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedProfile {
    pub session_id: SessionId,
    pub profile_id: ProfileId,
    pub profile: SpiritualProfile,
}

#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Generate a profile for the centers and store it under the session.
    async fn create_profile(
        &self,
        session_id: Option<&SessionId>,
        centers: &EnergyCenters,
    ) -> Result<CreatedProfile, ClientError>;

    /// Stored history of a session, newest first.
    async fn list_profiles(&self, session_id: &SessionId)
        -> Result<Vec<ProfileRecord>, ClientError>;

    async fn get_profile(&self, id: &ProfileId) -> Result<ProfileRecord, ClientError>;

    async fn session_stats(&self, session_id: &SessionId) -> Result<SessionStats, ClientError>;
}
