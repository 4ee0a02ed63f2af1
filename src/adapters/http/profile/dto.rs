//! HTTP DTOs for profile endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::energy::EnergyCenters;
use crate::domain::foundation::Timestamp;
use crate::domain::profile::SpiritualProfile;
use crate::domain::record::ProfileRecord;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to generate and store a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    /// Absent or empty means the server assigns a session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub energy_centers: EnergyCenters,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A stored profile as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecordResponse {
    pub id: String,
    pub session_id: String,
    pub energy_centers: EnergyCenters,
    pub generated_profile: SpiritualProfile,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ProfileRecord> for ProfileRecordResponse {
    fn from(record: ProfileRecord) -> Self {
        Self {
            id: record.id().to_string(),
            session_id: record.session_id().to_string(),
            energy_centers: *record.energy_centers(),
            generated_profile: record.generated_profile().clone(),
            created_at: *record.created_at(),
            updated_at: *record.updated_at(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileResponse {
    pub success: bool,
    pub session_id: String,
    pub profile_id: String,
    pub profile: SpiritualProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileListResponse {
    pub success: bool,
    pub session_id: String,
    pub profiles: Vec<ProfileRecordResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub success: bool,
    pub profile: ProfileRecordResponse,
}
