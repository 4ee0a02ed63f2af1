//! Persisted profile record.

use serde::{Deserialize, Serialize};

use crate::domain::energy::EnergyCenters;
use crate::domain::foundation::{ProfileId, SessionId, Timestamp, ValidationError};
use crate::domain::profile::{ProfileGenerator, SpiritualProfile};

/// A generated profile stored against the session that requested it.
///
/// # Invariants
///
/// - `generated_profile` is what [`ProfileGenerator`] returns for `energy_centers`
/// - records are never modified, so `updated_at == created_at`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    #[serde(alias = "_id")]
    id: ProfileId,
    session_id: SessionId,
    energy_centers: EnergyCenters,
    generated_profile: SpiritualProfile,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl ProfileRecord {
    /// Validates the centers and generates the profile for a new record.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if any attribute falls outside 0..=100
    pub fn create(
        session_id: SessionId,
        energy_centers: EnergyCenters,
    ) -> Result<Self, ValidationError> {
        energy_centers.validate()?;

        let now = Timestamp::now();
        Ok(Self {
            id: ProfileId::new(),
            session_id,
            generated_profile: ProfileGenerator::generate(&energy_centers),
            energy_centers,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a record from persistence (no validation).
    pub fn reconstitute(
        id: ProfileId,
        session_id: SessionId,
        energy_centers: EnergyCenters,
        generated_profile: SpiritualProfile,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            session_id,
            energy_centers,
            generated_profile,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &ProfileId {
        &self.id
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn energy_centers(&self) -> &EnergyCenters {
        &self.energy_centers
    }

    pub fn generated_profile(&self) -> &SpiritualProfile {
        &self.generated_profile
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }
}
