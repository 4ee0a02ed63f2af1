//! Energy center state as held by a front end between refreshes.

use crate::domain::energy::{Attribute, Chakra, EnergyCenter, EnergyCenters, EnergyMetrics};
use crate::domain::foundation::ProfileId;
use crate::domain::profile::SpiritualProfile;
use crate::domain::record::ProfileRecord;
use crate::ports::{ClientError, CreatedProfile};

/// Notice shown when a refresh fails. The previous profile stays displayed.
pub const REFRESH_FAILED_NOTICE: &str = "Failed to generate profile. Please try again.";

/// Centers being edited plus what is currently displayed for them.
///
/// The displayed profile may lag the centers while a refresh is pending.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnergyCenterState {
    centers: EnergyCenters,
    profile: Option<SpiritualProfile>,
    profile_id: Option<ProfileId>,
    history: Vec<ProfileRecord>,
    loading: bool,
    notice: Option<String>,
}

impl EnergyCenterState {
    /// Starts from the default readings (50/50/30 on every center).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_centers(centers: EnergyCenters) -> Self {
        Self {
            centers,
            ..Self::default()
        }
    }

    pub fn centers(&self) -> &EnergyCenters {
        &self.centers
    }

    pub fn profile(&self) -> Option<&SpiritualProfile> {
        self.profile.as_ref()
    }

    pub fn profile_id(&self) -> Option<&ProfileId> {
        self.profile_id.as_ref()
    }

    pub fn history(&self) -> &[ProfileRecord] {
        &self.history
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Gauges for the current centers, not the displayed profile.
    pub fn metrics(&self) -> EnergyMetrics {
        EnergyMetrics::from_centers(&self.centers)
    }

    /// Moves one slider; the value is clamped to `[0, 100]`.
    pub fn set_attribute(&mut self, chakra: Chakra, attribute: Attribute, value: i32) {
        self.centers.get_mut(chakra).set_clamped(attribute, value);
    }

    /// Replaces one center, clamping each attribute.
    pub fn set_center(&mut self, chakra: Chakra, center: EnergyCenter) {
        let target = self.centers.get_mut(chakra);
        target.set_clamped(Attribute::Frequency, center.frequency);
        target.set_clamped(Attribute::Balance, center.balance);
        target.set_clamped(Attribute::Blockage, center.blockage);
    }

    pub fn set_history(&mut self, history: Vec<ProfileRecord>) {
        self.history = history;
    }

    pub(crate) fn begin_refresh(&mut self) {
        self.loading = true;
    }

    pub(crate) fn finish_refresh(&mut self, outcome: Result<CreatedProfile, ClientError>) {
        self.loading = false;
        match outcome {
            Ok(created) => {
                self.profile = Some(created.profile);
                self.profile_id = Some(created.profile_id);
                self.notice = None;
            }
            Err(_) => {
                self.notice = Some(REFRESH_FAILED_NOTICE.to_string());
            }
        }
    }
}
