//! The full set of seven energy centers.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::{Chakra, EnergyCenter};

/// Readings for all seven centers. No center is ever missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyCenters {
    pub root: EnergyCenter,
    pub sacral: EnergyCenter,
    pub solar_plexus: EnergyCenter,
    pub heart: EnergyCenter,
    pub throat: EnergyCenter,
    pub third_eye: EnergyCenter,
    pub crown: EnergyCenter,
}

impl EnergyCenters {
    /// Every center set to the same reading.
    pub fn uniform(center: EnergyCenter) -> Self {
        Self {
            root: center,
            sacral: center,
            solar_plexus: center,
            heart: center,
            throat: center,
            third_eye: center,
            crown: center,
        }
    }

    pub fn get(&self, chakra: Chakra) -> &EnergyCenter {
        match chakra {
            Chakra::Root => &self.root,
            Chakra::Sacral => &self.sacral,
            Chakra::SolarPlexus => &self.solar_plexus,
            Chakra::Heart => &self.heart,
            Chakra::Throat => &self.throat,
            Chakra::ThirdEye => &self.third_eye,
            Chakra::Crown => &self.crown,
        }
    }

    pub fn get_mut(&mut self, chakra: Chakra) -> &mut EnergyCenter {
        match chakra {
            Chakra::Root => &mut self.root,
            Chakra::Sacral => &mut self.sacral,
            Chakra::SolarPlexus => &mut self.solar_plexus,
            Chakra::Heart => &mut self.heart,
            Chakra::Throat => &mut self.throat,
            Chakra::ThirdEye => &mut self.third_eye,
            Chakra::Crown => &mut self.crown,
        }
    }

    /// Builder-style replacement of one center.
    pub fn with(mut self, chakra: Chakra, center: EnergyCenter) -> Self {
        *self.get_mut(chakra) = center;
        self
    }

    /// Iterates centers in root-to-crown order.
    pub fn iter(&self) -> impl Iterator<Item = (Chakra, &EnergyCenter)> + '_ {
        Chakra::ALL.iter().map(move |&chakra| (chakra, self.get(chakra)))
    }

    /// Validates that every attribute of every center lies in `[0, 100]`.
    ///
    /// Reports the first violation in root-to-crown order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.iter()
            .try_for_each(|(chakra, center)| center.validate(chakra))
    }
}
