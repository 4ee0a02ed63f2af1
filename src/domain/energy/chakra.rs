//! The seven energy center categories and their fixed ordering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the seven energy centers.
///
/// The declaration order is significant: every scan over the centers
/// (dominant center, most blocked center, personality lists) walks
/// [`Chakra::ALL`] from root to crown, and ties go to the earlier center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Chakra {
    Root,
    Sacral,
    SolarPlexus,
    Heart,
    Throat,
    ThirdEye,
    Crown,
}

impl Chakra {
    /// All centers in root-to-crown order.
    pub const ALL: [Chakra; 7] = [
        Chakra::Root,
        Chakra::Sacral,
        Chakra::SolarPlexus,
        Chakra::Heart,
        Chakra::Throat,
        Chakra::ThirdEye,
        Chakra::Crown,
    ];

    /// Wire key, as used in the `energyCenters` JSON object.
    pub fn key(&self) -> &'static str {
        match self {
            Chakra::Root => "root",
            Chakra::Sacral => "sacral",
            Chakra::SolarPlexus => "solarPlexus",
            Chakra::Heart => "heart",
            Chakra::Throat => "throat",
            Chakra::ThirdEye => "thirdEye",
            Chakra::Crown => "crown",
        }
    }

    /// Looks up a center by its wire key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.key() == key)
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Chakra::Root => "Root Chakra",
            Chakra::Sacral => "Sacral Chakra",
            Chakra::SolarPlexus => "Solar Plexus Chakra",
            Chakra::Heart => "Heart Chakra",
            Chakra::Throat => "Throat Chakra",
            Chakra::ThirdEye => "Third Eye Chakra",
            Chakra::Crown => "Crown Chakra",
        }
    }

    /// Label reported as `dominantChakra` when this center dominates.
    pub fn dominant_label(&self) -> &'static str {
        match self {
            Chakra::Root => "Root Dominant",
            Chakra::Sacral => "Sacral Dominant",
            Chakra::SolarPlexus => "Solar Dominant",
            Chakra::Heart => "Heart Dominant",
            Chakra::Throat => "Throat Dominant",
            Chakra::ThirdEye => "Third Eye Dominant",
            Chakra::Crown => "Crown Dominant",
        }
    }
}

impl fmt::Display for Chakra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
