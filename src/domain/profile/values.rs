//! Value types making up a generated profile.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::energy::Chakra;
use crate::domain::foundation::ValidationError;

/// Overall development stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpiritualLevel {
    #[serde(rename = "Beginning Journey")]
    BeginningJourney,
    #[serde(rename = "Awakening Spirit")]
    AwakeningSpirit,
    #[serde(rename = "Developing Soul")]
    DevelopingSoul,
    #[serde(rename = "Advanced Seeker")]
    AdvancedSeeker,
}

impl SpiritualLevel {
    /// Buckets the halved net score `(mean freq + mean balance - mean blockage) / 2`.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            SpiritualLevel::AdvancedSeeker
        } else if score >= 60.0 {
            SpiritualLevel::DevelopingSoul
        } else if score >= 40.0 {
            SpiritualLevel::AwakeningSpirit
        } else {
            SpiritualLevel::BeginningJourney
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SpiritualLevel::BeginningJourney => "Beginning Journey",
            SpiritualLevel::AwakeningSpirit => "Awakening Spirit",
            SpiritualLevel::DevelopingSoul => "Developing Soul",
            SpiritualLevel::AdvancedSeeker => "Advanced Seeker",
        }
    }
}

impl fmt::Display for SpiritualLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The dominant center, serialized as its label (e.g. `"Heart Dominant"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct DominantChakra(Chakra);

impl DominantChakra {
    pub fn new(chakra: Chakra) -> Self {
        Self(chakra)
    }

    pub fn chakra(&self) -> Chakra {
        self.0
    }

    pub fn label(&self) -> &'static str {
        self.0.dominant_label()
    }
}

impl fmt::Display for DominantChakra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<DominantChakra> for String {
    fn from(value: DominantChakra) -> Self {
        value.label().to_string()
    }
}

impl TryFrom<String> for DominantChakra {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Chakra::ALL
            .iter()
            .copied()
            .find(|c| c.dominant_label() == value)
            .map(DominantChakra)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "dominantChakra",
                    format!("unknown label '{}'", value),
                )
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Personality {
    pub traits: Vec<String>,
    pub behaviors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpiritualGuidance {
    /// Sentence naming the current stage.
    pub level: String,
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealingPlan {
    pub practices: Vec<String>,
    pub growth_areas: Vec<String>,
}

/// A generated profile. Fully determined by the energy centers it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpiritualProfile {
    pub overall_level: SpiritualLevel,
    pub overall_balance: i32,
    pub dominant_chakra: DominantChakra,
    pub personality: Personality,
    pub spiritual: SpiritualGuidance,
    pub healing: HealingPlan,
}
