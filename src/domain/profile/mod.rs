//! Spiritual profile domain module.
//!
//! A profile is a pure function of an [`EnergyCenters`](crate::domain::energy::EnergyCenters)
//! value. [`ProfileGenerator`] holds the bucketing rules and [`texts`] the
//! sentences they select. [`BlockageCheck`] turns the blockage questionnaire
//! into tiered practice recommendations.

mod assessment;
mod generator;
pub mod texts;
mod values;

pub use assessment::{
    BlockageCheck, CenterRecommendations, Occurrence, BLOCKAGE_QUESTIONS_PER_CENTER,
    DEEPER_EXPLORATION_THRESHOLD,
};
pub use generator::{
    ProfileGenerator, BLOCKAGE_THRESHOLD, MAX_BEHAVIORS, MAX_GROWTH_AREAS, MAX_INSIGHTS,
    MAX_PRACTICES, MAX_TRAITS, OPEN_FREQUENCY_THRESHOLD,
};
pub use values::{
    DominantChakra, HealingPlan, Personality, SpiritualGuidance, SpiritualLevel, SpiritualProfile,
};
