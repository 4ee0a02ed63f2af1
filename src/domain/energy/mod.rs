//! Energy center domain module.
//!
//! Seven fixed centers, each read as a frequency/balance/blockage triplet.
//! [`Chakra::ALL`] fixes the iteration order every derived value relies on.

mod assessment;
mod center;
mod centers;
mod chakra;
mod metrics;

pub use assessment::{Assessment, DEFAULT_ANSWER, MAX_ANSWER, MIN_ANSWER, QUESTIONS_PER_CENTER};
pub use center::{Attribute, EnergyCenter};
pub use centers::EnergyCenters;
pub use chakra::Chakra;
pub use metrics::{CenterHealth, EnergyMetrics, TOP_CENTER_COUNT};
