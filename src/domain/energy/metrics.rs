//! Display metrics derived from the centers. Never persisted.

use serde::{Deserialize, Serialize};

use super::{Chakra, EnergyCenter, EnergyCenters};

/// Number of centers reported as strongest.
pub const TOP_CENTER_COUNT: usize = 3;

/// A center paired with its floored health.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterHealth {
    pub chakra: Chakra,
    pub health: f64,
}

/// Aggregate gauges shown alongside a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyMetrics {
    /// Rounded mean frequency.
    pub overall_frequency: i32,
    /// Rounded mean blockage.
    pub overall_blockage: i32,
    /// Rounded mean of the floored per-center health.
    pub overall_health: i32,
    /// Healthiest centers, best first; ties keep root-to-crown order.
    pub top_centers: Vec<CenterHealth>,
}

impl EnergyMetrics {
    pub fn from_centers(centers: &EnergyCenters) -> Self {
        let count = Chakra::ALL.len() as f64;
        let mean = |f: fn(&EnergyCenter) -> f64| {
            centers.iter().map(|(_, c)| f(c)).sum::<f64>() / count
        };

        let mut ranked: Vec<CenterHealth> = centers
            .iter()
            .map(|(chakra, center)| CenterHealth {
                chakra,
                health: center.display_health(),
            })
            .collect();
        // sort_by is stable, so equal health keeps iteration order
        ranked.sort_by(|a, b| b.health.total_cmp(&a.health));
        ranked.truncate(TOP_CENTER_COUNT);

        Self {
            overall_frequency: mean(|c| f64::from(c.frequency)).round() as i32,
            overall_blockage: mean(|c| f64::from(c.blockage)).round() as i32,
            overall_health: mean(|c| c.display_health()).round() as i32,
            top_centers: ranked,
        }
    }
}
