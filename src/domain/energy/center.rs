//! A single energy center reading.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::Chakra;

/// Frequency, balance and blockage of one center.
///
/// Values are nominally in `[0, 100]`. The profile generator does not
/// enforce the bounds; [`EnergyCenter::validate`] is applied at the system
/// boundary instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnergyCenter {
    pub frequency: i32,
    pub balance: i32,
    pub blockage: i32,
}

impl EnergyCenter {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 100;

    pub fn new(frequency: i32, balance: i32, blockage: i32) -> Self {
        Self {
            frequency,
            balance,
            blockage,
        }
    }

    /// `frequency + balance - blockage`, the ranking score for dominance.
    ///
    /// Computed in `i64` so unvalidated readings cannot overflow.
    pub fn score(&self) -> i64 {
        i64::from(self.frequency) + i64::from(self.balance) - i64::from(self.blockage)
    }

    /// Display health, `score / 3`. May be negative.
    pub fn health(&self) -> f64 {
        self.score() as f64 / 3.0
    }

    /// Health floored at zero, as shown in gauges.
    pub fn display_health(&self) -> f64 {
        self.health().max(0.0)
    }

    /// Checks every attribute lies in `[MIN, MAX]`.
    pub fn validate(&self, chakra: Chakra) -> Result<(), ValidationError> {
        let attributes = [
            ("frequency", self.frequency),
            ("balance", self.balance),
            ("blockage", self.blockage),
        ];
        for (name, value) in attributes {
            if !(Self::MIN..=Self::MAX).contains(&value) {
                return Err(ValidationError::out_of_range(
                    format!("{}.{}", chakra.key(), name),
                    Self::MIN,
                    Self::MAX,
                    value,
                ));
            }
        }
        Ok(())
    }
}

impl Default for EnergyCenter {
    fn default() -> Self {
        Self::new(50, 50, 30)
    }
}

/// Addresses one slider of a center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Frequency,
    Balance,
    Blockage,
}

impl EnergyCenter {
    pub fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Frequency => self.frequency,
            Attribute::Balance => self.balance,
            Attribute::Blockage => self.blockage,
        }
    }

    /// Sets an attribute, clamping to `[MIN, MAX]` like a slider would.
    pub fn set_clamped(&mut self, attribute: Attribute, value: i32) {
        let value = value.clamp(Self::MIN, Self::MAX);
        match attribute {
            Attribute::Frequency => self.frequency = value,
            Attribute::Balance => self.balance = value,
            Attribute::Blockage => self.blockage = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_and_health() {
        let center = EnergyCenter::new(80, 70, 10);
        assert_eq!(center.score(), 140);
        assert!((center.health() - 46.666).abs() < 0.01);
    }

    #[test]
    fn score_does_not_overflow_at_extremes() {
        let center = EnergyCenter::new(i32::MAX, i32::MAX, i32::MIN);
        assert_eq!(center.score(), 3 * i64::from(i32::MAX) + 1);
        assert!(center.health() > 0.0);
    }

    #[test]
    fn display_health_floors_at_zero() {
        let center = EnergyCenter::new(0, 0, 90);
        assert!(center.health() < 0.0);
        assert_eq!(center.display_health(), 0.0);
    }

    #[test]
    fn validate_reports_qualified_field() {
        let err = EnergyCenter::new(-10, 150, 30)
            .validate(Chakra::Root)
            .unwrap_err();
        assert_eq!(err.field(), "root.frequency");
    }

    #[test]
    fn validate_accepts_bounds() {
        assert!(EnergyCenter::new(0, 100, 0).validate(Chakra::Crown).is_ok());
        assert!(EnergyCenter::new(0, 0, 101).validate(Chakra::Crown).is_err());
    }

    #[test]
    fn set_clamped_bounds_values() {
        let mut center = EnergyCenter::default();
        center.set_clamped(Attribute::Blockage, 140);
        center.set_clamped(Attribute::Frequency, -3);
        assert_eq!(center.get(Attribute::Blockage), 100);
        assert_eq!(center.get(Attribute::Frequency), 0);
    }

    #[test]
    fn default_matches_initial_slider_position() {
        assert_eq!(EnergyCenter::default(), EnergyCenter::new(50, 50, 30));
    }
}
