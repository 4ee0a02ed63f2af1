//! Starting readings derived from the 1-5 self-assessment questionnaire.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::ValidationError;

use super::{Chakra, EnergyCenter, EnergyCenters};

/// Questions asked per center.
pub const QUESTIONS_PER_CENTER: usize = 4;

/// Answer assumed for a question left blank.
pub const DEFAULT_ANSWER: u8 = 3;

pub const MIN_ANSWER: u8 = 1;
pub const MAX_ANSWER: u8 = 5;

/// Answers keyed by center, one slot per question.
///
/// Serialized as `{"root": [5, 4, null, 3], ...}`. Missing centers and
/// `null` slots count as [`DEFAULT_ANSWER`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assessment {
    answers: BTreeMap<Chakra, [Option<u8>; QUESTIONS_PER_CENTER]>,
}

impl Assessment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one answer.
    pub fn answer(&mut self, chakra: Chakra, question: usize, value: u8) -> Result<(), ValidationError> {
        let field = format!("{}.{}", chakra.key(), question);
        if question >= QUESTIONS_PER_CENTER {
            return Err(ValidationError::out_of_range(
                field,
                0,
                QUESTIONS_PER_CENTER as i32 - 1,
                question as i32,
            ));
        }
        Self::check(&field, value)?;
        self.answers.entry(chakra).or_default()[question] = Some(value);
        Ok(())
    }

    /// Checks every recorded answer lies in `[MIN_ANSWER, MAX_ANSWER]`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (chakra, slots) in &self.answers {
            for (question, value) in slots.iter().enumerate() {
                if let Some(value) = value {
                    Self::check(&format!("{}.{}", chakra.key(), question), *value)?;
                }
            }
        }
        Ok(())
    }

    fn check(field: &str, value: u8) -> Result<(), ValidationError> {
        if !(MIN_ANSWER..=MAX_ANSWER).contains(&value) {
            return Err(ValidationError::out_of_range(
                field,
                i32::from(MIN_ANSWER),
                i32::from(MAX_ANSWER),
                i32::from(value),
            ));
        }
        Ok(())
    }

    /// Mean answer for one center, blanks counted as [`DEFAULT_ANSWER`].
    pub fn average(&self, chakra: Chakra) -> f64 {
        let total: u32 = match self.answers.get(&chakra) {
            Some(slots) => slots
                .iter()
                .map(|v| u32::from(v.unwrap_or(DEFAULT_ANSWER)))
                .sum(),
            None => u32::from(DEFAULT_ANSWER) * QUESTIONS_PER_CENTER as u32,
        };
        f64::from(total) / QUESTIONS_PER_CENTER as f64
    }
}

impl EnergyCenter {
    /// Reading for a mean answer `avg`: frequency and balance rise from 20 to
    /// 100, blockage falls from 85 to 25. Results are clamped to `[0, 100]`.
    pub fn from_average_answer(avg: f64) -> Self {
        let scaled = |v: f64| (v.round() as i32).clamp(Self::MIN, Self::MAX);
        let open = scaled((avg - 1.0) * 20.0 + 20.0);
        Self::new(open, open, scaled((6.0 - avg) * 15.0 + 10.0))
    }
}

impl EnergyCenters {
    /// Starting readings for a completed (or partly completed) assessment.
    pub fn from_assessment(assessment: &Assessment) -> Self {
        Chakra::ALL.iter().fold(Self::default(), |centers, &chakra| {
            centers.with(
                chakra,
                EnergyCenter::from_average_answer(assessment.average(chakra)),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_assessment_maps_to_the_middle() {
        let centers = EnergyCenters::from_assessment(&Assessment::new());
        // avg 3: 2 * 20 + 20 = 60, 3 * 15 + 10 = 55
        assert_eq!(centers, EnergyCenters::uniform(EnergyCenter::new(60, 60, 55)));
    }

    #[test]
    fn extremes_span_the_documented_range() {
        assert_eq!(EnergyCenter::from_average_answer(1.0), EnergyCenter::new(20, 20, 85));
        assert_eq!(EnergyCenter::from_average_answer(5.0), EnergyCenter::new(100, 100, 25));
    }

    #[test]
    fn half_blockage_rounds_up() {
        // (6 - 3.5) * 15 + 10 = 47.5
        assert_eq!(EnergyCenter::from_average_answer(3.5), EnergyCenter::new(70, 70, 48));
        // (6 - 4.25) * 15 + 10 = 36.25
        assert_eq!(EnergyCenter::from_average_answer(4.25).blockage, 36);
    }

    #[test]
    fn blanks_default_within_a_center() {
        let mut assessment = Assessment::new();
        assessment.answer(Chakra::Heart, 0, 5).unwrap();
        assessment.answer(Chakra::Heart, 1, 5).unwrap();
        // (5 + 5 + 3 + 3) / 4 = 4
        assert_eq!(assessment.average(Chakra::Heart), 4.0);

        let centers = EnergyCenters::from_assessment(&assessment);
        assert_eq!(centers.heart, EnergyCenter::new(80, 80, 40));
        assert_eq!(centers.root, EnergyCenter::new(60, 60, 55));
    }

    #[test]
    fn rejects_answers_out_of_scale() {
        let mut assessment = Assessment::new();
        let err = assessment.answer(Chakra::Crown, 2, 6).unwrap_err();
        assert_eq!(err.field(), "crown.2");
        assert!(assessment.answer(Chakra::Crown, 4, 3).is_err());
        assert!(assessment.answer(Chakra::Crown, 3, 0).is_err());
        assert_eq!(assessment, Assessment::new());
    }

    #[test]
    fn deserializes_with_nulls_and_validates() {
        let assessment: Assessment =
            serde_json::from_str(r#"{"solarPlexus": [1, 1, null, 1]}"#).unwrap();
        assert!(assessment.validate().is_ok());
        assert_eq!(assessment.average(Chakra::SolarPlexus), 1.5);

        let bad: Assessment = serde_json::from_str(r#"{"root": [9, 3, 3, 3]}"#).unwrap();
        assert_eq!(bad.validate().unwrap_err().field(), "root.0");
    }
}
