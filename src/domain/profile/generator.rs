//! Profile Generator - threshold-bucketed text derived from the centers.

use crate::domain::energy::{Chakra, EnergyCenter, EnergyCenters};

use super::texts::{self, PersonalityPair};
use super::values::{
    DominantChakra, HealingPlan, Personality, SpiritualGuidance, SpiritualLevel, SpiritualProfile,
};

/// Frequency above which a center contributes its open personality pair.
pub const OPEN_FREQUENCY_THRESHOLD: i32 = 60;

/// Blockage above which a non-open center contributes its blocked pair.
pub const BLOCKAGE_THRESHOLD: i32 = 50;

pub const MAX_TRAITS: usize = 4;
pub const MAX_BEHAVIORS: usize = 3;
pub const MAX_INSIGHTS: usize = 3;
pub const MAX_PRACTICES: usize = 3;
pub const MAX_GROWTH_AREAS: usize = 3;

/// Pure, deterministic mapping from energy centers to a profile.
///
/// Inputs are not range-checked; any `EnergyCenters` produces a profile.
pub struct ProfileGenerator;

impl ProfileGenerator {
    /// Generates the complete profile.
    pub fn generate(centers: &EnergyCenters) -> SpiritualProfile {
        let overall_level = Self::overall_level(centers);
        let overall_balance = Self::overall_balance(centers);

        SpiritualProfile {
            overall_level,
            overall_balance,
            dominant_chakra: DominantChakra::new(Self::dominant_chakra(centers)),
            personality: Self::personality(centers),
            spiritual: Self::spiritual_guidance(overall_balance, overall_level),
            healing: Self::healing_plan(centers, overall_balance),
        }
    }

    /// Rounded mean of the seven balance values.
    ///
    /// A sum of seven integers divided by seven never lands on `.5`, so the
    /// rounding mode cannot matter.
    pub fn overall_balance(centers: &EnergyCenters) -> i32 {
        let total: i64 = centers.iter().map(|(_, c)| i64::from(c.balance)).sum();
        (total as f64 / Chakra::ALL.len() as f64).round() as i32
    }

    /// `(mean frequency + mean balance - mean blockage) / 2`.
    pub fn level_score(centers: &EnergyCenters) -> f64 {
        // Summed first so the boundaries compare exactly: one division of an
        // integer cannot round across a whole-number threshold.
        let net: i64 = centers.iter().map(|(_, c)| c.score()).sum();
        net as f64 / (Chakra::ALL.len() as f64 * 2.0)
    }

    pub fn overall_level(centers: &EnergyCenters) -> SpiritualLevel {
        SpiritualLevel::from_score(Self::level_score(centers))
    }

    /// Center with the highest `frequency + balance - blockage`.
    ///
    /// The running maximum starts at zero and only a strictly greater score
    /// replaces it, so ties go to the earlier center and root is reported
    /// when no score is positive.
    pub fn dominant_chakra(centers: &EnergyCenters) -> Chakra {
        Self::first_strict_max(centers, EnergyCenter::score)
    }

    /// Center with the highest blockage; root when every blockage is zero.
    pub fn most_blocked(centers: &EnergyCenters) -> Chakra {
        Self::first_strict_max(centers, |c| i64::from(c.blockage))
    }

    fn first_strict_max(centers: &EnergyCenters, value: impl Fn(&EnergyCenter) -> i64) -> Chakra {
        let mut best = Chakra::Root;
        let mut highest = 0;
        for (chakra, center) in centers.iter() {
            let v = value(center);
            if v > highest {
                highest = v;
                best = chakra;
            }
        }
        best
    }

    pub fn personality(centers: &EnergyCenters) -> Personality {
        let pairs: Vec<PersonalityPair> = centers
            .iter()
            .filter_map(|(chakra, center)| {
                if center.frequency > OPEN_FREQUENCY_THRESHOLD {
                    Some(texts::open_personality(chakra))
                } else if center.blockage > BLOCKAGE_THRESHOLD {
                    Some(texts::blocked_personality(chakra))
                } else {
                    None
                }
            })
            .collect();

        Personality {
            traits: pairs
                .iter()
                .take(MAX_TRAITS)
                .map(|p| p.trait_text.to_string())
                .collect(),
            behaviors: pairs
                .iter()
                .take(MAX_BEHAVIORS)
                .map(|p| p.behavior.to_string())
                .collect(),
        }
    }

    pub fn spiritual_guidance(overall_balance: i32, level: SpiritualLevel) -> SpiritualGuidance {
        let by_balance = if overall_balance > 70 {
            texts::HARMONIOUS_INSIGHTS
        } else if overall_balance > 50 {
            texts::PROGRESSING_INSIGHTS
        } else {
            texts::AWAKENING_INSIGHTS
        };
        let by_level = match level {
            SpiritualLevel::AdvancedSeeker => texts::ADVANCED_LEVEL_INSIGHT,
            SpiritualLevel::DevelopingSoul => texts::DEVELOPING_LEVEL_INSIGHT,
            SpiritualLevel::AwakeningSpirit | SpiritualLevel::BeginningJourney => {
                texts::EARLY_LEVEL_INSIGHT
            }
        };

        SpiritualGuidance {
            level: texts::level_statement(level.label()),
            insights: by_balance
                .iter()
                .copied()
                .chain(std::iter::once(by_level))
                .take(MAX_INSIGHTS)
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn healing_plan(centers: &EnergyCenters, overall_balance: i32) -> HealingPlan {
        let focus = texts::healing_focus(Self::most_blocked(centers));
        let general = if overall_balance < 50 {
            texts::GROUNDING_PRACTICES
        } else {
            texts::MAINTENANCE_PRACTICES
        };

        HealingPlan {
            practices: general
                .iter()
                .copied()
                .chain(std::iter::once(focus.practice))
                .take(MAX_PRACTICES)
                .map(str::to_string)
                .collect(),
            growth_areas: std::iter::once(focus.growth)
                .chain(texts::UNIVERSAL_GROWTH.iter().copied())
                .take(MAX_GROWTH_AREAS)
                .map(str::to_string)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn all(frequency: i32, balance: i32, blockage: i32) -> EnergyCenters {
        EnergyCenters::uniform(EnergyCenter::new(frequency, balance, blockage))
    }

    #[test]
    fn all_zero_is_beginning_journey_and_root_dominant() {
        let profile = ProfileGenerator::generate(&all(0, 0, 0));
        assert_eq!(profile.overall_level, SpiritualLevel::BeginningJourney);
        assert_eq!(profile.dominant_chakra.label(), "Root Dominant");
        assert_eq!(profile.overall_balance, 0);
    }

    #[test]
    fn all_max_is_advanced_seeker() {
        let profile = ProfileGenerator::generate(&all(100, 100, 0));
        assert_eq!(profile.overall_level, SpiritualLevel::AdvancedSeeker);
        assert_eq!(profile.overall_balance, 100);
    }

    #[test]
    fn extreme_readings_do_not_overflow() {
        let profile = ProfileGenerator::generate(&all(i32::MAX, i32::MAX, 0));
        assert_eq!(profile.overall_level, SpiritualLevel::AdvancedSeeker);
        assert_eq!(profile.overall_balance, i32::MAX);
        assert_eq!(profile.dominant_chakra.chakra(), Chakra::Root);

        let profile = ProfileGenerator::generate(&all(1_000_000_000, 50, 30));
        assert_eq!(profile.overall_level, SpiritualLevel::AdvancedSeeker);
        assert_eq!(profile.overall_balance, 50);

        let centers = all(0, 0, 0).with(Chakra::Throat, EnergyCenter::new(0, 0, i32::MAX));
        let profile = ProfileGenerator::generate(&centers);
        assert_eq!(profile.overall_level, SpiritualLevel::BeginningJourney);
        assert_eq!(ProfileGenerator::most_blocked(&centers), Chakra::Throat);
    }

    #[test]
    fn strong_root_dominates_and_contributes_foundation_trait() {
        let centers = all(50, 50, 30).with(Chakra::Root, EnergyCenter::new(80, 70, 10));
        let profile = ProfileGenerator::generate(&centers);

        assert_eq!(profile.dominant_chakra.label(), "Root Dominant");
        assert!(profile.personality.traits.contains(
            &"You have a strong foundation and feel secure in your physical existence.".to_string()
        ));
    }

    #[test]
    fn equal_scores_go_to_earlier_center() {
        let centers = all(10, 10, 10)
            .with(Chakra::Heart, EnergyCenter::new(90, 90, 0))
            .with(Chakra::Crown, EnergyCenter::new(90, 90, 0));
        assert_eq!(ProfileGenerator::dominant_chakra(&centers), Chakra::Heart);
    }

    #[test]
    fn non_positive_scores_leave_root_dominant() {
        let centers = all(0, 0, 50).with(Chakra::Crown, EnergyCenter::new(10, 10, 20));
        assert_eq!(ProfileGenerator::dominant_chakra(&centers), Chakra::Root);
    }

    #[test]
    fn later_center_wins_only_when_strictly_greater() {
        let centers = all(0, 0, 0)
            .with(Chakra::Sacral, EnergyCenter::new(1, 0, 0))
            .with(Chakra::Throat, EnergyCenter::new(2, 0, 0));
        assert_eq!(ProfileGenerator::dominant_chakra(&centers), Chakra::Throat);
    }

    #[test]
    fn most_blocked_defaults_to_root_and_breaks_ties_early() {
        assert_eq!(ProfileGenerator::most_blocked(&all(50, 50, 0)), Chakra::Root);

        let centers = all(50, 50, 0)
            .with(Chakra::Throat, EnergyCenter::new(50, 50, 70))
            .with(Chakra::Crown, EnergyCenter::new(50, 50, 70));
        assert_eq!(ProfileGenerator::most_blocked(&centers), Chakra::Throat);
    }

    #[test]
    fn level_boundary_is_exact() {
        // net per center is 160 -> score 80 exactly
        let profile = ProfileGenerator::generate(&all(80, 80, 0));
        assert_eq!(profile.overall_level, SpiritualLevel::AdvancedSeeker);

        // one point short anywhere drops a bucket
        let centers = all(80, 80, 0).with(Chakra::Crown, EnergyCenter::new(79, 80, 0));
        assert_eq!(ProfileGenerator::overall_level(&centers), SpiritualLevel::DevelopingSoul);
    }

    #[test]
    fn open_frequency_takes_precedence_over_blockage() {
        let centers = all(50, 50, 30).with(Chakra::Heart, EnergyCenter::new(61, 50, 90));
        let personality = ProfileGenerator::personality(&centers);
        assert_eq!(
            personality.traits,
            vec!["You radiate love and compassion, creating harmonious relationships.".to_string()]
        );
    }

    #[test]
    fn thresholds_are_strict() {
        let centers = all(60, 50, 50);
        let personality = ProfileGenerator::personality(&centers);
        assert!(personality.traits.is_empty());
        assert!(personality.behaviors.is_empty());
    }

    #[test]
    fn blocked_centers_contribute_negative_pairs_in_order() {
        let centers = all(50, 50, 30)
            .with(Chakra::Crown, EnergyCenter::new(10, 10, 80))
            .with(Chakra::Sacral, EnergyCenter::new(10, 10, 80));
        let personality = ProfileGenerator::personality(&centers);
        assert_eq!(personality.traits.len(), 2);
        assert!(personality.traits[0].contains("creative blocks"));
        assert!(personality.traits[1].contains("spiritually disconnected"));
    }

    #[test]
    fn personality_is_truncated() {
        let profile = ProfileGenerator::generate(&all(90, 50, 0));
        assert_eq!(profile.personality.traits.len(), MAX_TRAITS);
        assert_eq!(profile.personality.behaviors.len(), MAX_BEHAVIORS);
        assert!(profile.personality.traits[0].contains("strong foundation"));
        assert!(profile.personality.traits[3].contains("radiate love"));
    }

    #[test]
    fn insights_follow_balance_and_level() {
        let guidance = ProfileGenerator::spiritual_guidance(71, SpiritualLevel::AdvancedSeeker);
        assert_eq!(guidance.insights.len(), 3);
        assert_eq!(guidance.insights[0], texts::HARMONIOUS_INSIGHTS[0]);
        assert_eq!(guidance.insights[2], texts::ADVANCED_LEVEL_INSIGHT);
        assert!(guidance.level.contains("\"Advanced Seeker\""));

        let guidance = ProfileGenerator::spiritual_guidance(70, SpiritualLevel::DevelopingSoul);
        assert_eq!(guidance.insights[0], texts::PROGRESSING_INSIGHTS[0]);
        assert_eq!(guidance.insights[2], texts::DEVELOPING_LEVEL_INSIGHT);

        let guidance = ProfileGenerator::spiritual_guidance(50, SpiritualLevel::AwakeningSpirit);
        assert_eq!(guidance.insights[0], texts::AWAKENING_INSIGHTS[0]);
        assert_eq!(guidance.insights[2], texts::EARLY_LEVEL_INSIGHT);
    }

    #[test]
    fn healing_targets_most_blocked_center() {
        let centers = all(50, 40, 10).with(Chakra::ThirdEye, EnergyCenter::new(50, 40, 60));
        let plan = ProfileGenerator::healing_plan(&centers, 40);

        assert_eq!(plan.practices.len(), 3);
        assert_eq!(plan.practices[0], texts::GROUNDING_PRACTICES[0]);
        assert_eq!(plan.practices[2], texts::healing_focus(Chakra::ThirdEye).practice);
        assert_eq!(plan.growth_areas.len(), 3);
        assert_eq!(plan.growth_areas[0], texts::healing_focus(Chakra::ThirdEye).growth);
        assert_eq!(plan.growth_areas[2], texts::UNIVERSAL_GROWTH[1]);
    }

    #[test]
    fn balanced_state_gets_maintenance_practices() {
        let plan = ProfileGenerator::healing_plan(&all(50, 50, 0), 50);
        assert_eq!(plan.practices[0], texts::MAINTENANCE_PRACTICES[0]);
        assert_eq!(plan.practices[2], texts::healing_focus(Chakra::Root).practice);
    }

    #[test]
    fn sample_profile_matches_known_output() {
        let centers = EnergyCenters {
            root: EnergyCenter::new(60, 70, 30),
            sacral: EnergyCenter::new(55, 65, 25),
            solar_plexus: EnergyCenter::new(75, 80, 20),
            heart: EnergyCenter::new(85, 90, 15),
            throat: EnergyCenter::new(70, 75, 25),
            third_eye: EnergyCenter::new(80, 85, 10),
            crown: EnergyCenter::new(90, 95, 5),
        };
        let profile = ProfileGenerator::generate(&centers);

        // balances sum to 560 -> 80
        assert_eq!(profile.overall_balance, 80);
        // net sum 945 / 14 = 67.5
        assert_eq!(profile.overall_level, SpiritualLevel::DevelopingSoul);
        assert_eq!(profile.dominant_chakra.chakra(), Chakra::Crown);
        assert!(profile.personality.traits[0].contains("personal power"));
        assert_eq!(profile.healing.practices[2], texts::healing_focus(Chakra::Root).practice);
    }

    fn arb_center() -> impl Strategy<Value = EnergyCenter> {
        (0..=100i32, 0..=100i32, 0..=100i32).prop_map(|(f, b, bl)| EnergyCenter::new(f, b, bl))
    }

    fn arb_centers() -> impl Strategy<Value = EnergyCenters> {
        proptest::array::uniform7(arb_center()).prop_map(|c| EnergyCenters {
            root: c[0],
            sacral: c[1],
            solar_plexus: c[2],
            heart: c[3],
            throat: c[4],
            third_eye: c[5],
            crown: c[6],
        })
    }

    proptest! {
        #[test]
        fn overall_balance_is_rounded_mean(centers in arb_centers()) {
            let profile = ProfileGenerator::generate(&centers);
            let sum: i32 = centers.iter().map(|(_, c)| c.balance).sum();
            prop_assert!((0..=100).contains(&profile.overall_balance));
            prop_assert!((f64::from(profile.overall_balance) - f64::from(sum) / 7.0).abs() <= 0.5);
        }

        #[test]
        fn any_readings_produce_a_profile(values in proptest::array::uniform21(any::<i32>())) {
            let center = |i: usize| EnergyCenter::new(values[i], values[i + 1], values[i + 2]);
            let centers = EnergyCenters {
                root: center(0),
                sacral: center(3),
                solar_plexus: center(6),
                heart: center(9),
                throat: center(12),
                third_eye: center(15),
                crown: center(18),
            };
            let profile = ProfileGenerator::generate(&centers);
            prop_assert!(profile.personality.traits.len() <= MAX_TRAITS);
        }

        #[test]
        fn generation_is_deterministic(centers in arb_centers()) {
            prop_assert_eq!(ProfileGenerator::generate(&centers), ProfileGenerator::generate(&centers));
        }

        #[test]
        fn lists_respect_limits(centers in arb_centers()) {
            let profile = ProfileGenerator::generate(&centers);
            prop_assert!(profile.personality.traits.len() <= MAX_TRAITS);
            prop_assert!(profile.personality.behaviors.len() <= MAX_BEHAVIORS);
            prop_assert!(profile.spiritual.insights.len() <= MAX_INSIGHTS);
            prop_assert!(profile.healing.practices.len() <= MAX_PRACTICES);
            prop_assert!(profile.healing.growth_areas.len() <= MAX_GROWTH_AREAS);
        }

        #[test]
        fn dominant_has_maximal_score(centers in arb_centers()) {
            let dominant = ProfileGenerator::dominant_chakra(&centers);
            let best = centers.iter().map(|(_, c)| c.score()).max().unwrap_or(0).max(0);
            if best > 0 {
                prop_assert_eq!(centers.get(dominant).score(), best);
                let first = centers.iter().find(|(_, c)| c.score() == best).map(|(k, _)| k);
                prop_assert_eq!(Some(dominant), first);
            } else {
                prop_assert_eq!(dominant, Chakra::Root);
            }
        }
    }
}
