//! Blockage check: frequency answers per center turned into tiered
//! practice recommendations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::energy::Chakra;

/// Questions asked per center.
pub const BLOCKAGE_QUESTIONS_PER_CENTER: usize = 4;

/// Score from which a center also gets the deeper-exploration line.
pub const DEEPER_EXPLORATION_THRESHOLD: u8 = 4;

/// How often a blockage symptom shows up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occurrence {
    Rarely,
    Sometimes,
    Often,
    #[serde(rename = "Very Often")]
    VeryOften,
}

impl Occurrence {
    pub fn weight(&self) -> u8 {
        match self {
            Occurrence::Rarely => 0,
            Occurrence::Sometimes => 1,
            Occurrence::Often => 2,
            Occurrence::VeryOften => 3,
        }
    }
}

/// Answers keyed by center. Unanswered slots weigh nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockageCheck {
    answers: BTreeMap<Chakra, [Option<Occurrence>; BLOCKAGE_QUESTIONS_PER_CENTER]>,
}

/// Recommendations for one center with a non-zero score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterRecommendations {
    pub chakra: Chakra,
    pub score: u8,
    pub recommendations: Vec<String>,
}

impl BlockageCheck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one answer. Returns `false` when `question` is out of range.
    pub fn answer(&mut self, chakra: Chakra, question: usize, occurrence: Occurrence) -> bool {
        match self.answers.entry(chakra).or_default().get_mut(question) {
            Some(slot) => {
                *slot = Some(occurrence);
                true
            }
            None => false,
        }
    }

    /// Summed weights for a center, `0..=12`.
    pub fn score(&self, chakra: Chakra) -> u8 {
        self.answers
            .get(&chakra)
            .map(|slots| slots.iter().flatten().map(Occurrence::weight).sum())
            .unwrap_or(0)
    }

    /// Recommendations for every center scoring above zero, root to crown.
    pub fn recommendations(&self) -> Vec<CenterRecommendations> {
        Chakra::ALL
            .iter()
            .filter_map(|&chakra| {
                let score = self.score(chakra);
                (score > 0).then(|| CenterRecommendations {
                    chakra,
                    score,
                    recommendations: recommendations_for(chakra, score),
                })
            })
            .collect()
    }
}

fn recommendations_for(chakra: Chakra, score: u8) -> Vec<String> {
    let name = chakra.display_name();
    let mut lines = vec![format!("Focus on practices to balance your {}.", name)];
    if score >= DEEPER_EXPLORATION_THRESHOLD {
        lines.push(format!(
            "Consider deeper exploration and dedicated practices for {} healing.",
            name
        ));
    }
    // Tier n applies from score n.
    lines.extend(
        tiered_practices(chakra)
            .iter()
            .take(usize::from(score))
            .map(|s| s.to_string()),
    );
    lines
}

fn tiered_practices(chakra: Chakra) -> [&'static str; 5] {
    match chakra {
        Chakra::Root => [
            "Meditate on the color red or the Muladhara mantra LAM.",
            "Engage in grounding activities like walking in nature, gardening, or yoga poses such as Mountain Pose or Warrior I.",
            "Use grounding crystals like Red Jasper, Black Tourmaline, or Hematite.",
            "Explore journaling about your sense of safety, security, and belonging.",
            "Consider working with a therapist to address deep-seated fears or insecurities.",
        ],
        Chakra::Sacral => [
            "Meditate on the color orange or the Svadhisthana mantra VAM.",
            "Engage in creative activities like painting, drawing, writing, or playing music.",
            "Practice mindful movement or dance to connect with your body and emotions.",
            "Use sacral chakra crystals like Carnelian, Orange Calcite, or Sunstone.",
            "Explore healthy expressions of sensuality and pleasure without guilt.",
        ],
        Chakra::SolarPlexus => [
            "Meditate on the color yellow or the Manipura mantra RAM.",
            "Practice affirmations for self-esteem and personal power.",
            "Engage in core-strengthening exercises or yoga poses like Boat Pose or Warrior III.",
            "Use solar plexus crystals like Citrine, Tiger's Eye, or Yellow Jasper.",
            "Work with a coach or therapist to address control issues, boundaries, and assertiveness.",
        ],
        Chakra::Heart => [
            "Meditate on the color green or the Anahata mantra YAM.",
            "Practice loving-kindness meditation towards yourself and others.",
            "Engage in acts of service and compassion.",
            "Use heart chakra crystals like Rose Quartz, Green Aventurine, or Emerald.",
            "Explore forgiveness practices for deep emotional healing and releasing grudges.",
        ],
        Chakra::Throat => [
            "Meditate on the color blue or the Vishuddha mantra HAM.",
            "Practice vocal exercises, singing, chanting, or humming.",
            "Journaling or writing down your thoughts and feelings.",
            "Practice mindful listening and assertive, honest communication.",
            "Consider working with a speech therapist or communication coach.",
        ],
        Chakra::ThirdEye => [
            "Meditate on the color indigo or the Ajna mantra OM.",
            "Engage in meditation and mindfulness practices to quiet the mind.",
            "Pay attention to your dreams, synchronicities, and intuitive nudges.",
            "Use third eye crystals like Amethyst, Lapis Lazuli, or Sodalite.",
            "Explore practices like visualization and creative imagination exercises.",
        ],
        Chakra::Crown => [
            "Meditate on the color violet or white, or the Sahasrara mantra OM.",
            "Engage in spiritual practices such as meditation, prayer, or contemplation.",
            "Spend time in nature and cultivate a sense of awe and wonder.",
            "Seek knowledge and wisdom from spiritual texts or teachers.",
            "Practice being present in the moment and cultivating a sense of oneness.",
        ],
    }
}
