//! Canned sentences used by the profile generator.

use crate::domain::energy::Chakra;

/// A trait sentence and the behavior sentence that accompanies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalityPair {
    pub trait_text: &'static str,
    pub behavior: &'static str,
}

/// Healing guidance tied to the most blocked center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealingFocus {
    pub practice: &'static str,
    pub growth: &'static str,
}

/// Pair contributed when a center's frequency is high.
pub fn open_personality(chakra: Chakra) -> PersonalityPair {
    let (trait_text, behavior) = match chakra {
        Chakra::Root => (
            "You have a strong foundation and feel secure in your physical existence.",
            "You approach challenges with practical wisdom and grounded thinking.",
        ),
        Chakra::Sacral => (
            "You express creativity freely and maintain healthy emotional boundaries.",
            "You embrace pleasure and intimacy with balanced enthusiasm.",
        ),
        Chakra::SolarPlexus => (
            "You possess strong personal power and confident self-expression.",
            "You take initiative and make decisions with clarity and purpose.",
        ),
        Chakra::Heart => (
            "You radiate love and compassion, creating harmonious relationships.",
            "You offer support to others naturally and practice forgiveness easily.",
        ),
        Chakra::Throat => (
            "You communicate truth with clarity and express yourself authentically.",
            "You speak up for your beliefs and listen actively to others.",
        ),
        Chakra::ThirdEye => (
            "You possess strong intuition and see beyond surface appearances.",
            "You trust your inner wisdom and make decisions from deep knowing.",
        ),
        Chakra::Crown => (
            "You feel connected to universal consciousness and divine purpose.",
            "You seek meaning through spiritual practice and service to others.",
        ),
    };
    PersonalityPair { trait_text, behavior }
}

/// Pair contributed when a center is heavily blocked.
pub fn blocked_personality(chakra: Chakra) -> PersonalityPair {
    let (trait_text, behavior) = match chakra {
        Chakra::Root => (
            "You may struggle with feelings of insecurity or survival fears.",
            "You tend to worry about basic needs and material security.",
        ),
        Chakra::Sacral => (
            "You may experience creative blocks or emotional numbness.",
            "You might avoid emotional intimacy or struggle with guilt around pleasure.",
        ),
        Chakra::SolarPlexus => (
            "You may struggle with low self-esteem or feelings of powerlessness.",
            "You tend to second-guess yourself and avoid taking leadership roles.",
        ),
        Chakra::Heart => (
            "You may have difficulty trusting others or expressing love freely.",
            "You tend to build walls to protect yourself from emotional hurt.",
        ),
        Chakra::Throat => (
            "You may struggle to express your truth or fear being judged.",
            "You tend to remain silent when you should speak up.",
        ),
        Chakra::ThirdEye => (
            "You may struggle with confusion or difficulty accessing intuitive insights.",
            "You tend to overthink and rely too heavily on logical analysis.",
        ),
        Chakra::Crown => (
            "You may feel spiritually disconnected or question life's greater purpose.",
            "You tend to focus only on material concerns and dismiss spiritual matters.",
        ),
    };
    PersonalityPair { trait_text, behavior }
}

pub fn healing_focus(chakra: Chakra) -> HealingFocus {
    let (practice, growth) = match chakra {
        Chakra::Root => (
            "Spend time in nature, practice yoga poses like child's pose and mountain pose.",
            "Work on building financial security and stable relationships.",
        ),
        Chakra::Sacral => (
            "Engage in creative activities, dance, and practice hip-opening yoga poses.",
            "Explore healthy expressions of sexuality and emotional intimacy.",
        ),
        Chakra::SolarPlexus => (
            "Practice power poses, affirmations, and core-strengthening exercises.",
            "Develop leadership skills and practice setting healthy boundaries.",
        ),
        Chakra::Heart => (
            "Practice loving-kindness meditation and heart-opening yoga poses.",
            "Work on forgiveness practices and opening to deeper relationships.",
        ),
        Chakra::Throat => (
            "Practice chanting, singing, or journaling to express your truth.",
            "Work on authentic communication and creative self-expression.",
        ),
        Chakra::ThirdEye => (
            "Practice meditation, visualization, and dream work to enhance intuition.",
            "Develop psychic abilities and trust in your inner knowing.",
        ),
        Chakra::Crown => (
            "Engage in prayer, meditation, and study of spiritual texts.",
            "Explore your connection to the divine and life's greater purpose.",
        ),
    };
    HealingFocus { practice, growth }
}

pub const HARMONIOUS_INSIGHTS: [&str; 2] = [
    "Your energy centers show remarkable harmony, indicating advanced spiritual development.",
    "You have integrated many of your lessons and serve as a beacon for others.",
];

pub const PROGRESSING_INSIGHTS: [&str; 2] = [
    "You are making steady progress on your spiritual journey with growing awareness.",
    "Continue working on balancing your energy centers for deeper insights.",
];

pub const AWAKENING_INSIGHTS: [&str; 2] = [
    "You are at the beginning of a beautiful spiritual awakening.",
    "Focus on healing and opening your energy centers gradually and lovingly.",
];

pub const ADVANCED_LEVEL_INSIGHT: &str =
    "You may be called to teach or guide others on their spiritual paths.";
pub const DEVELOPING_LEVEL_INSIGHT: &str =
    "This is an excellent time to deepen your meditation and self-reflection practices.";
pub const EARLY_LEVEL_INSIGHT: &str =
    "Begin with simple mindfulness practices and gentle energy work.";

pub const GROUNDING_PRACTICES: [&str; 2] = [
    "Begin each day with 10 minutes of grounding meditation to stabilize your energy.",
    "Practice deep breathing exercises to clear energetic blockages.",
];

pub const MAINTENANCE_PRACTICES: [&str; 2] = [
    "Maintain your progress with daily energy alignment practices.",
    "Consider energy healing modalities like Reiki or crystal work.",
];

pub const UNIVERSAL_GROWTH: [&str; 2] = [
    "Continue regular spiritual practice to maintain and deepen your growth.",
    "Consider working with a spiritual teacher or joining a like-minded community.",
];

/// Sentence stored in `spiritual.level`.
pub fn level_statement(level_label: &str) -> String {
    format!(
        "You are currently at the \"{}\" stage of spiritual development. \
         This indicates your readiness for specific types of growth and service.",
        level_label
    )
}
