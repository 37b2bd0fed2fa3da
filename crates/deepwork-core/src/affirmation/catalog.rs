//! Static affirmation catalog and mood preferences.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::energy::EnergyTier;
use crate::error::ValidationError;

/// Placeholder replaced by the user's name.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Affirmation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Motivation,
    Confidence,
    Persistence,
    SelfCare,
    Growth,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Motivation,
        Category::Confidence,
        Category::Persistence,
        Category::SelfCare,
        Category::Growth,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Motivation => "motivation",
            Category::Confidence => "confidence",
            Category::Persistence => "persistence",
            Category::SelfCare => "self-care",
            Category::Growth => "growth",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| {
                ValidationError::invalid_value(
                    "category",
                    format!("Invalid category '{s}'. Must be one of: {}", joined(Category::ALL.map(Category::as_str))),
                )
            })
    }
}

/// Current mood reported by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Stressed,
    Anxious,
    Tired,
    Frustrated,
    Motivated,
    Neutral,
}

impl Mood {
    pub const ALL: [Mood; 7] = [
        Mood::Happy,
        Mood::Stressed,
        Mood::Anxious,
        Mood::Tired,
        Mood::Frustrated,
        Mood::Motivated,
        Mood::Neutral,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Stressed => "stressed",
            Mood::Anxious => "anxious",
            Mood::Tired => "tired",
            Mood::Frustrated => "frustrated",
            Mood::Motivated => "motivated",
            Mood::Neutral => "neutral",
        }
    }

    /// Categories favoured for this mood, most preferred first.
    pub fn preferred_categories(self) -> &'static [Category] {
        match self {
            Mood::Happy => &[Category::Motivation, Category::Growth],
            Mood::Stressed => &[Category::SelfCare, Category::Persistence],
            Mood::Anxious => &[Category::Confidence, Category::SelfCare],
            Mood::Tired => &[Category::SelfCare],
            Mood::Frustrated => &[Category::Persistence, Category::Growth],
            Mood::Motivated => &[Category::Motivation, Category::Confidence],
            Mood::Neutral => &[Category::Growth, Category::Motivation],
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|m| m.as_str() == lower)
            .ok_or_else(|| {
                ValidationError::invalid_value(
                    "mood",
                    format!("Invalid mood '{s}'. Must be one of: {}", joined(Mood::ALL.map(Mood::as_str))),
                )
            })
    }
}

fn joined<const N: usize>(names: [&str; N]) -> String {
    names.join(", ")
}

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffirmationRecord {
    pub template: &'static str,
    pub category: Category,
    pub energy_tier: EnergyTier,
}

const fn record(template: &'static str, category: Category, energy_tier: EnergyTier) -> AffirmationRecord {
    AffirmationRecord {
        template,
        category,
        energy_tier,
    }
}

use Category::*;
use EnergyTier::*;

/// The fixed affirmation catalog. Iteration order matters for seeded draws.
pub static CATALOG: [AffirmationRecord; 30] = [
    // motivation
    record("Small commits still move the project forward, {name}.", Motivation, Low),
    record("One function at a time is still progress, {name}.", Motivation, Low),
    record("You've shipped before and you'll ship again, {name}.", Motivation, Medium),
    record("Today's code is tomorrow's foundation, {name}.", Motivation, Medium),
    record("Go build something great today, {name}!", Motivation, High),
    record("This is your sprint, {name}. Own it!", Motivation, High),
    // confidence
    record("You know more than you think you do, {name}.", Confidence, Low),
    record("Your instincts about this code are worth trusting, {name}.", Confidence, Low),
    record("You solved harder problems than this one, {name}.", Confidence, Medium),
    record("Your reviews make the whole team better, {name}.", Confidence, Medium),
    record("You are exactly the engineer this problem needs, {name}!", Confidence, High),
    record("No stack trace can stand against you, {name}!", Confidence, High),
    // persistence
    record("The bug will surrender eventually, {name}.", Persistence, Low),
    record("Slow debugging is still debugging, {name}.", Persistence, Low),
    record("Every failed test narrows the search, {name}.", Persistence, Medium),
    record("Keep going, {name}. The fix is closer than it looks.", Persistence, Medium),
    record("Push through, {name}. That green build is yours!", Persistence, High),
    record("Relentless beats clever every time, {name}!", Persistence, High),
    // self-care
    record("It's okay to step away from the screen, {name}.", SelfCare, Low),
    record("Rest is part of the work, {name}.", SelfCare, Low),
    record("A glass of water and a stretch will help, {name}.", SelfCare, Medium),
    record("Your wellbeing matters more than any deadline, {name}.", SelfCare, Medium),
    record("Channel that energy, {name}, and remember to breathe.", SelfCare, High),
    record("Take a brisk walk and come back sharper, {name}!", SelfCare, High),
    // growth
    record("Every error message is a lesson, {name}.", Growth, Low),
    record("Learning slowly is still learning, {name}.", Growth, Low),
    record("You are a better developer than you were last month, {name}.", Growth, Medium),
    record("Each refactor sharpens your craft, {name}.", Growth, Medium),
    record("Tackle that unfamiliar codebase, {name}. You'll grow fast!", Growth, High),
    record("Today is a great day to learn something new, {name}!", Growth, High),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_has_placeholder() {
        for rec in CATALOG.iter() {
            assert!(rec.template.contains(NAME_PLACEHOLDER), "{}", rec.template);
        }
    }

    #[test]
    fn every_category_and_tier_is_covered() {
        for category in Category::ALL {
            for tier in [Low, Medium, High] {
                assert!(
                    CATALOG.iter().any(|r| r.category == category && r.energy_tier == tier),
                    "missing {category}/{tier}"
                );
            }
        }
    }

    #[test]
    fn mood_preferences_are_short_and_distinct() {
        for mood in Mood::ALL {
            let prefs = mood.preferred_categories();
            assert!((1..=2).contains(&prefs.len()));
            if prefs.len() == 2 {
                assert_ne!(prefs[0], prefs[1]);
            }
        }
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("STRESSED".parse::<Mood>().unwrap(), Mood::Stressed);
        assert_eq!("Self-Care".parse::<Category>().unwrap(), Category::SelfCare);
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = "invalid".parse::<Mood>().unwrap_err();
        assert_eq!(err.field(), "mood");
        assert!(err.to_string().contains("Invalid mood"));

        let err = "invalid".parse::<Category>().unwrap_err();
        assert_eq!(err.field(), "category");
        assert!(err.to_string().contains("Invalid category"));
    }
}
