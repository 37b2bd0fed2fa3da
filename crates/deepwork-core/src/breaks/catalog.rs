//! Static break activity catalog.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::energy::EnergyTier;
use crate::error::ValidationError;

/// Kind of break activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakCategory {
    Active,
    Relaxing,
    Mental,
    Social,
}

impl BreakCategory {
    pub const ALL: [BreakCategory; 4] = [
        BreakCategory::Active,
        BreakCategory::Relaxing,
        BreakCategory::Mental,
        BreakCategory::Social,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BreakCategory::Active => "active",
            BreakCategory::Relaxing => "relaxing",
            BreakCategory::Mental => "mental",
            BreakCategory::Social => "social",
        }
    }
}

impl std::fmt::Display for BreakCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BreakCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        BreakCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| {
                let names: Vec<_> = BreakCategory::ALL.iter().map(|c| c.as_str()).collect();
                ValidationError::invalid_value(
                    "break_type",
                    format!("Invalid break_type '{s}'. Must be one of: {}", names.join(", ")),
                )
            })
    }
}

/// Where an activity happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Desk,
    Indoors,
    Outdoors,
}

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakRecord {
    pub name: &'static str,
    pub description: &'static str,
    pub duration_minutes: u32,
    pub category: BreakCategory,
    pub energy_required: EnergyTier,
    pub location: Location,
}

const fn record(
    name: &'static str,
    description: &'static str,
    duration_minutes: u32,
    category: BreakCategory,
    energy_required: EnergyTier,
    location: Location,
) -> BreakRecord {
    BreakRecord {
        name,
        description,
        duration_minutes,
        category,
        energy_required,
        location,
    }
}

use BreakCategory::*;
use EnergyTier::*;
use Location::*;

/// The fixed activity catalog. Iteration order matters for seeded draws.
pub static ACTIVITIES: [BreakRecord; 16] = [
    record("Desk stretches", "Roll your shoulders, stretch your wrists and neck.", 5, Active, Low, Desk),
    record("Stair climb", "Walk up and down a few flights of stairs.", 5, Active, High, Indoors),
    record("Brisk walk", "Take a quick loop around the block.", 10, Active, Medium, Outdoors),
    record("Bodyweight circuit", "Squats, push-ups and lunges at an easy pace.", 15, Active, High, Indoors),
    record("Box breathing", "Inhale, hold, exhale and hold for four counts each.", 5, Relaxing, Low, Desk),
    record("Eye rest", "Look at something twenty feet away and let your eyes relax.", 5, Relaxing, Low, Desk),
    record("Tea break", "Make a hot drink and enjoy it away from the screen.", 10, Relaxing, Medium, Indoors),
    record("Power nap", "Lie down with a timer set and close your eyes.", 20, Relaxing, Low, Indoors),
    record("Quick doodle", "Sketch anything that comes to mind.", 5, Mental, Medium, Desk),
    record("Puzzle", "Solve a short logic puzzle or crossword clue.", 10, Mental, Medium, Desk),
    record("Read a chapter", "Read something unrelated to work.", 15, Mental, Low, Indoors),
    record("Learn a chord", "Pick up an instrument and practice something new.", 15, Mental, High, Indoors),
    record("Message a friend", "Send a quick note to someone you haven't talked to lately.", 5, Social, Low, Desk),
    record("Coffee chat", "Grab a coworker for a short non-work conversation.", 10, Social, Medium, Indoors),
    record("Walk and talk", "Call a friend while walking outside.", 15, Social, Medium, Outdoors),
    record("Lunch with the team", "Share a meal with colleagues, no laptops allowed.", 30, Social, High, Indoors),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_is_present() {
        for category in BreakCategory::ALL {
            assert!(ACTIVITIES.iter().any(|a| a.category == category));
        }
    }

    #[test]
    fn durations_are_positive() {
        assert!(ACTIVITIES.iter().all(|a| a.duration_minutes > 0));
    }

    #[test]
    fn empty_break_type_is_rejected() {
        let err = "".parse::<BreakCategory>().unwrap_err();
        assert_eq!(err.field(), "break_type");
        assert!(err.to_string().contains("Invalid break_type"));
        assert_eq!("Active".parse::<BreakCategory>().unwrap(), Active);
    }
}
