//! Break activity suggestions.
//!
//! Draws one activity from the static [`ACTIVITIES`] catalog, favouring
//! activities that suit the caller's energy and whose length fits how long
//! they have been working.

mod catalog;

pub use catalog::{BreakCategory, BreakRecord, Location, ACTIVITIES};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::draw::{rng_for, weighted_index};
use crate::energy::EnergyTier;
use crate::error::ValidationError;

const LENGTH_MATCH_WEIGHT: f64 = 2.0;

/// Coarse break length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakLength {
    /// Up to 5 minutes
    Short,
    /// 6 to 10 minutes
    Medium,
    /// More than 10 minutes
    Long,
}

impl BreakLength {
    /// Length bucket of an activity's duration.
    pub fn of_duration(minutes: u32) -> Self {
        match minutes {
            0..=5 => BreakLength::Short,
            6..=10 => BreakLength::Medium,
            _ => BreakLength::Long,
        }
    }

    /// Recommended break length after `minutes_worked` of focus.
    pub fn recommended(minutes_worked: u32) -> Self {
        match minutes_worked {
            0..=44 => BreakLength::Short,
            45..=89 => BreakLength::Medium,
            _ => BreakLength::Long,
        }
    }
}

/// Input for [`suggest_break`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakRequest {
    pub minutes_worked: u32,
    /// Energy on a 1-10 scale.
    pub energy_level: i64,
    /// Restricts the draw to one category.
    #[serde(default)]
    pub break_type: Option<BreakCategory>,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl BreakRequest {
    pub fn new(minutes_worked: u32, energy_level: i64) -> Self {
        Self {
            minutes_worked,
            energy_level,
            break_type: None,
            seed: None,
        }
    }

    pub fn with_break_type(mut self, break_type: BreakCategory) -> Self {
        self.break_type = Some(break_type);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// A suggested break activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakActivity {
    pub name: String,
    pub description: String,
    pub duration_minutes: u32,
    pub category: BreakCategory,
    pub energy_required: EnergyTier,
    pub location: Location,
}

impl From<&BreakRecord> for BreakActivity {
    fn from(rec: &BreakRecord) -> Self {
        Self {
            name: rec.name.to_string(),
            description: rec.description.to_string(),
            duration_minutes: rec.duration_minutes,
            category: rec.category,
            energy_required: rec.energy_required,
            location: rec.location,
        }
    }
}

/// Suggest a break activity.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidValue`] for `energy_level` outside
/// `[1, 10]`.
pub fn suggest_break(request: &BreakRequest) -> Result<BreakActivity, ValidationError> {
    let tier = EnergyTier::from_level(request.energy_level, "energy_level")?;
    let wanted = BreakLength::recommended(request.minutes_worked);
    let mut rng = rng_for(request.seed);

    let candidates: Vec<&BreakRecord> = ACTIVITIES
        .iter()
        .filter(|a| request.break_type.map_or(true, |t| a.category == t))
        .collect();
    let weights: Vec<f64> = candidates
        .iter()
        .map(|a| {
            let length_fit = if BreakLength::of_duration(a.duration_minutes) == wanted {
                LENGTH_MATCH_WEIGHT
            } else {
                1.0
            };
            a.energy_required.fit_multiplier(tier) * length_fit
        })
        .collect();

    // every category has catalog entries, so the candidate list is never empty
    let index = weighted_index(&mut rng, &weights).unwrap_or(0);
    let picked = candidates.get(index).copied().unwrap_or(&ACTIVITIES[0]);

    debug!(
        minutes_worked = request.minutes_worked,
        tier = %tier,
        activity = picked.name,
        "suggested break"
    );
    Ok(BreakActivity::from(picked))
}
