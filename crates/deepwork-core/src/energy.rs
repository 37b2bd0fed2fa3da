//! Energy tiers.
//!
//! A 1-10 energy score is bucketed into three ordered tiers. Both the
//! affirmation selector and the break suggester weight catalog entries by
//! how close an entry's tier is to the caller's.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Lowest accepted energy score.
pub const MIN_ENERGY: i64 = 1;
/// Highest accepted energy score.
pub const MAX_ENERGY: i64 = 10;

/// Coarse energy bucket, ordered low < medium < high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyTier {
    Low,
    Medium,
    High,
}

impl EnergyTier {
    /// Resolve the tier for an energy score.
    ///
    /// 1-3 is low, 4-7 medium, 8-10 high. `field` names the argument in the
    /// error when the score is outside `[1, 10]`.
    pub fn from_level(level: i64, field: &str) -> Result<Self, ValidationError> {
        match level {
            1..=3 => Ok(EnergyTier::Low),
            4..=7 => Ok(EnergyTier::Medium),
            8..=10 => Ok(EnergyTier::High),
            _ => Err(ValidationError::invalid_value(
                field,
                format!("{field} must be between {MIN_ENERGY} and {MAX_ENERGY}, got {level}"),
            )),
        }
    }

    fn ordinal(self) -> i32 {
        match self {
            EnergyTier::Low => 0,
            EnergyTier::Medium => 1,
            EnergyTier::High => 2,
        }
    }

    /// Number of steps between two tiers in the low/medium/high ordering.
    pub fn distance(self, other: EnergyTier) -> u32 {
        (self.ordinal() - other.ordinal()).unsigned_abs()
    }

    /// Weight multiplier for an entry of tier `self` when the target is `target`.
    ///
    /// 2.0 for an exact match, 1.5 for an adjacent tier, 1.0 otherwise.
    pub fn fit_multiplier(self, target: EnergyTier) -> f64 {
        match self.distance(target) {
            0 => 2.0,
            1 => 1.5,
            _ => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EnergyTier::Low => "low",
            EnergyTier::Medium => "medium",
            EnergyTier::High => "high",
        }
    }
}

impl std::fmt::Display for EnergyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
