//! Personalized affirmation selection.
//!
//! Picks one entry from the static [`CATALOG`] with a weighted random draw.
//! Entries in the categories preferred for the caller's mood (or the
//! explicitly requested category) and entries matching the caller's energy
//! tier are weighted up. The draw uses a per-call generator, so the same
//! seed always yields the same affirmation.

mod catalog;

pub use catalog::{AffirmationRecord, Category, Mood, CATALOG, NAME_PLACEHOLDER};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::draw::{rng_for, round2, weighted_index};
use crate::energy::EnergyTier;
use crate::error::ValidationError;

/// Name used when the caller's name is blank.
pub const DEFAULT_NAME: &str = "Developer";

const PRIMARY_CATEGORY_WEIGHT: f64 = 3.0;
const SECONDARY_CATEGORY_WEIGHT: f64 = 2.0;
const OTHER_CATEGORY_WEIGHT: f64 = 0.5;

/// Input for [`select_affirmation`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffirmationRequest {
    pub name: String,
    pub mood: Mood,
    /// Energy on a 1-10 scale.
    pub energy: i64,
    /// Overrides the mood's preferred categories when set.
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl AffirmationRequest {
    pub fn new(name: impl Into<String>, mood: Mood, energy: i64) -> Self {
        Self {
            name: name.into(),
            mood,
            energy,
            category: None,
            seed: None,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// A selected, personalized affirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Affirmation {
    pub text: String,
    pub category: Category,
    /// How well the pick matches the request, in `[0, 1]`.
    pub mood_alignment: f64,
}

/// Select a personalized affirmation.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidValue`] for `energy` outside `[1, 10]`.
/// Nothing is drawn when validation fails.
pub fn select_affirmation(request: &AffirmationRequest) -> Result<Affirmation, ValidationError> {
    let tier = EnergyTier::from_level(request.energy, "energy")?;
    let mut rng = rng_for(request.seed);

    let name = normalize_name(&request.name);
    let preferred: &[Category] = match &request.category {
        Some(category) => std::slice::from_ref(category),
        None => request.mood.preferred_categories(),
    };

    let candidates = candidates(preferred, tier);
    let weights: Vec<f64> = candidates.iter().map(|(_, w)| *w).collect();
    let index = weighted_index(&mut rng, &weights).unwrap_or(0);
    let picked = candidates[index].0;

    let category_match = preferred.contains(&picked.category);
    let tier_match = picked.energy_tier == tier;
    let mood_alignment = mood_alignment(category_match, tier_match);

    debug!(
        mood = %request.mood,
        tier = %tier,
        category = %picked.category,
        mood_alignment,
        "selected affirmation"
    );

    Ok(Affirmation {
        text: picked.template.replace(NAME_PLACEHOLDER, &name),
        category: picked.category,
        mood_alignment,
    })
}

/// Weight multiplier for a category given the ordered preference list.
pub fn category_weight(category: Category, preferred: &[Category]) -> f64 {
    match preferred.iter().position(|c| *c == category) {
        Some(0) => PRIMARY_CATEGORY_WEIGHT,
        Some(_) => SECONDARY_CATEGORY_WEIGHT,
        None => OTHER_CATEGORY_WEIGHT,
    }
}

/// Catalog entries with positive weight, in catalog order.
///
/// Falls back to the entries of the target tier, then to the whole catalog,
/// should weighting ever leave nothing to draw from.
fn candidates(preferred: &[Category], tier: EnergyTier) -> Vec<(&'static AffirmationRecord, f64)> {
    let weighted: Vec<_> = CATALOG
        .iter()
        .map(|rec| (rec, category_weight(rec.category, preferred) * rec.energy_tier.fit_multiplier(tier)))
        .filter(|(_, weight)| *weight > 0.0)
        .collect();
    if !weighted.is_empty() {
        return weighted;
    }

    let same_tier: Vec<_> = CATALOG
        .iter()
        .filter(|rec| rec.energy_tier == tier)
        .map(|rec| (rec, 1.0))
        .collect();
    if !same_tier.is_empty() {
        return same_tier;
    }

    CATALOG.iter().map(|rec| (rec, 1.0)).collect()
}

fn mood_alignment(category_match: bool, tier_match: bool) -> f64 {
    let mut score = 0.5;
    if category_match {
        score += 0.3;
    }
    if tier_match {
        score += 0.2;
    }
    round2(f64::min(1.0, score))
}

/// Trim and title-case a name, substituting [`DEFAULT_NAME`] when blank.
pub fn normalize_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        title_case(trimmed)
    }
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}
