//! Seeded weighted draws.
//!
//! Every call that needs randomness builds its own generator, so a seeded
//! call is reproducible no matter what other calls run before or beside it.

use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;

/// Build an isolated generator, from `seed` when given, otherwise from OS entropy.
pub fn rng_for(seed: Option<u64>) -> Mcg128Xsl64 {
    match seed {
        Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
        None => Mcg128Xsl64::from_entropy(),
    }
}

/// Pick an index by cumulative weight.
///
/// Draws a single `r` uniformly from `[0, total)` and walks `weights` in
/// order, returning the first index whose running sum reaches `r`. Falls
/// back to the last index when floating point rounding leaves the walk
/// short. Returns `None` only for an empty slice.
pub fn weighted_index<R: Rng + ?Sized>(rng: &mut R, weights: &[f64]) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }

    let total: f64 = weights.iter().sum();
    let r = if total > 0.0 { rng.gen_range(0.0..total) } else { 0.0 };

    let mut cumulative = 0.0;
    for (index, weight) in weights.iter().enumerate() {
        cumulative += weight;
        if cumulative >= r {
            return Some(index);
        }
    }
    Some(weights.len() - 1)
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
