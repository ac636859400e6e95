//! Shared sampling primitives.
//!
//! Every mode reduces to picking `k` positions out of a universe of candidate
//! indices: permute the universe uniformly, then keep the prefix.
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Rounding slack, in units of `f64::EPSILON` relative to the product, under
/// which `total * (1 - sparsity)` is treated as the integer it is closest to.
const SNAP_ULPS: f64 = 4.0;

/// Build the generator for a single call.
pub fn seedable_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(value) => StdRng::seed_from_u64(value),
        None => StdRng::from_entropy(),
    }
}

/// Shuffle `universe` and keep the first `k` entries (or all of them if `k`
/// exceeds its length).
pub fn sample_positions<R: Rng + ?Sized>(
    mut universe: Vec<usize>,
    k: usize,
    rng: &mut R,
) -> Vec<usize> {
    universe.shuffle(rng);
    universe.truncate(k.min(universe.len()));
    universe
}

/// Number of ones a matrix of `total` cells holds at the given sparsity,
/// `floor(total * (1 - sparsity))`, clamped to `[0, total]`.
pub fn target_ones(total: usize, sparsity: f64) -> usize {
    let raw = total as f64 * (1.0 - sparsity);
    let nearest = raw.round();
    let count = if (raw - nearest).abs() <= SNAP_ULPS * f64::EPSILON * raw.abs().max(1.0) {
        nearest
    } else {
        raw.floor()
    };
    (count.max(0.0) as usize).min(total)
}
