//! Constrained randomization of binary matrices.
//!
//! `randomize` returns a newly allocated matrix of the input's shape whose ones
//! have been repositioned under the selected [`Mode`]:
//!
//! * `Row` keeps each row's ones count,
//! * `Column` keeps each column's ones count,
//! * `Global` keeps the total ones count,
//! * `Sparsity` places `floor(R*C*(1 - sparsity))` ones regardless of the
//!   input's own count; only the input's shape is used.
//!
//! All four reduce to [`sample_positions`] over a different universe.
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::RandomizationError;
use crate::math::BinaryMatrix;
use crate::sampling::{sample_positions, seedable_rng, target_ones};

/// Which aggregate of the original matrix survives the shuffle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Row,
    Column,
    Global,
    Sparsity,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Row => "row",
            Mode::Column => "column",
            Mode::Global => "global",
            Mode::Sparsity => "sparsity",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = RandomizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "row" => Ok(Mode::Row),
            "column" => Ok(Mode::Column),
            "global" => Ok(Mode::Global),
            "sparsity" => Ok(Mode::Sparsity),
            _ => Err(RandomizationError::InvalidMode(s.to_string())),
        }
    }
}

/// Resolved work for one call, decided after validation.
enum Plan {
    Rows,
    Columns,
    Flat(usize),
}

/// Shuffle the ones of `original` according to `mode`.
///
/// A fresh generator is created for the call: seeded from `seed` when given,
/// otherwise from OS entropy. Identical `(original, mode, sparsity, seed)`
/// therefore always give identical output.
///
/// # Arguments
///
/// * `original` - The binary matrix to shuffle. It is never modified.
/// * `mode` - The count-preservation constraint.
/// * `sparsity` - Desired fraction of zeros; required for `Mode::Sparsity`, ignored otherwise.
/// * `seed` - Optional seed for reproducible output.
///
/// # Errors
///
/// `MissingSparsity` or `InvalidSparsity` for a bad sparsity in sparsity mode,
/// `NonBinaryValue` if the input of a count-preserving mode holds anything other than 0/1.
pub fn randomize(
    original: &BinaryMatrix,
    mode: Mode,
    sparsity: Option<f64>,
    seed: Option<u64>,
) -> Result<BinaryMatrix, RandomizationError> {
    let mut rng = seedable_rng(seed);
    randomize_with_rng(original, mode, sparsity, &mut rng)
}

/// Same as [`randomize`], drawing from a caller-supplied generator.
pub fn randomize_with_rng<R: Rng + ?Sized>(
    original: &BinaryMatrix,
    mode: Mode,
    sparsity: Option<f64>,
    rng: &mut R,
) -> Result<BinaryMatrix, RandomizationError> {
    let plan = match mode {
        Mode::Row => {
            ensure_binary(original)?;
            Plan::Rows
        }
        Mode::Column => {
            ensure_binary(original)?;
            Plan::Columns
        }
        Mode::Global => {
            ensure_binary(original)?;
            Plan::Flat(original.count_ones())
        }
        Mode::Sparsity => Plan::Flat(target_ones(original.len(), checked_sparsity(sparsity)?)),
    };

    let (nrows, ncols) = original.shape();
    log::debug!("Randomizing {}x{} matrix in {} mode", nrows, ncols, mode);

    let shuffled = match plan {
        Plan::Rows => shuffle_rows(original, rng),
        Plan::Columns => shuffle_columns(original, rng),
        Plan::Flat(k) => {
            log::trace!("Scattering {} ones over {} cells", k, original.len());
            scatter(nrows, ncols, k, rng)
        }
    };

    Ok(shuffled)
}

pub(crate) fn checked_sparsity(sparsity: Option<f64>) -> Result<f64, RandomizationError> {
    match sparsity {
        None => Err(RandomizationError::MissingSparsity),
        Some(s) if !s.is_finite() || !(0.0..=1.0).contains(&s) => {
            Err(RandomizationError::InvalidSparsity(s))
        }
        Some(s) => Ok(s),
    }
}

fn ensure_binary(original: &BinaryMatrix) -> Result<(), RandomizationError> {
    match original.first_non_binary() {
        Some((row, col, value)) => Err(RandomizationError::NonBinaryValue { row, col, value }),
        None => Ok(()),
    }
}

/// Candidate indices for one line (ones first, then zeros) and its ones count.
fn line_universe(line: &[u8]) -> (Vec<usize>, usize) {
    let (mut universe, zeros): (Vec<usize>, Vec<usize>) =
        (0..line.len()).partition(|&i| line[i] == 1);
    let k = universe.len();
    universe.extend(zeros);
    (universe, k)
}

fn shuffle_rows<R: Rng + ?Sized>(original: &BinaryMatrix, rng: &mut R) -> BinaryMatrix {
    let (nrows, ncols) = original.shape();
    let mut shuffled = BinaryMatrix::zeros(nrows, ncols);
    for row in 0..nrows {
        let (universe, k) = line_universe(original.row_slice(row));
        let target = shuffled.row_slice_mut(row);
        for col in sample_positions(universe, k, rng) {
            target[col] = 1;
        }
    }
    shuffled
}

fn shuffle_columns<R: Rng + ?Sized>(original: &BinaryMatrix, rng: &mut R) -> BinaryMatrix {
    let (nrows, ncols) = original.shape();
    let mut shuffled = BinaryMatrix::zeros(nrows, ncols);
    for col in 0..ncols {
        let (universe, k) = line_universe(&original.column(col));
        for row in sample_positions(universe, k, rng) {
            shuffled[(row, col)] = 1;
        }
    }
    shuffled
}

/// Place `k` ones uniformly over all cells, indexed row-major.
fn scatter<R: Rng + ?Sized>(nrows: usize, ncols: usize, k: usize, rng: &mut R) -> BinaryMatrix {
    let mut shuffled = BinaryMatrix::zeros(nrows, ncols);
    let cells = shuffled.as_mut_slice();
    for idx in sample_positions((0..cells.len()).collect(), k, rng) {
        cells[idx] = 1;
    }
    shuffled
}
