//! pathway-randomizer: constrained shuffling of binary matrices.
//!
//! Given a 0/1 matrix, the crate produces a freshly allocated matrix of the
//! same shape whose ones have been repositioned under one of four constraints
//! (per-row counts, per-column counts, global count, or a target sparsity).
//! The result is meant to serve as a null-model control for downstream
//! statistics that compare it against the structured original.
//!
//! Every call owns its random generator, either seeded for reproducibility or
//! drawn from entropy, so concurrent callers never interfere.
pub mod config;
pub mod error;
pub mod math;
pub mod randomization;
pub mod sampling;

pub use config::RandomizationConfig;
pub use error::RandomizationError;
pub use math::{Array2, BinaryMatrix, ShapeError};
pub use randomization::{randomize, randomize_with_rng, Mode};
