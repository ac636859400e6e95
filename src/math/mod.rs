//! Dense matrix container used throughout the crate.
//!
//! Provides the row-major `Array2` and the `BinaryMatrix` alias the
//! randomizer operates on. The container is intentionally small; conversions
//! to and from `ndarray` are available for callers that already hold data in
//! that form.
pub mod matrix;

pub use matrix::{Array2, BinaryMatrix, ShapeError};
