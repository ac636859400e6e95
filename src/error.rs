use std::error::Error;
use std::fmt;

/// Errors raised before any randomization takes place.
#[derive(Debug, Clone, PartialEq)]
pub enum RandomizationError {
    InvalidMode(String), // Unrecognized mode string
    MissingSparsity,
    InvalidSparsity(f64),
    NonBinaryValue { row: usize, col: usize, value: u8 },
}

impl fmt::Display for RandomizationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RandomizationError::InvalidMode(mode) => write!(
                f,
                "Invalid mode '{}'. Choose from 'row', 'column', 'global', or 'sparsity'",
                mode
            ),
            RandomizationError::MissingSparsity => {
                write!(f, "For 'sparsity' mode, the sparsity parameter must be specified")
            }
            RandomizationError::InvalidSparsity(value) => {
                write!(f, "Sparsity must be a finite value in [0, 1], got {}", value)
            }
            RandomizationError::NonBinaryValue { row, col, value } => write!(
                f,
                "Matrix must be binary: found value {} at ({}, {})",
                value, row, col
            ),
        }
    }
}

impl Error for RandomizationError {}
