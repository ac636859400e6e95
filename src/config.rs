use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::RandomizationError;
use crate::math::BinaryMatrix;
use crate::randomization::{checked_sparsity, randomize, Mode};

/// Randomization settings as they arrive from external input.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RandomizationConfig {
    pub mode: Mode,

    #[serde(default)]
    pub sparsity: Option<f64>,

    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for RandomizationConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Global,
            sparsity: None,
            seed: None,
        }
    }
}

impl RandomizationConfig {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn with_sparsity(mut self, sparsity: f64) -> Self {
        self.sparsity = Some(sparsity);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse a JSON object such as `{"mode": "sparsity", "sparsity": 0.9, "seed": 7}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .with_context(|| format!("Failed to parse randomization config: {}", json))?;
        log::trace!("Loaded randomization config: {:?}", config);
        Ok(config)
    }

    /// Check the parameters the selected mode depends on, without a matrix.
    pub fn validate(&self) -> Result<(), RandomizationError> {
        if self.mode != Mode::Sparsity {
            return Ok(());
        }
        checked_sparsity(self.sparsity).map(|_| ())
    }

    pub fn apply(&self, original: &BinaryMatrix) -> Result<BinaryMatrix, RandomizationError> {
        randomize(original, self.mode, self.sparsity, self.seed)
    }
}
