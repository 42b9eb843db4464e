//! Reproducible specification for one noise image.
//!
//! An [`ImageSpec`] captures everything needed to re-render an image:
//! generator name, raster dimensions, parameters, and PRNG seed.

use crate::error::NoiseError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reproducible specification for one noise image.
///
/// Two identical `ImageSpec` values fed to the same binary produce
/// bit-identical rasters. Serializes to JSON so a render can be recorded
/// next to its output and replayed later.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageSpec {
    pub generator: String,
    pub width: usize,
    pub height: usize,
    pub params: Value,
    pub seed: u64,
}

impl ImageSpec {
    /// Creates a new spec with default (empty) params.
    pub fn new(generator: &str, width: usize, height: usize, seed: u64) -> Self {
        Self {
            generator: generator.to_string(),
            width,
            height,
            params: Value::Object(serde_json::Map::new()),
            seed,
        }
    }

    /// Validates raster dimensions and, when present, the `cell_size` param.
    ///
    /// Rejects zero dimensions, `width * height` overflow, and an explicit
    /// `cell_size` of 0 (the sampler divides by it).
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.width == 0 || self.height == 0 {
            return Err(NoiseError::InvalidDimensions);
        }
        self.width
            .checked_mul(self.height)
            .ok_or(NoiseError::InvalidDimensions)?;
        if let Some(cell_size) = self.params.get("cell_size").and_then(Value::as_u64) {
            if cell_size == 0 {
                return Err(NoiseError::InvalidCellSize(0));
            }
        }
        Ok(())
    }
}
