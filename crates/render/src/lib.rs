#![deny(unsafe_code)]
//! Generator registry: maps generator names to implementations and provides
//! CPU-side raster output.
//!
//! This crate sits between `noise-engine-core` (which defines the `Generator`
//! trait) and the individual generator crates (`noise-engine-perlin`). The
//! CLI depends on this crate so name dispatch lives in one place.

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

use noise_engine_core::error::NoiseError;
use noise_engine_core::field::Field;
use noise_engine_core::Generator;
use serde_json::Value;

/// All available generator names.
const GENERATOR_NAMES: &[&str] = &["perlin"];

/// Enumeration of all available noise generators.
///
/// Wraps each generator implementation and delegates `Generator` trait
/// methods. Use [`GeneratorKind::from_name`] for string-based construction.
pub enum GeneratorKind {
    /// Single-frequency 2D gradient noise.
    Perlin(noise_engine_perlin::Perlin),
}

impl GeneratorKind {
    /// Constructs a generator by name.
    ///
    /// Returns `NoiseError::UnknownGenerator` if the name is not recognized.
    pub fn from_name(name: &str, seed: u64, params: &Value) -> Result<Self, NoiseError> {
        match name {
            "perlin" => Ok(GeneratorKind::Perlin(noise_engine_perlin::Perlin::from_json(
                seed, params,
            )?)),
            _ => Err(NoiseError::UnknownGenerator(name.to_string())),
        }
    }

    /// Returns a slice of all recognized generator names.
    pub fn list_generators() -> &'static [&'static str] {
        GENERATOR_NAMES
    }
}

impl Generator for GeneratorKind {
    fn generate(&self, width: usize, height: usize) -> Result<Field, NoiseError> {
        match self {
            GeneratorKind::Perlin(g) => g.generate(width, height),
        }
    }

    fn params(&self) -> Value {
        match self {
            GeneratorKind::Perlin(g) => g.params(),
        }
    }

    fn param_schema(&self) -> Value {
        match self {
            GeneratorKind::Perlin(g) => g.param_schema(),
        }
    }
}
