#![deny(unsafe_code)]
//! Core types and traits for the noise-engine raster generator.
//!
//! Provides the `Generator` trait, the `Field` scalar buffer, interpolation
//! helpers (`ease`), grayscale tone mapping (`shade`), the `Xorshift64` PRNG,
//! `ImageSpec`, and parameter helpers.

pub mod ease;
pub mod error;
pub mod field;
pub mod generator;
pub mod params;
pub mod prng;
pub mod shade;
pub mod spec;

pub use error::NoiseError;
pub use field::Field;
pub use generator::Generator;
pub use prng::Xorshift64;
pub use spec::ImageSpec;
