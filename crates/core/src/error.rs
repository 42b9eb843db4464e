//! Error types for the noise-engine core.

use thiserror::Error;

/// Errors produced by field construction and noise generation.
#[derive(Debug, Error)]
pub enum NoiseError {
    /// Width or height was zero (or overflowed) when creating a field or grid.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// The lattice cell size was zero. Cell size must be at least 1 pixel.
    #[error("invalid cell size: {0} (must be >= 1)")]
    InvalidCellSize(usize),

    /// A data buffer did not match the declared dimensions.
    #[error("dimension mismatch: expected {expected_w}x{expected_h} ({expected} values), got {got}")]
    DimensionMismatch {
        expected_w: usize,
        expected_h: usize,
        expected: usize,
        got: usize,
    },

    /// A pixel's cell corners fall outside the allocated gradient grid.
    ///
    /// The grid must hold `ceil(dim / cell_size) + 1` lattice points per axis
    /// to cover every pixel's upper corner.
    #[error("pixel ({x}, {y}) needs lattice corners outside the {cols}x{rows} gradient grid")]
    OutOfCoverage {
        x: usize,
        y: usize,
        cols: usize,
        rows: usize,
    },

    /// A generator name was not recognized by the registry.
    #[error("unknown generator: {0}")]
    UnknownGenerator(String),

    /// An I/O failure while writing output.
    #[error("io error: {0}")]
    Io(String),
}
