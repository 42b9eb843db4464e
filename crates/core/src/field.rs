//! Two-dimensional scalar field over a pixel grid.
//!
//! A `Field` stores `width * height` f64 values in row-major layout. Values
//! are not clamped: raw gradient noise lives in [-1, 1] and is remapped to
//! [0, 1] only at render time (see [`crate::shade`]). Unlike a toroidal
//! simulation grid, a noise raster does not wrap, so coordinate access is
//! bounds-checked and panics on violation.

use crate::error::NoiseError;

/// A 2D scalar field with unclamped values and bounds-checked addressing.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl Field {
    /// Creates a zero-filled field of the given dimensions.
    ///
    /// Returns `NoiseError::InvalidDimensions` if either dimension is zero
    /// or if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, NoiseError> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0.0; len],
        })
    }

    /// Creates a field filled with `value`.
    pub fn filled(width: usize, height: usize, value: f64) -> Result<Self, NoiseError> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![value; len],
        })
    }

    /// Creates a field from a pre-built data vector, validating that
    /// `data.len() == width * height`.
    pub fn from_data(width: usize, height: usize, data: Vec<f64>) -> Result<Self, NoiseError> {
        let expected = checked_len(width, height)?;
        if data.len() != expected {
            return Err(NoiseError::DimensionMismatch {
                expected_w: width,
                expected_h: height,
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Field width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Field height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the underlying row-major data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Mutable access to the underlying row-major data.
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Converts coordinates to a flat index.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the field. An out-of-bounds x would
    /// otherwise alias into the next row, so this is checked explicitly.
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} field",
            self.width,
            self.height
        );
        y * self.width + x
    }

    /// Gets the value at `(x, y)`. Panics if out of bounds.
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.data[self.index(x, y)]
    }

    /// Sets the value at `(x, y)`. Panics if out of bounds.
    pub fn set(&mut self, x: usize, y: usize, value: f64) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Iterates over all pixels yielding `(x, y, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.data.iter().enumerate().map(|(i, &v)| {
            let x = i % self.width;
            let y = i / self.width;
            (x, y, v)
        })
    }
}

/// Validates dimensions and returns `width * height`.
fn checked_len(width: usize, height: usize) -> Result<usize, NoiseError> {
    if width == 0 || height == 0 {
        return Err(NoiseError::InvalidDimensions);
    }
    width
        .checked_mul(height)
        .ok_or(NoiseError::InvalidDimensions)
}
