//! CPU-side PNG output for a raw noise [`Field`].
//!
//! Feature-gated behind `png` (default on) so embedders can depend on the
//! registry without pulling in the `image` crate. The pixel buffer conversion
//! itself lives in [`crate::pixel`] (always available).

use noise_engine_core::error::NoiseError;
use noise_engine_core::field::Field;
use std::path::Path;

use crate::pixel::field_to_gray_rgb;

/// Writes a raw noise field as a grayscale PNG image.
///
/// Returns `NoiseError::InvalidDimensions` if the field dimensions overflow
/// `u32`, or `NoiseError::Io` on encode/write failure.
pub fn write_png(field: &Field, path: &Path) -> Result<(), NoiseError> {
    let rgb = field_to_gray_rgb(field);
    let w = u32::try_from(field.width()).map_err(|_| NoiseError::InvalidDimensions)?;
    let h = u32::try_from(field.height()).map_err(|_| NoiseError::InvalidDimensions)?;
    let img = image::RgbImage::from_raw(w, h, rgb)
        .ok_or_else(|| NoiseError::Io("RGB buffer size mismatch".into()))?;
    img.save(path).map_err(|e| NoiseError::Io(e.to_string()))
}
