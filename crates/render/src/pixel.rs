//! Pure-computation pixel buffer conversion from a raw noise [`Field`].
//!
//! This module is always available (no feature gate) so callers that bring
//! their own encoder can share the same conversion as the `png` snapshot
//! path.

use noise_engine_core::field::Field;
use noise_engine_core::shade::{to_gray8, tone_map};

/// Tone-maps raw field values to a grayscale RGB8 pixel buffer.
///
/// Each raw value `v` in ≈[-1, 1] is remapped and contrast-shaped by
/// [`tone_map`], quantized once, and written as three equal bytes (R, G, B).
/// The buffer length is `width * height * 3`.
pub fn field_to_gray_rgb(field: &Field) -> Vec<u8> {
    field
        .data()
        .iter()
        .flat_map(|&v| {
            let gray = to_gray8(tone_map(v));
            [gray, gray, gray]
        })
        .collect()
}
