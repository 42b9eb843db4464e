//! Grayscale tone mapping from raw noise values to displayable intensities.
//!
//! Cosmetic post-processing, separate from the noise algorithm itself: a raw
//! sample in [-1, 1] is remapped to [0, 1] and eased once more for contrast
//! before quantization. Out-of-range inputs (possible at the tails of some
//! displacement modes) are absorbed by the smoothstep clamp.

use crate::ease::smoothstep;

/// Maps a raw noise value `v` in ≈[-1, 1] to a display intensity in [0, 1].
///
/// `(v + 1) / 2` recenters the signal, then a cubic smoothstep over [0, 1]
/// stretches the midtones.
pub fn tone_map(v: f64) -> f64 {
    smoothstep(0.0, 1.0, (v + 1.0) / 2.0)
}

/// Quantizes an intensity in [0, 1] to one 8-bit channel.
///
/// NaN is mapped to 0; other inputs are clamped before rounding.
pub fn to_gray8(intensity: f64) -> u8 {
    let t = if intensity.is_nan() {
        0.0
    } else {
        intensity.clamp(0.0, 1.0)
    };
    (t * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- tone_map --

    #[test]
    fn tone_map_sends_negative_one_to_black() {
        assert_eq!(tone_map(-1.0), 0.0);
    }

    #[test]
    fn tone_map_sends_positive_one_to_white() {
        assert_eq!(tone_map(1.0), 1.0);
    }

    #[test]
    fn tone_map_sends_zero_to_mid_gray() {
        assert!((tone_map(0.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn tone_map_clamps_out_of_range_noise() {
        assert_eq!(tone_map(-1.4), 0.0);
        assert_eq!(tone_map(1.4), 1.0);
    }

    #[test]
    fn tone_map_is_monotonic() {
        let mut prev = tone_map(-1.0);
        for i in 1..=200 {
            let v = -1.0 + 2.0 * i as f64 / 200.0;
            let cur = tone_map(v);
            assert!(cur >= prev, "tone_map not monotonic at v = {v}");
            prev = cur;
        }
    }

    // -- to_gray8 --

    #[test]
    fn to_gray8_maps_extremes() {
        assert_eq!(to_gray8(0.0), 0);
        assert_eq!(to_gray8(1.0), 255);
    }

    #[test]
    fn to_gray8_rounds_midpoint() {
        assert_eq!(to_gray8(0.5), 128);
    }

    #[test]
    fn to_gray8_clamps_out_of_range() {
        assert_eq!(to_gray8(-0.3), 0);
        assert_eq!(to_gray8(1.7), 255);
    }

    #[test]
    fn to_gray8_handles_nan() {
        assert_eq!(to_gray8(f64::NAN), 0);
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn tone_map_output_in_unit_interval(v in -2.0_f64..=2.0) {
                let t = tone_map(v);
                prop_assert!((0.0..=1.0).contains(&t), "tone_map({v}) = {t}");
            }

            #[test]
            fn quantization_is_monotonic(a in 0.0_f64..=1.0, b in 0.0_f64..=1.0) {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                prop_assert!(to_gray8(lo) <= to_gray8(hi));
            }
        }
    }
}
