//! Interpolation and easing curves for noise evaluation.
//!
//! The quintic [`fade`] is what gives the noise field C² continuity at cell
//! boundaries: its first and second derivatives vanish at both endpoints, so
//! interpolated values show no grid-aligned creases. The cubic [`smoothstep`]
//! is only used for contrast shaping at render time.

/// Linear blend: `a + w * (b - a)`.
pub fn lerp(a: f64, b: f64, w: f64) -> f64 {
    a + w * (b - a)
}

/// Quintic smoothstep `6t^5 - 15t^4 + 10t^3` on a fraction `t` in [0, 1].
///
/// Maps 0 to 0, 1 to 1, 0.5 to 0.5, monotonically, with zero first and
/// second derivatives at both endpoints.
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Cubic Hermite smoothstep between `edge0` and `edge1`, clamped.
///
/// `x` is remapped to [0, 1] across the edge interval, clamped, then eased
/// with `3t^2 - 2t^3`. Used to stretch contrast before quantizing to 8 bits.
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
