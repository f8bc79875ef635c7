//! CPU mirror of the shader stages.
//!
//! Every function here evaluates exactly the formula its WGSL counterpart in
//! `render/shapes/shaders/` evaluates, using the same names for inputs and
//! inter-stage values. The GPU never calls into this module; it exists so the
//! per-vertex and per-pixel maths can be checked without a device and so the
//! host can map pointer positions back through the same transform.
//!
//! Degenerate inputs (zero viewport, zero cell size, zero panel size) are not
//! guarded. They produce inf/NaN exactly as the GPU would.

pub mod grid;
pub mod model;
pub mod panel;

use crate::coords::Vec2;

/// `step(edge, x)`: `0` when `x < edge`, otherwise `1` (inclusive at `edge`).
#[inline]
pub fn step(edge: f32, x: f32) -> f32 {
    if x < edge { 0.0 } else { 1.0 }
}

/// Component-wise [`step`].
#[inline]
pub fn step2(edge: Vec2, x: Vec2) -> Vec2 {
    Vec2::new(step(edge.x, x.x), step(edge.y, x.y))
}

/// Fractional part, `x - floor(x)`. Always in `[0, 1)` for finite input.
#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Component-wise [`fract`].
#[inline]
pub fn fract2(v: Vec2) -> Vec2 {
    Vec2::new(fract(v.x), fract(v.y))
}

/// Linear interpolation, `a * (1 - t) + b * t`.
#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// [`mix`] applied to every channel of an RGBA value.
#[inline]
pub fn mix4(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    [
        mix(a[0], b[0], t),
        mix(a[1], b[1], t),
        mix(a[2], b[2], t),
        mix(a[3], b[3], t),
    ]
}

/// Maps a pixel position into clip space: `2 * pixel_pos / viewport_size - 1`
/// per axis, with `z = 0` and `w = 1`.
#[inline]
pub fn to_clip(pixel_pos: Vec2, viewport_size: Vec2) -> [f32; 4] {
    let ndc = (pixel_pos * 2.0).div_elem(viewport_size) - Vec2::splat(1.0);
    [ndc.x, ndc.y, 0.0, 1.0]
}

/// Inverse of [`to_clip`] for the `xy` components.
#[inline]
pub fn from_clip(clip_xy: Vec2, viewport_size: Vec2) -> Vec2 {
    (clip_xy + Vec2::splat(1.0)).mul_elem(viewport_size) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    // ── builtins ──────────────────────────────────────────────────────────

    #[test]
    fn step_is_inclusive_at_edge() {
        assert_eq!(step(0.0, 0.0), 1.0);
        assert_eq!(step(0.0, -1e-6), 0.0);
        assert_eq!(step(0.4, 0.5), 1.0);
    }

    #[test]
    fn fract_of_negative_wraps_upwards() {
        assert!(approx(fract(-0.25), 0.75));
        assert_eq!(fract(5.0), 0.0);
        assert!(approx(fract(2.5), 0.5));
    }

    #[test]
    fn mix_endpoints() {
        assert_eq!(mix(2.0, 6.0, 0.0), 2.0);
        assert_eq!(mix(2.0, 6.0, 1.0), 6.0);
        assert_eq!(mix(2.0, 6.0, 0.5), 4.0);
    }

    // ── position transform ────────────────────────────────────────────────

    #[test]
    fn viewport_corners_map_to_clip_corners() {
        let vp = Vec2::new(800.0, 600.0);
        assert_eq!(to_clip(Vec2::zero(), vp), [-1.0, -1.0, 0.0, 1.0]);
        assert_eq!(to_clip(vp, vp), [1.0, 1.0, 0.0, 1.0]);
        assert_eq!(to_clip(Vec2::new(400.0, 300.0), vp), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn from_clip_inverts_to_clip() {
        let vp = Vec2::new(800.0, 600.0);
        let p = Vec2::new(123.0, 456.0);
        let c = to_clip(p, vp);
        let back = from_clip(Vec2::new(c[0], c[1]), vp);
        assert!(approx(back.x, p.x) && approx(back.y, p.y));
    }

    #[test]
    fn zero_viewport_is_not_guarded() {
        let c = to_clip(Vec2::new(1.0, 1.0), Vec2::zero());
        assert!(!c[0].is_finite());
    }
}
