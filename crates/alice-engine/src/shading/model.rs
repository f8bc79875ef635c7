//! Model program: translate + scale transform, implicit parabola mask.

use crate::coords::Vec2;
use crate::paint::Color;

use super::{step, to_clip};

/// Per-draw inputs of the model program.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ModelUniforms {
    pub viewport_size: Vec2,
    pub translate: Vec2,
    pub scale: f32,
    pub colour: Color,
}

/// Vertex stage output.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ModelVarying {
    pub clip: [f32; 4],
    /// Curve parameter `(x, y, sign)`, interpolated across the triangle.
    pub p: [f32; 3],
}

/// Vertex stage: `pixel = translate + scale * position`, then clip space.
/// `param` passes through unchanged.
#[inline]
pub fn vertex(u: &ModelUniforms, position: Vec2, param: [f32; 3]) -> ModelVarying {
    let pixel = u.translate + position * u.scale;
    ModelVarying { clip: to_clip(pixel, u.viewport_size), p: param }
}

/// Coverage of a fragment: `step(0, z * (x² - y))`.
///
/// `z` picks which side of the parabola is inside; `z * s == 0` counts as inside.
#[inline]
pub fn coverage(p: [f32; 3]) -> f32 {
    let [x, y, z] = p;
    let s = x * x - y;
    step(0.0, z * s)
}

/// Fragment stage: `(colour.rgb, coverage(p))`.
#[inline]
pub fn fragment(colour: Color, p: [f32; 3]) -> [f32; 4] {
    [colour.r, colour.g, colour.b, coverage(p)]
}
