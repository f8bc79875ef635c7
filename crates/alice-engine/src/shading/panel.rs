//! Panel program: a filled rectangle with a border band.
//!
//! The vertex stage does the division (`border_width / size`) once per vertex so
//! the fragment stage is a single threshold compare per axis.

use crate::coords::Vec2;
use crate::paint::Color;

use super::{mix4, step2, to_clip};

/// Per-panel inputs.
///
/// `location`, `size` and `border_width` are floored to whole pixels before use.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PanelParams {
    pub location: Vec2,
    pub size: Vec2,
    pub border_width: f32,
    pub fill_colour: Color,
    /// Only RGB is used; the border is always opaque.
    pub border_colour: Color,
}

/// Vertex stage output.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PanelVarying {
    pub clip: [f32; 4],
    /// Quad position recentred to `[-0.5, 0.5]²`.
    pub border_coords: Vec2,
    /// Per-axis threshold, `0.5 - border_width / size`.
    pub border_step: Vec2,
}

/// Vertex stage for a unit-quad corner `position` in `[0, 1]²`.
pub fn vertex(viewport_size: Vec2, params: &PanelParams, position: Vec2) -> PanelVarying {
    let location = params.location.floor();
    let size = params.size.floor();
    let border_width = params.border_width.floor();

    let pixel = location + size.mul_elem(position);

    PanelVarying {
        clip: to_clip(pixel, viewport_size),
        border_coords: position - Vec2::splat(0.5),
        border_step: Vec2::splat(0.5) - Vec2::splat(border_width).div_elem(size),
    }
}

/// `1` inside the border band on either axis, `0` in the interior.
#[inline]
pub fn border_mask(border_coords: Vec2, border_step: Vec2) -> f32 {
    let border = step2(border_step, border_coords.abs());
    border.x.max(border.y)
}

/// Fragment stage: `mix(fill_colour, (border_colour.rgb, 1), border_mask)`.
pub fn fragment(
    fill_colour: Color,
    border_colour: Color,
    border_coords: Vec2,
    border_step: Vec2,
) -> [f32; 4] {
    let border = [border_colour.r, border_colour.g, border_colour.b, 1.0];
    mix4(fill_colour.to_array(), border, border_mask(border_coords, border_step))
}
