//! Grid overlay program: one-unit-wide lines on a repeating cell pattern.

use crate::coords::Vec2;
use crate::paint::Color;

use super::{fract2, step2, to_clip};

/// Line width in floored units (pixels at scale 1).
pub const GRID_WIDTH: f32 = 1.0;

/// Per-grid inputs. All geometry is floored to whole units before use.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridParams {
    pub location: Vec2,
    pub size: Vec2,
    pub grid_size: Vec2,
    pub grid_offset: Vec2,
    /// Only RGB is used; alpha comes from the line mask.
    pub grid_colour: Color,
}

/// Vertex stage output.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridVarying {
    pub clip: [f32; 4],
    /// Position in cell units, phase-shifted by `grid_offset`.
    pub grid_coords: Vec2,
    /// Line thickness as a fraction of one cell, per axis.
    pub grid_step: Vec2,
}

pub fn vertex(viewport_size: Vec2, params: &GridParams, position: Vec2) -> GridVarying {
    let location = params.location.floor();
    let size = params.size.floor();
    let grid_size = params.grid_size.floor();
    let grid_offset = params.grid_offset.floor();

    let local = size.mul_elem(position);

    GridVarying {
        clip: to_clip(location + local, viewport_size),
        grid_coords: (local + grid_offset).div_elem(grid_size),
        grid_step: Vec2::splat(GRID_WIDTH).div_elem(grid_size),
    }
}

/// `1` on a grid line (fractional cell position below `grid_step` on either
/// axis), `0` inside a cell.
#[inline]
pub fn alpha(grid_coords: Vec2, grid_step: Vec2) -> f32 {
    let grid = step2(grid_step, fract2(grid_coords));
    1.0 - grid.x.min(grid.y)
}

/// Fragment stage: `(grid_colour.rgb, alpha)`.
#[inline]
pub fn fragment(grid_colour: Color, grid_coords: Vec2, grid_step: Vec2) -> [f32; 4] {
    [grid_colour.r, grid_colour.g, grid_colour.b, alpha(grid_coords, grid_step)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> GridParams {
        GridParams {
            location: Vec2::new(100.0, 100.0),
            size: Vec2::new(300.0, 200.0),
            grid_size: Vec2::new(10.0, 10.0),
            grid_offset: Vec2::zero(),
            grid_colour: Color::rgb(0.9, 0.9, 0.9),
        }
    }

    #[test]
    fn line_when_either_axis_is_below_step() {
        let step = Vec2::splat(0.1);
        assert_eq!(alpha(Vec2::new(0.05, 5.0), step), 1.0);
        assert_eq!(alpha(Vec2::new(3.5, 7.02), step), 1.0);
    }

    #[test]
    fn cell_interior_is_transparent() {
        assert_eq!(alpha(Vec2::new(0.5, 5.5), Vec2::splat(0.1)), 0.0);
    }

    #[test]
    fn step_is_one_unit_of_a_cell() {
        let v = vertex(Vec2::new(800.0, 600.0), &params(), Vec2::zero());
        assert!((v.grid_step.x - 0.1).abs() < 1e-6);
        assert!((v.grid_step.y - 0.1).abs() < 1e-6);
        assert_eq!(v.grid_coords, Vec2::zero());
    }

    #[test]
    fn coords_count_cells_across_the_rect() {
        let v = vertex(Vec2::new(800.0, 600.0), &params(), Vec2::new(1.0, 1.0));
        assert_eq!(v.grid_coords, Vec2::new(30.0, 20.0));
    }

    #[test]
    fn offset_shifts_phase() {
        let p = GridParams { grid_offset: Vec2::new(5.0, 0.0), ..params() };
        let v = vertex(Vec2::new(800.0, 600.0), &p, Vec2::zero());
        assert_eq!(v.grid_coords, Vec2::new(0.5, 0.0));
    }

    #[test]
    fn geometry_is_floored_before_use() {
        let p = GridParams {
            location: Vec2::new(100.9, 100.9),
            size: Vec2::new(300.4, 200.4),
            grid_size: Vec2::new(10.8, 10.8),
            grid_offset: Vec2::new(5.7, 0.3),
            ..params()
        };
        let vp = Vec2::new(800.0, 600.0);
        let v = vertex(vp, &p, Vec2::new(1.0, 1.0));
        assert_eq!(v.clip, super::super::to_clip(Vec2::new(400.0, 300.0), vp));
        assert_eq!(v.grid_coords, Vec2::new(30.5, 20.0));
        assert!((v.grid_step.x - 0.1).abs() < 1e-6);
    }

    #[test]
    fn fragment_uses_mask_as_alpha() {
        let c = Color::rgb(0.3, 0.3, 0.3);
        assert_eq!(fragment(c, Vec2::new(0.5, 5.5), Vec2::splat(0.1)), [0.3, 0.3, 0.3, 0.0]);
        assert_eq!(fragment(c, Vec2::new(0.05, 5.5), Vec2::splat(0.1)), [0.3, 0.3, 0.3, 1.0]);
    }
}
