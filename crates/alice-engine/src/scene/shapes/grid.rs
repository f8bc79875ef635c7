use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Grid overlay payload.
///
/// `rect` bounds the overlay, `cell_size` is the line pitch and `offset` shifts
/// the line phase. Everything is floored to whole pixels by the grid program.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCmd {
    pub rect: Rect,
    pub cell_size: Vec2,
    pub offset: Vec2,
    pub colour: Color,
}

impl DrawList {
    /// Records a grid overlay.
    #[inline]
    pub fn push_grid(&mut self, z: ZIndex, rect: Rect, cell_size: Vec2, offset: Vec2, colour: Color) {
        self.push(z, DrawCmd::Grid(GridCmd { rect, cell_size, offset, colour }));
    }
}
