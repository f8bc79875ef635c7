use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Panel draw payload: a filled rectangle with an optional border band.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelCmd {
    pub rect: Rect,
    pub fill_colour: Color,
    pub border: Option<Border>,
}

impl PanelCmd {
    #[inline]
    pub fn new(rect: Rect, fill_colour: Color, border: Option<Border>) -> Self {
        Self { rect, fill_colour, border }
    }
}

impl DrawList {
    /// Records a panel draw command.
    #[inline]
    pub fn push_panel(&mut self, z: ZIndex, rect: Rect, fill_colour: Color, border: Option<Border>) {
        self.push(z, DrawCmd::Panel(PanelCmd::new(rect, fill_colour, border)));
    }
}
