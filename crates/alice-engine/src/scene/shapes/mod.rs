pub(crate) mod grid;
pub(crate) mod model;
pub(crate) mod panel;

use crate::paint::Color;

/// Border band drawn inside a panel's edge.
///
/// `width` is floored to whole pixels by the panel program; only the RGB of
/// `colour` is used (borders are opaque).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub colour: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, colour: Color) -> Self {
        Self { width, colour }
    }
}
