//! Coordinate and geometry types shared across engine renderers and UI.
//!
//! Canonical CPU space:
//! - Pixels of the drawable surface (physical px)
//! - Origin bottom-left
//! - +X right, +Y up
//!
//! Renderers convert to clip space in shaders using the `viewport_size` uniform
//! (`2 * pos / viewport_size - 1` per axis), which keeps +Y up.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
