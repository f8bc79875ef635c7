//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands for panels, grids and models
//! - provide deterministic ordering (z-index + insertion order)
//! - keep shape-specific payloads and push helpers in `scene::shapes`

mod cmd;
mod key;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::{SortKey, ZIndex};
pub use list::{DrawItem, DrawList};
pub use shapes::grid::GridCmd;
pub use shapes::model::ModelCmd;
pub use shapes::panel::PanelCmd;
pub use shapes::Border;
