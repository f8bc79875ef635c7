//! Per-program GPU pipelines and their instance layouts.

pub(crate) mod common;

pub mod grid;
pub mod model;
pub mod panel;

pub use grid::GridInstance;
pub use model::ModelInstance;
pub use panel::PanelInstance;
