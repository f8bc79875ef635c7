use crate::scene::shapes::grid::GridCmd;
use crate::scene::shapes::model::ModelCmd;
use crate::scene::shapes::panel::PanelCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a payload module under `scene::shapes::*` with its push helpers
/// - add a variant here
/// - teach `render::FramePlan` how to batch it and add a pipeline under `render::shapes::*`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Panel(PanelCmd),
    Grid(GridCmd),
    Model(ModelCmd),
}
