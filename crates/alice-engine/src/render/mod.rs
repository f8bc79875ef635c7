//! GPU rendering subsystem.
//!
//! `SceneRenderer` consumes a `scene::DrawList`, batches it into a `FramePlan`
//! and issues the panel, grid and model programs in paint order inside a
//! single render pass.
//!
//! Convention:
//! - CPU geometry is in pixels (bottom-left origin, +Y up).
//! - Vertex programs map to clip space with `2 * pos / viewport_size - 1`.

mod ctx;
mod plan;
mod renderer;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use plan::{Batch, FramePlan};
pub use renderer::SceneRenderer;
