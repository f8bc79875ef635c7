//! Alice UI: an element tree drawn with the `alice-engine` shape programs.
//!
//! ```rust,ignore
//! use alice_ui::prelude::*;
//!
//! let root = Panel::new((200.0, 100.0), (500.0, 300.0))
//!     .fill([0.9, 0.0, 0.0, 1.0])
//!     .child(Panel::new((10.0, 20.0), (100.0, 100.0)).border(10, [0.9, 0.3, 0.9]));
//!
//! Application::new().title("Alice").run(root)?;
//! ```

pub mod app;
pub mod element;
mod painter;
pub mod scene;

pub use app::{Application, FrameInput};

/// Everything needed to build a tree and run it.
pub mod prelude {
    pub use crate::app::{Application, FrameInput};
    pub use crate::element::{Element, Grid, Group, ModelElement, Panel};
    pub use crate::scene::UiScene;

    pub use alice_engine::coords::{Rect, Vec2, Viewport};
    pub use alice_engine::core::AppControl;
    pub use alice_engine::input::Key;
    pub use alice_engine::model::{Model, ModelMesh, Path, Point};
    pub use alice_engine::paint::Color;
}
