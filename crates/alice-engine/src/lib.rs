//! Alice engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by higher layers,
//! the model tessellator, and the three shape programs (model, panel, grid)
//! together with a CPU mirror of every shader stage.

pub mod device;
pub mod window;
pub mod input;
pub mod core;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod shading;
pub mod model;
pub mod render;
pub mod scene;
