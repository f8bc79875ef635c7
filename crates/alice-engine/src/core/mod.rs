//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and higher
//! layers (UI, studio binaries) and the per-frame context they receive.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
