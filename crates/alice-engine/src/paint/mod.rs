//! Paint model shared between UI and renderers.
//!
//! Colours are straight (non-premultiplied) alpha: every fragment program
//! outputs `(rgb, a)` and pipelines blend with `SrcAlpha / OneMinusSrcAlpha`.

pub mod color;

pub use color::Color;
