use std::collections::HashSet;

use super::types::{InputEvent, Key, MouseWheelDelta};

/// Per-frame input deltas.
///
/// `InputState` holds what is currently down; `InputFrame` holds what happened
/// since the last frame and is cleared by the runtime after each frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    /// Keys pressed this frame, including OS repeats.
    pub keys_pressed: HashSet<Key>,

    /// Keys released this frame.
    pub keys_released: HashSet<Key>,

    /// Accumulated high-precision wheel delta (physical px).
    pub wheel_pixels: (f32, f32),

    /// Accumulated notched wheel delta (lines).
    pub wheel_lines: (f32, f32),
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.wheel_pixels = (0.0, 0.0);
        self.wheel_lines = (0.0, 0.0);
    }

    #[inline]
    pub fn pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    pub(crate) fn add_wheel(&mut self, delta: MouseWheelDelta) {
        match delta {
            MouseWheelDelta::Pixel { x, y } => {
                self.wheel_pixels.0 += x;
                self.wheel_pixels.1 += y;
            }
            MouseWheelDelta::Line { x, y } => {
                self.wheel_lines.0 += x;
                self.wheel_lines.1 += y;
            }
        }
    }
}
