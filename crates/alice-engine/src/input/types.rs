use std::fmt;

/// Keyboard key identifier.
///
/// Keys are identified by the character the active layout produces. Only the
/// keys the viewers bind are named; everything else maps to `Key::Unknown`
/// with the platform key code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    /// Typed `=`.
    Equal,
    /// Typed `+`, from any key that produces it.
    Plus,
    /// Typed `-`.
    Minus,
    /// Typed `0`.
    Digit0,

    Unknown(u32),
}

impl Key {
    /// The bound key a typed character stands for, if any.
    pub fn from_character(text: &str) -> Option<Key> {
        match text {
            "=" => Some(Key::Equal),
            "+" => Some(Key::Plus),
            "-" => Some(Key::Minus),
            "0" => Some(Key::Digit0),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Mouse wheel delta.
///
/// `Line` is notched wheel input; `Pixel` is high precision (touchpads) in physical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseWheelDelta {
    Line { x: f32, y: f32 },
    Pixel { x: f32, y: f32 },
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        /// True when the event is an OS key-repeat.
        repeat: bool,
    },

    MouseWheel(MouseWheelDelta),

    /// Window focus change.
    Focused(bool),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
