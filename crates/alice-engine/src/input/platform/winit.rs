use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{Key as LogicalKey, NamedKey, PhysicalKey};

use crate::input::{InputEvent, Key, KeyState, MouseWheelDelta};

/// Translates a winit `WindowEvent` into an engine `InputEvent`.
///
/// Returns `None` for events not represented by the input subsystem.
pub(crate) fn translate_window_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::MouseWheel { delta, .. } => {
            let delta = match delta {
                MouseScrollDelta::LineDelta(x, y) => MouseWheelDelta::Line { x: *x, y: *y },
                MouseScrollDelta::PixelDelta(p) => MouseWheelDelta::Pixel {
                    x: p.x as f32,
                    y: p.y as f32,
                },
            };
            Some(InputEvent::MouseWheel(delta))
        }

        WindowEvent::KeyboardInput { event, .. } => {
            let state = match event.state {
                ElementState::Pressed => KeyState::Pressed,
                ElementState::Released => KeyState::Released,
            };

            Some(InputEvent::Key {
                key: map_key(&event.logical_key, event.physical_key),
                state,
                repeat: event.repeat,
            })
        }

        _ => None,
    }
}

/// Bindings follow the character the layout produces, so `-` on AZERTY and
/// `+` on a German layout work, and shifted `0` does not.
fn map_key(logical: &LogicalKey, physical: PhysicalKey) -> Key {
    match logical {
        LogicalKey::Named(NamedKey::Escape) => Key::Escape,
        LogicalKey::Character(text) => Key::from_character(text).unwrap_or_else(|| unknown(physical)),
        _ => unknown(physical),
    }
}

fn unknown(physical: PhysicalKey) -> Key {
    match physical {
        PhysicalKey::Code(code) => Key::Unknown(code as u32),
        // NativeKeyCode has no stable numeric form in winit 0.30.
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}
