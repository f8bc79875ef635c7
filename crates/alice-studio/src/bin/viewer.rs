//! Model viewer.
//!
//! Controls: `+`/`=` zoom in, `-` zoom out, `0` recentre, touchpad/wheel pans,
//! `Escape` quits. Keys follow the typed character, whatever the layout.
//! The model starts at the centre of the drawable.

use anyhow::Context;

use alice_engine::logging::{init_logging, LoggingConfig};
use alice_ui::prelude::*;

const ZOOM_STEP: f32 = 1.1;

/// Pixels panned per notch for wheels that report lines.
const LINE_PIXELS: f32 = 20.0;

/// Where the model is drawn and how large.
#[derive(Debug, Copy, Clone, PartialEq)]
struct View {
    x: f32,
    y: f32,
    scale: f32,
    /// False until the first frame with a usable viewport centres the view.
    placed: bool,
}

impl View {
    fn unplaced() -> Self {
        Self { x: 0.0, y: 0.0, scale: 1.0, placed: false }
    }

    fn apply(&mut self, input: &FrameInput<'_>) {
        let frame = input.frame;

        if !self.placed && input.viewport.is_valid() {
            self.recentre(input);
        }

        if frame.pressed(Key::Equal) || frame.pressed(Key::Plus) {
            self.scale *= ZOOM_STEP;
        }
        if frame.pressed(Key::Minus) {
            self.scale /= ZOOM_STEP;
        }
        if frame.pressed(Key::Digit0) {
            self.recentre(input);
        }

        let (dx, dy) = frame.wheel_pixels;
        let (lx, ly) = frame.wheel_lines;
        self.x -= dx + lx * LINE_PIXELS;
        self.y += dy + ly * LINE_PIXELS;
    }

    fn recentre(&mut self, input: &FrameInput<'_>) {
        let centre = input.viewport.center();
        self.x = centre.x;
        self.y = centre.y;
        self.scale = 1.0;
        self.placed = true;
    }
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let mut view = View::unplaced();
    let root = ModelElement::new((view.x, view.y), view.scale, &alice_studio::sample::cat())
        .context("failed to tessellate sample model")?;

    Application::new()
        .title("Alice Viewer")
        .size(1024.0, 768.0)
        .run_with(root, move |root, input| {
            let before = view;
            view.apply(input);
            if view != before {
                log::debug!("view: ({:.1}, {:.1}) x{:.3}", view.x, view.y, view.scale);
            }

            if let Element::Model(model) = root {
                model.location = Vec2::new(view.x, view.y);
                model.scale = view.scale;
            }
            AppControl::Continue
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alice_engine::input::{InputEvent, InputFrame, InputState, KeyState, MouseWheelDelta};

    fn frame_with(events: Vec<InputEvent>) -> (InputState, InputFrame) {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        for ev in events {
            state.apply_event(&mut frame, ev);
        }
        (state, frame)
    }

    fn press(key: Key) -> InputEvent {
        InputEvent::Key { key, state: KeyState::Pressed, repeat: false }
    }

    fn typed(text: &str) -> InputEvent {
        press(Key::from_character(text).unwrap_or(Key::Unknown(0)))
    }

    fn apply_in(view: &mut View, viewport: Viewport, events: Vec<InputEvent>) {
        let (state, frame) = frame_with(events);
        view.apply(&FrameInput { viewport, state: &state, frame: &frame });
    }

    fn apply(view: &mut View, events: Vec<InputEvent>) {
        apply_in(view, Viewport::new(1000.0, 600.0), events);
    }

    fn placed(x: f32, y: f32, scale: f32) -> View {
        View { x, y, scale, placed: true }
    }

    // ── placement ─────────────────────────────────────────────────────────

    #[test]
    fn first_frame_centres_on_the_drawable() {
        let mut view = View::unplaced();
        apply_in(&mut view, Viewport::new(2048.0, 1536.0), vec![]);
        assert_eq!(view, placed(1024.0, 768.0, 1.0));
    }

    #[test]
    fn empty_viewport_defers_placement() {
        let mut view = View::unplaced();
        apply_in(&mut view, Viewport::new(0.0, 0.0), vec![]);
        assert!(!view.placed);
        apply_in(&mut view, Viewport::new(800.0, 600.0), vec![]);
        assert_eq!(view, placed(400.0, 300.0, 1.0));
    }

    #[test]
    fn placement_happens_once() {
        let mut view = placed(10.0, 20.0, 2.0);
        apply(&mut view, vec![]);
        assert_eq!(view, placed(10.0, 20.0, 2.0));
    }

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn plus_and_minus_zoom_by_ten_percent() {
        let mut view = placed(0.0, 0.0, 1.0);
        apply(&mut view, vec![press(Key::Equal)]);
        assert!((view.scale - 1.1).abs() < 1e-6);
        apply(&mut view, vec![press(Key::Minus)]);
        assert!((view.scale - 1.0).abs() < 1e-6);
    }

    #[test]
    fn typed_characters_drive_the_view() {
        let mut view = placed(0.0, 0.0, 1.0);
        apply(&mut view, vec![typed("+")]);
        assert!((view.scale - 1.1).abs() < 1e-6);
        apply(&mut view, vec![typed("-")]);
        apply(&mut view, vec![typed("-")]);
        assert!((view.scale - 1.0 / 1.1).abs() < 1e-6);
        apply(&mut view, vec![typed(")")]);
        assert!((view.scale - 1.0 / 1.1).abs() < 1e-6);
    }

    #[test]
    fn zero_recentres_and_resets_scale() {
        let mut view = placed(3.0, 4.0, 7.0);
        apply(&mut view, vec![typed("0")]);
        assert_eq!(view, placed(500.0, 300.0, 1.0));
    }

    // ── wheel ─────────────────────────────────────────────────────────────

    #[test]
    fn pixel_wheel_pans_with_y_flipped() {
        let mut view = placed(100.0, 100.0, 1.0);
        apply(&mut view, vec![InputEvent::MouseWheel(MouseWheelDelta::Pixel { x: 10.0, y: 5.0 })]);
        assert_eq!((view.x, view.y), (90.0, 105.0));
    }

    #[test]
    fn line_wheel_pans_by_line_pixels() {
        let mut view = placed(100.0, 100.0, 1.0);
        apply(&mut view, vec![InputEvent::MouseWheel(MouseWheelDelta::Line { x: 1.0, y: -1.0 })]);
        assert_eq!((view.x, view.y), (100.0 - LINE_PIXELS, 100.0 - LINE_PIXELS));
    }
}
