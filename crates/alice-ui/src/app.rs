use winit::dpi::LogicalSize;

use alice_engine::coords::Viewport;
use alice_engine::core::{App as EngineApp, AppControl, FrameCtx};
use alice_engine::device::GpuInit;
use alice_engine::input::{InputFrame, InputState, Key};
use alice_engine::paint::Color;
use alice_engine::render::SceneRenderer;
use alice_engine::window::{RedrawMode, Runtime, RuntimeConfig};

use crate::element::Element;
use crate::scene::UiScene;

// ── FrameInput ────────────────────────────────────────────────────────────

/// What an update callback sees each frame.
pub struct FrameInput<'a> {
    /// Drawable size in pixels.
    pub viewport: Viewport,
    /// Held keys.
    pub state: &'a InputState,
    /// Presses and wheel deltas since the previous frame.
    pub frame: &'a InputFrame,
}

type UpdateFn = Box<dyn FnMut(&mut Element, &FrameInput<'_>) -> AppControl>;

// ── Application ───────────────────────────────────────────────────────────

/// Top-level UI application builder.
///
/// ```rust,ignore
/// Application::new()
///     .title("Alice")
///     .size(1024.0, 768.0)
///     .run(root)?;
/// ```
pub struct Application {
    title: String,
    width: f64,
    height: f64,
    clear_colour: Color,
    exit_on_escape: bool,
    redraw: RedrawMode,
    gpu: GpuInit,
}

impl Application {
    pub fn new() -> Self {
        Self {
            title: "Alice".to_string(),
            width: 1024.0,
            height: 768.0,
            clear_colour: Color::rgba(0.02, 0.02, 0.02, 1.0),
            exit_on_escape: true,
            redraw: RedrawMode::OnDemand,
            gpu: GpuInit::default(),
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Colour the frame is cleared to before the tree is drawn.
    pub fn clear_colour(mut self, colour: impl Into<Color>) -> Self {
        self.clear_colour = colour.into();
        self
    }

    /// Close the window when Escape is pressed (on by default).
    pub fn exit_on_escape(mut self, on: bool) -> Self {
        self.exit_on_escape = on;
        self
    }

    /// Redraw every time the event loop idles instead of only on input/resize.
    pub fn continuous(mut self, on: bool) -> Self {
        self.redraw = if on { RedrawMode::Continuous } else { RedrawMode::OnDemand };
        self
    }

    /// Override GPU/surface settings.
    pub fn gpu(mut self, init: GpuInit) -> Self {
        self.gpu = init;
        self
    }

    /// Runs the event loop drawing a static tree. Returns when the window closes.
    pub fn run(self, root: impl Into<Element>) -> anyhow::Result<()> {
        self.run_with(root, |_, _| AppControl::Continue)
    }

    /// Runs the event loop, calling `update` before every frame so it can
    /// mutate the tree in response to input.
    pub fn run_with<F>(self, root: impl Into<Element>, update: F) -> anyhow::Result<()>
    where
        F: FnMut(&mut Element, &FrameInput<'_>) -> AppControl + 'static,
    {
        let config = RuntimeConfig {
            title: self.title,
            initial_size: LogicalSize::new(self.width, self.height),
            redraw: self.redraw,
        };

        let state = UiAppState {
            root: root.into(),
            update: Box::new(update),
            clear_colour: self.clear_colour,
            exit_on_escape: self.exit_on_escape,
            ui_scene: UiScene::new(),
            renderer: SceneRenderer::new(),
        };

        log::info!("starting '{}'", config.title);
        Runtime::run(config, self.gpu, state)
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── UiAppState ────────────────────────────────────────────────────────────

/// Implements `alice_engine::core::App`; user code never sees this type.
struct UiAppState {
    root: Element,
    update: UpdateFn,
    clear_colour: Color,
    exit_on_escape: bool,

    ui_scene: UiScene,
    renderer: SceneRenderer,
}

impl EngineApp for UiAppState {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.exit_on_escape && ctx.input_frame.pressed(Key::Escape) {
            log::info!("escape pressed, exiting");
            return AppControl::Exit;
        }

        let input = FrameInput {
            viewport: ctx.window.viewport(),
            state: ctx.input,
            frame: ctx.input_frame,
        };
        if (self.update)(&mut self.root, &input) == AppControl::Exit {
            return AppControl::Exit;
        }

        let draw_list = self.ui_scene.frame(&self.root);
        let renderer = &mut self.renderer;

        ctx.render(self.clear_colour, |rctx, target| {
            renderer.render(rctx, target, draw_list);
        })
    }
}
