//! Widget tree demo: nested panels, a bordered panel, a group, a grid and a model.

use anyhow::Context;

use alice_engine::logging::{init_logging, LoggingConfig};
use alice_ui::prelude::*;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let cat = ModelElement::new((250.0, 150.0), 0.2, &alice_studio::sample::cat())
        .context("failed to tessellate sample model")?;

    let root = Panel::new((200.0, 100.0), (500.0, 300.0))
        .fill([0.9, 0.0, 0.0, 1.0])
        .child(Panel::new((10.0, 20.0), (100.0, 100.0)).fill([0.7, 0.3, 0.8, 1.0]))
        .child(
            Panel::new((120.0, 20.0), (100.0, 100.0))
                .fill([0.3, 0.8, 0.7, 1.0])
                .border(10, [0.9, 0.3, 0.9]),
        )
        .child(
            Group::new((300.0, 200.0))
                .child(Panel::new((0.0, 0.0), (20.0, 20.0)).fill([0.8, 0.7, 0.3, 1.0]))
                .child(Panel::new((25.0, 0.0), (20.0, 20.0)).fill([0.3, 0.3, 0.7, 1.0])),
        )
        .child(Grid::new(
            Rect::from_corners(Vec2::new(100.0, 100.0), Vec2::new(400.0, 300.0)),
            (50.0, 20.0),
            [0.9, 0.9, 0.9],
        ))
        .child(cat);

    Application::new()
        .title("Alice")
        .size(1024.0, 768.0)
        .run(root)
}
