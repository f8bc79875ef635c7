use alice_engine::scene::DrawList;

use crate::element::Element;
use crate::painter::Painter;

/// Retained draw list for an element tree.
///
/// ```rust,ignore
/// let draw_list = ui.frame(&root);
/// scene_renderer.render(rctx, target, draw_list);
/// ```
#[derive(Debug, Default)]
pub struct UiScene {
    /// Draw list populated by the most recent [`UiScene::frame`] call.
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears and refills the draw list from `root`.
    ///
    /// The list is owned by the scene and valid until the next call.
    pub fn frame(&mut self, root: &Element) -> &mut DrawList {
        self.draw_list.clear();
        Painter::new(&mut self.draw_list).paint(root);
        log::trace!("ui frame: {} draw items", self.draw_list.len());
        &mut self.draw_list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Group, Panel};

    #[test]
    fn frame_replaces_previous_contents() {
        let mut ui = UiScene::new();
        let big: Element = Panel::new((0.0, 0.0), (10.0, 10.0))
            .child(Panel::new((1.0, 1.0), (2.0, 2.0)))
            .into();
        assert_eq!(ui.frame(&big).len(), 2);

        let empty: Element = Group::new((0.0, 0.0)).into();
        assert!(ui.frame(&empty).is_empty());
    }
}
