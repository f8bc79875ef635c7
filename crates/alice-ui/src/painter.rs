use alice_engine::coords::{Rect, Vec2};
use alice_engine::scene::{Border, DrawList, ZIndex};

use crate::element::{Element, Grid, Group, ModelElement, Panel};

/// Lowers an element tree into draw commands.
///
/// Walks the tree in pre-order: a panel is drawn before its children, so
/// children paint over their parent and later siblings over earlier ones.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    origin: Vec2,
    z: i32,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, origin: Vec2::zero(), z: 0 }
    }

    /// Paints `element` relative to the current origin.
    pub fn paint(&mut self, element: &Element) {
        match element {
            Element::Panel(panel) => self.panel(panel),
            Element::Group(group) => self.group(group),
            Element::Grid(grid) => self.grid(grid),
            Element::Model(model) => self.model(model),
        }
    }

    fn panel(&mut self, panel: &Panel) {
        let location = self.origin + panel.location;
        let border = (panel.border_width > 0)
            .then(|| Border::new(panel.border_width as f32, panel.border_colour));

        let z = self.next_z();
        self.draw_list.push_panel(
            z,
            Rect::from_origin_size(location, panel.size),
            panel.fill_colour,
            border,
        );

        self.children_at(location, &panel.children);
    }

    fn group(&mut self, group: &Group) {
        let location = self.origin + group.location;
        self.children_at(location, &group.children);
    }

    fn grid(&mut self, grid: &Grid) {
        let bounds = grid.bounds.normalized().translated(self.origin);
        let z = self.next_z();
        self.draw_list.push_grid(z, bounds, grid.cell_size, grid.offset, grid.colour);
    }

    fn model(&mut self, model: &ModelElement) {
        let location = self.origin + model.location;
        let z = self.next_z();
        self.draw_list.push_model(z, location, model.scale, model.mesh.clone());
    }

    fn children_at(&mut self, origin: Vec2, children: &[Element]) {
        let saved = std::mem::replace(&mut self.origin, origin);
        for child in children {
            self.paint(child);
        }
        self.origin = saved;
    }

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
