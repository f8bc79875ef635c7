use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });

        self.sorted_dirty = true;
    }

    /// Iterates items in paint order (back-to-front) without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::paint::Color;

    fn push_panel(list: &mut DrawList, z: i32, x: f32) {
        list.push_panel(ZIndex(z), Rect::new(x, 0.0, 10.0, 10.0), Color::rgb(1.0, 1.0, 1.0), None);
    }

    fn xs(list: &mut DrawList) -> Vec<f32> {
        list.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Panel(p) => p.rect.origin.x,
                _ => f32::NAN,
            })
            .collect()
    }

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut list = DrawList::new();
        push_panel(&mut list, 1, 0.0);
        push_panel(&mut list, 0, 1.0);
        push_panel(&mut list, 1, 2.0);
        push_panel(&mut list, 0, 3.0);
        assert_eq!(xs(&mut list), vec![1.0, 3.0, 0.0, 2.0]);
    }

    #[test]
    fn push_after_iteration_resorts() {
        let mut list = DrawList::new();
        push_panel(&mut list, 5, 0.0);
        assert_eq!(xs(&mut list), vec![0.0]);
        push_panel(&mut list, 1, 1.0);
        assert_eq!(xs(&mut list), vec![1.0, 0.0]);
    }

    #[test]
    fn clear_resets_order_and_items() {
        let mut list = DrawList::new();
        push_panel(&mut list, 0, 0.0);
        list.clear();
        assert!(list.is_empty());
        push_panel(&mut list, 0, 7.0);
        assert_eq!(list.items()[0].key.order, 0);
        assert_eq!(list.items()[0].cmd, DrawCmd::Panel(crate::scene::PanelCmd {
            rect: Rect::from_origin_size(Vec2::new(7.0, 0.0), Vec2::new(10.0, 10.0)),
            fill_colour: Color::rgb(1.0, 1.0, 1.0),
            border: None,
        }));
    }
}
