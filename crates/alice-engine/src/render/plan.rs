use std::ops::Range;

use crate::model::ModelVertex;
use crate::scene::{DrawCmd, DrawList, GridCmd, ModelCmd, PanelCmd};

use super::shapes::{GridInstance, ModelInstance, PanelInstance};

/// One draw call in paint order.
#[derive(Debug, Clone, PartialEq)]
pub enum Batch {
    /// Instanced unit quads from `FramePlan::panels`.
    Panels(Range<u32>),
    /// Instanced unit quads from `FramePlan::grids`.
    Grids(Range<u32>),
    /// Vertices from `FramePlan::model_vertices` with a single instance.
    Model { vertices: Range<u32>, instance: u32 },
}

/// CPU side of a frame: per-program instance arrays plus the ordered draw calls.
///
/// Consecutive panels (or grids) in paint order coalesce into one instanced
/// draw. Each model path is its own draw since it has its own colour. Items
/// the programs cannot draw meaningfully (empty rects, zero cell size,
/// non-positive scale, empty paths) are skipped.
///
/// Kept between frames so the vectors reuse their allocations.
#[derive(Debug, Default)]
pub struct FramePlan {
    pub panels: Vec<PanelInstance>,
    pub grids: Vec<GridInstance>,
    pub model_vertices: Vec<ModelVertex>,
    pub model_instances: Vec<ModelInstance>,
    pub batches: Vec<Batch>,

    warned_skipped: bool,
}

impl FramePlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.panels.clear();
        self.grids.clear();
        self.model_vertices.clear();
        self.model_instances.clear();
        self.batches.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Rebuilds the plan from `draw_list` in paint order.
    pub fn build(&mut self, draw_list: &mut DrawList) {
        self.clear();

        let mut skipped = 0usize;
        for item in draw_list.iter_in_paint_order() {
            let drawn = match &item.cmd {
                DrawCmd::Panel(cmd) => self.push_panel(cmd),
                DrawCmd::Grid(cmd) => self.push_grid(cmd),
                DrawCmd::Model(cmd) => self.push_model(cmd),
            };
            if !drawn {
                skipped += 1;
            }
        }

        if skipped > 0 && !self.warned_skipped {
            log::debug!("FramePlan: skipped {} degenerate draw item(s)", skipped);
            self.warned_skipped = true;
        }
    }

    fn push_panel(&mut self, cmd: &PanelCmd) -> bool {
        let rect = cmd.rect.normalized();
        if !rect.is_finite() || !cmd.fill_colour.is_finite() {
            return false;
        }
        let size = rect.size.floor();
        if size.x <= 0.0 || size.y <= 0.0 {
            return false;
        }

        let fill_colour = cmd.fill_colour.clamped();
        let (border_width, border_colour) = match cmd.border {
            Some(border) if border.width.is_finite() && border.colour.is_finite() => {
                (border.width.max(0.0), border.colour.clamped().to_rgb())
            }
            _ => (0.0, fill_colour.to_rgb()),
        };

        let index = self.panels.len() as u32;
        self.panels.push(PanelInstance {
            location: rect.origin.to_array(),
            size: rect.size.to_array(),
            border_width,
            fill_colour: fill_colour.to_array(),
            border_colour,
        });

        match self.batches.last_mut() {
            Some(Batch::Panels(range)) if range.end == index => range.end += 1,
            _ => self.batches.push(Batch::Panels(index..index + 1)),
        }
        true
    }

    fn push_grid(&mut self, cmd: &GridCmd) -> bool {
        let rect = cmd.rect.normalized();
        if !rect.is_finite()
            || !cmd.cell_size.is_finite()
            || !cmd.offset.is_finite()
            || !cmd.colour.is_finite()
        {
            return false;
        }
        let size = rect.size.floor();
        let cell = cmd.cell_size.floor();
        if size.x <= 0.0 || size.y <= 0.0 || cell.x <= 0.0 || cell.y <= 0.0 {
            return false;
        }

        let index = self.grids.len() as u32;
        self.grids.push(GridInstance {
            location: rect.origin.to_array(),
            size: rect.size.to_array(),
            grid_size: cmd.cell_size.to_array(),
            grid_offset: cmd.offset.to_array(),
            grid_colour: cmd.colour.clamped().to_rgb(),
        });

        match self.batches.last_mut() {
            Some(Batch::Grids(range)) if range.end == index => range.end += 1,
            _ => self.batches.push(Batch::Grids(index..index + 1)),
        }
        true
    }

    fn push_model(&mut self, cmd: &ModelCmd) -> bool {
        if !cmd.translate.is_finite() || !cmd.scale.is_finite() || cmd.scale <= 0.0 {
            return false;
        }

        let mut drawn = false;
        for path in &cmd.mesh.paths {
            if path.vertices.is_empty() || !path.colour.is_finite() {
                continue;
            }

            let start = self.model_vertices.len() as u32;
            self.model_vertices.extend_from_slice(&path.vertices);
            let end = self.model_vertices.len() as u32;

            let instance = self.model_instances.len() as u32;
            self.model_instances.push(ModelInstance {
                translate: cmd.translate.to_array(),
                scale: cmd.scale,
                colour: path.colour.clamped().to_rgb(),
            });

            self.batches.push(Batch::Model { vertices: start..end, instance });
            drawn = true;
        }
        drawn
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::model::{Model, ModelMesh, Path, Point};
    use crate::paint::Color;
    use crate::scene::{Border, ZIndex};

    fn white() -> Color {
        Color::rgb(1.0, 1.0, 1.0)
    }

    fn square_mesh(colours: &[Color]) -> Arc<ModelMesh> {
        let paths = colours
            .iter()
            .map(|&colour| Path {
                colour,
                points: vec![
                    Point::on(0.0, 0.0),
                    Point::on(1.0, 0.0),
                    Point::on(1.0, 1.0),
                    Point::on(0.0, 1.0),
                ],
            })
            .collect();
        ModelMesh::shared(&Model { paths }).expect("square tessellates")
    }

    // ── batching ──────────────────────────────────────────────────────────

    #[test]
    fn consecutive_panels_share_one_batch() {
        let mut list = DrawList::new();
        list.push_panel(ZIndex(0), Rect::new(0.0, 0.0, 10.0, 10.0), white(), None);
        list.push_panel(ZIndex(0), Rect::new(5.0, 5.0, 10.0, 10.0), white(), None);

        let mut plan = FramePlan::new();
        plan.build(&mut list);

        assert_eq!(plan.panels.len(), 2);
        assert_eq!(plan.batches, vec![Batch::Panels(0..2)]);
    }

    #[test]
    fn interleaved_kinds_keep_paint_order() {
        let mut list = DrawList::new();
        list.push_panel(ZIndex(0), Rect::new(0.0, 0.0, 10.0, 10.0), white(), None);
        list.push_grid(ZIndex(0), Rect::new(0.0, 0.0, 10.0, 10.0), Vec2::splat(5.0), Vec2::zero(), white());
        list.push_panel(ZIndex(0), Rect::new(0.0, 0.0, 4.0, 4.0), white(), None);

        let mut plan = FramePlan::new();
        plan.build(&mut list);

        assert_eq!(
            plan.batches,
            vec![Batch::Panels(0..1), Batch::Grids(0..1), Batch::Panels(1..2)]
        );
    }

    #[test]
    fn z_index_reorders_before_batching() {
        let mut list = DrawList::new();
        list.push_panel(ZIndex(1), Rect::new(0.0, 0.0, 10.0, 10.0), white(), None);
        list.push_grid(ZIndex(0), Rect::new(0.0, 0.0, 10.0, 10.0), Vec2::splat(5.0), Vec2::zero(), white());
        list.push_panel(ZIndex(1), Rect::new(0.0, 0.0, 4.0, 4.0), white(), None);

        let mut plan = FramePlan::new();
        plan.build(&mut list);

        assert_eq!(plan.batches, vec![Batch::Grids(0..1), Batch::Panels(0..2)]);
    }

    #[test]
    fn each_model_path_is_its_own_draw() {
        let mesh = square_mesh(&[Color::rgb(1.0, 0.0, 0.0), Color::rgb(0.0, 0.0, 1.0)]);
        let mut list = DrawList::new();
        list.push_model(ZIndex(0), Vec2::new(100.0, 50.0), 2.0, mesh);

        let mut plan = FramePlan::new();
        plan.build(&mut list);

        assert_eq!(
            plan.batches,
            vec![
                Batch::Model { vertices: 0..6, instance: 0 },
                Batch::Model { vertices: 6..12, instance: 1 },
            ]
        );
        assert_eq!(plan.model_instances[1].colour, [0.0, 0.0, 1.0]);
        assert_eq!(plan.model_instances[0].translate, [100.0, 50.0]);
        assert_eq!(plan.model_instances[0].scale, 2.0);
    }

    #[test]
    fn rebuild_clears_previous_frame() {
        let mut list = DrawList::new();
        list.push_panel(ZIndex(0), Rect::new(0.0, 0.0, 10.0, 10.0), white(), None);

        let mut plan = FramePlan::new();
        plan.build(&mut list);
        list.clear();
        plan.build(&mut list);

        assert!(plan.is_empty());
        assert!(plan.panels.is_empty());
    }

    // ── instance data ─────────────────────────────────────────────────────

    #[test]
    fn panel_instance_carries_border() {
        let mut list = DrawList::new();
        list.push_panel(
            ZIndex(0),
            Rect::new(10.0, 20.0, 30.0, 40.0),
            Color::rgba(0.5, 0.5, 0.5, 0.5),
            Some(Border::new(2.0, Color::rgb(0.0, 1.0, 0.0))),
        );

        let mut plan = FramePlan::new();
        plan.build(&mut list);

        assert_eq!(
            plan.panels[0],
            PanelInstance {
                location: [10.0, 20.0],
                size: [30.0, 40.0],
                border_width: 2.0,
                fill_colour: [0.5, 0.5, 0.5, 0.5],
                border_colour: [0.0, 1.0, 0.0],
            }
        );
    }

    #[test]
    fn borderless_panel_has_zero_width_band() {
        let mut list = DrawList::new();
        list.push_panel(ZIndex(0), Rect::new(0.0, 0.0, 8.0, 8.0), Color::rgb(0.2, 0.4, 0.6), None);

        let mut plan = FramePlan::new();
        plan.build(&mut list);

        assert_eq!(plan.panels[0].border_width, 0.0);
        assert_eq!(plan.panels[0].border_colour, [0.2, 0.4, 0.6]);
    }

    #[test]
    fn negative_rect_is_normalised() {
        let mut list = DrawList::new();
        list.push_panel(ZIndex(0), Rect::new(10.0, 10.0, -5.0, -5.0), white(), None);

        let mut plan = FramePlan::new();
        plan.build(&mut list);

        assert_eq!(plan.panels[0].location, [5.0, 5.0]);
        assert_eq!(plan.panels[0].size, [5.0, 5.0]);
    }

    #[test]
    fn grid_instance_keeps_offset_per_axis() {
        let mut list = DrawList::new();
        list.push_grid(
            ZIndex(0),
            Rect::new(0.0, 0.0, 200.0, 100.0),
            Vec2::new(20.0, 10.0),
            Vec2::new(3.0, 7.0),
            Color::rgb(0.3, 0.3, 0.3),
        );

        let mut plan = FramePlan::new();
        plan.build(&mut list);

        assert_eq!(plan.grids[0].grid_size, [20.0, 10.0]);
        assert_eq!(plan.grids[0].grid_offset, [3.0, 7.0]);
    }

    // ── skipping ──────────────────────────────────────────────────────────

    #[test]
    fn sub_pixel_panel_is_skipped() {
        let mut list = DrawList::new();
        list.push_panel(ZIndex(0), Rect::new(0.0, 0.0, 0.5, 10.0), white(), None);

        let mut plan = FramePlan::new();
        plan.build(&mut list);

        assert!(plan.is_empty());
    }

    #[test]
    fn grid_with_sub_pixel_cells_is_skipped() {
        let mut list = DrawList::new();
        list.push_grid(ZIndex(0), Rect::new(0.0, 0.0, 10.0, 10.0), Vec2::new(0.9, 5.0), Vec2::zero(), white());

        let mut plan = FramePlan::new();
        plan.build(&mut list);

        assert!(plan.is_empty());
    }

    #[test]
    fn model_with_non_positive_scale_is_skipped() {
        let mut list = DrawList::new();
        list.push_model(ZIndex(0), Vec2::zero(), 0.0, square_mesh(&[white()]));
        list.push_model(ZIndex(0), Vec2::zero(), -1.0, square_mesh(&[white()]));

        let mut plan = FramePlan::new();
        plan.build(&mut list);

        assert!(plan.is_empty());
        assert!(plan.model_vertices.is_empty());
    }

    #[test]
    fn skipped_item_does_not_split_panel_batch() {
        let mut list = DrawList::new();
        list.push_panel(ZIndex(0), Rect::new(0.0, 0.0, 10.0, 10.0), white(), None);
        list.push_panel(ZIndex(0), Rect::new(0.0, 0.0, 0.0, 0.0), white(), None);
        list.push_panel(ZIndex(0), Rect::new(0.0, 0.0, 10.0, 10.0), white(), None);

        let mut plan = FramePlan::new();
        plan.build(&mut list);

        assert_eq!(plan.batches, vec![Batch::Panels(0..2)]);
    }
}
