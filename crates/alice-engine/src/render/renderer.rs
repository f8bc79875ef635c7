use crate::render::{RenderCtx, RenderTarget};
use crate::scene::DrawList;

use super::plan::{Batch, FramePlan};
use super::shapes::common::{DynamicBuffer, QuadBuffers, ViewportBinding};
use super::shapes::grid::GridPipeline;
use super::shapes::model::ModelPipeline;
use super::shapes::panel::PanelPipeline;

/// Draws a `DrawList` with the panel, grid and model programs.
///
/// Resources are created on first use and rebuilt only when the surface
/// format changes or a frame needs more instance space than any before it.
/// All batches are recorded into one render pass that loads the existing
/// target contents, so the frame clear stays with the caller.
pub struct SceneRenderer {
    plan: FramePlan,

    viewport: Option<ViewportBinding>,
    quad: Option<QuadBuffers>,

    panel: PanelPipeline,
    grid: GridPipeline,
    model: ModelPipeline,

    panel_instances: DynamicBuffer,
    grid_instances: DynamicBuffer,
    model_instances: DynamicBuffer,
    model_vertices: DynamicBuffer,
}

impl Default for SceneRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self {
            plan: FramePlan::new(),
            viewport: None,
            quad: None,
            panel: PanelPipeline::default(),
            grid: GridPipeline::default(),
            model: ModelPipeline::default(),
            panel_instances: DynamicBuffer::new("alice panel instances"),
            grid_instances: DynamicBuffer::new("alice grid instances"),
            model_instances: DynamicBuffer::new("alice model instances"),
            model_vertices: DynamicBuffer::new("alice model vertices"),
        }
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, draw_list: &mut DrawList) {
        self.plan.build(draw_list);
        if self.plan.is_empty() || !ctx.viewport.is_valid() {
            return;
        }

        let viewport = self
            .viewport
            .get_or_insert_with(|| ViewportBinding::new(ctx.device));
        viewport.write(ctx);

        let quad = self.quad.get_or_insert_with(|| QuadBuffers::new(ctx.device));

        if !self.plan.panels.is_empty() {
            self.panel.ensure(ctx, &viewport.layout);
            self.panel_instances.upload(ctx, &self.plan.panels);
        }
        if !self.plan.grids.is_empty() {
            self.grid.ensure(ctx, &viewport.layout);
            self.grid_instances.upload(ctx, &self.plan.grids);
        }
        if !self.plan.model_instances.is_empty() {
            self.model.ensure(ctx, &viewport.layout);
            self.model_instances.upload(ctx, &self.plan.model_instances);
            self.model_vertices.upload(ctx, &self.plan.model_vertices);
        }

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("alice scene pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.colour_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        for batch in &self.plan.batches {
            match batch {
                Batch::Panels(range) => {
                    let (Some(pipeline), Some(instances)) =
                        (self.panel.get(), self.panel_instances.buffer())
                    else {
                        continue;
                    };
                    rpass.set_pipeline(pipeline);
                    rpass.set_bind_group(0, &viewport.bind_group, &[]);
                    rpass.set_vertex_buffer(0, quad.vbo.slice(..));
                    rpass.set_vertex_buffer(1, instances.slice(..));
                    rpass.set_index_buffer(quad.ibo.slice(..), wgpu::IndexFormat::Uint16);
                    rpass.draw_indexed(0..6, 0, range.clone());
                }
                Batch::Grids(range) => {
                    let (Some(pipeline), Some(instances)) =
                        (self.grid.get(), self.grid_instances.buffer())
                    else {
                        continue;
                    };
                    rpass.set_pipeline(pipeline);
                    rpass.set_bind_group(0, &viewport.bind_group, &[]);
                    rpass.set_vertex_buffer(0, quad.vbo.slice(..));
                    rpass.set_vertex_buffer(1, instances.slice(..));
                    rpass.set_index_buffer(quad.ibo.slice(..), wgpu::IndexFormat::Uint16);
                    rpass.draw_indexed(0..6, 0, range.clone());
                }
                Batch::Model { vertices, instance } => {
                    let (Some(pipeline), Some(vbo), Some(instances)) = (
                        self.model.get(),
                        self.model_vertices.buffer(),
                        self.model_instances.buffer(),
                    ) else {
                        continue;
                    };
                    rpass.set_pipeline(pipeline);
                    rpass.set_bind_group(0, &viewport.bind_group, &[]);
                    rpass.set_vertex_buffer(0, vbo.slice(..));
                    rpass.set_vertex_buffer(1, instances.slice(..));
                    rpass.draw(vertices.clone(), *instance..*instance + 1);
                }
            }
        }
    }
}
