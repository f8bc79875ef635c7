use bytemuck::{Pod, Zeroable};

use crate::render::RenderCtx;

use super::common::{create_shape_pipeline, QuadVertex};

pub(crate) const SHADER: &str = include_str!("shaders/panel.wgsl");

/// Per-instance data for the panel program.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct PanelInstance {
    pub location: [f32; 2],     // px, bottom-left corner
    pub size: [f32; 2],         // px
    pub border_width: f32,      // px
    pub fill_colour: [f32; 4],  // straight alpha
    pub border_colour: [f32; 3], // opaque
}

impl PanelInstance {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        1 => Float32x2, // location
        2 => Float32x2, // size
        3 => Float32,   // border_width
        4 => Float32x4, // fill_colour
        5 => Float32x3  // border_colour
    ];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PanelInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

/// Lazily built panel pipeline, recreated when the surface format changes.
#[derive(Default)]
pub(crate) struct PanelPipeline {
    format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
}

impl PanelPipeline {
    pub(crate) fn ensure(&mut self, ctx: &RenderCtx<'_>, viewport_layout: &wgpu::BindGroupLayout) {
        if self.pipeline.is_some() && self.format == Some(ctx.surface_format) {
            return;
        }

        self.pipeline = Some(create_shape_pipeline(
            ctx,
            "panel",
            SHADER,
            viewport_layout,
            &[QuadVertex::layout(), PanelInstance::layout()],
        ));
        self.format = Some(ctx.surface_format);
    }

    #[inline]
    pub(crate) fn get(&self) -> Option<&wgpu::RenderPipeline> {
        self.pipeline.as_ref()
    }
}
