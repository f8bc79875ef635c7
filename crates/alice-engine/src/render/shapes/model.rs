use bytemuck::{Pod, Zeroable};

use crate::model::ModelVertex;
use crate::render::RenderCtx;

use super::common::create_shape_pipeline;

pub(crate) const SHADER: &str = include_str!("shaders/model.wgsl");

/// Per-path data for the model program; one instance per draw.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ModelInstance {
    pub translate: [f32; 2],
    pub scale: f32,
    pub colour: [f32; 3],
}

impl ModelInstance {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        2 => Float32x2, // translate
        3 => Float32,   // scale
        4 => Float32x3  // colour
    ];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ModelInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
    0 => Float32x2, // position
    1 => Float32x3  // param
];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<ModelVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    }
}

#[derive(Default)]
pub(crate) struct ModelPipeline {
    format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
}

impl ModelPipeline {
    pub(crate) fn ensure(&mut self, ctx: &RenderCtx<'_>, viewport_layout: &wgpu::BindGroupLayout) {
        if self.pipeline.is_some() && self.format == Some(ctx.surface_format) {
            return;
        }

        self.pipeline = Some(create_shape_pipeline(
            ctx,
            "model",
            SHADER,
            viewport_layout,
            &[vertex_layout(), ModelInstance::layout()],
        ));
        self.format = Some(ctx.surface_format);
    }

    #[inline]
    pub(crate) fn get(&self) -> Option<&wgpu::RenderPipeline> {
        self.pipeline.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_stride_matches_attributes() {
        assert_eq!(std::mem::size_of::<ModelVertex>(), 5 * 4);
        assert_eq!(VERTEX_ATTRS[1].offset, 8);
    }
}
