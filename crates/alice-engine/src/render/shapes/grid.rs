use bytemuck::{Pod, Zeroable};

use crate::render::RenderCtx;

use super::common::{create_shape_pipeline, QuadVertex};

pub(crate) const SHADER: &str = include_str!("shaders/grid.wgsl");

/// Per-instance data for the grid program.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GridInstance {
    pub location: [f32; 2],
    pub size: [f32; 2],
    pub grid_size: [f32; 2],
    pub grid_offset: [f32; 2],
    pub grid_colour: [f32; 3],
}

impl GridInstance {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        1 => Float32x2, // location
        2 => Float32x2, // size
        3 => Float32x2, // grid_size
        4 => Float32x2, // grid_offset
        5 => Float32x3  // grid_colour
    ];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GridInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

#[derive(Default)]
pub(crate) struct GridPipeline {
    format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
}

impl GridPipeline {
    pub(crate) fn ensure(&mut self, ctx: &RenderCtx<'_>, viewport_layout: &wgpu::BindGroupLayout) {
        if self.pipeline.is_some() && self.format == Some(ctx.surface_format) {
            return;
        }

        self.pipeline = Some(create_shape_pipeline(
            ctx,
            "grid",
            SHADER,
            viewport_layout,
            &[QuadVertex::layout(), GridInstance::layout()],
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
    fn grid_width_matches_cpu_mirror() {
        let src = SHADER;
        let expected = format!("const GRID_WIDTH: f32 = {:.1};", crate::shading::grid::GRID_WIDTH);
        assert!(src.contains(&expected));
    }

    #[test]
    fn instance_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<GridInstance>(), 11 * 4);
    }
}
