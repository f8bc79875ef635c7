//! Vector models: closed paths of on-curve points and quadratic control points.
//!
//! A model is tessellated once into a [`ModelMesh`] whose vertices carry the
//! `param` attribute consumed by the model program (see `shading::model`).

mod error;
mod tessellate;

use std::sync::Arc;

use crate::coords::Vec2;
use crate::paint::Color;

pub use error::TessellateError;
pub use tessellate::{tessellate_path, ModelVertex};

/// A path vertex.
///
/// `curve_bias > 0` marks an off-curve control point. Between two consecutive
/// control points an on-curve point is implied at `a + curve_bias(a) * (b - a)`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub location: Vec2,
    pub curve_bias: f32,
}

impl Point {
    /// On-curve point.
    #[inline]
    pub const fn on(x: f32, y: f32) -> Self {
        Self { location: Vec2::new(x, y), curve_bias: 0.0 }
    }

    /// Off-curve control point.
    #[inline]
    pub const fn control(x: f32, y: f32, bias: f32) -> Self {
        Self { location: Vec2::new(x, y), curve_bias: bias }
    }

    #[inline]
    pub fn is_control(self) -> bool {
        self.curve_bias > 0.0
    }
}

/// A closed, single-colour outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub colour: Color,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    pub paths: Vec<Path>,
}

/// Tessellated path: a triangle list plus its colour.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshPath {
    pub colour: Color,
    pub vertices: Vec<ModelVertex>,
}

/// Tessellated model, ready for upload. Cheap to share between frames via `Arc`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelMesh {
    pub paths: Vec<MeshPath>,
}

impl ModelMesh {
    /// Tessellates every path of `model`.
    pub fn from_model(model: &Model) -> Result<Self, TessellateError> {
        let paths = model
            .paths
            .iter()
            .map(|path| {
                Ok(MeshPath {
                    colour: path.colour,
                    vertices: tessellate_path(&path.points)?,
                })
            })
            .collect::<Result<Vec<_>, TessellateError>>()?;

        Ok(Self { paths })
    }

    /// Convenience: tessellate and wrap for sharing.
    pub fn shared(model: &Model) -> Result<Arc<Self>, TessellateError> {
        Self::from_model(model).map(Arc::new)
    }

    pub fn vertex_count(&self) -> usize {
        self.paths.iter().map(|p| p.vertices.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Path {
        Path {
            colour: Color::rgb(0.9, 0.3, 0.7),
            points: vec![
                Point::on(0.0, 0.0),
                Point::on(1.0, 0.0),
                Point::on(1.0, 1.0),
                Point::on(0.0, 1.0),
            ],
        }
    }

    #[test]
    fn from_model_keeps_path_order_and_colour() {
        let mut second = square();
        second.colour = Color::rgb(0.1, 0.2, 0.3);
        let model = Model { paths: vec![square(), second] };

        let mesh = ModelMesh::from_model(&model).unwrap();
        assert_eq!(mesh.paths.len(), 2);
        assert_eq!(mesh.paths[1].colour, Color::rgb(0.1, 0.2, 0.3));
        assert_eq!(mesh.vertex_count(), 12);
    }

    #[test]
    fn from_model_propagates_errors() {
        let model = Model {
            paths: vec![square(), Path { colour: Color::rgb(1.0, 1.0, 1.0), points: vec![] }],
        };
        assert_eq!(ModelMesh::from_model(&model), Err(TessellateError::EmptyPath));
    }
}
