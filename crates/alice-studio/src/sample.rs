//! Built-in sample model: a cat face made of quadratic blobs and triangles.
//!
//! Units are model units centred on the origin, roughly ±420 across; draw
//! with a scale of 0.2 to get an ~170 px face.

use alice_engine::model::{Model, Path, Point};
use alice_engine::paint::Color;

/// Square of four control points; the implied on-curve midpoints make a round blob.
fn blob(cx: f32, cy: f32, r: f32) -> Vec<Point> {
    vec![
        Point::control(cx + r, cy - r, 0.5),
        Point::control(cx + r, cy + r, 0.5),
        Point::control(cx - r, cy + r, 0.5),
        Point::control(cx - r, cy - r, 0.5),
    ]
}

fn triangle(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> Vec<Point> {
    vec![Point::on(a.0, a.1), Point::on(b.0, b.1), Point::on(c.0, c.1)]
}

pub fn cat() -> Model {
    let fur = Color::rgb(0.95, 0.6, 0.2);
    let inner = Color::rgb(0.9, 0.45, 0.55);
    let dark = Color::rgb(0.1, 0.1, 0.1);

    Model {
        paths: vec![
            Path { colour: fur, points: triangle((-380.0, 150.0), (-200.0, 260.0), (-360.0, 420.0)) },
            Path { colour: fur, points: triangle((380.0, 150.0), (360.0, 420.0), (200.0, 260.0)) },
            Path { colour: inner, points: triangle((-340.0, 200.0), (-250.0, 260.0), (-340.0, 350.0)) },
            Path { colour: inner, points: triangle((340.0, 200.0), (340.0, 350.0), (250.0, 260.0)) },
            Path { colour: fur, points: blob(0.0, 0.0, 400.0) },
            Path { colour: dark, points: blob(-150.0, 80.0, 50.0) },
            Path { colour: dark, points: blob(150.0, 80.0, 50.0) },
            Path { colour: inner, points: triangle((0.0, -60.0), (40.0, 0.0), (-40.0, 0.0)) },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alice_engine::model::ModelMesh;

    #[test]
    fn every_path_produces_triangles() {
        let mesh = ModelMesh::from_model(&cat()).expect("cat tessellates");
        assert_eq!(mesh.paths.len(), 8);
        for path in &mesh.paths {
            assert!(!path.vertices.is_empty());
            assert_eq!(path.vertices.len() % 3, 0);
        }
    }

    #[test]
    fn blob_is_four_curves_and_a_diamond() {
        let mesh = ModelMesh::from_model(&Model {
            paths: vec![Path { colour: Color::rgb(1.0, 1.0, 1.0), points: blob(0.0, 0.0, 1.0) }],
        })
        .expect("blob tessellates");
        // 4 outward curve triangles + 2 interior triangles.
        assert_eq!(mesh.paths[0].vertices.len(), 18);
    }
}
