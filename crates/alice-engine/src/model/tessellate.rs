use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;

use super::{Point, TessellateError};

/// Vertex of a tessellated model.
///
/// `param` is `(x, y, sign)` for the model program's parabola test
/// `sign * (x² - y) >= 0`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ModelVertex {
    pub position: [f32; 2],
    pub param: [f32; 3],
}

/// Param for interior triangles: `x² - y = -1`, sign `-1`, always covered.
const SOLID_PARAM: [f32; 3] = [0.0, 1.0, -1.0];

/// Curve parameters at the start, control and end of a quadratic segment.
const CURVE_PARAMS: [[f32; 2]; 3] = [[0.0, 0.0], [0.5, 0.0], [1.0, 1.0]];

/// Tessellates one closed path into a triangle list.
///
/// Quadratic segments (on-curve, control, on-curve) become one triangle each
/// whose `param` lets the fragment stage cut the curve per pixel. A segment
/// bulging outwards (`cross > 0`) drops its control point from the polygon and
/// keeps the region between chord and curve; one bulging inwards keeps the
/// control point in the polygon and carves the region out. The remaining
/// polygon is ear-clipped into solid triangles.
///
/// Paths are expected counter-clockwise in a +Y up space.
pub fn tessellate_path(points: &[Point]) -> Result<Vec<ModelVertex>, TessellateError> {
    if points.is_empty() {
        return Err(TessellateError::EmptyPath);
    }
    if let Some(index) = points
        .iter()
        .position(|p| !p.location.is_finite() || !p.curve_bias.is_finite())
    {
        return Err(TessellateError::NonFinitePoint { index });
    }
    if points.len() < 2 {
        return Ok(Vec::new());
    }

    let mut ring = Ring::build(points);
    let first = ring.first_on_curve();

    let mut out = Vec::new();
    ring.emit_curves(first, &mut out);
    ring.emit_interior(first, &mut out);

    log::trace!("tessellated path: {} points -> {} vertices", points.len(), out.len());
    Ok(out)
}

struct RingNode {
    next: usize,
    point: Point,
}

/// Singly linked ring over the path, with implied on-curve points inserted.
///
/// Node 0 holds the last input point so the ring closes without a special case.
struct Ring {
    nodes: Vec<RingNode>,
}

impl Ring {
    fn build(points: &[Point]) -> Self {
        let mut nodes = Vec::with_capacity(points.len() * 2);
        nodes.push(RingNode { next: 0, point: points[points.len() - 1] });
        let mut last = 0;

        for (i, point) in points.iter().enumerate() {
            let prev = nodes[last].point;
            if point.is_control() && prev.is_control() {
                let t = prev.curve_bias;
                let location = prev.location + (point.location - prev.location) * t;
                nodes.push(RingNode { next: 0, point: Point { location, curve_bias: 0.0 } });
                nodes[last].next = last + 1;
                last += 1;
            }

            if i != points.len() - 1 {
                nodes.push(RingNode { next: 0, point: *point });
                nodes[last].next = last + 1;
                last += 1;
            }
        }

        Self { nodes }
    }

    #[inline]
    fn next(&self, i: usize) -> usize {
        self.nodes[i].next
    }

    #[inline]
    fn location(&self, i: usize) -> Vec2 {
        self.nodes[i].point.location
    }

    /// Node 0 is the last input point; when it is a control point the next node
    /// is on-curve (either an inserted midpoint or the first input point).
    fn first_on_curve(&self) -> usize {
        if self.nodes[0].point.is_control() && self.nodes.len() > 1 { 1 } else { 0 }
    }

    fn emit_curves(&mut self, first: usize, out: &mut Vec<ModelVertex>) {
        let mut i = first;
        let mut started = false;

        while !started || i != first {
            let control = self.next(i);
            if self.nodes[control].point.is_control() {
                let end = self.next(control);
                let p1 = self.location(i);
                let p2 = self.location(control);
                let p3 = self.location(end);

                let cross = cross(p1, p2, p3);
                if cross == 0.0 {
                    // Straight segment: drop the control point and look again.
                    self.nodes[i].next = end;
                    continue;
                }

                let sign = if cross > 0.0 {
                    self.nodes[i].next = end;
                    -1.0
                } else {
                    1.0
                };

                for (p, [x, y]) in [p1, p2, p3].into_iter().zip(CURVE_PARAMS) {
                    out.push(ModelVertex { position: p.to_array(), param: [x, y, sign] });
                }
            }

            i = self.next(i);
            started = true;
        }
    }

    fn emit_interior(&mut self, first: usize, out: &mut Vec<ModelVertex>) {
        let mut v1 = first;
        let mut last_success = v1;

        loop {
            let v2 = self.next(v1);
            let v3 = self.next(v2);
            if v1 == v3 {
                return;
            }

            let p1 = self.location(v1);
            let p2 = self.location(v2);
            let p3 = self.location(v3);

            if cross(p1, p3, p2) < 0.0 && self.is_empty_ear(v1, v3, [p1, p2, p3]) {
                for p in [p1, p2, p3] {
                    out.push(ModelVertex { position: p.to_array(), param: SOLID_PARAM });
                }
                self.nodes[v1].next = v3;
                last_success = v1;
                continue;
            }

            v1 = self.next(v1);
            if v1 == last_success {
                return;
            }
        }
    }

    /// No ring vertex outside the ear lies strictly inside it.
    fn is_empty_ear(&self, v1: usize, v3: usize, [t1, t2, t3]: [Vec2; 3]) -> bool {
        let mut v = self.next(v3);
        while v != v1 {
            if triangle_contains(t1, t2, t3, self.location(v)) {
                return false;
            }
            v = self.next(v);
        }
        true
    }
}

/// `(b - a) × (c - a)`.
#[inline]
fn cross(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

#[inline]
fn triangle_contains(t1: Vec2, t2: Vec2, t3: Vec2, p: Vec2) -> bool {
    cross(t1, p, t2) < 0.0 && cross(t2, p, t3) < 0.0 && cross(t3, p, t1) < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shading::model::coverage;

    fn locations(ring: &Ring) -> Vec<Vec2> {
        let mut out = vec![ring.location(0)];
        let mut i = ring.next(0);
        while i != 0 {
            out.push(ring.location(i));
            i = ring.next(i);
        }
        out
    }

    // ── ring ──────────────────────────────────────────────────────────────

    #[test]
    fn ring_starts_with_last_point_and_closes() {
        let ring = Ring::build(&[Point::on(0.0, 0.0), Point::on(1.0, 0.0), Point::on(0.0, 1.0)]);
        assert_eq!(
            locations(&ring),
            vec![Vec2::new(0.0, 1.0), Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)]
        );
    }

    #[test]
    fn consecutive_controls_get_an_implied_on_curve_point() {
        let ring = Ring::build(&[
            Point::on(0.0, 0.0),
            Point::control(1.0, 0.0, 0.5),
            Point::control(2.0, 1.0, 0.5),
            Point::on(0.0, 2.0),
        ]);
        assert_eq!(
            locations(&ring),
            vec![
                Vec2::new(0.0, 2.0),
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(1.5, 0.5),
                Vec2::new(2.0, 1.0),
            ]
        );
    }

    #[test]
    fn first_on_curve_skips_trailing_control() {
        let ring = Ring::build(&[Point::on(0.0, 0.0), Point::on(2.0, 0.0), Point::control(1.0, 2.0, 0.5)]);
        assert_eq!(ring.first_on_curve(), 1);
    }

    // ── tessellation ──────────────────────────────────────────────────────

    #[test]
    fn square_becomes_two_solid_triangles() {
        let v = tessellate_path(&[
            Point::on(0.0, 0.0),
            Point::on(1.0, 0.0),
            Point::on(1.0, 1.0),
            Point::on(0.0, 1.0),
        ])
        .unwrap();
        assert_eq!(v.len(), 6);
        assert!(v.iter().all(|v| v.param == SOLID_PARAM));
        assert!(v.iter().all(|v| coverage(v.param) == 1.0));
    }

    #[test]
    fn outward_bulge_drops_control_from_polygon() {
        let v = tessellate_path(&[
            Point::on(0.0, 0.0),
            Point::control(1.0, -1.0, 0.5),
            Point::on(2.0, 0.0),
            Point::on(1.0, 2.0),
        ])
        .unwrap();

        assert_eq!(v.len(), 6);
        assert_eq!(v[0], ModelVertex { position: [0.0, 0.0], param: [0.0, 0.0, -1.0] });
        assert_eq!(v[1], ModelVertex { position: [1.0, -1.0], param: [0.5, 0.0, -1.0] });
        assert_eq!(v[2], ModelVertex { position: [2.0, 0.0], param: [1.0, 1.0, -1.0] });
        // The remaining polygon never references the control point.
        assert!(v[3..].iter().all(|v| v.position != [1.0, -1.0]));
    }

    #[test]
    fn inward_bulge_keeps_control_in_polygon() {
        let v = tessellate_path(&[
            Point::on(0.0, 0.0),
            Point::control(1.0, 1.0, 0.5),
            Point::on(2.0, 0.0),
            Point::on(1.0, 3.0),
        ])
        .unwrap();

        assert_eq!(v.len(), 9);
        assert!(v[..3].iter().all(|v| v.param[2] == 1.0));
        assert!(v[3..].iter().any(|v| v.position == [1.0, 1.0]));
        assert!(v[3..].iter().all(|v| v.param == SOLID_PARAM));
    }

    #[test]
    fn collinear_control_emits_no_curve() {
        let v = tessellate_path(&[
            Point::on(0.0, 0.0),
            Point::control(1.0, 0.0, 0.5),
            Point::on(2.0, 0.0),
            Point::on(1.0, 2.0),
        ])
        .unwrap();
        assert_eq!(v.len(), 3);
        assert!(v.iter().all(|v| v.param == SOLID_PARAM));
    }

    #[test]
    fn curve_midpoint_is_inside_and_control_is_outside() {
        // The fragment test must keep the chord side and drop the control side.
        let [a, b, c] = CURVE_PARAMS;
        let mid_chord = [(a[0] + c[0]) * 0.5, (a[1] + c[1]) * 0.5, -1.0];
        assert_eq!(coverage(mid_chord), 1.0);
        assert_eq!(coverage([b[0], b[1], -1.0]), 0.0);
    }

    // ── errors / degenerate input ─────────────────────────────────────────

    #[test]
    fn empty_path_is_an_error() {
        assert_eq!(tessellate_path(&[]), Err(TessellateError::EmptyPath));
    }

    #[test]
    fn non_finite_point_is_reported_by_index() {
        let r = tessellate_path(&[Point::on(0.0, 0.0), Point::on(f32::NAN, 1.0)]);
        assert_eq!(r, Err(TessellateError::NonFinitePoint { index: 1 }));
    }

    #[test]
    fn single_point_has_no_area() {
        assert_eq!(tessellate_path(&[Point::control(1.0, 1.0, 0.5)]), Ok(Vec::new()));
    }

    #[test]
    fn two_controls_terminate() {
        let v = tessellate_path(&[Point::control(0.0, 0.0, 0.5), Point::control(2.0, 0.0, 0.5)]).unwrap();
        assert!(v.len() % 3 == 0);
    }
}
