//! Point containment tests.
//!
//! Sign-based half-plane tests: no winding assumption, and points exactly on
//! an edge count as inside. Picking wants that inclusivity — a click on the
//! border of a shape should grab it, not fall through.

use glam::Vec2;

/// The signed area (times two) of the triangle `(p1, p2, p3)`.
///
/// Positive when the triangle winds counter-clockwise, negative clockwise,
/// zero when the three points are collinear.
#[inline]
pub fn sign(p1: Vec2, p2: Vec2, p3: Vec2) -> f32 {
    (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
}

/// Whether `point` lies inside the triangle `(a, b, c)`, boundary included.
///
/// The point is inside iff it is not strictly on both sides of the edge set:
/// a mix of positive and negative signs means outside, while any zero (on an
/// edge or vertex) keeps it inside.
pub fn point_in_triangle(point: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let d1 = sign(point, a, b);
    let d2 = sign(point, b, c);
    let d3 = sign(point, c, a);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    !(has_neg && has_pos)
}

/// Whether `point` lies inside the convex polygon `vertices`, boundary
/// included. The polygon is fanned around its first vertex; `vertices` must
/// hold at least three points.
pub fn point_in_convex_polygon(point: Vec2, vertices: &[Vec2]) -> bool {
    assert!(vertices.len() >= 3, "a polygon needs at least three vertices");
    (1..vertices.len() - 1)
        .any(|i| point_in_triangle(point, vertices[0], vertices[i], vertices[i + 1]))
}
