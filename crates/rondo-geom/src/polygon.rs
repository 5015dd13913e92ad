//! Regular-polygon primitives: the origin fan and the edge rectangles that
//! composite rounded shapes are assembled from.

use std::f32::consts::{PI, TAU};

use crate::coords::Vec2;

/// Length of one side of a regular polygon with `sides` sides and the given
/// circumradius.
#[inline]
pub fn side_length(sides: u32, circumradius: f32) -> f32 {
    circumradius * 2.0 * (PI / sides as f32).sin()
}

/// Distance from the center to the midpoint of a side.
#[inline]
pub fn apothem(sides: u32, circumradius: f32) -> f32 {
    circumradius * (PI / sides as f32).cos()
}

/// Angle of the first vertex, chosen so the polygon keeps a vertex pointing
/// straight up for odd side counts and an edge centered on top for even side
/// counts. The parity asymmetry is intentional.
#[inline]
pub fn first_vertex_angle(sides: u32) -> f32 {
    if sides % 2 == 1 {
        90.0f32.to_radians()
    } else {
        (90.0 - 180.0 / sides as f32).to_radians()
    }
}

/// Tessellates a regular polygon as `sides` triangles radiating from the
/// origin (flat triangle list, `3 * sides` vertices).
///
/// Panics if `sides < 3`.
pub fn polygon_fan(sides: u32, circumradius: f32) -> Vec<Vec2> {
    assert!(sides >= 3, "a polygon needs at least three sides");

    let first = first_vertex_angle(sides);
    let step = TAU / sides as f32;
    let mut vertices = Vec::with_capacity(sides as usize * 3);

    for i in 0..sides {
        vertices.push(Vec2::zero());
        vertices.push(Vec2::on_circle(Vec2::zero(), circumradius, first + step * i as f32));
        vertices.push(Vec2::on_circle(Vec2::zero(), circumradius, first + step * (i + 1) as f32));
    }

    vertices
}

/// The flat rectangle lying on the outside of one polygon edge, between two
/// rounded corners: one side length wide, `corner_radius` tall, seated at
/// apothem distance below the center and then rotated by `rotation` radians
/// (zero = the bottom edge).
///
/// Fan convention: 4 vertices ordered top-left, bottom-left, bottom-right,
/// top-right.
pub fn edge_rect_fan(sides: u32, circumradius: f32, corner_radius: f32, rotation: f32) -> [Vec2; 4] {
    let [tl, bl, br, tr] = edge_rect_corners(sides, circumradius, corner_radius, rotation);
    [tl, bl, br, tr]
}

/// Same rectangle as [`edge_rect_fan`] in flat-triangle-list convention:
/// 6 vertices, two counterclockwise triangles.
pub fn edge_rect_triangles(
    sides: u32,
    circumradius: f32,
    corner_radius: f32,
    rotation: f32,
) -> [Vec2; 6] {
    let [tl, bl, br, tr] = edge_rect_corners(sides, circumradius, corner_radius, rotation);
    [tl, bl, br, tl, br, tr]
}

fn edge_rect_corners(
    sides: u32,
    circumradius: f32,
    corner_radius: f32,
    rotation: f32,
) -> [Vec2; 4] {
    assert!(sides >= 3, "a polygon needs at least three sides");

    let w = side_length(sides, circumradius) / 2.0;
    let h = corner_radius / 2.0;
    // The rectangle's center line sits half a corner radius outside the edge.
    let cy = -(apothem(sides, circumradius) + h);

    [
        Vec2::new(-w, cy + h).rotated(rotation),
        Vec2::new(-w, cy - h).rotated(rotation),
        Vec2::new(w, cy - h).rotated(rotation),
        Vec2::new(w, cy + h).rotated(rotation),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    // ── regular-polygon helpers ───────────────────────────────────────────

    #[test]
    fn hexagon_side_equals_circumradius() {
        assert!((side_length(6, 1.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn triangle_apothem_is_half_circumradius() {
        assert!((apothem(3, 0.8) - 0.4).abs() < EPS);
    }

    #[test]
    fn first_vertex_angle_parity() {
        assert!((first_vertex_angle(3) - 90.0f32.to_radians()).abs() < EPS);
        assert!((first_vertex_angle(4) - 45.0f32.to_radians()).abs() < EPS);
        assert!((first_vertex_angle(6) - 60.0f32.to_radians()).abs() < EPS);
    }

    // ── polygon_fan ───────────────────────────────────────────────────────

    #[test]
    fn polygon_fan_vertex_count() {
        for sides in 3..=14 {
            assert_eq!(polygon_fan(sides, 0.8).len(), sides as usize * 3);
        }
    }

    #[test]
    fn odd_polygon_has_a_vertex_straight_up() {
        let v = polygon_fan(5, 1.0);
        // First rim vertex of the first triangle.
        assert!(v[1].x.abs() < EPS);
        assert!((v[1].y - 1.0).abs() < EPS);
    }

    #[test]
    fn fan_triangles_close_the_ring() {
        let sides = 7;
        let v = polygon_fan(sides, 0.5);
        let last = v[v.len() - 1];
        // Last triangle's far vertex wraps back to the first rim vertex.
        assert!((last.x - v[1].x).abs() < EPS);
        assert!((last.y - v[1].y).abs() < EPS);
    }

    // ── edge rectangles ───────────────────────────────────────────────────

    #[test]
    fn bottom_edge_rect_is_axis_aligned() {
        let [tl, bl, br, tr] = edge_rect_fan(4, 0.8, 0.2, 0.0);
        let w = side_length(4, 0.8) / 2.0;
        let a = apothem(4, 0.8);
        assert!((tl.x + w).abs() < EPS && (tl.y + a).abs() < EPS);
        assert!((bl.x + w).abs() < EPS && (bl.y + a + 0.2).abs() < EPS);
        assert!((br.x - w).abs() < EPS);
        assert!((tr.y + a).abs() < EPS);
    }

    #[test]
    fn triangle_form_reuses_fan_corners() {
        let fan = edge_rect_fan(6, 1.0, 0.1, 0.7);
        let tri = edge_rect_triangles(6, 1.0, 0.1, 0.7);
        assert_eq!(tri, [fan[0], fan[1], fan[2], fan[0], fan[2], fan[3]]);
    }

    #[test]
    fn rotation_preserves_distance_from_center() {
        let flat = edge_rect_fan(5, 0.8, 0.2, 0.0);
        let turned = edge_rect_fan(5, 0.8, 0.2, 1.3);
        for (a, b) in flat.iter().zip(&turned) {
            assert!((a.length() - b.length()).abs() < EPS);
        }
    }
}
