//! Circles and rings.

use std::f32::consts::TAU;

use crate::coords::Vec2;

/// A hollow circle (annulus) tessellated as a triangle strip.
///
/// Vertices alternate between the inner edge (`outer_radius - ring_width`)
/// and the outer edge (`outer_radius`), starting inner, with an angular step
/// of `2π / triangles`. Returns `triangles + 2` vertices; the final pair
/// repeats the first so the strip closes.
///
/// `triangles` must be even — an odd count would land the closing pair on
/// the wrong edge and leave a visible seam, so it is rejected rather than
/// silently corrected.
pub fn hollow_circle(outer_radius: f32, ring_width: f32, triangles: u32) -> Vec<Vec2> {
    assert!(triangles >= 2 && triangles % 2 == 0, "triangle count must be even and >= 2");
    assert!(ring_width > 0.0 && ring_width < outer_radius, "ring width must be in (0, outer_radius)");

    let half = ring_width / 2.0;
    // Radius of the center line of the filled band.
    let center = outer_radius - half;
    let step = TAU / triangles as f32;

    let mut vertices = Vec::with_capacity(triangles as usize + 2);
    let mut edge = -1.0f32;
    for i in 0..triangles + 2 {
        vertices.push(Vec2::on_circle(Vec2::zero(), center + half * edge, step * i as f32));
        edge = -edge;
    }

    vertices
}

/// A unit circle as a convex fan of `vertex_count` rim points.
///
/// No center vertex: a circle is convex, so the first rim point serves as
/// the fan's hub. Scale and position via the model transform.
pub fn circle_fan(vertex_count: u32) -> Vec<Vec2> {
    assert!(vertex_count >= 3, "a circle fan needs at least three vertices");

    let step = TAU / vertex_count as f32;
    (0..vertex_count)
        .map(|i| Vec2::on_circle(Vec2::zero(), 1.0, step * i as f32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    // ── hollow_circle ─────────────────────────────────────────────────────

    #[test]
    fn hollow_circle_vertex_count() {
        for triangles in [2u32, 8, 30, 64] {
            assert_eq!(hollow_circle(0.8, 0.2, triangles).len(), triangles as usize + 2);
        }
    }

    #[test]
    fn hollow_circle_alternates_inner_and_outer_edges() {
        let outer = 0.8;
        let width = 0.2;
        let v = hollow_circle(outer, width, 30);
        for (i, p) in v.iter().enumerate() {
            let expected = if i % 2 == 0 { outer - width } else { outer };
            assert!(
                (p.length() - expected).abs() < EPS,
                "vertex {i} at radius {} (expected {expected})",
                p.length()
            );
        }
    }

    #[test]
    fn hollow_circle_closes_on_itself() {
        let v = hollow_circle(1.0, 0.3, 12);
        let (first, last) = (v[0], v[v.len() - 2]);
        assert!((first.x - last.x).abs() < EPS);
        assert!((first.y - last.y).abs() < EPS);
    }

    #[test]
    #[should_panic(expected = "even")]
    fn hollow_circle_rejects_odd_count() {
        hollow_circle(0.8, 0.2, 7);
    }

    // ── circle_fan ────────────────────────────────────────────────────────

    #[test]
    fn circle_fan_sits_on_the_unit_circle() {
        let v = circle_fan(30);
        assert_eq!(v.len(), 30);
        for p in &v {
            assert!((p.length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn circle_fan_starts_on_positive_x() {
        let v = circle_fan(8);
        assert!((v[0].x - 1.0).abs() < EPS);
        assert!(v[0].y.abs() < EPS);
    }
}
