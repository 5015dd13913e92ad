//! Circular-sector (pie) tessellation.
//!
//! Two output conventions exist in the wild and both are provided as
//! distinctly named entry points — callers must never guess which one a
//! buffer holds:
//!
//! - [`pie_fan`]: center vertex followed by the rim, for `TRIANGLE_FAN`
//!   drawing. `segments + 2` vertices.
//! - [`pie_triangles`]: flat triangle list with the center repeated per
//!   triangle, for `TRIANGLES` drawing. `segments * 3` vertices.

use crate::coords::Vec2;

/// Tessellates a sector into a triangle fan: the center vertex, then
/// `segments + 1` rim vertices at equal angular steps from `start` to `end`
/// inclusive. Angles in radians, counterclockwise for `end > start`.
///
/// Returns `segments + 2` vertices. Panics if `segments == 0`.
pub fn pie_fan(center: Vec2, radius: f32, start: f32, end: f32, segments: u32) -> Vec<Vec2> {
    assert!(segments >= 1, "pie needs at least one segment");

    let step = (end - start) / segments as f32;
    let mut vertices = Vec::with_capacity(segments as usize + 2);

    vertices.push(center);
    for i in 0..=segments {
        vertices.push(Vec2::on_circle(center, radius, start + step * i as f32));
    }

    vertices
}

/// Tessellates a sector into a flat triangle list: `segments` triangles of
/// (center, rim i, rim i+1), no shared vertices.
///
/// Returns `segments * 3` vertices. Panics if `segments == 0`.
pub fn pie_triangles(center: Vec2, radius: f32, start: f32, end: f32, segments: u32) -> Vec<Vec2> {
    assert!(segments >= 1, "pie needs at least one segment");

    let step = (end - start) / segments as f32;
    let mut vertices = Vec::with_capacity(segments as usize * 3);

    for i in 0..segments {
        vertices.push(center);
        vertices.push(Vec2::on_circle(center, radius, start + step * i as f32));
        vertices.push(Vec2::on_circle(center, radius, start + step * (i + 1) as f32));
    }

    vertices
}
