//! Composite rounded shapes.
//!
//! Every composite concatenates its parts in a fixed, documented order
//! (interior, then edge rectangles in increasing vertex-angle order, then
//! corner pies in the same order) because callers slice the combined buffer
//! by offset. Changing the order breaks every range table downstream.

use std::f32::consts::TAU;
use std::ops::RangeInclusive;

use crate::batch::GeometryBatch;
use crate::coords::{Vec2, Vec3};
use crate::pie::{pie_fan, pie_triangles};
use crate::polygon::{edge_rect_fan, edge_rect_triangles, first_vertex_angle, polygon_fan};

/// Segments per rounded corner. Eight keeps the arc visually smooth at the
/// sizes the demos draw while the vertex counts stay fixed for slicing.
pub const CORNER_SEGMENTS: u32 = 8;

/// A rounded rectangle centered at the origin, fan convention throughout.
///
/// Layout (always 52 vertices, 7 ranges): top, middle, and bottom quads of
/// 4 vertices each, then four corner pies of `CORNER_SEGMENTS + 2` vertices,
/// counterclockwise starting from the top-right corner.
///
/// Panics unless `width`, `height` and `corner_radius` are positive.
pub fn rounded_rectangle(width: f32, height: f32, corner_radius: f32) -> GeometryBatch {
    assert!(width > 0.0 && height > 0.0, "rectangle sides must be positive");
    assert!(corner_radius > 0.0, "corner radius must be positive");

    let w = width / 2.0;
    let h = height / 2.0;
    let r = corner_radius;

    let mut batch = GeometryBatch::with_capacity(52, 7);

    // Top rectangle
    batch.push_shape([
        Vec2::new(w - r, h),
        Vec2::new(-w + r, h),
        Vec2::new(-w + r, h - r),
        Vec2::new(w - r, h - r),
    ]);

    // Middle rectangle
    batch.push_shape([
        Vec2::new(w, h - r),
        Vec2::new(-w, h - r),
        Vec2::new(-w, -h + r),
        Vec2::new(w, -h + r),
    ]);

    // Bottom rectangle
    batch.push_shape([
        Vec2::new(w - r, -h + r),
        Vec2::new(-w + r, -h + r),
        Vec2::new(-w + r, -h),
        Vec2::new(w - r, -h),
    ]);

    // Corner pies, counterclockwise from the top-right corner.
    let quarter = 90.0f32.to_radians();
    let corners = [
        (Vec2::new(w - r, h - r), 0.0),
        (Vec2::new(-w + r, h - r), quarter),
        (Vec2::new(-w + r, -h + r), 2.0 * quarter),
        (Vec2::new(w - r, -h + r), 3.0 * quarter),
    ];
    for (center, start) in corners {
        batch.push_shape(pie_fan(center, r, start, start + quarter, CORNER_SEGMENTS));
    }

    batch
}

/// A rounded equilateral triangle centered at the origin, fan convention.
///
/// Layout (always 45 vertices, 7 ranges): the interior triangle (vertices at
/// 90°, 210°, 330° on `inner_radius`), three edge rectangles at rotations
/// 0°, 120°, 240°, then three 120° corner pies of `CORNER_SEGMENTS` segments.
pub fn rounded_triangle(inner_radius: f32, corner_radius: f32) -> GeometryBatch {
    assert!(inner_radius > 0.0, "inner radius must be positive");
    assert!(corner_radius > 0.0, "corner radius must be positive");

    let first = first_vertex_angle(3);
    let step = TAU / 3.0;

    let mut batch = GeometryBatch::with_capacity(45, 7);

    // Interior triangle
    batch.push_shape((0..3).map(|i| {
        Vec2::on_circle(Vec2::zero(), inner_radius, first + step * i as f32)
    }));

    // Edge rectangles
    for i in 0..3 {
        batch.push_shape(edge_rect_fan(3, inner_radius, corner_radius, step * i as f32));
    }

    // Corner pies: 120° sectors centered on each triangle vertex.
    for i in 0..3 {
        let a = first + step * i as f32;
        let center = Vec2::on_circle(Vec2::zero(), inner_radius, a);
        batch.push_shape(pie_fan(
            center,
            corner_radius,
            a - step / 2.0,
            a + step / 2.0,
            CORNER_SEGMENTS,
        ));
    }

    batch
}

/// A rounded regular polygon centered at the origin, flat-triangle-list
/// convention throughout so the whole shape draws as one `TRIANGLES` call.
///
/// Layout: `3n` interior fan vertices, `6n` edge-rectangle vertices, `24n`
/// corner-pie vertices (`CORNER_SEGMENTS` triangles per corner) — `33n`
/// total for `n = sides`.
///
/// Panics if `sides < 3` or a radius is non-positive.
pub fn rounded_polygon(sides: u32, circumradius: f32, corner_radius: f32) -> Vec<Vec2> {
    assert!(sides >= 3, "a polygon needs at least three sides");
    assert!(circumradius > 0.0, "circumradius must be positive");
    assert!(corner_radius > 0.0, "corner radius must be positive");

    let first = first_vertex_angle(sides);
    let step = TAU / sides as f32;
    let mut vertices = Vec::with_capacity(rounded_polygon_vertex_count(sides));

    // Interior polygon
    vertices.extend(polygon_fan(sides, circumradius));

    // Edge rectangles
    for i in 0..sides {
        vertices.extend(edge_rect_triangles(
            sides,
            circumradius,
            corner_radius,
            step * i as f32,
        ));
    }

    // Corner pies, one per vertex, spanning half a step to either side.
    for i in 0..sides {
        let a = first + step * i as f32;
        let center = Vec2::on_circle(Vec2::zero(), circumradius, a);
        vertices.extend(pie_triangles(
            center,
            corner_radius,
            a - step / 2.0,
            a + step / 2.0,
            CORNER_SEGMENTS,
        ));
    }

    vertices
}

/// Vertex count of [`rounded_polygon`] for a given side count.
#[inline]
pub const fn rounded_polygon_vertex_count(sides: u32) -> usize {
    (3 * sides + 6 * sides + CORNER_SEGMENTS as u32 * 3 * sides) as usize
}

/// One rounded polygon per side count in `sides`, sharing a single vertex
/// buffer with one draw range per polygon (in increasing side order).
pub fn rounded_polygon_sheet(
    sides: RangeInclusive<u32>,
    circumradius: f32,
    corner_radius: f32,
) -> GeometryBatch {
    let mut batch = GeometryBatch::new();
    for n in sides {
        batch.push_shape(rounded_polygon(n, circumradius, corner_radius));
    }
    batch
}

/// A rounded polygon extruded along z: the front face at `+half_depth`, the
/// back face at `-half_depth`, then one quad (two triangles) per polygon
/// edge bridging the outer edges of the front and back edge rectangles.
///
/// The curved corner walls are intentionally left open; the face layout
/// matches [`rounded_polygon`] so hosts can slice by the same offsets.
pub fn rounded_polygon_prism(
    sides: u32,
    circumradius: f32,
    corner_radius: f32,
    half_depth: f32,
) -> Vec<Vec3> {
    assert!(half_depth > 0.0, "half depth must be positive");

    let face = rounded_polygon(sides, circumradius, corner_radius);
    let n = sides as usize;
    let mut vertices = Vec::with_capacity(face.len() * 2 + n * 6);

    let front: Vec<Vec3> = face.iter().map(|v| v.lift(half_depth)).collect();
    let back: Vec<Vec3> = face.iter().map(|v| v.lift(-half_depth)).collect();
    vertices.extend_from_slice(&front);
    vertices.extend_from_slice(&back);

    // Side walls: bridge each edge rectangle's outer edge (vertices 1 and 2
    // of its triangle-list sextet) between the two faces.
    for i in 0..n {
        let a = 3 * n + 6 * i + 1;
        let b = 3 * n + 6 * i + 2;

        vertices.push(front[a]);
        vertices.push(front[b]);
        vertices.push(back[b]);

        vertices.push(front[a]);
        vertices.push(back[b]);
        vertices.push(back[a]);
    }

    vertices
}
