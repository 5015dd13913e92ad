//! Screen-space expansion of polylines into thick triangle ribbons.
//!
//! Line primitives are a single pixel wide on most raster backends, so wide
//! strokes are built on the CPU instead: each segment becomes two triangles
//! whose edge vertices are pushed out along miter directions, keeping
//! adjoining segments sealed at the joints.

use glam::{Mat4, Vec2, Vec4};

use crate::camera::Viewport;

/// Joints sharper than this (nearly folded back on themselves) would send
/// the miter length to infinity; fall back to the segment normal instead.
const MIN_MITER_ALIGNMENT: f32 = 1e-4;

/// Expands a polyline into `6 * (points.len() - 3)` pixel-space vertices,
/// two triangles per segment.
///
/// `points` carries one guide point at each end for joint orientation: the
/// first and last entries steer the miters at the open ends but produce no
/// geometry themselves, so at least four points are required. Each point is
/// projected by `mvp` (perspective divide included) and mapped to pixels
/// before widening, which keeps the stroke `thickness` pixels wide on screen
/// regardless of depth.
pub fn expand_polyline(
    points: &[Vec4],
    mvp: Mat4,
    viewport: Viewport,
    thickness: f32,
) -> Vec<Vec2> {
    assert!(points.len() >= 4, "a polyline needs two guide points plus one segment");

    let resolution = Vec2::new(viewport.width, viewport.height);
    let project = |p: Vec4| -> Vec2 {
        let clip = mvp * p;
        (Vec2::new(clip.x, clip.y) / clip.w + Vec2::ONE) * 0.5 * resolution
    };

    let segments = points.len() - 3;
    let mut out = Vec::with_capacity(segments * 6);

    for s in 0..segments {
        let va = [
            project(points[s]),
            project(points[s + 1]),
            project(points[s + 2]),
            project(points[s + 3]),
        ];
        let normal = (va[2] - va[1]).normalize_or_zero().perp();

        // Two triangles: 0-1-3 seal the start joint, 2-4-5 the end joint.
        for tri in 0..6 {
            let start_joint = matches!(tri, 0 | 1 | 3);
            let (joint, neighbor, side) = if start_joint {
                (va[1], (va[1] - va[0]).normalize_or_zero(), if tri == 1 { -0.5 } else { 0.5 })
            } else {
                (va[2], (va[3] - va[2]).normalize_or_zero(), if tri == 5 { 0.5 } else { -0.5 })
            };

            let mut miter = (normal + neighbor.perp()).normalize_or_zero();
            let mut align = miter.dot(normal);
            if align.abs() < MIN_MITER_ALIGNMENT {
                miter = normal;
                align = 1.0;
            }

            out.push(joint + miter * thickness * side / align);
        }
    }

    out
}

/// Cumulative arc length at each point of a polyline, starting at zero.
pub fn polyline_arc_lengths(points: &[Vec2]) -> Vec<f32> {
    let mut lengths = Vec::with_capacity(points.len());
    let mut total = 0.0;
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            total += (*p - points[i - 1]).length();
        }
        lengths.push(total);
    }
    lengths
}
