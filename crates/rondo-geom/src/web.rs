//! The pentagon-web decorative pattern.
//!
//! A fixed five-point figure: a filled, slightly irregular pentagon, five
//! concentric wireframe rings, and five radial spokes. The angle and radius
//! tables are deliberate stylistic constants carried over verbatim — the
//! 235°/305° pair is *not* a regular pentagon's 72° spacing and must not be
//! "corrected".

use crate::batch::{DrawRange, GeometryBatch};
use crate::coords::Vec2;

/// The five web angles in degrees: 10°, 90°, 170°, then 270° ± 35°.
pub const WEB_ANGLES_DEG: [f32; 5] = [10.0, 90.0, 170.0, 235.0, 305.0];

/// Per-vertex radii of the filled pentagon.
pub const PENTAGON_RADII: [f32; 5] = [0.45, 0.55, 0.50, 0.55, 0.60];

/// Radii of the five concentric wireframe rings.
pub const RING_RADII: [f32; 5] = [0.20, 0.30, 0.40, 0.50, 0.60];

/// Radius of the spoke endpoints (the outermost ring).
pub const SPOKE_RADIUS: f32 = 0.60;

/// Sub-shape ranges of the [`pentagon_web`] batch, in draw order.
#[derive(Debug, Copy, Clone)]
pub struct PentagonWebLayout {
    /// Filled pentagon — draw as a triangle fan.
    pub pentagon: DrawRange,
    /// Five concentric rings — draw each as a line loop.
    pub rings: [DrawRange; 5],
    /// Radial spokes — draw as independent lines (center, rim pairs).
    pub spokes: DrawRange,
}

/// Generates the 40-vertex pentagon-web batch.
///
/// Layout: 5 pentagon vertices, 5 rings of 5 vertices, 10 spoke vertices
/// (center/rim pairs). The returned layout mirrors the batch's range table
/// with the intended topology attached.
pub fn pentagon_web() -> (GeometryBatch, PentagonWebLayout) {
    let mut batch = GeometryBatch::with_capacity(40, 7);

    let at = |radius: f32, degrees: f32| {
        Vec2::on_circle(Vec2::zero(), radius, degrees.to_radians())
    };

    // Filled pentagon
    let pentagon = batch.push_shape(
        WEB_ANGLES_DEG
            .iter()
            .zip(PENTAGON_RADII)
            .map(|(&deg, radius)| at(radius, deg)),
    );

    // Concentric rings, innermost first
    let rings = RING_RADII
        .map(|radius| batch.push_shape(WEB_ANGLES_DEG.iter().map(|&deg| at(radius, deg))));

    // Spokes from the center to the outermost ring
    let spokes = batch.push_shape(
        WEB_ANGLES_DEG
            .iter()
            .flat_map(|&deg| [Vec2::zero(), at(SPOKE_RADIUS, deg)]),
    );

    (batch, PentagonWebLayout { pentagon, rings, spokes })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn web_is_40_vertices() {
        let (batch, layout) = pentagon_web();
        assert_eq!(batch.vertex_count(), 40);
        batch.validate().unwrap();

        assert_eq!(layout.pentagon, DrawRange::new(0, 5));
        assert_eq!(layout.rings[0], DrawRange::new(5, 5));
        assert_eq!(layout.rings[4], DrawRange::new(25, 5));
        assert_eq!(layout.spokes, DrawRange::new(30, 10));
    }

    #[test]
    fn ring_vertices_sit_on_their_radius() {
        let (batch, layout) = pentagon_web();
        for (ring, radius) in layout.rings.iter().zip(RING_RADII) {
            let first = ring.first as usize;
            for v in &batch.vertices()[first..first + 5] {
                assert!((v.length() - radius).abs() < EPS);
            }
        }
    }

    #[test]
    fn spokes_pair_center_with_rim() {
        let (batch, layout) = pentagon_web();
        let spokes = &batch.vertices()[layout.spokes.first as usize..];
        for pair in spokes.chunks_exact(2) {
            assert_eq!(pair[0], Vec2::zero());
            assert!((pair[1].length() - SPOKE_RADIUS).abs() < EPS);
        }
    }

    #[test]
    fn angle_table_keeps_the_irregular_bottom_pair() {
        // 270 - 35 and 270 + 35, not the 72-degree spacing of a regular pentagon.
        assert_eq!(WEB_ANGLES_DEG[3], 235.0);
        assert_eq!(WEB_ANGLES_DEG[4], 305.0);
    }
}
