//! A shape the pointer can pick up and move around.

use glam::Vec2;

use crate::hit::point_in_convex_polygon;
use crate::transform::Transform2;

/// Converts a geometry vertex into the math type used for picking.
#[inline]
pub fn to_pick_space(v: rondo_geom::Vec2) -> Vec2 {
    Vec2::new(v.x, v.y)
}

/// A convex outline with a live transform and a selection flag.
///
/// The outline stays in local space; hit tests pull the query point back
/// through the inverse transform instead of pushing every vertex forward.
#[derive(Debug, Clone)]
pub struct PickableShape {
    outline: Vec<Vec2>,
    pub transform: Transform2,
    pub selected: bool,
}

impl PickableShape {
    /// Wraps a convex outline, in counter-clockwise local-space order.
    pub fn new(outline: Vec<Vec2>) -> Self {
        assert!(outline.len() >= 3, "an outline needs at least three vertices");
        Self {
            outline,
            transform: Transform2::IDENTITY,
            selected: false,
        }
    }

    /// Builds a shape from geometry vertices.
    pub fn from_vertices(vertices: &[rondo_geom::Vec2]) -> Self {
        Self::new(vertices.iter().copied().map(to_pick_space).collect())
    }

    pub fn outline(&self) -> &[Vec2] {
        &self.outline
    }

    /// Whether a world-space point falls inside the transformed outline,
    /// boundary included.
    pub fn hit(&self, world: Vec2) -> bool {
        let local = self.transform.apply_inverse(world);
        point_in_convex_polygon(local, &self.outline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> PickableShape {
        PickableShape::new(vec![
            Vec2::new(-0.5, -0.5),
            Vec2::new(0.5, -0.5),
            Vec2::new(0.0, 0.5),
        ])
    }

    #[test]
    fn hit_follows_the_translation() {
        let mut shape = triangle();
        assert!(shape.hit(Vec2::ZERO));

        shape.transform.translation = Vec2::new(10.0, 0.0);
        assert!(!shape.hit(Vec2::ZERO));
        assert!(shape.hit(Vec2::new(10.0, 0.0)));
    }

    #[test]
    fn hit_respects_scale() {
        let mut shape = triangle();
        // At y = 0 the triangle's edges cross x = ±0.25, so (0.6, 0) is
        // outside at unit scale and inside only once tripled.
        assert!(!shape.hit(Vec2::new(0.6, 0.0)));
        shape.transform.scale = 0.3;
        assert!(!shape.hit(Vec2::new(0.4, 0.0)));
        shape.transform.scale = 3.0;
        assert!(shape.hit(Vec2::new(0.6, 0.0)));
    }

    #[test]
    fn hit_respects_rotation() {
        let mut shape = triangle();
        // The bottom-right region empties when the half turn swings the
        // slanted edge through it; the old apex spot stays covered because
        // the flat edge lands on top.
        assert!(shape.hit(Vec2::new(0.45, -0.45)));
        shape.transform.rotation = std::f32::consts::PI;
        assert!(!shape.hit(Vec2::new(0.45, -0.45)));
        assert!(shape.hit(Vec2::new(0.0, -0.45)));
    }

    #[test]
    fn from_vertices_converts_geometry_points() {
        let verts = [
            rondo_geom::Vec2::new(-1.0, -1.0),
            rondo_geom::Vec2::new(1.0, -1.0),
            rondo_geom::Vec2::new(0.0, 1.0),
        ];
        let shape = PickableShape::from_vertices(&verts);
        assert_eq!(shape.outline().len(), 3);
        assert!(shape.hit(Vec2::ZERO));
    }
}
