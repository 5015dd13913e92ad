//! The 2D affine transform applied to a pickable shape.

use glam::{Mat4, Vec2, Vec3};

/// Translation, rotation about the origin, and uniform scale, composed in
/// that order: `T * R * S`. The rotation is in radians, counter-clockwise.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform2 {
    pub translation: Vec2,
    pub rotation: f32,
    pub scale: f32,
}

impl Transform2 {
    pub const IDENTITY: Self = Self {
        translation: Vec2::ZERO,
        rotation: 0.0,
        scale: 1.0,
    };

    /// The `T * R * S` model matrix, with z left untouched.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translation.extend(0.0))
            * Mat4::from_rotation_z(self.rotation)
            * Mat4::from_scale(Vec3::new(self.scale, self.scale, 1.0))
    }

    /// Maps a point from the shape's local space into world space.
    pub fn apply(&self, point: Vec2) -> Vec2 {
        Vec2::from_angle(self.rotation).rotate(point * self.scale) + self.translation
    }

    /// Maps a world-space point back into the shape's local space.
    ///
    /// Panics if `scale` is zero; the controller clamps scale well away
    /// from zero, so a zero here is a caller bug.
    pub fn apply_inverse(&self, point: Vec2) -> Vec2 {
        assert!(self.scale != 0.0, "cannot invert a zero-scale transform");
        Vec2::from_angle(-self.rotation).rotate(point - self.translation) / self.scale
    }

    /// The rotation normalized into `[0, 360)` degrees, for display.
    pub fn rotation_degrees(&self) -> f32 {
        self.rotation.to_degrees().rem_euclid(360.0)
    }
}

impl Default for Transform2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}
