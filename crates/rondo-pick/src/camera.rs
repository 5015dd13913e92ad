//! Camera and screen-to-world unprojection.
//!
//! The camera is the single authority for mapping pointer positions (pixels,
//! y-down, origin at the top-left) into world coordinates (y-up). Picking and
//! dragging both go through [`Camera::unproject`] so the two can never
//! disagree about where the pointer is.

use glam::{Mat4, Vec2, Vec3, Vec4};

/// The drawable surface size in physical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        assert!(width > 0.0 && height > 0.0, "viewport must have positive extent");
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

/// View and projection matrices plus the viewport they target.
#[derive(Debug, Copy, Clone)]
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
    pub viewport: Viewport,
}

impl Camera {
    /// A fixed orthographic 2D camera: x spans `[-1, 1]`, y spans
    /// `[-1/aspect, 1/aspect]`, looking down -z from `z = 5`.
    pub fn ortho_2d(viewport: Viewport) -> Self {
        let half_y = 1.0 / viewport.aspect();
        Self {
            view: Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y),
            projection: Mat4::orthographic_rh(-1.0, 1.0, -half_y, half_y, -1000.0, 1000.0),
            viewport,
        }
    }

    /// Maps a screen-pixel position to world coordinates on the z = 0 NDC
    /// plane.
    ///
    /// The pixel is first normalized to NDC (flipping y so +y points up),
    /// then pushed through the inverse view-projection and divided by w.
    ///
    /// Panics if the combined view-projection is singular; both matrices are
    /// built from invertible pieces, so that indicates a corrupted camera.
    pub fn unproject(&self, screen: Vec2) -> Vec2 {
        let ndc = Vec2::new(
            screen.x / self.viewport.width * 2.0 - 1.0,
            -(screen.y / self.viewport.height * 2.0 - 1.0),
        );

        let view_projection = self.projection * self.view;
        // The threshold scales with the matrix: a deep ortho range gives a
        // tiny z-axis scale and a legitimately tiny determinant, which an
        // absolute epsilon would misread as singular.
        let magnitude = view_projection.x_axis.length()
            * view_projection.y_axis.length()
            * view_projection.z_axis.length()
            * view_projection.w_axis.length();
        assert!(
            view_projection.determinant().abs() > f32::EPSILON * magnitude,
            "view-projection matrix is singular"
        );

        let world = view_projection.inverse() * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        world.truncate().truncate() / world.w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn camera() -> Camera {
        Camera::ortho_2d(Viewport::new(800.0, 600.0))
    }

    #[test]
    fn screen_center_unprojects_to_origin() {
        let world = camera().unproject(Vec2::new(400.0, 300.0));
        assert!(world.length() < EPS);
    }

    #[test]
    fn screen_corners_map_to_frustum_corners() {
        let cam = camera();
        // 800x600 gives aspect 4/3, so y spans [-0.75, 0.75].
        let top_left = cam.unproject(Vec2::ZERO);
        assert!((top_left - Vec2::new(-1.0, 0.75)).length() < EPS);
        let bottom_right = cam.unproject(Vec2::new(800.0, 600.0));
        assert!((bottom_right - Vec2::new(1.0, -0.75)).length() < EPS);
    }

    #[test]
    fn screen_y_is_flipped_into_world_y() {
        let cam = camera();
        let above = cam.unproject(Vec2::new(400.0, 100.0));
        let below = cam.unproject(Vec2::new(400.0, 500.0));
        assert!(above.y > 0.0);
        assert!(below.y < 0.0);
        assert!((above.y + below.y).abs() < EPS);
    }

    #[test]
    fn deep_depth_range_is_not_flagged_singular() {
        // far - near = 1e8 shrinks the determinant to ~1e-8 while the
        // matrix stays perfectly invertible.
        let cam = Camera {
            view: Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y),
            projection: Mat4::orthographic_rh(-1.0, 1.0, -0.75, 0.75, -5.0e7, 5.0e7),
            viewport: Viewport::new(800.0, 600.0),
        };
        let world = cam.unproject(Vec2::new(400.0, 300.0));
        assert!(world.length() < EPS);
        let corner = cam.unproject(Vec2::ZERO);
        assert!((corner - Vec2::new(-1.0, 0.75)).length() < EPS);
    }

    #[test]
    #[should_panic(expected = "singular")]
    fn singular_camera_is_rejected() {
        let cam = Camera {
            view: Mat4::ZERO,
            projection: Mat4::IDENTITY,
            viewport: Viewport::new(800.0, 600.0),
        };
        cam.unproject(Vec2::new(1.0, 1.0));
    }

    #[test]
    #[should_panic(expected = "positive extent")]
    fn degenerate_viewport_is_rejected() {
        Viewport::new(800.0, 0.0);
    }
}
