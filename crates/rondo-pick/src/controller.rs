//! The drag gesture state machine.
//!
//! One shape, one camera, three gestures:
//!
//! * left-drag inside the shape translates it,
//! * right-drag while selected rotates it about its own center,
//! * scroll while selected changes its uniform scale.
//!
//! Anchors are captured at press time so a drag never snaps the shape to the
//! pointer: the grabbed point stays under the cursor for translation, and the
//! angular offset between pointer and shape is preserved for rotation.

use glam::Vec2;
use log::{debug, trace};

use crate::camera::{Camera, Viewport};
use crate::input::{InputSink, MouseButton};
use crate::shape::PickableShape;
use crate::transform::Transform2;

/// What the pointer is currently doing to the shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DragState {
    Idle,
    /// Left button held; `anchor` is the world-space offset from the shape's
    /// translation to the grab point.
    Translating { anchor: Vec2 },
    /// Right button held; `anchor_angle` is the pointer's angle around the
    /// shape center minus the shape's rotation at press time.
    Rotating { anchor_angle: f32 },
}

/// Bounds on the shape's uniform scale.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScaleLimits {
    pub min: f32,
    pub max: f32,
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self { min: 0.3, max: 3.0 }
    }
}

/// Scale change per scroll line.
pub const SCROLL_SCALE_STEP: f32 = 0.05;

/// Rotation drags closer to the shape center than this are ignored; the
/// pointer angle is meaningless there.
const MIN_ROTATION_ARM: f32 = 1e-4;

/// Routes pointer gestures into transform updates on a single shape.
#[derive(Debug)]
pub struct Controller {
    shape: PickableShape,
    camera: Camera,
    drag: DragState,
    limits: ScaleLimits,
}

impl Controller {
    pub fn new(shape: PickableShape, camera: Camera) -> Self {
        Self {
            shape,
            camera,
            drag: DragState::Idle,
            limits: ScaleLimits::default(),
        }
    }

    pub fn with_scale_limits(mut self, limits: ScaleLimits) -> Self {
        assert!(limits.min > 0.0 && limits.min <= limits.max, "scale limits must be ordered and positive");
        self.limits = limits;
        self
    }

    pub fn shape(&self) -> &PickableShape {
        &self.shape
    }

    pub fn transform(&self) -> Transform2 {
        self.shape.transform
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Tracks a window resize. An in-flight drag keeps its anchor; the next
    /// move event simply unprojects through the new viewport.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.camera = Camera::ortho_2d(viewport);
    }

    fn press(&mut self, button: MouseButton, screen: Vec2) {
        let world = self.camera.unproject(screen);

        match button {
            MouseButton::Left => {
                if self.shape.hit(world) {
                    self.shape.selected = true;
                    let anchor = world - self.shape.transform.translation;
                    self.drag = DragState::Translating { anchor };
                    debug!("grab at world ({:.3}, {:.3}), anchor ({:.3}, {:.3})", world.x, world.y, anchor.x, anchor.y);
                } else {
                    // A press on empty space drops the selection.
                    if self.shape.selected {
                        debug!("deselect");
                    }
                    self.shape.selected = false;
                    self.drag = DragState::Idle;
                }
            }

            MouseButton::Right => {
                if self.shape.selected {
                    let arm = world - self.shape.transform.translation;
                    if arm.length() > MIN_ROTATION_ARM {
                        let anchor_angle = arm.y.atan2(arm.x) - self.shape.transform.rotation;
                        self.drag = DragState::Rotating { anchor_angle };
                        debug!("rotate start, anchor angle {:.3} rad", anchor_angle);
                    }
                }
            }

            _ => {}
        }
    }

    fn release(&mut self, button: MouseButton) {
        match (self.drag, button) {
            (DragState::Translating { .. }, MouseButton::Left)
            | (DragState::Rotating { .. }, MouseButton::Right) => {
                debug!("drag end at {:?}", self.shape.transform);
                self.drag = DragState::Idle;
            }
            _ => {}
        }
    }

    fn pointer_move(&mut self, screen: Vec2) {
        let world = self.camera.unproject(screen);

        match self.drag {
            DragState::Idle => {}

            DragState::Translating { anchor } => {
                self.shape.transform.translation = world - anchor;
                trace!("translate to ({:.3}, {:.3})", self.shape.transform.translation.x, self.shape.transform.translation.y);
            }

            DragState::Rotating { anchor_angle } => {
                let arm = world - self.shape.transform.translation;
                // Crossing the center exactly would make the angle undefined;
                // hold the current rotation until the pointer moves off it.
                if arm.length() > MIN_ROTATION_ARM {
                    self.shape.transform.rotation = arm.y.atan2(arm.x) - anchor_angle;
                    trace!("rotate to {:.1} deg", self.shape.transform.rotation_degrees());
                }
            }
        }
    }

    fn scroll(&mut self, delta_lines: f32) {
        if !self.shape.selected {
            return;
        }
        let scale = &mut self.shape.transform.scale;
        *scale = (*scale - delta_lines * SCROLL_SCALE_STEP).clamp(self.limits.min, self.limits.max);
        trace!("scale to {:.2}", *scale);
    }
}

impl InputSink for Controller {
    fn on_press(&mut self, button: MouseButton, pos: Vec2) {
        self.press(button, pos);
    }

    fn on_release(&mut self, button: MouseButton, _pos: Vec2) {
        self.release(button);
    }

    fn on_move(&mut self, pos: Vec2) {
        self.pointer_move(pos);
    }

    fn on_scroll(&mut self, delta_lines: f32) {
        self.scroll(delta_lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-4;

    fn controller() -> Controller {
        let shape = PickableShape::new(vec![
            Vec2::new(-0.5, -0.5),
            Vec2::new(0.5, -0.5),
            Vec2::new(0.0, 0.5),
        ]);
        Controller::new(shape, Camera::ortho_2d(Viewport::new(800.0, 600.0)))
    }

    /// Inverse of the test camera's unprojection: world -> screen pixels.
    fn screen_of(world: Vec2) -> Vec2 {
        let aspect = 800.0 / 600.0;
        Vec2::new(
            (world.x + 1.0) / 2.0 * 800.0,
            (1.0 - world.y * aspect) / 2.0 * 600.0,
        )
    }

    fn left_press(c: &mut Controller, world: Vec2) {
        c.on_press(MouseButton::Left, screen_of(world));
    }

    // ── selection ─────────────────────────────────────────────────────────

    #[test]
    fn press_inside_selects_and_starts_translating() {
        let mut c = controller();
        left_press(&mut c, Vec2::ZERO);
        assert!(c.shape().selected);
        assert!(matches!(c.drag_state(), DragState::Translating { .. }));
    }

    #[test]
    fn press_outside_deselects() {
        let mut c = controller();
        left_press(&mut c, Vec2::ZERO);
        left_press(&mut c, Vec2::new(0.9, 0.7));
        assert!(!c.shape().selected);
        assert_eq!(c.drag_state(), DragState::Idle);
    }

    // ── translation ───────────────────────────────────────────────────────

    #[test]
    fn translate_drag_keeps_the_grab_point_under_the_pointer() {
        let mut c = controller();
        // Grab off-center so the anchor is non-trivial.
        let grab = Vec2::new(0.2, -0.1);
        left_press(&mut c, grab);
        c.on_move(screen_of(Vec2::new(0.5, 0.3)));

        // The shape moved by exactly the pointer delta.
        let expected = Vec2::new(0.5, 0.3) - grab;
        assert!((c.transform().translation - expected).length() < EPS);

        c.on_release(MouseButton::Left, screen_of(Vec2::new(0.5, 0.3)));
        assert_eq!(c.drag_state(), DragState::Idle);

        // Hit test follows the new position.
        assert!(c.shape().hit(expected));
        assert!(!c.shape().hit(grab - Vec2::new(0.5, 0.0)));
    }

    #[test]
    fn moves_while_idle_do_nothing() {
        let mut c = controller();
        c.on_move(screen_of(Vec2::new(0.4, 0.4)));
        assert_eq!(c.transform(), Transform2::IDENTITY);
    }

    // ── rotation ──────────────────────────────────────────────────────────

    #[test]
    fn rotate_drag_tracks_the_pointer_angle() {
        let mut c = controller();
        left_press(&mut c, Vec2::ZERO);
        c.on_release(MouseButton::Left, screen_of(Vec2::ZERO));

        // Pointer starts due east of the center, drags to due north.
        c.on_press(MouseButton::Right, screen_of(Vec2::new(0.4, 0.0)));
        assert!(matches!(c.drag_state(), DragState::Rotating { .. }));
        c.on_move(screen_of(Vec2::new(0.0, 0.4)));
        assert!((c.transform().rotation - FRAC_PI_2).abs() < EPS);

        c.on_release(MouseButton::Right, screen_of(Vec2::new(0.0, 0.4)));
        assert_eq!(c.drag_state(), DragState::Idle);
    }

    #[test]
    fn rotation_preserves_the_initial_angular_offset() {
        let mut c = controller();
        left_press(&mut c, Vec2::ZERO);

        // Right press while still translating switches to rotation.
        c.on_press(MouseButton::Right, screen_of(Vec2::new(0.0, 0.4)));
        // Pointer started at 90 deg; moving to 180 deg adds a quarter turn.
        c.on_move(screen_of(Vec2::new(-0.4, 0.0)));
        assert!((c.transform().rotation - FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn right_press_without_selection_is_ignored() {
        let mut c = controller();
        c.on_press(MouseButton::Right, screen_of(Vec2::ZERO));
        assert_eq!(c.drag_state(), DragState::Idle);
    }

    #[test]
    fn rotation_through_the_center_is_held() {
        let mut c = controller();
        left_press(&mut c, Vec2::ZERO);
        c.on_press(MouseButton::Right, screen_of(Vec2::new(0.4, 0.0)));
        c.on_move(screen_of(Vec2::ZERO));
        // The degenerate sample leaves the rotation untouched.
        assert!(c.transform().rotation.abs() < EPS);
    }

    // ── scaling ───────────────────────────────────────────────────────────

    #[test]
    fn scroll_scales_in_fixed_steps() {
        let mut c = controller();
        left_press(&mut c, Vec2::ZERO);
        c.on_scroll(-1.0);
        assert!((c.transform().scale - 1.05).abs() < EPS);
        c.on_scroll(1.0);
        assert!((c.transform().scale - 1.0).abs() < EPS);
    }

    #[test]
    fn scale_saturates_at_the_limits() {
        let mut c = controller();
        left_press(&mut c, Vec2::ZERO);
        for _ in 0..100 {
            c.on_scroll(1.0);
        }
        assert_eq!(c.transform().scale, 0.3);
        for _ in 0..200 {
            c.on_scroll(-1.0);
        }
        assert_eq!(c.transform().scale, 3.0);
    }

    #[test]
    fn scroll_without_selection_does_nothing() {
        let mut c = controller();
        c.on_scroll(-1.0);
        assert_eq!(c.transform().scale, 1.0);
    }

    // ── viewport ──────────────────────────────────────────────────────────

    #[test]
    fn resize_rescales_unprojection() {
        let mut c = controller();
        c.set_viewport(Viewport::new(400.0, 300.0));
        // Center of the smaller window is still the world origin.
        c.on_press(MouseButton::Left, Vec2::new(200.0, 150.0));
        assert!(c.shape().selected);
    }
}
