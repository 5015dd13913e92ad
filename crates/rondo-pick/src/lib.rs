//! Picking, unprojection, and gesture control for rondo shapes.
//!
//! This crate maps pointer input in screen pixels onto updates of a shape's
//! 2D affine transform: hit-testing, translate/rotate drags, and scroll
//! scaling. It owns no window and issues no draw calls — the host feeds it
//! events and reads back a finalized transform each frame.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`transform`] | `Transform2` (translate · rotate · uniform scale) |
//! | [`camera`] | `Camera`, `Viewport`, screen-to-world unprojection |
//! | [`hit`] | point-in-triangle / point-in-convex-polygon tests |
//! | [`shape`] | `PickableShape` (outline + transform + selection) |
//! | [`controller`] | `Controller`, `DragState` gesture state machine |
//! | [`input`] | platform-agnostic events, `InputSink`, winit translation |
//! | [`polyline`] | screen-space thick-line expansion, arc lengths |
//! | [`logging`] | `env_logger` bootstrap |
//!
//! Everything is single-threaded and synchronous: events are applied fully
//! before the host draws the next frame. Angles are radians throughout.

pub mod camera;
pub mod controller;
pub mod hit;
pub mod input;
pub mod logging;
pub mod polyline;
pub mod shape;
pub mod transform;

pub use camera::{Camera, Viewport};
pub use controller::{Controller, DragState, ScaleLimits};
pub use shape::PickableShape;
pub use transform::Transform2;
