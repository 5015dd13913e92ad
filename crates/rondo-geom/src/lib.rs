//! Procedural tessellation of rounded 2D/3D shapes.
//!
//! This crate is intentionally free of GPU and windowing dependencies: every
//! generator is a pure function from a small parameter set to an ordered
//! vertex sequence. Hosts upload the output (`bytemuck`-castable) and issue
//! draw calls against the accompanying range tables.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`coords`] | `Vec2`, `Vec3` vertex types |
//! | [`batch`] | `GeometryBatch`, `DrawRange` |
//! | [`pie`] | circular-sector tessellation (fan and triangle-list forms) |
//! | [`polygon`] | regular-polygon helpers, origin fans, edge rectangles |
//! | [`rounded`] | rounded rectangle / triangle / polygon composites |
//! | [`ring`] | hollow circle strip, unit-circle fan |
//! | [`web`] | fixed pentagon-web decorative pattern |
//!
//! # Conventions
//!
//! - All angles are **radians**. Call sites that think in degrees convert at
//!   the boundary with `f32::to_radians()`.
//! - Vertex order is semantically meaningful: it determines triangle winding
//!   (counterclockwise) and fan/strip topology. Composite generators append
//!   sub-shapes in a documented, fixed order because callers slice the
//!   combined buffer by offset.
//! - Invalid parameters (too few sides, zero segments, odd strip counts) are
//!   precondition violations and panic; generators never silently emit
//!   malformed geometry.

pub mod batch;
pub mod coords;
pub mod pie;
pub mod polygon;
pub mod ring;
pub mod rounded;
pub mod web;

pub use batch::{BatchError, DrawRange, GeometryBatch};
pub use coords::{Vec2, Vec3};
