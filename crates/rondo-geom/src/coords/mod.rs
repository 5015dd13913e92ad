//! Vertex types shared by all generators.
//!
//! Canonical space:
//! - World units (the host decides the projection)
//! - Origin at the shape center
//! - +X right, +Y up, counterclockwise winding
//!
//! Both types are `#[repr(C)]` and `bytemuck`-castable so a host can hand a
//! generated vertex slice straight to its upload path.

mod vec2;
mod vec3;

pub use vec2::Vec2;
pub use vec3::Vec3;
