//! Math primitives for glint.
//!
//! `Vec3` from glam doubles as point, direction and RGB color. On top of it
//! this crate adds the ray, interval and sampling helpers the path tracer
//! needs.

// Re-export glam for convenience
pub use glam::*;

mod interval;
mod ray;
mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::{gen_f32, near_zero, random_in_unit_sphere, random_unit_vector, reflect};

/// RGB color, r = x, g = y, b = z.
pub type Color = Vec3;

/// A position in world space.
pub type Point3 = Vec3;
