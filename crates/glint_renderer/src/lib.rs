//! glint renderer - CPU path tracing
//!
//! A Monte Carlo path tracer over a linear list of spheres. Rays leave a
//! pinhole camera, bounce off Lambertian or metal surfaces until they escape
//! to a sky gradient or run out of bounces, and are averaged per pixel.

mod camera;
mod error;
mod hittable;
mod material;
mod progress;
mod renderer;
mod sphere;

pub mod output;
pub mod scene;

pub use camera::Camera;
pub use error::{RenderError, Result};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Lambertian, Material, Metal, ScatterResult};
pub use progress::{NoProgress, Progress};
pub use renderer::{
    color_to_rgb, ray_color, render, render_pixel, sky_gradient, tone_map_channel, ImageBuffer,
    RenderSettings, T_MIN,
};
pub use scene::{MaterialDesc, SceneDesc, SphereDesc};
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{Color, Interval, Point3, Ray, Vec3};
