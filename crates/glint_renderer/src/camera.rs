//! Pinhole camera for ray generation.

use crate::{RenderError, Result};
use glint_math::{Point3, Ray, Vec3};

/// Pinhole camera projecting onto a planar viewport.
///
/// The viewport is `aspect_ratio * viewport_height` wide, `viewport_height`
/// tall, and sits `focal_length` down the -Z axis from `origin`. All derived
/// vectors are computed once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    origin: Point3,
    horizontal: Vec3,
    vertical: Vec3,
    lower_left_corner: Point3,
}

impl Camera {
    /// Create a new camera.
    ///
    /// Parameters must be positive and finite; use [`Camera::try_new`] to
    /// validate untrusted values.
    pub fn new(aspect_ratio: f32, viewport_height: f32, focal_length: f32, origin: Point3) -> Self {
        let viewport_width = aspect_ratio * viewport_height;
        let horizontal = Vec3::new(viewport_width, 0.0, 0.0);
        let vertical = Vec3::new(0.0, viewport_height, 0.0);
        let lower_left_corner =
            origin - horizontal / 2.0 - vertical / 2.0 - Vec3::new(0.0, 0.0, focal_length);

        Self {
            origin,
            horizontal,
            vertical,
            lower_left_corner,
        }
    }

    /// Create a camera, rejecting parameters that could yield a zero ray direction.
    pub fn try_new(
        aspect_ratio: f32,
        viewport_height: f32,
        focal_length: f32,
        origin: Point3,
    ) -> Result<Self> {
        let positive = |name: &str, value: f32| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(RenderError::InvalidCamera(format!(
                    "{name} must be positive and finite, got {value}"
                )))
            }
        };
        positive("aspect ratio", aspect_ratio)?;
        positive("viewport height", viewport_height)?;
        positive("focal length", focal_length)?;
        if !origin.is_finite() {
            return Err(RenderError::InvalidCamera(format!(
                "origin must be finite, got {origin}"
            )));
        }

        Ok(Self::new(aspect_ratio, viewport_height, focal_length, origin))
    }

    /// Ray through the viewport point at normalized coordinates (u, v).
    ///
    /// `u = 0` is the left edge and `v = 0` the bottom edge.
    pub fn get_ray(&self, u: f32, v: f32) -> Ray {
        Ray::new(
            self.origin,
            self.lower_left_corner + u * self.horizontal + v * self.vertical - self.origin,
        )
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    pub fn horizontal(&self) -> Vec3 {
        self.horizontal
    }

    pub fn vertical(&self) -> Vec3 {
        self.vertical
    }

    pub fn lower_left_corner(&self) -> Point3 {
        self.lower_left_corner
    }
}

impl Default for Camera {
    /// 16:9 viewport of height 2 at focal length 1, looking down -Z from the origin.
    fn default() -> Self {
        Self::new(16.0 / 9.0, 2.0, 1.0, Point3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_geometry() {
        let camera = Camera::new(2.0, 2.0, 1.0, Point3::ZERO);

        assert_eq!(camera.horizontal(), Vec3::new(4.0, 0.0, 0.0));
        assert_eq!(camera.vertical(), Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(camera.lower_left_corner(), Vec3::new(-2.0, -1.0, -1.0));
    }

    #[test]
    fn test_camera_corner_and_center_rays() {
        let camera = Camera::new(2.0, 2.0, 1.0, Point3::ZERO);

        let center = camera.get_ray(0.5, 0.5);
        assert_eq!(center.origin(), Point3::ZERO);
        assert_eq!(center.direction(), Vec3::new(0.0, 0.0, -1.0));

        assert_eq!(camera.get_ray(0.0, 0.0).direction(), Vec3::new(-2.0, -1.0, -1.0));
        assert_eq!(camera.get_ray(1.0, 1.0).direction(), Vec3::new(2.0, 1.0, -1.0));
    }

    #[test]
    fn test_camera_honors_origin_and_focal_length() {
        let origin = Point3::new(1.0, 2.0, 3.0);
        let camera = Camera::new(1.0, 2.0, 5.0, origin);

        let ray = camera.get_ray(0.5, 0.5);
        assert_eq!(ray.origin(), origin);
        assert_eq!(ray.direction(), Vec3::new(0.0, 0.0, -5.0));
    }

    #[test]
    fn test_camera_default() {
        let camera = Camera::default();
        assert!((camera.horizontal().x - 32.0 / 9.0).abs() < 1e-6);
        assert_eq!(camera.vertical().y, 2.0);
        assert_eq!(camera.get_ray(0.5, 0.5).direction(), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_camera_try_new_validation() {
        assert!(Camera::try_new(16.0 / 9.0, 2.0, 1.0, Point3::ZERO).is_ok());
        assert!(matches!(
            Camera::try_new(0.0, 2.0, 1.0, Point3::ZERO),
            Err(RenderError::InvalidCamera(_))
        ));
        assert!(Camera::try_new(1.0, -2.0, 1.0, Point3::ZERO).is_err());
        assert!(Camera::try_new(1.0, 2.0, f32::INFINITY, Point3::ZERO).is_err());
        assert!(Camera::try_new(1.0, 2.0, 1.0, Point3::splat(f32::NAN)).is_err());
    }
}
