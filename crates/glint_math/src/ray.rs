use crate::Vec3;

/// A ray in 3D space: `origin + t * direction`.
///
/// The direction is not normalized. Its length scales the parameter `t`, so
/// hit distances are only comparable between rays with the same direction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    ///
    /// A zero direction makes intersection math divide by zero, so it is
    /// rejected in debug builds. Use [`Ray::try_new`] for unchecked input.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        debug_assert!(
            direction != Vec3::ZERO,
            "ray direction must be non-zero (origin {origin})"
        );
        Self { origin, direction }
    }

    /// Create a ray, or `None` if the direction is zero or not finite.
    pub fn try_new(origin: Vec3, direction: Vec3) -> Option<Self> {
        if direction == Vec3::ZERO || !direction.is_finite() {
            return None;
        }
        Some(Self { origin, direction })
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction. No bounds are applied to `t`.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
