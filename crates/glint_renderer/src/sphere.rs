//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    Material, RenderError, Result,
};
use glint_math::{Interval, Point3, Ray};

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere<M: Material> {
    center: Point3,
    radius: f32,
    material: M,
}

impl<M: Material> Sphere<M> {
    /// Create a new sphere.
    ///
    /// The radius must be positive; [`Sphere::try_new`] checks this for
    /// untrusted input.
    pub fn new(center: Point3, radius: f32, material: M) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive, got {radius}");
        Self {
            center,
            radius,
            material,
        }
    }

    /// Create a sphere, rejecting a non-positive or non-finite radius.
    pub fn try_new(center: Point3, radius: f32, material: M) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(RenderError::InvalidRadius(radius));
        }
        Ok(Self::new(center, radius, material))
    }
}

impl<M: Material + 'static> Hittable for Sphere<M> {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let half_b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (-half_b - sqrtd) / a;
        if !ray_t.contains(root) {
            root = (-half_b + sqrtd) / a;
            if !ray_t.contains(root) {
                return None;
            }
        }

        let p = ray.at(root);
        let outward_normal = (p - self.center) / self.radius;
        Some(HitRecord::new(ray, p, root, outward_normal, &self.material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Lambertian;
    use glint_math::{Color, Vec3};

    fn unit_sphere_ahead() -> Sphere<Lambertian> {
        Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            0.5,
            Lambertian::new(Color::new(0.5, 0.5, 0.5)),
        )
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&ray, Interval::new(0.001, f32::INFINITY)).unwrap();
        assert!((rec.t - 0.5).abs() < 1e-6);
        assert!((rec.normal - Vec3::Z).length() < 1e-6);
        assert!(rec.front_face);
    }

    #[test]
    fn test_sphere_miss_pointing_away() {
        let sphere = unit_sphere_ahead();
        let interval = Interval::new(0.001, f32::INFINITY);

        // Origin outside the sphere, direction away from it
        for direction in [Vec3::Y, Vec3::Z, Vec3::new(1.0, 0.0, 0.5), Vec3::new(0.0, -1.0, 0.1)] {
            let ray = Ray::new(Vec3::ZERO, direction);
            assert!(sphere.hit(&ray, interval).is_none(), "direction {direction}");
        }
    }

    #[test]
    fn test_negative_discriminant_misses() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(sphere.hit(&ray, Interval::new(f32::NEG_INFINITY, f32::INFINITY)).is_none());
    }

    #[test]
    fn test_normal_through_center_is_unit_and_radial() {
        let center = Vec3::new(1.0, 2.0, -5.0);
        let sphere = Sphere::new(center, 2.0, Lambertian::new(Color::ONE));
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let ray = Ray::new(origin, center - origin);

        let rec = sphere.hit(&ray, Interval::from_min(0.001)).unwrap();
        let radial = (rec.p - center).normalize();

        assert!((rec.normal.length() - 1.0).abs() < 1e-6);
        assert!(rec.normal.cross(radial).length() < 1e-6);
        assert!(rec.front_face);
        assert!(ray.direction().dot(rec.normal) <= 0.0);
    }

    #[test]
    fn test_inside_hit_uses_far_root_and_back_face() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -1.0), Vec3::Y);

        let rec = sphere.hit(&ray, Interval::from_min(0.001)).unwrap();
        assert!((rec.t - 0.5).abs() < 1e-6);
        assert!(!rec.front_face);
        assert!((rec.normal + Vec3::Y).length() < 1e-6);
        assert!(ray.direction().dot(rec.normal) <= 0.0);
    }

    #[test]
    fn test_interval_bounds_are_inclusive() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);

        assert!(sphere.hit(&ray, Interval::new(0.001, 0.5)).is_some());
        // Near root excluded, far root at 1.5 accepted
        let rec = sphere.hit(&ray, Interval::new(0.6, 2.0)).unwrap();
        assert!((rec.t - 1.5).abs() < 1e-6);
        assert!(sphere.hit(&ray, Interval::new(0.6, 1.4)).is_none());
    }

    #[test]
    fn test_try_new_rejects_bad_radius() {
        let mat = Lambertian::new(Color::ONE);
        assert!(matches!(
            Sphere::try_new(Vec3::ZERO, 0.0, mat.clone()),
            Err(RenderError::InvalidRadius(_))
        ));
        assert!(Sphere::try_new(Vec3::ZERO, -1.0, mat.clone()).is_err());
        assert!(Sphere::try_new(Vec3::ZERO, f32::NAN, mat.clone()).is_err());
        let sphere = Sphere::try_new(Vec3::ZERO, 2.0, mat).unwrap();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z);
        let rec = sphere.hit(&ray, Interval::from_min(0.001)).unwrap();
        assert!((rec.t - 3.0).abs() < 1e-6);
    }
}
