//! Scene descriptors and built-in scenes.
//!
//! A [`SceneDesc`] is plain data, loadable from JSON, that is turned into a
//! renderable [`HittableList`] once before rendering starts:
//!
//! ```json
//! {
//!   "spheres": [
//!     { "center": [0, 0, -1], "radius": 0.5,
//!       "material": { "kind": "lambertian", "albedo": [0.5, 0.5, 0.5] } }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use crate::{HittableList, Lambertian, Metal, Result, Sphere};
use glint_math::{gen_f32, Color, Vec3};
use log::debug;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Surface material of a sphere descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MaterialDesc {
    Lambertian { albedo: [f32; 3] },
    Metal { albedo: [f32; 3] },
}

/// One sphere of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereDesc {
    pub center: [f32; 3],
    pub radius: f32,
    pub material: MaterialDesc,
}

/// An ordered list of sphere descriptors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDesc {
    pub spheres: Vec<SphereDesc>,
}

impl SphereDesc {
    pub fn new(center: Vec3, radius: f32, material: MaterialDesc) -> Self {
        Self {
            center: center.to_array(),
            radius,
            material,
        }
    }
}

impl SceneDesc {
    /// Parse a scene from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a scene from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let scene = Self::from_json_str(&text)?;
        debug!(
            "Loaded {} spheres from {}",
            scene.spheres.len(),
            path.as_ref().display()
        );
        Ok(scene)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the renderable scene, validating every radius.
    pub fn build(&self) -> Result<HittableList> {
        let mut world = HittableList::new();

        for desc in &self.spheres {
            let center = Vec3::from_array(desc.center);
            match desc.material {
                MaterialDesc::Lambertian { albedo } => world.add(Box::new(Sphere::try_new(
                    center,
                    desc.radius,
                    Lambertian::new(Color::from_array(albedo)),
                )?)),
                MaterialDesc::Metal { albedo } => world.add(Box::new(Sphere::try_new(
                    center,
                    desc.radius,
                    Metal::new(Color::from_array(albedo)),
                )?)),
            }
        }

        debug!("Built scene with {} objects", world.len());
        Ok(world)
    }

    /// A single grey diffuse sphere of radius 0.5 at (0, 0, -1).
    pub fn single_sphere() -> Self {
        Self {
            spheres: vec![SphereDesc::new(
                Vec3::new(0.0, 0.0, -1.0),
                0.5,
                MaterialDesc::Lambertian {
                    albedo: [0.5, 0.5, 0.5],
                },
            )],
        }
    }

    /// A pink mirror ball resting on a large green mirror ground.
    pub fn metal_pair() -> Self {
        Self {
            spheres: vec![
                SphereDesc::new(
                    Vec3::new(0.0, 0.0, -1.0),
                    0.5,
                    MaterialDesc::Metal {
                        albedo: [1.0, 0.3, 0.8],
                    },
                ),
                SphereDesc::new(
                    Vec3::new(0.0, -100.5, -1.0),
                    100.0,
                    MaterialDesc::Metal {
                        albedo: [0.2, 1.0, 0.5],
                    },
                ),
            ],
        }
    }

    /// `count` randomly tinted mirror spheres scattered in front of the camera.
    ///
    /// Centers fall in x, y in [-10, 10) and z in (-20, 0]; radii in [0.05, 1).
    pub fn random_metal_field(count: usize, rng: &mut dyn RngCore) -> Self {
        let spheres = (0..count)
            .map(|_| {
                let center = Vec3::new(
                    gen_f32(rng) * 20.0 - 10.0,
                    gen_f32(rng) * 20.0 - 10.0,
                    -gen_f32(rng) * 20.0,
                );
                let radius = 0.05 + 0.95 * gen_f32(rng);
                let albedo = [gen_f32(rng), gen_f32(rng), gen_f32(rng)];
                SphereDesc::new(center, radius, MaterialDesc::Metal { albedo })
            })
            .collect();

        Self { spheres }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Hittable, Interval, Ray, RenderError};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_json_scene() {
        let json = r#"{
            "spheres": [
                { "center": [0, 0, -1], "radius": 0.5,
                  "material": { "kind": "lambertian", "albedo": [0.5, 0.5, 0.5] } },
                { "center": [1, 0, -2], "radius": 0.25,
                  "material": { "kind": "metal", "albedo": [0.8, 0.6, 0.2] } }
            ]
        }"#;

        let scene = SceneDesc::from_json_str(json).unwrap();
        assert_eq!(scene.spheres.len(), 2);
        assert_eq!(scene.spheres[0], SceneDesc::single_sphere().spheres[0]);
        assert_eq!(
            scene.spheres[1].material,
            MaterialDesc::Metal {
                albedo: [0.8, 0.6, 0.2]
            }
        );

        let world = scene.build().unwrap();
        assert_eq!(world.len(), 2);
    }

    #[test]
    fn test_json_text_survives_reparse() {
        let scene = SceneDesc::metal_pair();
        let text = scene.to_json_string().unwrap();
        assert!(text.contains("\"kind\": \"metal\""));
        assert_eq!(SceneDesc::from_json_str(&text).unwrap(), scene);
    }

    #[test]
    fn test_bundled_scene_file_parses() {
        let scene = SceneDesc::from_json_str(include_str!("../../../scenes/mixed.json")).unwrap();
        assert_eq!(scene.spheres.len(), 4);
        assert_eq!(scene.build().unwrap().len(), 4);
    }

    #[test]
    fn test_unknown_material_kind_is_rejected() {
        let json = r#"{ "spheres": [ { "center": [0, 0, 0], "radius": 1,
            "material": { "kind": "glass", "albedo": [1, 1, 1] } } ] }"#;
        assert!(matches!(SceneDesc::from_json_str(json), Err(RenderError::Json(_))));
    }

    #[test]
    fn test_build_rejects_bad_radius() {
        let mut scene = SceneDesc::single_sphere();
        scene.spheres[0].radius = 0.0;
        assert!(matches!(scene.build(), Err(RenderError::InvalidRadius(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = SceneDesc::load("/nonexistent/glint/scene.json");
        assert!(matches!(result, Err(RenderError::Io(_))));
    }

    #[test]
    fn test_single_sphere_scene_is_hit_head_on() {
        let world = SceneDesc::single_sphere().build().unwrap();
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);
        let rec = world.hit(&ray, Interval::from_min(0.001)).unwrap();
        assert!((rec.t - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_random_metal_field_bounds() {
        let mut rng = StdRng::seed_from_u64(99);
        let scene = SceneDesc::random_metal_field(130, &mut rng);
        assert_eq!(scene.spheres.len(), 130);

        for sphere in &scene.spheres {
            let [x, y, z] = sphere.center;
            assert!((-10.0..10.0).contains(&x));
            assert!((-10.0..10.0).contains(&y));
            assert!(z <= 0.0 && z > -20.0);
            assert!(sphere.radius >= 0.05 && sphere.radius < 1.0);
            assert!(matches!(sphere.material, MaterialDesc::Metal { .. }));
        }

        assert_eq!(scene.build().unwrap().len(), 130);

        let mut again = StdRng::seed_from_u64(99);
        assert_eq!(SceneDesc::random_metal_field(130, &mut again), scene);
    }
}
