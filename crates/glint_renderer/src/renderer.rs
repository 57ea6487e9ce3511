//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Iterative bounce loop with a depth budget
//! - Anti-aliasing via jittered multi-sampling
//! - Gamma-2 tone mapping to 8-bit channels
//! - Row-parallel rendering with per-row seeded generators

use std::sync::Mutex;
use std::time::Instant;

use crate::{Camera, Hittable, Progress, RenderError, Result};
use glint_math::{gen_f32, Color, Interval, Ray};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;

/// Lower bound on accepted hit distances. Keeps a freshly scattered ray from
/// re-hitting its own origin through floating-point error.
pub const T_MIN: f32 = 0.001;

/// Output channel ceiling before scaling to 8 bits.
const CHANNEL_CEILING: Interval = Interval::new(0.0, 0.999);

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub image_width: u32,
    pub image_height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Base seed; each image row derives its own generator from it
    pub seed: u64,
    /// Random sub-pixel offsets; when false every sample goes through the
    /// pixel's lower-left corner
    pub jitter: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self::from_aspect(1500, 16.0 / 9.0).with_quality(20, 30)
    }
}

impl RenderSettings {
    /// Settings for an image of the given width, deriving the height from
    /// the aspect ratio.
    pub fn from_aspect(image_width: u32, aspect_ratio: f32) -> Self {
        Self {
            image_width,
            image_height: (image_width as f32 / aspect_ratio) as u32,
            samples_per_pixel: 1,
            max_depth: 1,
            seed: 0,
            jitter: true,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples: u32, max_depth: u32) -> Self {
        self.samples_per_pixel = samples;
        self.max_depth = max_depth;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }

    /// Check the settings can drive a render.
    pub fn validate(&self) -> Result<()> {
        // u and v divide by (width - 1) and (height - 1)
        if self.image_width < 2 || self.image_height < 2 {
            return Err(RenderError::InvalidSettings(format!(
                "image must be at least 2x2, got {}x{}",
                self.image_width, self.image_height
            )));
        }
        let pixel_count = self
            .image_width
            .checked_mul(self.image_height)
            .and_then(|n| usize::try_from(n).ok());
        if pixel_count.is_none() {
            return Err(RenderError::InvalidSettings(format!(
                "image of {}x{} pixels is too large",
                self.image_width, self.image_height
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::InvalidSettings(
                "samples per pixel must be at least 1".into(),
            ));
        }
        if self.max_depth == 0 {
            return Err(RenderError::InvalidSettings(
                "max depth must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Compute the color seen by a ray.
///
/// Follows the path bounce by bounce, multiplying in each surface's
/// attenuation, until the ray escapes to the sky, is absorbed, or `depth`
/// bounces are used up. The last two cases contribute black.
pub fn ray_color(ray: &Ray, world: &dyn Hittable, depth: u32, rng: &mut dyn RngCore) -> Color {
    let mut ray = *ray;
    let mut throughput = Color::ONE;

    for _ in 0..depth {
        let Some(rec) = world.hit(&ray, Interval::from_min(T_MIN)) else {
            return throughput * sky_gradient(&ray);
        };

        match rec.material.scatter(&ray, &rec, rng) {
            Some(result) => {
                throughput *= result.attenuation;
                ray = result.scattered;
            }
            None => return Color::ZERO,
        }
    }

    Color::ZERO
}

/// Background seen by rays that escape the scene: white at the bottom,
/// sky blue at the top.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Map an accumulated channel sum to an 8-bit value.
///
/// `floor(clamp(sqrt(sum / samples), 0, 0.999) * 256)`. Negative and NaN
/// sums map to 0.
#[inline]
pub fn tone_map_channel(sum: f32, samples: u32) -> u8 {
    let mean = sum / samples as f32;
    let gamma = if mean > 0.0 { mean.sqrt() } else { 0.0 };
    (CHANNEL_CEILING.clamp(gamma) * 256.0) as u8
}

/// Tone map a per-pixel color sum to 8-bit RGB.
pub fn color_to_rgb(sum: Color, samples: u32) -> [u8; 3] {
    [
        tone_map_channel(sum.x, samples),
        tone_map_channel(sum.y, samples),
        tone_map_channel(sum.z, samples),
    ]
}

/// Render a single pixel with multi-sampling.
///
/// `(i, j)` has its origin at the bottom-left of the image. Returns the sum
/// of all samples, not the mean.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    i: u32,
    j: u32,
    settings: &RenderSettings,
    rng: &mut dyn RngCore,
) -> Color {
    let u_scale = (settings.image_width - 1) as f32;
    let v_scale = (settings.image_height - 1) as f32;
    let mut pixel_color = Color::ZERO;

    for _ in 0..settings.samples_per_pixel {
        let (du, dv) = if settings.jitter {
            (gen_f32(rng), gen_f32(rng))
        } else {
            (0.0, 0.0)
        };
        let u = (i as f32 + du) / u_scale;
        let v = (j as f32 + dv) / v_scale;
        let ray = camera.get_ray(u, v);
        pixel_color += ray_color(&ray, world, settings.max_depth, rng);
    }

    pixel_color
}

/// Tone-mapped 8-bit RGB image, rows stored top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 3]>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 3]; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y), y = 0 being the top row.
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y), y = 0 being the top row.
    pub fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let index = self.index(x, y);
        self.pixels[index] = rgb;
    }

    /// Flatten to interleaved RGB bytes.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }
}

/// Seed for the generator of image row `j`.
fn row_seed(seed: u64, j: u32) -> u64 {
    seed ^ (u64::from(j) + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Render the entire scene to an image buffer.
///
/// Rows are rendered in parallel. Each row draws from its own generator
/// seeded from `settings.seed`, so the image depends only on the inputs and
/// not on thread scheduling.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    settings: &RenderSettings,
    progress: &dyn Progress,
) -> Result<ImageBuffer> {
    settings.validate()?;

    let width = settings.image_width;
    let height = settings.image_height;
    let mut image = ImageBuffer::new(width, height);

    info!(
        "Rendering {}x{} @ {} spp, depth {} on {} threads",
        width,
        height,
        settings.samples_per_pixel,
        settings.max_depth,
        rayon::current_num_threads()
    );
    let start = Instant::now();

    progress.rows_remaining(height);
    let remaining = Mutex::new(height);

    image
        .pixels
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(row, pixels)| {
            // Buffer row 0 is the top of the image
            let j = height - 1 - row as u32;
            let mut rng = StdRng::seed_from_u64(row_seed(settings.seed, j));

            for (i, pixel) in pixels.iter_mut().enumerate() {
                let sum = render_pixel(camera, world, i as u32, j, settings, &mut rng);
                *pixel = color_to_rgb(sum, settings.samples_per_pixel);
            }

            // Poisoning only means another row panicked; the count is still valid
            let mut rows = remaining.lock().unwrap_or_else(|e| e.into_inner());
            *rows -= 1;
            progress.rows_remaining(*rows);
        });

    info!("Rendered in {:.2?}", start.elapsed());
    debug!("{} pixels written", image.pixels.len());

    Ok(image)
}
