use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use glint_renderer::output::{save_image, write_ppm};
use glint_renderer::{render, Camera, Progress, RenderSettings, SceneDesc};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

mod cli;

use cli::{Args, SceneChoice};

/// Shows finished rows on a progress bar.
struct RowProgress {
    bar: ProgressBar,
    height: u32,
}

impl RowProgress {
    fn new(bar: ProgressBar, height: u32) -> Self {
        bar.set_length(u64::from(height));
        Self { bar, height }
    }

    fn stderr(height: u32) -> Result<Self> {
        let bar = ProgressBar::new(u64::from(height));
        bar.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} rows ETA: {eta}")?);
        Ok(Self::new(bar, height))
    }
}

impl Progress for RowProgress {
    fn rows_remaining(&self, rows: u32) {
        self.bar.set_position(u64::from(self.height.saturating_sub(rows)));
        if rows == 0 {
            self.bar.finish();
        }
    }
}

/// Resolve the scene named on the command line.
fn load_scene(args: &Args) -> Result<SceneDesc> {
    let scene = match &args.scene {
        SceneChoice::RandomMetal => {
            // Offset so scene layout and pixel sampling draw different streams
            let mut rng = StdRng::seed_from_u64(args.seed.wrapping_add(1));
            SceneDesc::random_metal_field(args.sphere_count, &mut rng)
        }
        SceneChoice::SingleSphere => SceneDesc::single_sphere(),
        SceneChoice::MetalPair => SceneDesc::metal_pair(),
        SceneChoice::File(path) => SceneDesc::load(path)
            .with_context(|| format!("Failed to load scene from {}", path.display()))?,
    };
    Ok(scene)
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level)
        .init();

    info!("glint {}", env!("CARGO_PKG_VERSION"));

    let scene = load_scene(&args)?;
    let world = scene.build().context("Invalid scene")?;
    info!("Scene: {:?} with {} spheres", args.scene, world.len());

    let camera = Camera::try_new(
        args.aspect_ratio,
        args.viewport_height,
        args.focal_length,
        args.origin,
    )
    .context("Invalid camera parameters")?;

    let settings = RenderSettings::from_aspect(args.width, args.aspect_ratio)
        .with_quality(args.samples, args.max_depth)
        .with_seed(args.seed)
        .with_jitter(!args.no_jitter);

    let progress = RowProgress::stderr(settings.image_height)?;
    let image = render(&camera, &world, &settings, &progress)?;

    match &args.output {
        Some(path) => save_image(&image, path)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = BufWriter::new(io::stdout().lock());
            write_ppm(&image, &mut stdout).context("Failed to write image to stdout")?;
        }
    }

    Ok(())
}
