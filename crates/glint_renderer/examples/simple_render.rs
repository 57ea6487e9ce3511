//! Simple path tracer example.
//!
//! Renders the single grey sphere scene and saves it in PPM format.

use glint_renderer::{output::save_image, render, Camera, NoProgress, RenderSettings, SceneDesc};

fn main() -> glint_renderer::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // Build the scene
    let start = std::time::Instant::now();
    let world = SceneDesc::single_sphere().build()?;
    println!("Scene built in {:?}", start.elapsed());

    let aspect_ratio = 16.0 / 9.0;
    let camera = Camera::default();
    let settings = RenderSettings::from_aspect(400, aspect_ratio)
        .with_quality(50, 10)
        .with_seed(7);

    println!(
        "Rendering {}x{} @ {} spp...",
        settings.image_width, settings.image_height, settings.samples_per_pixel
    );

    let image = render(&camera, &world, &settings, &NoProgress)?;

    let filename = "output.ppm";
    save_image(&image, filename)?;
    println!("Saved to {}", filename);

    Ok(())
}
