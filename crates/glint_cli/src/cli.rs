use std::path::PathBuf;

use clap::Parser;
use glint_math::Point3;
use log::LevelFilter;

/// Which scene to render.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneChoice {
    /// Randomly placed, randomly tinted mirror spheres
    RandomMetal,
    /// One grey diffuse sphere in front of the camera
    SingleSphere,
    /// Mirror ball on a mirror ground
    MetalPair,
    /// JSON scene file
    File(PathBuf),
}

impl std::str::FromStr for SceneChoice {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "random-metal" => SceneChoice::RandomMetal,
            "single-sphere" => SceneChoice::SingleSphere,
            "metal-pair" => SceneChoice::MetalPair,
            path => SceneChoice::File(PathBuf::from(path)),
        })
    }
}

/// Parse a log level name such as `info` or `debug` (case-insensitive).
fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse::<LevelFilter>().map_err(|e| format!("'{s}': {e}"))
}

/// Parse a point written as `x,y,z`.
fn parse_point(s: &str) -> Result<Point3, String> {
    let parts = s
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid coordinate in '{s}': {e}"))?;

    match parts.as_slice() {
        [x, y, z] => Ok(Point3::new(*x, *y, *z)),
        _ => Err(format!("expected three comma-separated values, got '{s}'")),
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "glint")]
#[command(about = "A small Monte Carlo path tracer for spheres")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 1500)]
    pub width: u32,

    /// Width divided by height; also shapes the camera viewport
    #[arg(long, default_value_t = 16.0 / 9.0)]
    pub aspect_ratio: f32,

    /// Samples per pixel
    #[arg(short, long, default_value_t = 20)]
    pub samples: u32,

    /// Maximum number of bounces per path
    #[arg(short = 'd', long, default_value_t = 30)]
    pub max_depth: u32,

    /// Seed for all random sampling
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Trace every sample through the pixel corner instead of a random offset
    #[arg(long)]
    pub no_jitter: bool,

    /// random-metal, single-sphere, metal-pair, or a path to a JSON scene
    #[arg(long, default_value = "random-metal")]
    pub scene: SceneChoice,

    /// Number of spheres in the random-metal scene
    #[arg(long, default_value_t = 130)]
    pub sphere_count: usize,

    /// Camera viewport height
    #[arg(long, default_value_t = 2.0)]
    pub viewport_height: f32,

    /// Distance from the camera to the viewport
    #[arg(long, default_value_t = 1.0)]
    pub focal_length: f32,

    /// Camera position as x,y,z
    #[arg(long, default_value = "0,0,0", value_parser = parse_point)]
    pub origin: Point3,

    /// Output file (.ppm or .png); plain PPM goes to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Set the logging level
    #[arg(long, default_value = "info", value_parser = parse_level)]
    pub log_level: LevelFilter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["glint"]);
        assert_eq!(args.width, 1500);
        assert_eq!(args.samples, 20);
        assert_eq!(args.max_depth, 30);
        assert_eq!(args.scene, SceneChoice::RandomMetal);
        assert_eq!(args.sphere_count, 130);
        assert_eq!(args.origin, Point3::ZERO);
        assert!(args.output.is_none());
        assert!(!args.no_jitter);
        assert_eq!(args.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_log_level_flag() {
        let args = Args::parse_from(["glint", "--log-level", "DEBUG"]);
        assert_eq!(args.log_level, LevelFilter::Debug);
        assert!(Args::try_parse_from(["glint", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn test_scene_and_camera_flags() {
        let args = Args::parse_from([
            "glint",
            "--scene",
            "scenes/two.json",
            "--origin",
            "1, 2.5,-3",
            "-s",
            "4",
            "--no-jitter",
            "-o",
            "out.png",
        ]);
        assert_eq!(args.scene, SceneChoice::File(PathBuf::from("scenes/two.json")));
        assert_eq!(args.origin, Point3::new(1.0, 2.5, -3.0));
        assert_eq!(args.samples, 4);
        assert!(args.no_jitter);
        assert_eq!(args.output, Some(PathBuf::from("out.png")));
    }

    #[test]
    fn test_parse_point_errors() {
        assert!(parse_point("1,2").is_err());
        assert!(parse_point("1,2,x").is_err());
        assert!(Args::try_parse_from(["glint", "--origin", "1,2,3,4"]).is_err());
    }
}
