//! Image output: plain PPM (P3) and PNG.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::{ImageBuffer, RenderError, Result};
use log::info;

/// Write `image` as a plain-text PPM: header, then one `r g b` line per
/// pixel, top row first.
pub fn write_ppm<W: Write>(image: &ImageBuffer, writer: &mut W) -> Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for [r, g, b] in &image.pixels {
        writeln!(writer, "{r} {g} {b}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Save `image`, choosing the format from the file extension.
///
/// `.ppm` writes plain PPM, `.png` writes PNG.
pub fn save_image<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> Result<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("ppm") => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_ppm(image, &mut writer)?;
        }
        Some("png") => {
            image::save_buffer(
                path,
                &image.to_rgb_bytes(),
                image.width,
                image.height,
                image::ColorType::Rgb8,
            )?;
        }
        _ => return Err(RenderError::UnsupportedFormat(path.to_path_buf())),
    }

    info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}
