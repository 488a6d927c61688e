//! PNG export of debug images.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use super::image::DebugImage;

/// Errors that can occur while writing a debug image.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Failed to create or write the output file.
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding failed.
    #[error("failed to encode png: {0}")]
    Encode(#[from] png::EncodingError),
}

/// Write `image` to `path` as an 8-bit RGBA PNG.
pub fn write_png(image: &DebugImage, path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);
    let mut encoder = png::Encoder::new(writer, image.width, image.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&image.pixels)?;
    writer.finish()?;
    tracing::debug!(path = %path.display(), "wrote debug image");
    Ok(())
}
