use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::RenderError;

/// Encode the canvas as PNG at `path`, replacing any existing file.
pub fn save_png(canvas: &RgbaImage, path: impl AsRef<Path>) -> Result<(), RenderError> {
    let path = path.as_ref();
    canvas
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| RenderError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!(
        "wrote {}x{} board to {}",
        canvas.width(),
        canvas.height(),
        path.display()
    );
    Ok(())
}
