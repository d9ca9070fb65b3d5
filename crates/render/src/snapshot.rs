//! PNG snapshots of a [`PixelCanvas`].
//!
//! Feature-gated behind `png` (default on) so embedders can take the canvas
//! without pulling in the `image` crate.

use crate::canvas::PixelCanvas;
use driftfield_core::SimError;
use std::path::Path;

/// Writes the canvas as a PNG image.
///
/// Returns `SimError::InvalidDimensions` if the canvas dimensions overflow
/// `u32`, or `SimError::Io` on write failure.
pub fn write_png(canvas: &PixelCanvas, path: &Path) -> Result<(), SimError> {
    let rgba = canvas.to_rgba8();
    let w = u32::try_from(canvas.width()).map_err(|_| SimError::InvalidDimensions)?;
    let h = u32::try_from(canvas.height()).map_err(|_| SimError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| SimError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| SimError::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use driftfield_core::Renderer;
    use glam::DVec2;

    #[test]
    fn write_png_round_trip() {
        let mut canvas = PixelCanvas::new(24, 16).unwrap();
        canvas.draw_point(DVec2::new(12.0, 8.0), 200.0, 3.0);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");

        write_png(&canvas, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 24);
        assert_eq!(img.height(), 16);
        // The stamped point survives the round trip.
        assert_ne!(img.get_pixel(12, 8).0[2], 0);
    }

    #[test]
    fn write_png_to_invalid_path_reports_io_error() {
        let canvas = PixelCanvas::new(4, 4).unwrap();
        let result = write_png(&canvas, Path::new("/nonexistent-dir/frame.png"));
        assert!(matches!(result, Err(SimError::Io(_))));
    }
}
