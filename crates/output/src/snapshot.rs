//! PNG output of a [`PixelBuffer`].
//!
//! Feature-gated behind `png` (default on) so builds that only need PPM do
//! not pull in the `image` crate.

use std::path::Path;

use voronoi_raster_core::{PixelBuffer, RasterError};

use crate::pixel::rgb_bytes;

/// Writes the buffer as an RGB8 PNG.
///
/// Returns `RasterError::InvalidDimensions` if the dimensions overflow
/// `u32`, or `RasterError::Io` on write failure.
pub fn write_png(buffer: &PixelBuffer, path: &Path) -> Result<(), RasterError> {
    let w = u32::try_from(buffer.width()).map_err(|_| RasterError::InvalidDimensions)?;
    let h = u32::try_from(buffer.height()).map_err(|_| RasterError::InvalidDimensions)?;
    let img = image::RgbImage::from_raw(w, h, rgb_bytes(buffer))
        .ok_or_else(|| RasterError::Io("RGB buffer size mismatch".into()))?;
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| RasterError::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use voronoi_raster_core::{Palette, Recipe};

    #[test]
    fn write_png_round_trip() {
        let recipe = Recipe::new(16, 12, 6, 42);
        let palette = Palette::from_name("neon").unwrap();
        let t = recipe.generate(&palette).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.png");

        write_png(&t.image, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!((img.width(), img.height()), (16, 12));
        let px = img.get_pixel(3, 5).0;
        assert_eq!(Some(voronoi_raster_core::Rgb::from(px)), t.image.get(3, 5));
    }
}
