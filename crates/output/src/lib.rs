#![deny(unsafe_code)]
//! File output for voronoi-raster pixel buffers.
//!
//! The core crate stops at an in-memory [`PixelBuffer`]; this crate turns it
//! into bytes on disk. PPM is always available, PNG sits behind the default
//! `png` feature.

pub mod pixel;
pub mod ppm;

#[cfg(feature = "png")]
pub mod snapshot;

use std::path::Path;

use voronoi_raster_core::{PixelBuffer, RasterError};

/// On-disk image encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Binary portable pixmap (`P6`).
    Ppm,
    /// PNG, requires the `png` feature.
    Png,
}

impl ImageFormat {
    /// PNG for a `.png` extension (any case), PPM for everything else.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("png") => ImageFormat::Png,
            _ => ImageFormat::Ppm,
        }
    }
}

/// Writes `buffer` to `path`, choosing the encoding from the extension.
pub fn save(buffer: &PixelBuffer, path: &Path) -> Result<ImageFormat, RasterError> {
    let format = ImageFormat::from_path(path);
    match format {
        ImageFormat::Ppm => ppm::save_ppm(buffer, path)?,
        #[cfg(feature = "png")]
        ImageFormat::Png => snapshot::write_png(buffer, path)?,
        #[cfg(not(feature = "png"))]
        ImageFormat::Png => {
            return Err(RasterError::Io(
                "PNG output requires the `png` feature".into(),
            ))
        }
    }
    log::info!(
        "wrote {}x{} {:?} image to {}",
        buffer.width(),
        buffer.height(),
        format,
        path.display()
    );
    Ok(format)
}
