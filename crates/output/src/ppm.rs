//! Binary PPM (`P6`) output.
//!
//! The file is a text header `P6\n<width> <height>\n255\n` followed by the
//! row-major RGB bytes of the buffer, unchanged.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use voronoi_raster_core::{PixelBuffer, RasterError};

use crate::pixel::rgb_bytes;

/// Largest channel value written to the header.
pub const MAX_CHANNEL: u8 = 255;

/// Writes `buffer` as a P6 image to `out`.
pub fn write_ppm<W: Write>(buffer: &PixelBuffer, mut out: W) -> Result<(), RasterError> {
    write!(
        out,
        "P6\n{} {}\n{}\n",
        buffer.width(),
        buffer.height(),
        MAX_CHANNEL
    )
    .map_err(io_error)?;
    out.write_all(&rgb_bytes(buffer)).map_err(io_error)?;
    out.flush().map_err(io_error)
}

/// Creates (or truncates) `path` and writes `buffer` to it as P6.
pub fn save_ppm(buffer: &PixelBuffer, path: &Path) -> Result<(), RasterError> {
    let file = File::create(path).map_err(io_error)?;
    write_ppm(buffer, BufWriter::new(file))
}

fn io_error(e: std::io::Error) -> RasterError {
    RasterError::Io(e.to_string())
}
