//! Byte flattening of a [`PixelBuffer`].
//!
//! Always available (no feature gate) so the PPM and PNG writers share the
//! same row-major conversion.

use voronoi_raster_core::PixelBuffer;

/// Flattens the buffer into `(r, g, b)` triples, row-major.
///
/// The buffer length is `width * height * 3`.
pub fn rgb_bytes(buffer: &PixelBuffer) -> Vec<u8> {
    buffer.pixels().iter().flat_map(|c| c.to_bytes()).collect()
}
