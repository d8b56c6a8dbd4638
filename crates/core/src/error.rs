//! Error types for the voronoi-raster core.

use thiserror::Error;

/// Errors produced by seed generation, rasterization, and output.
#[derive(Debug, Error)]
pub enum RasterError {
    /// Width or height was zero, or `width * height` overflowed.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A seed set was requested with a count of zero.
    #[error("invalid seed count: at least one seed is required")]
    InvalidSeedCount,

    /// Nearest-seed search or rasterization was given no seeds.
    #[error("empty seed list: nearest seed is undefined")]
    EmptySeedList,

    /// The palette index counter passed `u64::MAX`.
    #[error("palette index counter exhausted: no index follows u64::MAX")]
    PaletteIndexExhausted,

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A palette could not be constructed from the given colors.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// No built-in palette has the requested name.
    #[error("unknown palette: {0}")]
    UnknownPalette(String),

    /// No distance function has the requested name.
    #[error("unknown distance function: {0}")]
    UnknownDistance(String),

    /// Writing an image failed.
    #[error("i/o error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_displays_readable_message() {
        let msg = RasterError::InvalidDimensions.to_string();
        assert!(
            msg.contains("width") && msg.contains("height"),
            "expected message mentioning width and height, got: {msg}"
        );
    }

    #[test]
    fn invalid_seed_count_mentions_seed() {
        let msg = RasterError::InvalidSeedCount.to_string();
        assert!(msg.contains("seed"), "missing 'seed' in: {msg}");
    }

    #[test]
    fn empty_seed_list_mentions_seed() {
        let msg = RasterError::EmptySeedList.to_string();
        assert!(msg.contains("seed"), "missing 'seed' in: {msg}");
    }

    #[test]
    fn palette_index_exhausted_mentions_counter() {
        let msg = RasterError::PaletteIndexExhausted.to_string();
        assert!(msg.contains("counter"), "missing 'counter' in: {msg}");
    }

    #[test]
    fn string_variants_include_message() {
        let cases = [
            RasterError::InvalidColor("bad hex".into()),
            RasterError::InvalidPalette("bad hex".into()),
            RasterError::UnknownPalette("bad hex".into()),
            RasterError::UnknownDistance("bad hex".into()),
            RasterError::Io("bad hex".into()),
        ];
        for err in cases {
            let msg = err.to_string();
            assert!(msg.contains("bad hex"), "missing message in: {msg}");
        }
    }

    #[test]
    fn raster_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RasterError>();
    }

    #[test]
    fn raster_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<RasterError>();
    }
}
