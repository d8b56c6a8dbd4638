//! Colored seed points that anchor Voronoi cells.

use crate::color::Rgb;
use crate::counter::ColorIndexCounter;
use crate::error::RasterError;
use crate::palette::Palette;
use crate::point::{random_position, Point};
use crate::prng::Xorshift64;
use serde::{Deserialize, Serialize};

/// A fixed (location, color) pair. Every pixel nearest to `point` takes `color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    pub point: Point,
    pub color: Rgb,
}

impl Seed {
    pub const fn new(point: Point, color: Rgb) -> Self {
        Self { point, color }
    }
}

/// Builds `count` seeds with random positions inside `max_width x max_height`.
///
/// For each seed the position is drawn from `rng` first, then the color is
/// taken from `palette` at `counter.next_index()`. The returned order is
/// construction order.
///
/// Returns `RasterError::InvalidSeedCount` if `count` is 0,
/// `RasterError::InvalidDimensions` if either bound is 0, and
/// `RasterError::PaletteIndexExhausted` if `counter` runs past `u64::MAX`.
pub fn create_seeds(
    count: usize,
    max_width: usize,
    max_height: usize,
    palette: &Palette,
    rng: &mut Xorshift64,
    counter: &mut ColorIndexCounter,
) -> Result<Vec<Seed>, RasterError> {
    if count == 0 {
        return Err(RasterError::InvalidSeedCount);
    }
    if max_width == 0 || max_height == 0 {
        return Err(RasterError::InvalidDimensions);
    }

    let seeds = (0..count)
        .map(|_| -> Result<Seed, RasterError> {
            let point = random_position(rng, max_width, max_height);
            let color = palette.get_color(counter.next_index()?);
            Ok(Seed { point, color })
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!(
        "created {} seeds in {}x{} (next palette index {:?})",
        seeds.len(),
        max_width,
        max_height,
        counter.peek()
    );
    Ok(seeds)
}
