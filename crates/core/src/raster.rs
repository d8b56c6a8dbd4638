//! Nearest-seed rasterization.
//!
//! Every pixel takes the color of the seed closest to it under a [`Metric`].
//! The scan is a plain linear pass over the seed list per pixel; seed counts
//! are small next to pixel counts, so no spatial index is kept.
//!
//! Ties go to the seed that appears first in the list: a later seed replaces
//! the current best only when strictly closer. Together with row-major output
//! this makes the buffer a pure function of its inputs.

use crate::color::Rgb;
use crate::distance::Metric;
use crate::error::RasterError;
use crate::point::Point;
use crate::seed::Seed;
use rayon::prelude::*;

/// A `width x height` grid of colors stored row-major, row 0 first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<Rgb>,
}

impl PixelBuffer {
    /// Pixel columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Pixel rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// All pixels in row-major order. Length is `width * height`.
    pub fn pixels(&self) -> &[Rgb] {
        &self.data
    }

    /// The pixel at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y * self.width + x])
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.data.chunks_exact(self.width)
    }
}

/// Returns the seed nearest to `pixel`, preferring the earliest on ties.
///
/// Returns `RasterError::EmptySeedList` if `seeds` is empty.
pub fn get_closest_seed<'a, M>(
    pixel: Point,
    seeds: &'a [Seed],
    metric: &M,
) -> Result<&'a Seed, RasterError>
where
    M: Metric + ?Sized,
{
    let (first, rest) = seeds.split_first().ok_or(RasterError::EmptySeedList)?;
    let mut best = first;
    let mut best_distance = metric.distance(pixel, first.point);
    for seed in rest {
        let d = metric.distance(pixel, seed.point);
        if d < best_distance {
            best = seed;
            best_distance = d;
        }
    }
    Ok(best)
}

/// Colors every pixel of a `width x height` grid by its nearest seed.
///
/// Pixels are produced with `y` as the outer loop and `x` as the inner loop.
///
/// Returns `RasterError::InvalidDimensions` for a zero or overflowing size and
/// `RasterError::EmptySeedList` when there are no seeds.
pub fn build_image<M>(
    seeds: &[Seed],
    width: usize,
    height: usize,
    metric: &M,
) -> Result<PixelBuffer, RasterError>
where
    M: Metric + ?Sized,
{
    let len = checked_len(seeds, width, height)?;
    let mut data = Vec::with_capacity(len);
    for y in 0..height {
        for x in 0..width {
            let seed = get_closest_seed(Point { x, y }, seeds, metric)?;
            data.push(seed.color);
        }
    }
    log::debug!(
        "rasterized {}x{} against {} seeds",
        width,
        height,
        seeds.len()
    );
    Ok(PixelBuffer {
        width,
        height,
        data,
    })
}

/// Row-parallel variant of [`build_image`] with identical output.
///
/// Each worker owns one output row; seeds and metric are shared read-only.
pub fn build_image_par<M>(
    seeds: &[Seed],
    width: usize,
    height: usize,
    metric: &M,
) -> Result<PixelBuffer, RasterError>
where
    M: Metric + Sync + ?Sized,
{
    let len = checked_len(seeds, width, height)?;
    let mut data = vec![Rgb::BLACK; len];
    data.par_chunks_mut(width)
        .enumerate()
        .try_for_each(|(y, row)| {
            for (x, out) in row.iter_mut().enumerate() {
                *out = get_closest_seed(Point { x, y }, seeds, metric)?.color;
            }
            Ok::<(), RasterError>(())
        })?;
    log::debug!(
        "rasterized {}x{} against {} seeds on {} threads",
        width,
        height,
        seeds.len(),
        rayon::current_num_threads()
    );
    Ok(PixelBuffer {
        width,
        height,
        data,
    })
}

/// Number of pixels in a `width x height` buffer.
///
/// Returns `RasterError::InvalidDimensions` for a zero side, or when the
/// buffer could not be allocated (`width * height * size_of::<Rgb>()`
/// above `isize::MAX` bytes).
pub(crate) fn pixel_count(width: usize, height: usize) -> Result<usize, RasterError> {
    if width == 0 || height == 0 {
        return Err(RasterError::InvalidDimensions);
    }
    let len = width
        .checked_mul(height)
        .ok_or(RasterError::InvalidDimensions)?;
    match len.checked_mul(std::mem::size_of::<Rgb>()) {
        Some(bytes) if bytes <= isize::MAX as usize => Ok(len),
        _ => Err(RasterError::InvalidDimensions),
    }
}

fn checked_len(seeds: &[Seed], width: usize, height: usize) -> Result<usize, RasterError> {
    let len = pixel_count(width, height)?;
    if seeds.is_empty() {
        return Err(RasterError::EmptySeedList);
    }
    Ok(len)
}
