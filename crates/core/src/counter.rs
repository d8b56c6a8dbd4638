//! Monotonic palette index generator.
//!
//! Consecutive seeds take consecutive palette slots, starting from a random
//! offset. Neighbouring picks therefore never repeat a color until the
//! palette wraps, while the starting color still varies between images.

use crate::error::RasterError;
use crate::prng::Xorshift64;

/// Exclusive upper bound of the random starting index.
pub const START_RANGE: usize = 100;

/// Strictly increasing index source for palette lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorIndexCounter {
    /// `None` once `u64::MAX` has been handed out.
    next: Option<u64>,
}

impl ColorIndexCounter {
    /// Starts counting at `start`.
    pub fn new(start: u64) -> Self {
        Self { next: Some(start) }
    }

    /// Starts counting at a value drawn uniformly from [0, 100).
    pub fn from_rng(rng: &mut Xorshift64) -> Self {
        Self::new(rng.next_usize(START_RANGE) as u64)
    }

    /// Returns the current index and advances by one.
    ///
    /// The sequence never wraps: after `u64::MAX` has been returned every
    /// further call fails with `RasterError::PaletteIndexExhausted`.
    pub fn next_index(&mut self) -> Result<u64, RasterError> {
        let index = self.next.ok_or(RasterError::PaletteIndexExhausted)?;
        self.next = index.checked_add(1);
        Ok(index)
    }

    /// The value the next call to `next_index` will return, if any.
    pub fn peek(&self) -> Option<u64> {
        self.next
    }
}
