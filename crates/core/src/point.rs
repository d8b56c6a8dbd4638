//! Integer pixel coordinates and uniform random placement.

use crate::prng::Xorshift64;
use serde::{Deserialize, Serialize};

/// A pixel position on the grid. `x` grows rightward, `y` downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Point {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// Returns a point with `x` uniform in [0, max_width) and `y` uniform in
/// [0, max_height).
///
/// Draws `x` first, then `y`, advancing `rng` by exactly two values.
///
/// # Panics
///
/// Panics if either bound is 0. Callers validate dimensions first.
pub fn random_position(rng: &mut Xorshift64, max_width: usize, max_height: usize) -> Point {
    let x = rng.next_usize(max_width);
    let y = rng.next_usize(max_height);
    Point { x, y }
}
