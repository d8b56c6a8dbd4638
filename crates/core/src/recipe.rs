//! Reproducible description of one tessellated image.
//!
//! A [`Recipe`] captures everything besides the palette needed to regenerate
//! an image: dimensions, seed count, metric, and the PRNG seed. Two identical
//! recipes rendered with the same palette produce bit-identical buffers.

use crate::counter::ColorIndexCounter;
use crate::distance::Distance;
use crate::error::RasterError;
use crate::palette::Palette;
use crate::prng::Xorshift64;
use crate::raster::{build_image, build_image_par, pixel_count, PixelBuffer};
use crate::seed::{create_seeds, Seed};
use serde::{Deserialize, Serialize};

/// Parameters for one image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub width: usize,
    pub height: usize,
    pub seed_count: usize,
    #[serde(default)]
    pub distance: Distance,
    /// Name of a built-in palette, used when the caller supplies none.
    #[serde(default = "default_palette")]
    pub palette: String,
    /// PRNG seed for seed placement and the starting palette index.
    pub seed: u64,
}

fn default_palette() -> String {
    "ocean".to_string()
}

/// The seeds of one image together with the rendered pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tessellation {
    pub seeds: Vec<Seed>,
    pub image: PixelBuffer,
}

impl Recipe {
    /// Creates a recipe with the Manhattan metric and the default palette.
    pub fn new(width: usize, height: usize, seed_count: usize, seed: u64) -> Self {
        Self {
            width,
            height,
            seed_count,
            distance: Distance::default(),
            palette: default_palette(),
            seed,
        }
    }

    /// Like [`Recipe::new`] but seeded from the platform entropy source.
    pub fn with_entropy(width: usize, height: usize, seed_count: usize) -> Self {
        Self::new(width, height, seed_count, Xorshift64::entropy_seed())
    }

    /// Checks dimensions (non-zero, allocatable) and seed count.
    pub fn validate(&self) -> Result<(), RasterError> {
        pixel_count(self.width, self.height)?;
        if self.seed_count == 0 {
            return Err(RasterError::InvalidSeedCount);
        }
        Ok(())
    }

    /// Resolves the named built-in palette.
    pub fn resolve_palette(&self) -> Result<Palette, RasterError> {
        Palette::from_name(&self.palette)
    }

    /// Places seeds and rasterizes them on one thread.
    pub fn generate(&self, palette: &Palette) -> Result<Tessellation, RasterError> {
        let seeds = self.place_seeds(palette)?;
        let image = build_image(&seeds, self.width, self.height, &self.distance)?;
        Ok(Tessellation { seeds, image })
    }

    /// Same as [`Recipe::generate`], rasterizing rows in parallel.
    pub fn generate_par(&self, palette: &Palette) -> Result<Tessellation, RasterError> {
        let seeds = self.place_seeds(palette)?;
        let image = build_image_par(&seeds, self.width, self.height, &self.distance)?;
        Ok(Tessellation { seeds, image })
    }

    fn place_seeds(&self, palette: &Palette) -> Result<Vec<Seed>, RasterError> {
        self.validate()?;
        let mut rng = Xorshift64::new(self.seed);
        let mut counter = ColorIndexCounter::from_rng(&mut rng);
        log::debug!(
            "recipe seed {} starts palette index at {:?}",
            self.seed,
            counter.peek()
        );
        create_seeds(
            self.seed_count,
            self.width,
            self.height,
            palette,
            &mut rng,
            &mut counter,
        )
    }
}
