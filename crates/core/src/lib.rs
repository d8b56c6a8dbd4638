#![deny(unsafe_code)]
//! Core of the voronoi-raster image generator.
//!
//! Scatters colored seeds over a pixel grid and colors each pixel with its
//! nearest seed: `Xorshift64` and `random_position` place seeds,
//! `ColorIndexCounter` and `Palette` pick their colors, and `build_image`
//! rasterizes them under a `Distance` metric. `Recipe` ties the pipeline
//! together reproducibly.

pub mod color;
pub mod counter;
pub mod distance;
pub mod error;
pub mod palette;
pub mod point;
pub mod prng;
pub mod raster;
pub mod recipe;
pub mod seed;

pub use color::Rgb;
pub use counter::ColorIndexCounter;
pub use distance::{manhattan, squared_euclidean, Distance, Metric};
pub use error::RasterError;
pub use palette::Palette;
pub use point::{random_position, Point};
pub use prng::Xorshift64;
pub use raster::{build_image, build_image_par, get_closest_seed, PixelBuffer};
pub use recipe::{Recipe, Tessellation};
pub use seed::{create_seeds, Seed};
