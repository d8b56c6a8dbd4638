//! Ordered, non-empty color palette indexed with wraparound.
//!
//! Seeds pick their colors through [`Palette::get_color`], which reduces any
//! index modulo the palette length. A `Palette` can only be built with at
//! least one color, so lookups never divide by zero.

use crate::color::Rgb;
use crate::error::RasterError;

/// Names accepted by [`Palette::from_name`].
const PALETTE_NAMES: &[&str] = &[
    "ocean",
    "neon",
    "earth",
    "monochrome",
    "vapor",
    "fire",
    "primary",
];

/// A non-empty ordered list of colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Creates a palette from a list of colors.
    ///
    /// Returns `RasterError::InvalidPalette` if `colors` is empty.
    pub fn new(colors: Vec<Rgb>) -> Result<Self, RasterError> {
        if colors.is_empty() {
            return Err(RasterError::InvalidPalette(
                "palette requires at least 1 color".to_string(),
            ));
        }
        Ok(Self { colors })
    }

    /// Creates a palette by parsing hex color strings ("#rrggbb" or "rrggbb").
    pub fn from_hex(hexes: &[&str]) -> Result<Self, RasterError> {
        let colors = hexes
            .iter()
            .map(|h| Rgb::from_hex(h))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// Looks up a built-in palette by name.
    pub fn from_name(name: &str) -> Result<Self, RasterError> {
        let hexes: &[&str] = match name {
            "ocean" => &["#001f3f", "#003366", "#005f73", "#0a9396", "#94d2bd"],
            "neon" => &["#ff00ff", "#00ff41", "#ffff00", "#ff0080", "#00ffff"],
            "earth" => &["#5c4033", "#8b6914", "#6b8e23", "#daa520", "#d2b48c"],
            "monochrome" => &["#000000", "#404040", "#808080", "#c0c0c0", "#ffffff"],
            "vapor" => &["#7b2d8e", "#c77dff", "#ff9ebb", "#80ced6", "#a0e7e5"],
            "fire" => &["#800000", "#cc0000", "#ff4500", "#ff8c00", "#ffd700"],
            "primary" => &[
                "#ff0000", "#00ff00", "#0000ff", "#ffff00", "#ff00ff", "#00ffff",
            ],
            _ => return Err(RasterError::UnknownPalette(name.to_string())),
        };
        Self::from_hex(hexes)
    }

    /// Names of every built-in palette.
    pub fn list_names() -> &'static [&'static str] {
        PALETTE_NAMES
    }

    /// Number of colors in the palette. Always at least 1.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The colors in palette order.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Returns the color at `index mod len`.
    ///
    /// Constant time for any index, including values far beyond the
    /// palette length.
    pub fn get_color(&self, index: u64) -> Rgb {
        let i = (index % self.colors.len() as u64) as usize;
        self.colors[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_palette() -> Palette {
        Palette::new(vec![
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
        ])
        .unwrap()
    }

    #[test]
    fn new_with_empty_vec_returns_error() {
        assert!(matches!(
            Palette::new(vec![]),
            Err(RasterError::InvalidPalette(_))
        ));
    }

    #[test]
    fn from_hex_with_empty_slice_returns_error() {
        assert!(Palette::from_hex(&[]).is_err());
    }

    #[test]
    fn from_hex_with_invalid_hex_returns_color_error() {
        assert!(matches!(
            Palette::from_hex(&["#ff0000", "nope"]),
            Err(RasterError::InvalidColor(_))
        ));
    }

    #[test]
    fn get_color_zero_is_first_color() {
        assert_eq!(rgb_palette().get_color(0), Rgb::new(255, 0, 0));
    }

    #[test]
    fn get_color_wraps_around() {
        let p = rgb_palette();
        assert_eq!(p.get_color(3), p.get_color(0));
        assert_eq!(p.get_color(5), Rgb::new(0, 0, 255));
    }

    #[test]
    fn get_color_handles_huge_index() {
        let p = rgb_palette();
        assert_eq!(p.get_color(u64::MAX), p.get_color(u64::MAX % 3));
    }

    #[test]
    fn single_color_palette_returns_that_color_for_any_index() {
        let p = Palette::new(vec![Rgb::WHITE]).unwrap();
        for i in [0, 1, 99, u64::MAX] {
            assert_eq!(p.get_color(i), Rgb::WHITE);
        }
    }

    #[test]
    fn every_listed_name_resolves() {
        for name in Palette::list_names() {
            let p = Palette::from_name(name)
                .unwrap_or_else(|e| panic!("palette {name} failed: {e}"));
            assert!(p.len() >= 2, "palette {name} has {} colors", p.len());
        }
    }

    #[test]
    fn unknown_name_returns_unknown_palette() {
        assert!(matches!(
            Palette::from_name("plaid"),
            Err(RasterError::UnknownPalette(name)) if name == "plaid"
        ));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_palette() -> impl Strategy<Value = Palette> {
            prop::collection::vec(any::<[u8; 3]>(), 1..16).prop_map(|raw| {
                Palette::new(raw.into_iter().map(Rgb::from).collect()).unwrap()
            })
        }

        proptest! {
            #[test]
            fn get_color_matches_reduced_index(p in arb_palette(), i: u64) {
                let reduced = i % p.len() as u64;
                prop_assert_eq!(p.get_color(i), p.get_color(reduced));
                prop_assert_eq!(p.get_color(reduced), p.colors()[reduced as usize]);
            }
        }
    }
}
