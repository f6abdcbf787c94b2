//! Oklch is to Oklab what CIELCH is to CIELAB: the same lightness, with the opponent axes turned into
//! chroma and hue. This is the space CSS Color 4 recommends for picking palettes, since changing the
//! hue at fixed lightness and chroma really does keep perceived brightness steady.

use color::{ColorSpace, RGBColor};
use coord::Coord;
use super::oklabcolor::OklabColor;

/// A color in the Oklch color space.
/// # Example
///
/// ```
/// # use vermilion::prelude::*;
/// # use vermilion::colors::OklchColor;
/// let green: OklchColor = RGBColor::opaque(0, 255, 0).convert();
/// assert!((green.l - 0.8664).abs() <= 1e-4);
/// assert!((green.h - 142.5).abs() <= 0.1);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct OklchColor {
    /// Perceived lightness, from 0 to 1. Identical to Oklab's.
    pub l: f64,
    /// Chroma, the distance from the gray of the same lightness. Below about 0.37 for sRGB colors.
    pub c: f64,
    /// Hue, in degrees between 0 and 360.
    pub h: f64,
}

impl ColorSpace for OklchColor {
    fn from_rgb(rgb: RGBColor) -> OklchColor {
        let lab: Coord = OklabColor::from_rgb(rgb).into();
        OklchColor::from(lab.to_polar())
    }

    fn to_rgb(&self) -> RGBColor {
        let lch: Coord = (*self).into();
        OklabColor::from(lch.from_polar()).to_rgb()
    }
}

impl From<Coord> for OklchColor {
    fn from(c: Coord) -> OklchColor {
        OklchColor {
            l: c.x,
            c: c.y,
            h: c.z,
        }
    }
}

impl Into<Coord> for OklchColor {
    fn into(self) -> Coord {
        Coord {
            x: self.l,
            y: self.c,
            z: self.h,
        }
    }
}
