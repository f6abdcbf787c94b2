//! This file implements the CIELCH color space, a cylindrical transformation of CIELAB that uses
//! chroma and hue instead of two opponent color axes.

use color::{ColorSpace, RGBColor};
use coord::Coord;
use super::cielabcolor::CIELABColor;

/// A cylindrical form of CIELAB, analogous to the relationship between HSL and RGB.
/// # Example
///
/// ```
/// # use vermilion::prelude::*;
/// # use vermilion::colors::CIELCHColor;
/// // hue-shift red towards yellow, keeping the same lightness and chroma
/// let red: CIELCHColor = RGBColor::opaque(179, 26, 26).convert();
/// let mut shifted = red;
/// shifted.h = shifted.h + 40.;
/// let orange = shifted.to_rgb();
/// assert!(orange.g > red.to_rgb().g);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELCHColor {
    /// The luminance component, identical to CIELAB's. Ranges between 0 and 100.
    pub l: f64,
    /// The chroma component: the distance from the gray of the same luminance. Ranges from 0 to
    /// roughly 130 for sRGB colors.
    pub c: f64,
    /// The hue component, in degrees between 0 and 360.
    pub h: f64,
}

impl ColorSpace for CIELCHColor {
    fn from_rgb(rgb: RGBColor) -> CIELCHColor {
        let lab: Coord = CIELABColor::from_rgb(rgb).into();
        CIELCHColor::from(lab.to_polar())
    }

    fn to_rgb(&self) -> RGBColor {
        let lch: Coord = (*self).into();
        CIELABColor::from(lch.from_polar()).to_rgb()
    }
}

impl From<Coord> for CIELCHColor {
    fn from(c: Coord) -> CIELCHColor {
        CIELCHColor {
            l: c.x,
            c: c.y,
            h: c.z,
        }
    }
}

impl Into<Coord> for CIELCHColor {
    fn into(self) -> Coord {
        Coord {
            x: self.l,
            y: self.c,
            z: self.h,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_lch_known_value() {
        // sRGB blue is about (32.30, 133.81, 306.29)
        let blue: CIELCHColor = RGBColor::opaque(0, 0, 255).convert();
        assert!((blue.l - 32.30).abs() <= 0.01);
        assert!((blue.c - 133.81).abs() <= 0.01);
        assert!((blue.h - 306.29).abs() <= 0.01);
    }

    #[test]
    fn test_lch_hue_in_range() {
        for &(r, g, b) in &[(0, 255, 0), (255, 0, 255), (0, 0, 128), (200, 10, 90)] {
            let lch: CIELCHColor = RGBColor::opaque(r, g, b).convert();
            assert!(lch.h >= 0.0 && lch.h < 360.0);
        }
    }

    #[test]
    fn test_lch_roundtrip() {
        for r in (0..256).step_by(15) {
            for g in (0..256).step_by(17) {
                for b in (0..256).step_by(5) {
                    let rgb = RGBColor::opaque(r as u8, g as u8, b as u8);
                    let back = rgb.convert::<CIELCHColor>().to_rgb();
                    assert!((i32::from(back.r) - r).abs() <= 1, "{} {}", rgb, back);
                    assert!((i32::from(back.g) - g).abs() <= 1, "{} {}", rgb, back);
                    assert!((i32::from(back.b) - b).abs() <= 1, "{} {}", rgb, back);
                }
            }
        }
    }
}
