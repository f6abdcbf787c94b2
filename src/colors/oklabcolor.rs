//! This module implements [Oklab](https://bottosson.github.io/posts/oklab/), a perceptually uniform
//! space built the same way as CIELAB (a lightness axis and two opponent axes) but fit to modern
//! color appearance data. It goes straight from linear sRGB through an approximate cone response
//! (LMS) and a cube root, so unlike CIELAB it needs no detour through XYZ. Lightness runs from 0 to 1
//! and the opponent axes stay within about ±0.4 for sRGB colors, which is why Oklab values are
//! usually written with more decimal places than CIELAB ones.

use color::{linear_to_srgb, ColorSpace, RGBColor};
use consts::{mat_mul, LMS_TO_OKLAB, LMS_TO_SRGB, OKLAB_TO_LMS, SRGB_TO_LMS};
use coord::Coord;

/// A color in the Oklab color space.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct OklabColor {
    /// Perceived lightness, from 0 (black) to 1 (white).
    pub l: f64,
    /// Green (negative) to red (positive).
    pub a: f64,
    /// Blue (negative) to yellow (positive).
    pub b: f64,
}

impl ColorSpace for OklabColor {
    fn from_rgb(rgb: RGBColor) -> OklabColor {
        let lms = mat_mul(&SRGB_TO_LMS, rgb.linear());
        let lab = mat_mul(&LMS_TO_OKLAB, [lms[0].cbrt(), lms[1].cbrt(), lms[2].cbrt()]);
        OklabColor {
            l: lab[0],
            a: lab[1],
            b: lab[2],
        }
    }

    fn to_rgb(&self) -> RGBColor {
        let lms_ = mat_mul(&OKLAB_TO_LMS, [self.l, self.a, self.b]);
        let cube = |x: f64| x * x * x;
        let lin = mat_mul(&LMS_TO_SRGB, [cube(lms_[0]), cube(lms_[1]), cube(lms_[2])]);
        RGBColor::from_unit([
            linear_to_srgb(lin[0]),
            linear_to_srgb(lin[1]),
            linear_to_srgb(lin[2]),
        ])
    }
}

impl From<Coord> for OklabColor {
    fn from(c: Coord) -> OklabColor {
        OklabColor {
            l: c.x,
            a: c.y,
            b: c.z,
        }
    }
}

impl Into<Coord> for OklabColor {
    fn into(self) -> Coord {
        Coord {
            x: self.l,
            y: self.a,
            z: self.b,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_oklab_white_black() {
        let white: OklabColor = RGBColor::opaque(255, 255, 255).convert();
        assert!((white.l - 1.0).abs() <= 1e-4);
        assert!(white.a.abs() <= 1e-4);
        assert!(white.b.abs() <= 1e-4);
        let black: OklabColor = RGBColor::opaque(0, 0, 0).convert();
        assert_eq!(black.l, 0.0);
    }

    #[test]
    fn test_oklab_known_value() {
        // reference values from the Oklab blog post's sRGB red
        let red: OklabColor = RGBColor::opaque(255, 0, 0).convert();
        assert!((red.l - 0.6280).abs() <= 1e-4);
        assert!((red.a - 0.2249).abs() <= 1e-4);
        assert!((red.b - 0.1258).abs() <= 1e-4);
    }

    #[test]
    fn test_oklab_roundtrip() {
        for r in (0..256).step_by(15) {
            for g in (0..256).step_by(17) {
                for b in (0..256).step_by(5) {
                    let rgb = RGBColor::opaque(r as u8, g as u8, b as u8);
                    let back = rgb.convert::<OklabColor>().to_rgb();
                    assert!((i32::from(back.r) - r).abs() <= 1, "{} {}", rgb, back);
                    assert!((i32::from(back.g) - g).abs() <= 1, "{} {}", rgb, back);
                    assert!((i32::from(back.b) - b).abs() <= 1, "{} {}", rgb, back);
                }
            }
        }
    }
}
