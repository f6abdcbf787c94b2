//! This module implements the HSV color space, a cousin of the HSL color space. The definition of
//! value differs from lightness: it goes from black to full saturation instead of black to
//! white. This makes value an extraordinarily poor analog of luminance (dark purple is the same
//! value as white, despite reflecting one-tenth the light), but does make the hue and saturation a
//! bit more meaningful than HSL.

use color::{ColorSpace, RGBColor};
use colors::hslcolor::hexagonal_hue;
use coord::normalize_hue;

/// An HSV color, defining parameters for hue, saturation, and value from the RGB space.
/// # Example
///
/// ```
/// # use vermilion::prelude::*;
/// # use vermilion::colors::HSVColor;
/// let red = HSVColor{h: 0., s: 0.5, v: 0.8};
/// let yellow = HSVColor{h: 50., s: 0.5, v: 0.8};
/// assert_eq!(red.to_rgb().to_string(), "#CC6666");
/// assert_eq!(yellow.to_rgb().to_string(), "#CCBB66");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSVColor {
    /// The hue, in degrees. Identical to HSL's hue.
    pub h: f64,
    /// The saturation, the distance from the equal-value gray as a fraction of value. Ranges between
    /// 0 and 1.
    pub s: f64,
    /// The value, defined as the largest RGB primary value of a color.
    pub v: f64,
}

impl ColorSpace for HSVColor {
    fn from_rgb(rgb: RGBColor) -> HSVColor {
        let [r, g, b] = rgb.normalized();
        let max_c = r.max(g).max(b);
        let min_c = r.min(g).min(b);
        let s = if max_c == 0.0 {
            0.0
        } else {
            (max_c - min_c) / max_c
        };
        HSVColor {
            h: hexagonal_hue([r, g, b]),
            s,
            v: max_c,
        }
    }

    fn to_rgb(&self) -> RGBColor {
        let h = normalize_hue(self.h);
        let chroma = self.s * self.v;
        let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let (r1, g1, b1) = match (h / 60.0) as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let offset = self.v - chroma;
        RGBColor::from_unit([r1 + offset, g1 + offset, b1 + offset])
    }
}
