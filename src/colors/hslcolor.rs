//! This file implements what I refer to as HSL but which would precisely be called sHSL: a simple
//! transformation of sRGB that creates a cylindrical space. HSL has the same problems with
//! perceptual uniformity as sRGB does, but it is easy to compute and is what CSS means by `hsl()`.
//! The space is hexagonal rather than circular: values are put on a hexagon, and that hexagon is
//! then "squeezed" into a circle, so hue is piecewise linear in the RGB channels.
//! Converting gray into HSL gives a hue of 0 degrees, although any hue could be used in its place.

use color::{ColorSpace, RGBColor};
use coord::normalize_hue;

/// A color in the HSL color space, a direct transformation of the sRGB space.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSLColor {
    /// The hue component, in degrees. Ranges from 0 to 360 when computed from RGB; any angle is
    /// accepted when converting back.
    pub h: f64,
    /// The saturation component. Ranges between 0 and 1.
    pub s: f64,
    /// The lightness component. Ranges from 0 to 1. Defined in HSL as the average of the largest and
    /// smallest color components in RGB.
    pub l: f64,
}

/// Computes the hexagonal hue, in degrees, shared by HSL, HSV and HWB. Gray has a hue of 0.
pub(crate) fn hexagonal_hue(rgb: [f64; 3]) -> f64 {
    let [r, g, b] = rgb;
    let max_c = r.max(g).max(b);
    let min_c = r.min(g).min(b);
    let chroma = max_c - min_c;
    if chroma == 0.0 {
        return 0.0;
    }
    // which sector of the hexagon we are in depends on the largest channel
    let sector = if max_c == r {
        let h = (g - b) / chroma;
        if g < b {
            h + 6.0
        } else {
            h
        }
    } else if max_c == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };
    sector * 60.0
}

impl ColorSpace for HSLColor {
    fn from_rgb(rgb: RGBColor) -> HSLColor {
        let [r, g, b] = rgb.normalized();
        let max_c = r.max(g).max(b);
        let min_c = r.min(g).min(b);
        let chroma = max_c - min_c;

        // lightness is the average of the largest and smallest components, which makes a double
        // hexcone
        let l = (max_c + min_c) / 2.0;
        // saturation is chroma relative to the largest chroma possible at this lightness
        let s = if chroma == 0.0 {
            0.0
        } else if l > 0.5 {
            chroma / (2.0 - max_c - min_c)
        } else {
            chroma / (max_c + min_c)
        };

        HSLColor {
            h: hexagonal_hue([r, g, b]),
            s,
            l,
        }
    }

    fn to_rgb(&self) -> RGBColor {
        let h = normalize_hue(self.h);
        let chroma = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        // the second-largest channel, when the smallest is 0
        let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let (r1, g1, b1) = if h < 60.0 {
            (chroma, x, 0.0)
        } else if h < 120.0 {
            (x, chroma, 0.0)
        } else if h < 180.0 {
            (0.0, chroma, x)
        } else if h < 240.0 {
            (0.0, x, chroma)
        } else if h < 300.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };
        let offset = self.l - chroma / 2.0;
        RGBColor::from_unit([r1 + offset, g1 + offset, b1 + offset])
    }
}
