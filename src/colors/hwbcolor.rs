//! This module implements HWB (hue, whiteness, blackness), the CSS Color 4 space meant to be easy
//! for people to pick colors in: start from a pure hue and mix in white and black paint. It shares
//! its hue with HSL and HSV. Whiteness is the smallest RGB channel and blackness is one minus the
//! largest, so a whiteness and blackness that add up to 1 or more always describe a gray.

use color::{clamp_channel, ColorSpace, RGBColor};
use colors::hslcolor::{hexagonal_hue, HSLColor};

/// A color in the HWB space.
/// # Example
///
/// ```
/// # use vermilion::prelude::*;
/// # use vermilion::colors::HWBColor;
/// // a pastel green: pure green with 40% white mixed in
/// let mint = HWBColor{h: 120., w: 0.4, b: 0.};
/// assert_eq!(mint.to_rgb().to_string(), "#66FF66");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HWBColor {
    /// The hue, in degrees. Identical to HSL's hue.
    pub h: f64,
    /// The amount of white mixed in, between 0 and 1.
    pub w: f64,
    /// The amount of black mixed in, between 0 and 1.
    pub b: f64,
}

impl ColorSpace for HWBColor {
    fn from_rgb(rgb: RGBColor) -> HWBColor {
        let [r, g, b] = rgb.normalized();
        HWBColor {
            h: hexagonal_hue([r, g, b]),
            w: r.min(g).min(b),
            b: 1.0 - r.max(g).max(b),
        }
    }

    fn to_rgb(&self) -> RGBColor {
        if self.w + self.b >= 1.0 {
            let gray = clamp_channel(255.0 * self.w / (self.w + self.b));
            return RGBColor::opaque(gray, gray, gray);
        }
        // start from the fully saturated hue, then scale it down and lift it up
        let pure = HSLColor {
            h: self.h,
            s: 1.0,
            l: 0.5,
        }.to_rgb();
        let scale = 1.0 - self.w - self.b;
        let mix = |c: u8| (f64::from(c) / 255.0 * scale + self.w) * 255.0;
        RGBColor::from_channels(mix(pure.r), mix(pure.g), mix(pure.b))
    }
}
