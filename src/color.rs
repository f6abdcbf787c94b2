//! This file defines the [`ColorSpace`] trait and [`RGBColor`], the canonical color that every
//! other representation in Vermilion is derived from. An `RGBColor` is what a parsed string turns
//! into: four 8-bit channels and a flag recording whether the input actually said anything about
//! alpha. Every other color space converts from it and back into it, so the projection code in
//! `colors` never needs to know anything about the others.

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use num;
use num::ToPrimitive;

use csscolor::{parse_color, ColorParseError};

/// A color space that can be computed from, and turned back into, a canonical [`RGBColor`]. The
/// projection from RGB is exact up to floating point error; the way back rounds to whole 8-bit
/// channels and clamps anything out of the sRGB gamut.
///
/// # Example
///
/// ```
/// # use vermilion::prelude::*;
/// # use vermilion::colors::HSLColor;
/// let orange: RGBColor = "#ff8000".parse().unwrap();
/// let hsl: HSLColor = orange.convert();
/// assert!((hsl.h - 30.1).abs() <= 0.1);
/// assert_eq!(hsl.to_rgb().to_string(), "#FF8000");
/// ```
pub trait ColorSpace: Sized {
    /// Projects the canonical color into this space. Alpha is ignored.
    fn from_rgb(rgb: RGBColor) -> Self;
    /// Reconstructs an opaque canonical color from this space.
    fn to_rgb(&self) -> RGBColor;
}

/// A color as 8-bit sRGB channels plus alpha. This is the single source of truth for a parsed color:
/// it is created once by the parser and only ever read afterwards. When `has_alpha` is false, `a` is
/// always 255.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel.
    pub r: u8,
    /// The green channel.
    pub g: u8,
    /// The blue channel.
    pub b: u8,
    /// The alpha channel, where 255 is fully opaque.
    pub a: u8,
    /// Whether the source of this color carried an explicit alpha channel. This decides whether the
    /// alpha-specific fields of a report are emitted at all.
    pub has_alpha: bool,
}

impl RGBColor {
    /// A fully opaque color with no alpha channel.
    pub fn opaque(r: u8, g: u8, b: u8) -> RGBColor {
        RGBColor {
            r,
            g,
            b,
            a: 255,
            has_alpha: false,
        }
    }

    /// A color with an explicit alpha channel, even if that alpha is 255.
    pub fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> RGBColor {
        RGBColor {
            r,
            g,
            b,
            a,
            has_alpha: true,
        }
    }

    /// Builds an opaque color from floating-point channels on the 0-255 scale, rounding and clamping
    /// each one. This is the last step of every conversion back into RGB.
    pub fn from_channels(r: f64, g: f64, b: f64) -> RGBColor {
        RGBColor::opaque(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }

    /// Builds an opaque color from gamma-encoded channels on the 0-1 scale.
    pub fn from_unit(rgb: [f64; 3]) -> RGBColor {
        RGBColor::from_channels(rgb[0] * 255.0, rgb[1] * 255.0, rgb[2] * 255.0)
    }

    /// Returns the same color channels with the given alpha attached.
    pub fn alpha(self, a: u8) -> RGBColor {
        RGBColor::with_alpha(self.r, self.g, self.b, a)
    }

    /// The red, green, and blue channels scaled into [0, 1], still gamma-encoded.
    pub fn normalized(&self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }

    /// The red, green, and blue channels with the sRGB transfer function undone, in [0, 1].
    pub fn linear(&self) -> [f64; 3] {
        let n = self.normalized();
        [srgb_to_linear(n[0]), srgb_to_linear(n[1]), srgb_to_linear(n[2])]
    }

    /// The alpha channel in [0, 1].
    pub fn alpha_f64(&self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// Whether red, green, and blue are all equal.
    pub fn is_achromatic(&self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// Converts this color into any other space.
    pub fn convert<T: ColorSpace>(self) -> T {
        T::from_rgb(self)
    }

    /// The uppercase 8-digit hex form `#RRGGBBAA`, regardless of `has_alpha`.
    pub fn to_hexa(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

impl ColorSpace for RGBColor {
    fn from_rgb(rgb: RGBColor) -> RGBColor {
        rgb
    }
    fn to_rgb(&self) -> RGBColor {
        RGBColor::opaque(self.r, self.g, self.b)
    }
}

/// Prints the uppercase 6-digit hex form `#RRGGBB`. Alpha is left out: use `to_hexa` for that.
impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for RGBColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<RGBColor, ColorParseError> {
        parse_color(s)
    }
}

impl<'a> TryFrom<&'a str> for RGBColor {
    type Error = ColorParseError;

    fn try_from(s: &'a str) -> Result<RGBColor, ColorParseError> {
        parse_color(s)
    }
}

/// Rounds and clamps a floating-point channel on the 0-255 scale. NaN becomes 0.
pub fn clamp_channel(v: f64) -> u8 {
    num::clamp(v.round(), 0.0, 255.0).to_u8().unwrap_or(0)
}

/// The sRGB transfer function's inverse: gamma-encoded [0, 1] to linear light.
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// The sRGB transfer function: linear light to gamma-encoded. Out-of-gamut values pass through and
/// are clamped later.
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_clamp_channel() {
        assert_eq!(clamp_channel(-12.0), 0);
        assert_eq!(clamp_channel(127.5), 128);
        assert_eq!(clamp_channel(127.49), 127);
        assert_eq!(clamp_channel(300.0), 255);
        assert_eq!(clamp_channel(::std::f64::NAN), 0);
    }

    #[test]
    fn test_hex_display() {
        assert_eq!(RGBColor::opaque(255, 87, 51).to_string(), "#FF5733");
        assert_eq!(RGBColor::with_alpha(121, 88, 159, 153).to_hexa(), "#79589F99");
        // display never shows alpha
        assert_eq!(RGBColor::with_alpha(0, 0, 0, 0).to_string(), "#000000");
    }

    #[test]
    fn test_hex_roundtrip() {
        // every 6-digit hex comes back out unchanged, modulo case
        for r in (0..256).step_by(15) {
            for g in (0..256).step_by(17) {
                for b in (0..256).step_by(51) {
                    let hex = format!("#{:02x}{:02x}{:02x}", r, g, b);
                    let rgb: RGBColor = hex.parse().unwrap();
                    assert!(!rgb.has_alpha);
                    assert_eq!(rgb.to_string(), hex.to_uppercase());
                }
            }
        }
    }

    #[test]
    fn test_transfer_functions_invert() {
        for i in 0..=255 {
            let c = f64::from(i as u8) / 255.0;
            assert!((linear_to_srgb(srgb_to_linear(c)) - c).abs() <= 1e-9);
        }
    }

    #[test]
    fn test_try_from() {
        let red = RGBColor::try_from("red").unwrap();
        assert_eq!(red, RGBColor::opaque(255, 0, 0));
        assert!(RGBColor::try_from("reddish").is_err());
    }
}
