//! Approximates a color with an index into the xterm 256-color palette. Indices 16-231 are a 6x6x6
//! color cube and 232-255 are a 24-step gray ramp; 0-15 are the theme-dependent system colors and
//! are never chosen. Grays go to the ramp (or to the cube's black and white corners at the extremes)
//! since the cube only has six grays of its own.

use color::RGBColor;

/// The cube's black corner.
const CUBE_BLACK: u8 = 16;
/// The cube's white corner.
const CUBE_WHITE: u8 = 231;
/// The darkest step of the gray ramp.
const GRAY_RAMP_START: u8 = 232;

/// Maps a color onto the 256-color palette. Alpha is ignored.
///
/// # Example
/// ```
/// # use vermilion::prelude::*;
/// # use vermilion::ansi;
/// assert_eq!(ansi::from_rgb(RGBColor::opaque(255, 0, 0)), 196);
/// assert_eq!(ansi::from_rgb(RGBColor::opaque(0, 0, 0)), 16);
/// ```
pub fn from_rgb(rgb: RGBColor) -> u8 {
    if rgb.is_achromatic() {
        return gray_index(rgb.r);
    }
    // each cube axis has six levels, 51 apart
    let level = |c: u8| c / 51;
    16 + 36 * level(rgb.r) + 6 * level(rgb.g) + level(rgb.b)
}

fn gray_index(v: u8) -> u8 {
    if v < 8 {
        CUBE_BLACK
    } else if v > 248 {
        CUBE_WHITE
    } else {
        let step = (u32::from(v) - 8) * 24 / 247;
        GRAY_RAMP_START + step as u8
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_gray_boundaries() {
        assert_eq!(from_rgb(RGBColor::opaque(0, 0, 0)), 16);
        assert_eq!(from_rgb(RGBColor::opaque(7, 7, 7)), 16);
        assert_eq!(from_rgb(RGBColor::opaque(8, 8, 8)), 232);
        assert_eq!(from_rgb(RGBColor::opaque(248, 248, 248)), 255);
        assert_eq!(from_rgb(RGBColor::opaque(249, 249, 249)), 231);
        assert_eq!(from_rgb(RGBColor::opaque(255, 255, 255)), 231);
        let mid = from_rgb(RGBColor::opaque(128, 128, 128));
        assert!(mid >= 232);
        assert_eq!(mid, 243);
    }

    #[test]
    fn test_color_cube() {
        assert_eq!(from_rgb(RGBColor::opaque(255, 0, 0)), 196);
        assert_eq!(from_rgb(RGBColor::opaque(0, 255, 0)), 46);
        assert_eq!(from_rgb(RGBColor::opaque(0, 0, 255)), 21);
        assert_eq!(from_rgb(RGBColor::opaque(255, 87, 51)), 203);
    }

    #[test]
    fn test_every_color_in_palette_range() {
        for r in (0..256).step_by(3) {
            for g in (0..256).step_by(7) {
                for b in (0..256).step_by(11) {
                    let idx = from_rgb(RGBColor::opaque(r as u8, g as u8, b as u8));
                    assert!(idx >= 16);
                }
            }
        }
    }
}
