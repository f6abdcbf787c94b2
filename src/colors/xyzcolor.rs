//! The CIE 1931 XYZ space, the device-independent hub that CIELAB is defined on top of. Vermilion
//! only ever deals in sRGB, so XYZ here is always relative to the D65 white point and scaled so that
//! sRGB white has a Y of 100.

use color::{linear_to_srgb, ColorSpace, RGBColor};
use consts::{mat_mul, SRGB_TO_XYZ, XYZ_TO_SRGB};

/// A point in the CIE 1931 XYZ color space, D65, with Y in [0, 100] for sRGB colors.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYZColor {
    /// The X tristimulus value.
    pub x: f64,
    /// The Y tristimulus value: luminance.
    pub y: f64,
    /// The Z tristimulus value, roughly the blue cone response.
    pub z: f64,
}

impl ColorSpace for XYZColor {
    fn from_rgb(rgb: RGBColor) -> XYZColor {
        let xyz = mat_mul(&SRGB_TO_XYZ, rgb.linear());
        XYZColor {
            x: xyz[0] * 100.0,
            y: xyz[1] * 100.0,
            z: xyz[2] * 100.0,
        }
    }

    fn to_rgb(&self) -> RGBColor {
        let lin = mat_mul(&XYZ_TO_SRGB, [self.x / 100.0, self.y / 100.0, self.z / 100.0]);
        RGBColor::from_unit([
            linear_to_srgb(lin[0]),
            linear_to_srgb(lin[1]),
            linear_to_srgb(lin[2]),
        ])
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_white_and_black() {
        let white: XYZColor = RGBColor::opaque(255, 255, 255).convert();
        assert!((white.x - 95.047).abs() <= 1e-3);
        assert!((white.y - 100.0).abs() <= 1e-3);
        assert!((white.z - 108.883).abs() <= 1e-3);
        let black: XYZColor = RGBColor::opaque(0, 0, 0).convert();
        assert_eq!(black, XYZColor{x: 0.0, y: 0.0, z: 0.0});
    }

    #[test]
    fn test_out_of_gamut_clamps() {
        // far more Z than any sRGB color has
        let rgb = XYZColor{x: 0.0, y: 0.0, z: 200.0}.to_rgb();
        assert_eq!(rgb.r, 0);
        assert_eq!(rgb.b, 255);
    }

    #[test]
    fn test_xyz_roundtrip() {
        for r in (0..256).step_by(15) {
            for g in (0..256).step_by(17) {
                for b in (0..256).step_by(51) {
                    let rgb = RGBColor::opaque(r as u8, g as u8, b as u8);
                    assert_eq!(rgb.convert::<XYZColor>().to_rgb(), rgb);
                }
            }
        }
    }
}
