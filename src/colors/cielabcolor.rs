//! A module that implements the [CIELAB color
//! space](https://en.wikipedia.org/wiki/Lab_color_space#CIELAB). The CIELAB color space is used as a
//! device-independent color space that has an L value for luminance and two opponent color axes for
//! chromaticity (loosely, hue). Formally, the three values that define a CIELAB color are called
//! L\*, A\*, and B\* to distinguish them from [generic
//! Lab](https://en.wikipedia.org/wiki/Lab_color_space), but for convenience they are just `l`, `a`,
//! and `b` in this module. This is CIELAB relative to D65, the same white point as sRGB, so no
//! chromatic adaptation is involved.

use color::{ColorSpace, RGBColor};
use colors::xyzcolor::XYZColor;
use consts::{D65_WHITE, LAB_EPSILON, LAB_F_EPSILON, LAB_KAPPA};
use coord::Coord;

/// A color in the CIELAB color space.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELABColor {
    /// The luminance (loosely, brightness) of a given color. 0 is black and 100 is diffuse white.
    pub l: f64,
    /// The first opponent color axis. Negative is green, positive is magenta. Roughly between -128
    /// and 127 for sRGB colors.
    pub a: f64,
    /// The second opponent color axis. Negative is blue, positive is yellow. Roughly between -128 and
    /// 127 for sRGB colors.
    pub b: f64,
}

/// The CIELAB nonlinearity: a cube root, with a linear segment near zero.
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_KAPPA * t + 16.0 / 116.0
    }
}

/// The inverse of `lab_f`.
fn lab_f_inv(t: f64) -> f64 {
    if t > LAB_F_EPSILON {
        t * t * t
    } else {
        (t - 16.0 / 116.0) / LAB_KAPPA
    }
}

impl CIELABColor {
    /// Converts from XYZ normalized against the D65 white point.
    pub fn from_xyz(xyz: XYZColor) -> CIELABColor {
        let fx = lab_f(xyz.x / D65_WHITE[0]);
        let fy = lab_f(xyz.y / D65_WHITE[1]);
        let fz = lab_f(xyz.z / D65_WHITE[2]);
        CIELABColor {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Converts back to D65 XYZ.
    pub fn to_xyz(&self) -> XYZColor {
        let fy = (self.l + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;
        XYZColor {
            x: lab_f_inv(fx) * D65_WHITE[0],
            y: lab_f_inv(fy) * D65_WHITE[1],
            z: lab_f_inv(fz) * D65_WHITE[2],
        }
    }
}

impl ColorSpace for CIELABColor {
    fn from_rgb(rgb: RGBColor) -> CIELABColor {
        CIELABColor::from_xyz(rgb.convert())
    }

    fn to_rgb(&self) -> RGBColor {
        self.to_xyz().to_rgb()
    }
}

impl From<Coord> for CIELABColor {
    fn from(c: Coord) -> CIELABColor {
        CIELABColor {
            l: c.x,
            a: c.y,
            b: c.z,
        }
    }
}

impl Into<Coord> for CIELABColor {
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
    fn test_cielab_white_black() {
        let white: CIELABColor = RGBColor::opaque(255, 255, 255).convert();
        assert!((white.l - 100.0).abs() <= 1e-3);
        assert!(white.a.abs() <= 1e-2);
        assert!(white.b.abs() <= 1e-2);
        let black: CIELABColor = RGBColor::opaque(0, 0, 0).convert();
        assert!(black.l.abs() <= 1e-9);
    }

    #[test]
    fn test_cielab_known_value() {
        // sRGB red is about (53.24, 80.09, 67.20)
        let red: CIELABColor = RGBColor::opaque(255, 0, 0).convert();
        assert!((red.l - 53.24).abs() <= 0.01);
        assert!((red.a - 80.09).abs() <= 0.01);
        assert!((red.b - 67.20).abs() <= 0.01);
    }

    #[test]
    fn test_cielab_xyz_conversion() {
        let xyz = XYZColor{x: 40.0, y: 20.0, z: 60.0};
        let xyz2 = CIELABColor::from_xyz(xyz).to_xyz();
        assert!((xyz.x - xyz2.x).abs() <= 0.01);
        assert!((xyz.y - xyz2.y).abs() <= 0.01);
        assert!((xyz.z - xyz2.z).abs() <= 0.01);
    }

    #[test]
    fn test_cielab_roundtrip() {
        for r in (0..256).step_by(15) {
            for g in (0..256).step_by(17) {
                for b in (0..256).step_by(5) {
                    let rgb = RGBColor::opaque(r as u8, g as u8, b as u8);
                    let back = rgb.convert::<CIELABColor>().to_rgb();
                    assert!((i32::from(back.r) - r).abs() <= 1, "{} {}", rgb, back);
                    assert!((i32::from(back.g) - g).abs() <= 1, "{} {}", rgb, back);
                    assert!((i32::from(back.b) - b).abs() <= 1, "{} {}", rgb, back);
                }
            }
        }
    }
}
