//! This module implements naive CMYK: the subtractive print model computed directly from sRGB with no
//! ink profile. It is only good for a rough idea of ink coverage, but it is what people usually mean
//! when they ask for "the CMYK of a hex code".

use color::{ColorSpace, RGBColor};

/// A color as cyan, magenta, yellow and key (black) ink coverage, each between 0 and 1.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CMYKColor {
    /// Cyan coverage.
    pub c: f64,
    /// Magenta coverage.
    pub m: f64,
    /// Yellow coverage.
    pub y: f64,
    /// Key (black) coverage.
    pub k: f64,
}

impl ColorSpace for CMYKColor {
    fn from_rgb(rgb: RGBColor) -> CMYKColor {
        // pure black would divide by zero below
        if rgb.r == 0 && rgb.g == 0 && rgb.b == 0 {
            return CMYKColor {
                c: 0.0,
                m: 0.0,
                y: 0.0,
                k: 1.0,
            };
        }
        let [r, g, b] = rgb.normalized();
        let k = 1.0 - r.max(g).max(b);
        CMYKColor {
            c: (1.0 - r - k) / (1.0 - k),
            m: (1.0 - g - k) / (1.0 - k),
            y: (1.0 - b - k) / (1.0 - k),
            k,
        }
    }

    fn to_rgb(&self) -> RGBColor {
        let ink = |c: f64| 255.0 * (1.0 - c) * (1.0 - self.k);
        RGBColor::from_channels(ink(self.c), ink(self.m), ink(self.y))
    }
}
