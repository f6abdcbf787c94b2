//! This module judges how readable text would be on a given background color, following the WCAG 2
//! contrast formula `(L1 + 0.05) / (L2 + 0.05)` for the lighter luminance `L1` and darker `L2`.
//!
//! One caveat: luminance here is the Rec. 709 weighted sum of the *gamma-encoded* channels, not of
//! linear light as WCAG strictly defines it. Mid-tones therefore come out lighter than a strict
//! implementation would say. The extremes agree exactly: white is 1, black is 0, and the ratio
//! between them is 21.

use std::fmt;

use color::RGBColor;
use consts::{LUMA_WEIGHTS, WCAG_AA_CONTRAST};

/// The text color that reads better on a background.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    /// Black text.
    Black,
    /// White text.
    White,
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            TextColor::Black => write!(f, "black"),
            TextColor::White => write!(f, "white"),
        }
    }
}

/// Luminance and contrast figures for a color used as a background. Values are unrounded.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityResult {
    /// Relative luminance, 0 for black to 1 for white.
    pub luminance: f64,
    /// Contrast ratio of white text on this color, from 1 to 21.
    pub contrast_white: f64,
    /// Contrast ratio of black text on this color, from 1 to 21.
    pub contrast_black: f64,
    /// Whether black or white text reaches the AA level of 4.5:1.
    pub wcag_aa: bool,
    /// Whichever of black and white contrasts more. Ties go to white.
    pub recommended_text_color: TextColor,
}

impl RGBColor {
    /// The simplified relative luminance of this color, between 0 and 1. Alpha is ignored.
    pub fn relative_luminance(&self) -> f64 {
        let n = self.normalized();
        LUMA_WEIGHTS[0] * n[0] + LUMA_WEIGHTS[1] * n[1] + LUMA_WEIGHTS[2] * n[2]
    }

    /// The contrast ratio between two colors, from 1 (identical luminance) to 21 (black and white).
    /// The order of the colors does not matter.
    ///
    /// # Example
    /// ```
    /// # use vermilion::prelude::*;
    /// let navy = RGBColor::opaque(0, 0, 128);
    /// let yellow = RGBColor::opaque(255, 255, 0);
    /// assert_eq!(navy.contrast_ratio(&yellow), yellow.contrast_ratio(&navy));
    /// assert!(navy.contrast_ratio(&yellow) > 7.0);
    /// ```
    pub fn contrast_ratio(&self, other: &RGBColor) -> f64 {
        let l1 = self.relative_luminance();
        let l2 = other.relative_luminance();
        let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
        (lighter + 0.05) / (darker + 0.05)
    }
}

/// Computes luminance and black/white text contrast for a background color.
pub fn analyze(rgb: RGBColor) -> AccessibilityResult {
    let luminance = rgb.relative_luminance();
    let contrast_white = 1.05 / (luminance + 0.05);
    let contrast_black = (luminance + 0.05) / 0.05;
    let recommended_text_color = if contrast_black > contrast_white {
        TextColor::Black
    } else {
        TextColor::White
    };
    AccessibilityResult {
        luminance,
        contrast_white,
        contrast_black,
        wcag_aa: contrast_white >= WCAG_AA_CONTRAST || contrast_black >= WCAG_AA_CONTRAST,
        recommended_text_color,
    }
}
