//! This module assembles a [`ColorReport`]: every projection of a parsed color, written out both as
//! rounded numbers and as CSS strings, plus its accessibility figures. The report is meant to be
//! handed straight to a serializer, so its field names are the wire names.
//!
//! Precision is fixed per field. Hues and anything shown as a percentage are whole numbers, CIELAB
//! and CIELCH get two decimals, and Oklab and Oklch get four (their values are about a hundred times
//! smaller), except Oklch hue which is in degrees and gets two. Alpha is three decimals.
//!
//! When the input had an alpha channel, the report grows extra fields and the CSS strings of the
//! spaces whose syntax allows it switch to their `/ alpha` forms. `rgb` and `hsl` keep their plain
//! forms and get separate comma-style `rgba_css` and `hsla_css` siblings instead.

use accessibility::{self, AccessibilityResult, TextColor};
use ansi;
use color::RGBColor;
use colors::{
    CIELABColor, CIELCHColor, CMYKColor, HSLColor, HSVColor, HWBColor, OklabColor, OklchColor,
};

/// Rounds to a fixed number of decimal places, half away from zero. Never returns -0.0.
pub fn round_to(x: f64, digits: i32) -> f64 {
    let p = 10f64.powi(digits);
    (x * p).round() / p + 0.0
}

/// Rounds a value in [0, 1] to a whole percentage.
fn percent(x: f64) -> u8 {
    (x * 100.0).round() as u8
}

/// Rounds a hue in [0, 360) to whole degrees, staying in range: 359.6 becomes 0, not 360.
fn degrees(h: f64) -> u16 {
    (h.round() as u16) % 360
}

/// Rounds a hue in [0, 360) to a fixed number of decimals, wrapping a result of 360 back to 0.
fn hue_to(h: f64, digits: i32) -> f64 {
    let rounded = round_to(h, digits);
    if rounded >= 360.0 {
        0.0
    } else {
        rounded
    }
}

/// The red, green, and blue channels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbValues {
    /// Red, 0-255.
    pub r: u8,
    /// Green, 0-255.
    pub g: u8,
    /// Blue, 0-255.
    pub b: u8,
}

/// The channels with alpha in [0, 1], rounded to three decimals.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RgbaValues {
    /// Red, 0-255.
    pub r: u8,
    /// Green, 0-255.
    pub g: u8,
    /// Blue, 0-255.
    pub b: u8,
    /// Alpha, 0-1.
    pub a: f64,
}

/// HSL with whole-degree hue and whole-percent saturation and lightness.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HslValues {
    /// Hue in degrees.
    pub h: u16,
    /// Saturation, 0-100.
    pub s: u8,
    /// Lightness, 0-100.
    pub l: u8,
}

/// HSV with whole-degree hue and whole-percent saturation and value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsvValues {
    /// Hue in degrees.
    pub h: u16,
    /// Saturation, 0-100.
    pub s: u8,
    /// Value, 0-100.
    pub v: u8,
}

/// HWB with whole-degree hue and whole-percent whiteness and blackness.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HwbValues {
    /// Hue in degrees.
    pub h: u16,
    /// Whiteness, 0-100.
    pub w: u8,
    /// Blackness, 0-100.
    pub b: u8,
}

/// CMYK as whole percentages.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CmykValues {
    /// Cyan, 0-100.
    pub c: u8,
    /// Magenta, 0-100.
    pub m: u8,
    /// Yellow, 0-100.
    pub y: u8,
    /// Key, 0-100.
    pub k: u8,
}

/// Lightness and two opponent axes, used for both CIELAB and Oklab.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabValues {
    /// Lightness.
    pub l: f64,
    /// Green-red axis.
    pub a: f64,
    /// Blue-yellow axis.
    pub b: f64,
}

/// Lightness, chroma and hue, used for both CIELCH and Oklch.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LchValues {
    /// Lightness.
    pub l: f64,
    /// Chroma.
    pub c: f64,
    /// Hue in degrees.
    pub h: f64,
}

/// Every representation of a color. The `Option` fields are only present when the input carried
/// alpha, and are left out of the serialized form entirely otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formats {
    /// Uppercase `#RRGGBB`.
    pub hex: String,
    /// 8-bit channels.
    pub rgb: RgbValues,
    /// `rgb(r, g, b)`.
    pub rgb_css: String,
    /// HSL, rounded.
    pub hsl: HslValues,
    /// `hsl(h, s%, l%)`.
    pub hsl_css: String,
    /// HSV, rounded. CSS has no syntax for it.
    pub hsv: HsvValues,
    /// HWB, rounded.
    pub hwb: HwbValues,
    /// `hwb(h w% b%)`, with `/ alpha` when present.
    pub hwb_css: String,
    /// Naive CMYK as percentages.
    pub cmyk: CmykValues,
    /// `cmyk(c%, m%, y%, k%)`.
    pub cmyk_css: String,
    /// CIELAB to two decimals.
    pub lab: LabValues,
    /// `lab(l a b)`, with `/ alpha` when present.
    pub lab_css: String,
    /// CIELCH to two decimals.
    pub lch: LchValues,
    /// `lch(l c h)`, with `/ alpha` when present.
    pub lch_css: String,
    /// Oklab to four decimals.
    pub oklab: LabValues,
    /// `oklab(l a b)`, with `/ alpha` when present.
    pub oklab_css: String,
    /// Oklch: lightness and chroma to four decimals, hue to two.
    pub oklch: LchValues,
    /// `oklch(l c h)`, with `/ alpha` when present.
    pub oklch_css: String,
    /// Nearest xterm 256-color palette index.
    pub ansi256: u8,
    /// Alpha in [0, 1] to three decimals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
    /// Alpha as a whole percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha_percent: Option<u8>,
    /// Uppercase `#RRGGBBAA`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hexa: Option<String>,
    /// 8-bit channels with fractional alpha.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgba: Option<RgbaValues>,
    /// `rgba(r, g, b, a)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgba_css: Option<String>,
    /// `hsla(h, s%, l%, a)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hsla_css: Option<String>,
}

/// Accessibility figures as reported: luminance to four decimals, contrasts to two.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accessibility {
    /// Relative luminance, 0-1.
    pub luminance: f64,
    /// Contrast of white text on this color.
    pub contrast_white: f64,
    /// Contrast of black text on this color.
    pub contrast_black: f64,
    /// Whether either text color reaches 4.5:1.
    pub wcag_aa_compliant: bool,
    /// The text color with the higher contrast.
    pub recommended_text_color: TextColor,
}

impl From<AccessibilityResult> for Accessibility {
    fn from(res: AccessibilityResult) -> Accessibility {
        Accessibility {
            luminance: round_to(res.luminance, 4),
            contrast_white: round_to(res.contrast_white, 2),
            contrast_black: round_to(res.contrast_black, 2),
            wcag_aa_compliant: res.wcag_aa,
            recommended_text_color: res.recommended_text_color,
        }
    }
}

/// The full analysis of one color string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorReport {
    /// The input after trimming and lowercasing.
    pub original_input: String,
    /// Whether the input had an alpha channel.
    pub has_alpha: bool,
    /// Every representation of the color.
    pub formats: Formats,
    /// How readable text is on this color.
    pub accessibility: Accessibility,
}

impl ColorReport {
    /// Builds the report for a parsed color. Callers pass the trimmed, lowercased input as
    /// `original_input`; it is stored without further changes.
    pub fn new(original_input: &str, rgb: RGBColor) -> ColorReport {
        debug!(color = %rgb, has_alpha = rgb.has_alpha, "building color report");
        ColorReport {
            original_input: original_input.to_string(),
            has_alpha: rgb.has_alpha,
            formats: Formats::new(rgb),
            accessibility: accessibility::analyze(rgb).into(),
        }
    }
}

impl Formats {
    /// Projects a color into every space and formats the results.
    pub fn new(rgb: RGBColor) -> Formats {
        let hsl: HSLColor = rgb.convert();
        let hsv: HSVColor = rgb.convert();
        let hwb: HWBColor = rgb.convert();
        let cmyk: CMYKColor = rgb.convert();
        let lab: CIELABColor = rgb.convert();
        let lch: CIELCHColor = rgb.convert();
        let oklab: OklabColor = rgb.convert();
        let oklch: OklchColor = rgb.convert();

        let hsl = HslValues {
            h: degrees(hsl.h),
            s: percent(hsl.s),
            l: percent(hsl.l),
        };
        let hwb = HwbValues {
            h: degrees(hwb.h),
            w: percent(hwb.w),
            b: percent(hwb.b),
        };
        let cmyk = CmykValues {
            c: percent(cmyk.c),
            m: percent(cmyk.m),
            y: percent(cmyk.y),
            k: percent(cmyk.k),
        };
        let lab = LabValues {
            l: round_to(lab.l, 2),
            a: round_to(lab.a, 2),
            b: round_to(lab.b, 2),
        };
        let lch = LchValues {
            l: round_to(lch.l, 2),
            c: round_to(lch.c, 2),
            h: hue_to(lch.h, 2),
        };
        let oklab = LabValues {
            l: round_to(oklab.l, 4),
            a: round_to(oklab.a, 4),
            b: round_to(oklab.b, 4),
        };
        let oklch = LchValues {
            l: round_to(oklch.l, 4),
            c: round_to(oklch.c, 4),
            h: hue_to(oklch.h, 2),
        };

        let mut formats = Formats {
            hex: rgb.to_string(),
            rgb: RgbValues {
                r: rgb.r,
                g: rgb.g,
                b: rgb.b,
            },
            rgb_css: format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b),
            hsl,
            hsl_css: format!("hsl({}, {}%, {}%)", hsl.h, hsl.s, hsl.l),
            hsv: HsvValues {
                h: degrees(hsv.h),
                s: percent(hsv.s),
                v: percent(hsv.v),
            },
            hwb,
            hwb_css: format!("hwb({} {}% {}%)", hwb.h, hwb.w, hwb.b),
            cmyk,
            cmyk_css: format!("cmyk({}%, {}%, {}%, {}%)", cmyk.c, cmyk.m, cmyk.y, cmyk.k),
            lab,
            lab_css: format!("lab({:.2} {:.2} {:.2})", lab.l, lab.a, lab.b),
            lch,
            lch_css: format!("lch({:.2} {:.2} {:.2})", lch.l, lch.c, lch.h),
            oklab,
            oklab_css: format!("oklab({:.4} {:.4} {:.4})", oklab.l, oklab.a, oklab.b),
            oklch,
            oklch_css: format!("oklch({:.4} {:.4} {:.2})", oklch.l, oklch.c, oklch.h),
            ansi256: ansi::from_rgb(rgb),
            alpha: None,
            alpha_percent: None,
            hexa: None,
            rgba: None,
            rgba_css: None,
            hsla_css: None,
        };

        if rgb.has_alpha {
            let alpha = round_to(rgb.alpha_f64(), 3);
            formats.alpha = Some(alpha);
            formats.alpha_percent = Some(percent(rgb.alpha_f64()));
            formats.hexa = Some(rgb.to_hexa());
            formats.rgba = Some(RgbaValues {
                r: rgb.r,
                g: rgb.g,
                b: rgb.b,
                a: alpha,
            });
            formats.rgba_css = Some(format!("rgba({}, {}, {}, {:.3})", rgb.r, rgb.g, rgb.b, alpha));
            formats.hsla_css = Some(format!(
                "hsla({}, {}%, {}%, {:.3})",
                hsl.h, hsl.s, hsl.l, alpha
            ));
            formats.hwb_css = format!("hwb({} {}% {}% / {:.3})", hwb.h, hwb.w, hwb.b, alpha);
            formats.lab_css = format!("lab({:.2} {:.2} {:.2} / {:.3})", lab.l, lab.a, lab.b, alpha);
            formats.lch_css = format!("lch({:.2} {:.2} {:.2} / {:.3})", lch.l, lch.c, lch.h, alpha);
            formats.oklab_css = format!(
                "oklab({:.4} {:.4} {:.4} / {:.3})",
                oklab.l, oklab.a, oklab.b, alpha
            );
            formats.oklch_css = format!(
                "oklch({:.4} {:.4} {:.2} / {:.3})",
                oklch.l, oklch.c, oklch.h, alpha
            );
        }
        formats
    }
}
