//! This file turns a color string into an [`RGBColor`]. It recognizes hex codes, the CSS functional
//! notations for every space Vermilion knows (`rgb()`, `rgba()`, `hsl()`, `hsla()`, `hwb()`,
//! `lab()`, `lch()`, `oklab()` and `oklch()`), and a handful of color keywords.
//!
//! Parsing happens in two passes. First the whole string is classified into exactly one
//! [`ColorSyntax`], so that e.g. `hsla(...)` is decided once and never also tried as `hsl(...)`.
//! Then the numbers are pulled out with the permissive scan in `cssnumeric` and handed to the
//! matching color space to be turned into RGB. The grammar is loose on purpose: commas or spaces,
//! `/` before alpha or not, units or not, all of these parse. What it is strict about is count. A
//! function with fewer than three numbers is an error, never a color with zeroes filled in.

use std::error::Error;
use std::fmt;

use color::{clamp_channel, ColorSpace, RGBColor};
use colors::{CIELABColor, CIELCHColor, HSLColor, HWBColor, OklabColor, OklchColor};
use cssnumeric::{scan_css_numbers, CSSNumeric};
use named_colors::named_color;

/// An error in parsing a color string. There is only one way to fail: nothing about the string made
/// sense as a color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorParseError {
    /// No grammar matched the input, or one matched but its numbers were missing. Carries the input
    /// exactly as it was given.
    UnparsableInput(String),
}

impl ColorParseError {
    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        match *self {
            ColorParseError::UnparsableInput(ref s) => s,
        }
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "could not parse color: {}", self.input())
    }
}

impl Error for ColorParseError {}

/// The CSS color functions, each followed by numbers in parentheses.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ColorFunction {
    /// `rgb(r, g, b)`. Any fourth number is ignored: `rgb` never carries alpha.
    Rgb,
    /// `rgba(r, g, b, a)`. Alpha may be left off.
    Rgba,
    /// `hsl(h, s%, l%)` and `hsla(h, s%, l%, a)`.
    Hsl,
    /// `hwb(h w% b% / a)`.
    Hwb,
    /// `lab(l a b / alpha)`, CIELAB.
    Lab,
    /// `lch(l c h / alpha)`, CIELCH.
    Lch,
    /// `oklab(l a b / alpha)`.
    Oklab,
    /// `oklch(l c h / alpha)`.
    Oklch,
}

/// Which grammar a color string is written in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ColorSyntax {
    /// `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`, with or without the `#`.
    Hex,
    /// One of the CSS functional notations.
    Function(ColorFunction),
    /// A color keyword like `red` or `transparent`.
    Named,
}

/// Function prefixes in the order they are tried. A prefix always comes before any shorter prefix
/// it starts with, so `rgba` is never mistaken for `rgb`.
const FUNCTION_PREFIXES: [(&str, ColorFunction); 9] = [
    ("rgba", ColorFunction::Rgba),
    ("rgb", ColorFunction::Rgb),
    ("hsla", ColorFunction::Hsl),
    ("hsl", ColorFunction::Hsl),
    ("hwb", ColorFunction::Hwb),
    ("oklab", ColorFunction::Oklab),
    ("oklch", ColorFunction::Oklch),
    ("lab", ColorFunction::Lab),
    ("lch", ColorFunction::Lch),
];

/// Whether a string is nothing but hex digits, in one of the lengths a hex color can have.
fn is_bare_hex(s: &str) -> bool {
    match s.len() {
        3 | 4 | 6 | 8 => s.bytes().all(|b| b.is_ascii_hexdigit()),
        _ => false,
    }
}

/// Decides which grammar applies to an already trimmed and lowercased string. A leading `#` commits
/// to hex even if what follows turns out not to be valid hex.
pub fn classify(input: &str) -> Option<ColorSyntax> {
    if input.starts_with('#') || is_bare_hex(input) {
        return Some(ColorSyntax::Hex);
    }
    for &(prefix, function) in FUNCTION_PREFIXES.iter() {
        if input.starts_with(prefix) {
            return Some(ColorSyntax::Function(function));
        }
    }
    named_color(input).map(|_| ColorSyntax::Named)
}

/// Parses hex digits, without the `#`. Three and four digit forms double each digit.
fn parse_hex(hex: &str) -> Option<RGBColor> {
    let d = hex
        .chars()
        .map(|c| c.to_digit(16).map(|n| n as u8))
        .collect::<Option<Vec<u8>>>()?;
    let pair = |i: usize| d[i] << 4 | d[i + 1];
    match d.len() {
        3 => Some(RGBColor::opaque(d[0] * 17, d[1] * 17, d[2] * 17)),
        4 => Some(RGBColor::with_alpha(d[0] * 17, d[1] * 17, d[2] * 17, d[3] * 17)),
        6 => Some(RGBColor::opaque(pair(0), pair(2), pair(4))),
        8 => Some(RGBColor::with_alpha(pair(0), pair(2), pair(4), pair(6))),
        _ => None,
    }
}

/// An RGB channel: a plain number on the 0-255 scale, or a percentage of 255.
fn rgb_channel(n: &CSSNumeric) -> f64 {
    if n.percent {
        n.value / 100.0 * 255.0
    } else {
        n.value
    }
}

/// Converts the first three numbers of a color function into an opaque color.
fn function_to_rgb(function: ColorFunction, args: &[CSSNumeric]) -> RGBColor {
    let (x, y, z) = (&args[0], &args[1], &args[2]);
    match function {
        ColorFunction::Rgb | ColorFunction::Rgba => {
            RGBColor::from_channels(rgb_channel(x), rgb_channel(y), rgb_channel(z))
        }
        ColorFunction::Hsl => HSLColor {
            h: x.value,
            s: y.as_percent() / 100.0,
            l: z.as_percent() / 100.0,
        }.to_rgb(),
        ColorFunction::Hwb => HWBColor {
            h: x.value,
            w: y.as_percent() / 100.0,
            b: z.as_percent() / 100.0,
        }.to_rgb(),
        // CSS maps lab(100% ...) to a lightness of 100, so a percentage is already on scale
        ColorFunction::Lab => CIELABColor {
            l: x.value,
            a: y.value,
            b: z.value,
        }.to_rgb(),
        ColorFunction::Lch => CIELCHColor {
            l: x.value,
            c: y.value,
            h: z.value,
        }.to_rgb(),
        ColorFunction::Oklab => OklabColor {
            l: x.unit_or_raw(),
            a: y.value,
            b: z.value,
        }.to_rgb(),
        ColorFunction::Oklch => OklchColor {
            l: x.unit_or_raw(),
            c: y.value,
            h: z.value,
        }.to_rgb(),
    }
}

/// Parses the arguments of a color function, returning `None` if there are fewer than three.
fn parse_function(function: ColorFunction, input: &str) -> Option<RGBColor> {
    let args = scan_css_numbers(input, 4);
    trace!(function = ?function, count = args.len(), "scanned color function arguments");
    if args.len() < 3 {
        return None;
    }
    let rgb = function_to_rgb(function, &args);
    match args.get(3) {
        Some(alpha) if function != ColorFunction::Rgb => {
            Some(rgb.alpha(clamp_channel(alpha.as_alpha())))
        }
        _ => Some(rgb),
    }
}

/// Trims and lowercases a color string the way the parser sees it.
pub fn normalize_input(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Parses any supported color string into a canonical color.
///
/// # Example
/// ```
/// # use vermilion::prelude::*;
/// let color = parse_color("  HSLA(120, 100%, 25%, 0.5) ").unwrap();
/// assert_eq!(color, RGBColor::with_alpha(0, 128, 0, 128));
/// assert_eq!(
///     parse_color("notacolor").unwrap_err().to_string(),
///     "could not parse color: notacolor"
/// );
/// ```
pub fn parse_color(input: &str) -> Result<RGBColor, ColorParseError> {
    let normalized = normalize_input(input);
    let parsed = classify(&normalized).and_then(|syntax| {
        debug!(syntax = ?syntax, input = %normalized, "classified color input");
        match syntax {
            ColorSyntax::Hex => {
                let digits = if normalized.starts_with('#') {
                    &normalized[1..]
                } else {
                    &normalized[..]
                };
                parse_hex(digits)
            }
            ColorSyntax::Function(function) => parse_function(function, &normalized),
            ColorSyntax::Named => named_color(&normalized),
        }
    });
    parsed.ok_or_else(|| {
        debug!(input = %input, "could not parse color");
        ColorParseError::UnparsableInput(input.to_string())
    })
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    fn parse(s: &str) -> RGBColor {
        parse_color(s).unwrap()
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("#fff"), Some(ColorSyntax::Hex));
        assert_eq!(classify("#zz"), Some(ColorSyntax::Hex));
        assert_eq!(classify("c0ffee"), Some(ColorSyntax::Hex));
        assert_eq!(classify("rgba(1,2,3,4)"), Some(ColorSyntax::Function(ColorFunction::Rgba)));
        assert_eq!(classify("rgb(1,2,3)"), Some(ColorSyntax::Function(ColorFunction::Rgb)));
        assert_eq!(classify("hsla(1,2%,3%,.4)"), Some(ColorSyntax::Function(ColorFunction::Hsl)));
        assert_eq!(classify("oklab(0.5 0 0)"), Some(ColorSyntax::Function(ColorFunction::Oklab)));
        assert_eq!(classify("oklch(0.5 0 0)"), Some(ColorSyntax::Function(ColorFunction::Oklch)));
        assert_eq!(classify("lab(50 0 0)"), Some(ColorSyntax::Function(ColorFunction::Lab)));
        assert_eq!(classify("lch(50 0 0)"), Some(ColorSyntax::Function(ColorFunction::Lch)));
        assert_eq!(classify("grey"), Some(ColorSyntax::Named));
        assert_eq!(classify("notacolor"), None);
        // five hex digits is not a hex color length
        assert_eq!(classify("c0ffe"), None);
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(parse("#FF5733"), RGBColor::opaque(255, 87, 51));
        assert_eq!(parse("#f53"), RGBColor::opaque(255, 85, 51));
        assert_eq!(parse("#f538"), RGBColor::with_alpha(255, 85, 51, 136));
        assert_eq!(parse("#79589F99"), RGBColor::with_alpha(121, 88, 159, 153));
        assert_eq!(parse("c0ffee"), RGBColor::opaque(192, 255, 238));
        assert!(!parse("#FF5733").has_alpha);
        assert!(parse("#79589F99").has_alpha);
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#ggg").is_err());
        assert!(parse_color("#").is_err());
        assert_eq!(parse_hex("C0FFEE"), parse_hex("c0ffee"));
    }

    #[test]
    fn test_rgb_parsing() {
        assert_eq!(parse("rgb(255, 87, 51)"), RGBColor::opaque(255, 87, 51));
        assert_eq!(parse("rgb(255 87 51)"), RGBColor::opaque(255, 87, 51));
        assert_eq!(parse("rgb(100%, 50%, 0%)"), RGBColor::opaque(255, 128, 0));
        // clamping in every direction
        assert_eq!(parse("rgb(-20, 300, 12.4)"), RGBColor::opaque(0, 255, 12));
        // rgb never takes alpha
        let no_alpha = parse("rgb(1, 2, 3, 0.5)");
        assert_eq!(no_alpha, RGBColor::opaque(1, 2, 3));
    }

    #[test]
    fn test_rgba_alpha_forms() {
        assert_eq!(parse("rgba(0,0,0,0.5)").a, 128);
        assert_eq!(parse("rgba(0,0,0,128)").a, 128);
        assert_eq!(parse("rgba(0, 0, 0, 1)").a, 255);
        assert_eq!(parse("rgba(0 0 0 / 25%)").a, 64);
        assert_eq!(parse("rgba(0, 0, 0, 400)").a, 255);
        assert!(parse("rgba(0,0,0,0)").has_alpha);
        // three numbers is a plain opaque color
        let opaque = parse("rgba(10, 20, 30)");
        assert_eq!(opaque, RGBColor::opaque(10, 20, 30));
    }

    #[test]
    fn test_too_few_numbers_fail() {
        for s in &["rgb(1,2)", "rgba(1)", "hsl(120)", "hwb()", "lab(50 20)", "lch", "oklab(1)", "oklch(0.5, 0.1)"] {
            let err = parse_color(s).unwrap_err();
            assert_eq!(err, ColorParseError::UnparsableInput(s.to_string()));
        }
    }

    #[test]
    fn test_hsl_parsing() {
        assert_eq!(parse("hsl(0, 100%, 50%)"), RGBColor::opaque(255, 0, 0));
        assert_eq!(parse("hsl(120deg 100% 25%)"), RGBColor::opaque(0, 128, 0));
        // hue wraps in both directions
        assert_eq!(parse("hsl(480, 100%, 50%)"), parse("hsl(120, 100%, 50%)"));
        assert_eq!(parse("hsl(-120, 100%, 50%)"), parse("hsl(240, 100%, 50%)"));
        let translucent = parse("hsla(240, 100%, 50%, 0.2)");
        assert_eq!(translucent, RGBColor::with_alpha(0, 0, 255, 51));
        // four numbers after plain hsl still carry alpha
        assert!(parse("hsl(240 100% 50% / 0.2)").has_alpha);
    }

    #[test]
    fn test_hwb_parsing() {
        assert_eq!(parse("hwb(0 0% 0%)"), RGBColor::opaque(255, 0, 0));
        assert_eq!(parse("hwb(120 40% 0%)"), RGBColor::opaque(102, 255, 102));
        assert_eq!(parse("hwb(90 70% 70%)"), RGBColor::opaque(128, 128, 128));
        assert_eq!(parse("hwb(0 0% 0% / 0.5)").a, 128);
    }

    #[test]
    fn test_lab_lch_parsing() {
        assert_eq!(parse("lab(53.24 80.09 67.2)"), RGBColor::opaque(255, 0, 0));
        assert_eq!(parse("lab(100 0 0)"), RGBColor::opaque(255, 255, 255));
        assert_eq!(parse("lab(0 0 0 / 0.5)"), RGBColor::with_alpha(0, 0, 0, 128));
        assert_eq!(parse("lch(32.3 133.81 306.29)"), RGBColor::opaque(0, 0, 255));
        // a negative opponent axis
        let green = parse("lab(46.23 -51.7 49.9)");
        assert_eq!(green, RGBColor::opaque(0, 128, 0));
    }

    #[test]
    fn test_lab_lch_lightness_percent_is_unscaled() {
        // 100% lightness is 100 in CIELAB, so a percentage is used as written
        assert_eq!(parse("lab(50% 0 0)"), parse("lab(50 0 0)"));
        assert_eq!(parse("lab(50% 0 0)"), RGBColor::opaque(119, 119, 119));
        assert_eq!(parse("lch(50% 30 120)"), parse("lch(50 30 120)"));
        assert_eq!(parse("lab(100% 0 0)"), RGBColor::opaque(255, 255, 255));
    }

    #[test]
    fn test_oklab_oklch_parsing() {
        assert_eq!(parse("oklab(0.628 0.2249 0.1258)"), RGBColor::opaque(255, 0, 0));
        assert_eq!(parse("oklab(62.8% 0.2249 0.1258)"), RGBColor::opaque(255, 0, 0));
        assert_eq!(parse("oklch(1 0 0)"), RGBColor::opaque(255, 255, 255));
        assert_eq!(parse("oklch(0.8664 0.2948 142.5 / 0.5)"), RGBColor::with_alpha(0, 255, 0, 128));
    }

    #[test]
    fn test_named_parsing() {
        assert_eq!(parse("Red"), RGBColor::opaque(255, 0, 0));
        assert_eq!(parse(" transparent "), RGBColor::with_alpha(0, 0, 0, 0));
        assert_eq!(parse("GREY"), parse("gray"));
    }

    #[test]
    fn test_error_carries_input() {
        let err = parse_color("notacolor").unwrap_err();
        assert_eq!(err.input(), "notacolor");
        assert_eq!(err.to_string(), "could not parse color: notacolor");
        assert!(parse_color("").is_err());
        assert!(parse_color("   ").is_err());
    }
}
