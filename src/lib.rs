//! Vermilion is a library for answering one question about a color string: what is this color, in
//! every notation someone might want? Give it a hex code, a CSS functional notation like
//! `hsl(210 50% 40% / 0.7)` or `oklch(0.7 0.1 150)`, or a basic color keyword, and it parses the
//! string into a single canonical 8-bit sRGB color. From there it projects the color into HSL, HSV,
//! HWB, CMYK, CIELAB, CIELCH, Oklab, Oklch and the xterm 256-color palette, and works out which of
//! black or white text reads better on it.
//!
//! The canonical color is always the source of truth. Every other representation is computed from
//! it and never the other way around, so a report can never disagree with itself.
//!
//! # Example
//! ```
//! let report = vermilion::analyze_color("#FF5733").unwrap();
//! assert_eq!(report.formats.rgb_css, "rgb(255, 87, 51)");
//! assert_eq!(report.formats.hsl_css, "hsl(11, 100%, 60%)");
//! assert_eq!(report.formats.ansi256, 203);
//! assert!(!report.has_alpha);
//! assert!(report.formats.hexa.is_none());
//! ```

#![doc(html_root_url = "https://docs.rs/vermilion/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924 with -0.96_924
#![allow(clippy::unreadable_literal)]

extern crate num;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate maplit;
#[macro_use]
extern crate tracing;

#[cfg(test)]
#[macro_use]
extern crate float_cmp;
#[cfg(test)]
extern crate serde_json;

pub mod accessibility;
pub mod ansi;
pub mod color;
pub mod colors;
mod consts;
pub mod coord;
pub mod csscolor;
mod cssnumeric;
pub mod named_colors;
pub mod prelude;
pub mod report;

use csscolor::{normalize_input, parse_color, ColorParseError};
use report::ColorReport;

/// Parses a color string and describes it in every supported format.
///
/// The report's `original_input` is the input trimmed and lowercased. If the string can't be
/// parsed, the error carries it exactly as given.
///
/// # Example
/// ```
/// # use vermilion::analyze_color;
/// let report = analyze_color("  #79589F99 ").unwrap();
/// assert_eq!(report.original_input, "#79589f99");
/// assert!(report.has_alpha);
/// assert_eq!(report.formats.alpha, Some(0.6));
/// assert_eq!(report.formats.rgba_css.as_ref().map(String::as_str), Some("rgba(121, 88, 159, 0.600)"));
///
/// assert!(analyze_color("notacolor").is_err());
/// ```
pub fn analyze_color(input: &str) -> Result<ColorReport, ColorParseError> {
    let rgb = parse_color(input)?;
    debug!(input = %input, color = %rgb, "analyzing color");
    Ok(ColorReport::new(&normalize_input(input), rgb))
}
