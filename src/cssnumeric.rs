//! This file separates out the lowest layer of color string parsing: pulling numbers out of
//! functional notation like `hsl(210deg 50% 40% / 0.7)`. The scan is deliberately permissive. It
//! finds every decimal number in the string, remembers whether a `%` followed it, and ignores
//! everything in between: commas, spaces, slashes, parentheses and unit suffixes alike. Deciding
//! what those numbers *mean* is left to `csscolor`.

use regex::Regex;

lazy_static! {
    /// An optional leading minus, then either digits with an optional fraction or a bare fraction
    /// like `.5`, then an optional percent sign.
    static ref CSS_NUMBER: Regex = Regex::new(r"-?(?:\d+\.?\d*|\.\d+)%?").unwrap();
}

/// A number pulled out of a color string, such as `-12.5` or `40%`. A percentage keeps its written
/// value: `40%` is stored as `40.0` with `percent` set.
#[derive(Debug, PartialEq, Copy, Clone)]
pub(crate) struct CSSNumeric {
    /// The numeric value as written, without any percent scaling.
    pub value: f64,
    /// Whether the number was immediately followed by `%`.
    pub percent: bool,
}

impl CSSNumeric {
    /// The value on a 0-1 scale if it was a percentage, or as written otherwise.
    pub fn unit_or_raw(&self) -> f64 {
        if self.percent {
            self.value / 100.0
        } else {
            self.value
        }
    }

    /// The value as a percentage, whether or not it was written with a `%`. Used for components
    /// that are always percentages in CSS, like HSL saturation.
    pub fn as_percent(&self) -> f64 {
        self.value
    }

    /// Interprets the number as an alpha channel. Percentages and anything up to 1.0 are fractions
    /// of fully opaque; anything larger is already on the 0-255 scale.
    pub fn as_alpha(&self) -> f64 {
        let v = self.unit_or_raw();
        if self.percent || v <= 1.0 {
            v * 255.0
        } else {
            v
        }
    }
}

/// Parses a single token matched by the scan. Returns `None` if the digits don't form a number,
/// which the regex should never let through.
fn parse_css_number(token: &str) -> Option<CSSNumeric> {
    let (digits, percent) = match token.strip_suffix('%') {
        Some(rest) => (rest, true),
        None => (token, false),
    };
    // "5." is a valid match and parses as 5.0
    digits.parse::<f64>().ok().map(|value| CSSNumeric { value, percent })
}

/// Scans a string for CSS numbers, returning at most `limit` of them in order of appearance.
pub(crate) fn scan_css_numbers(s: &str, limit: usize) -> Vec<CSSNumeric> {
    CSS_NUMBER
        .find_iter(s)
        .filter_map(|m| parse_css_number(m.as_str()))
        .take(limit)
        .collect()
}
