//! This module simply brings the most common Vermilion functionality under a single namespace, to
//! prevent excessive imports. The prelude includes the [`ColorSpace`] trait, the canonical
//! [`RGBColor`], parsing and analysis with their error type, and the report types. The individual
//! color spaces in the [`colors`] module are not included.
//!
//! [`ColorSpace`]: ../color/trait.ColorSpace.html
//! [`RGBColor`]: ../color/struct.RGBColor.html
//! [`colors`]: ../colors/index.html

pub use accessibility::{AccessibilityResult, TextColor};
pub use analyze_color;
pub use color::{ColorSpace, RGBColor};
pub use csscolor::{parse_color, ColorParseError};
pub use report::ColorReport;
