//! This module contains various modules that implement types that implement [`ColorSpace`]. For
//! convenience, each main type is imported into this module's namespace directly.
//!
//! [`ColorSpace`]: ../color/trait.ColorSpace.html
pub mod cielabcolor;
pub mod cielchcolor;
pub mod cmykcolor;
pub mod hslcolor;
pub mod hsvcolor;
pub mod hwbcolor;
pub mod oklabcolor;
pub mod oklchcolor;
pub mod xyzcolor;

// for convenience, use this namespace for the color objects
pub use self::cielabcolor::CIELABColor;
pub use self::cielchcolor::CIELCHColor;
pub use self::cmykcolor::CMYKColor;
pub use self::hslcolor::HSLColor;
pub use self::hsvcolor::HSVColor;
pub use self::hwbcolor::HWBColor;
pub use self::oklabcolor::OklabColor;
pub use self::oklchcolor::OklchColor;
pub use self::xyzcolor::XYZColor;
