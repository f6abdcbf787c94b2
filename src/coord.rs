//! This module contains a struct, [`Coord`](coord::Coord), that models a point in a 3D color space,
//! along with the conversion between the rectangular form of an opponent-axis space (CIELAB, Oklab)
//! and its cylindrical form (CIELCH, Oklch). Both pairs use the exact same polar math, so it lives
//! here once instead of in each color space.

/// A point in 3D space.
/// `Coord` has three axes, denoted `x`, `y`, and `z`. In Vermilion, any [`ColorSpace`] that converts to
/// and from a `Coord` will match its components with these axes in the order of the letters in its
/// name: for example, `CIELABColor` maps to a coordinate such that `l` is on the x-axis, `a` is on
/// the y-axis, and `b` is on the z-axis.
///
/// [`ColorSpace`]: ../color/trait.ColorSpace.html
///
/// # Example
/// ```
/// # use vermilion::coord::Coord;
/// let lab = Coord{x: 50., y: 0., z: 20.};
/// let lch = lab.to_polar();
/// assert!((lch.y - 20.).abs() <= 1e-10);
/// assert!((lch.z - 90.).abs() <= 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Coord {
    /// Treats `y` and `z` as rectangular opponent axes and returns the same point with `y` as the
    /// radius (chroma) and `z` as the angle in degrees, normalized into [0, 360). `x` is untouched.
    pub fn to_polar(&self) -> Coord {
        let chroma = self.y.hypot(self.z);
        let hue = normalize_hue(self.z.atan2(self.y).to_degrees());
        Coord {
            x: self.x,
            y: chroma,
            z: hue,
        }
    }

    /// The inverse of `to_polar`: `y` is a radius and `z` an angle in degrees, of any size.
    pub fn from_polar(&self) -> Coord {
        let (sin, cos) = self.z.to_radians().sin_cos();
        Coord {
            x: self.x,
            y: self.y * cos,
            z: self.y * sin,
        }
    }
}

/// Wraps any angle in degrees into [0, 360). Negative angles wrap around, so -30 becomes 330.
pub fn normalize_hue(hue: f64) -> f64 {
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
