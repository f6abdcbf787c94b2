//! This file provides the constants used for matrix multiplication and color space conversion, along
//! with the thresholds that the piecewise transfer functions switch on. Everything here is plain
//! data: the transforms themselves live with the color space that uses them. Matrices are stored
//! row-major, so that `mat_mul(M, v)[i]` is the dot product of row `i` with `v`.

/// A 3x3 row-major matrix.
pub type Mat3 = [[f64; 3]; 3];

/// Multiplies a 3x3 matrix by a column vector.
pub fn mat_mul(m: &Mat3, v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Linear sRGB to CIE 1931 XYZ, D65 reference white.
pub const SRGB_TO_XYZ: Mat3 = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// CIE 1931 XYZ (D65) back to linear sRGB. Values outside [0, 1] are out of gamut.
pub const XYZ_TO_SRGB: Mat3 = [
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
];

/// The D65 white point, normalized so that Y (luminance) is 100.
pub const D65_WHITE: [f64; 3] = [95.047, 100.000, 108.883];

/// Below this, CIELAB's f(t) is the linear segment instead of the cube root. Roughly (6/29)^3.
pub const LAB_EPSILON: f64 = 0.008856;
/// Slope of CIELAB's linear segment. Roughly (29/6)^2 / 3.
pub const LAB_KAPPA: f64 = 7.787;
/// The value of f(t) at `LAB_EPSILON`: the inverse switches from cubing to linear below this.
pub const LAB_F_EPSILON: f64 = 0.206893;

/// Linear sRGB to Oklab's approximate cone responses.
pub const SRGB_TO_LMS: Mat3 = [
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
];

/// Cube-rooted cone responses to Oklab.
pub const LMS_TO_OKLAB: Mat3 = [
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
];

/// Oklab back to cube-rooted cone responses.
pub const OKLAB_TO_LMS: Mat3 = [
    [1.0, 0.3963377774, 0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
];

/// Cone responses back to linear sRGB.
pub const LMS_TO_SRGB: Mat3 = [
    [4.0767416621, -3.3077115913, 0.2309699292],
    [-1.2684380046, 2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147, 1.7076147010],
];

/// Rec. 709 luma weights, applied to gamma-encoded channels for the simplified relative luminance.
pub const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// WCAG 2 level AA minimum contrast for body text.
pub const WCAG_AA_CONTRAST: f64 = 4.5;
