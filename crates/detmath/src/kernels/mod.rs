//! Deterministic trigonometric kernels
//!
//! Bit-reproducible replacements for the platform cos/sin/tan/asin/acos/atan.
//! They only use `+ - * /`, comparisons, `sqrt` and the exact IEEE remainder,
//! all of which are correctly rounded, so the same input produces the same
//! bits regardless of compiler, libm or target.
//!
//! The public functions in [`crate::math`] dispatch here when the crate is
//! built with the `deterministic` feature.
//!
//! # Structure
//!
//! - [`reduce`]: angle wrapping and quadrant/octant classification
//! - [`minimax`]: the three fixed-coefficient approximations
//! - [`lifted`]: component-wise forms of the above for vectors
//! - this module: the composed scalar functions
//!
//! # Error Bounds (f32, vs correctly rounded reference)
//!
//! | function | range | max abs error |
//! |---|---|---|
//! | `cos`, `sin` | `[-100, 100]` | 2e-5 |
//! | `tan` | `[-1.4, 1.4]` | 1e-4 |
//! | `atan` | all finite | 2e-7 |
//! | `asin`, `acos` | `[-1, 1]` | 2e-6 |

pub mod lifted;
pub mod minimax;
pub mod reduce;

pub use self::minimax::{atan_66s, cos_52s, tan_56s};
pub use self::reduce::{octant, wrap_angle, Quadrant};

use crate::traits::Float;

/// Deterministic cosine
///
/// Wraps into `[0, 2π)` and folds each quadrant onto [`cos_52s`].
#[inline]
pub fn cos<T: Float>(angle: T) -> T {
    let r = wrap_angle(angle);
    match Quadrant::of(r) {
        Quadrant::First => cos_52s(r),
        Quadrant::Second => -cos_52s(T::PI - r),
        Quadrant::Third => -cos_52s(r - T::PI),
        Quadrant::Fourth => cos_52s(T::TWO_PI - r),
    }
}

/// Deterministic sine, `cos(π/2 - angle)`
#[inline]
pub fn sin<T: Float>(angle: T) -> T {
    cos(T::HALF_PI - angle)
}

/// Deterministic tangent
///
/// Wraps into `[0, 2π)` and maps each octant onto [`tan_56s`] evaluated on
/// `[0, 1]`, using reciprocals for the octants adjacent to the poles.
#[inline]
pub fn tan<T: Float>(angle: T) -> T {
    let r = wrap_angle(angle);
    let k = T::FOUR_OVER_PI;
    match octant(r) {
        0 => tan_56s(r * k),
        1 => T::ONE / tan_56s((T::HALF_PI - r) * k),
        2 => -T::ONE / tan_56s((r - T::HALF_PI) * k),
        3 => -tan_56s((T::PI - r) * k),
        4 => tan_56s((r - T::PI) * k),
        5 => T::ONE / tan_56s((T::THREE_OVER_TWO_PI - r) * k),
        6 => -T::ONE / tan_56s((r - T::THREE_OVER_TWO_PI) * k),
        _ => -tan_56s((T::TWO_PI - r) * k),
    }
}

/// Deterministic arctangent
///
/// Reduces `x` into `[-tan(π/12), tan(π/12)]` with up to three transforms
/// (sign, reciprocal, shift by π/6), evaluates [`atan_66s`] and undoes the
/// transforms in reverse order.
#[inline]
pub fn atan<T: Float>(x: T) -> T {
    let mut result = x;

    let sign = result < T::ZERO;
    if sign {
        result = -result;
    }

    let complement = result > T::ONE;
    if complement {
        result = T::ONE / result;
    }

    let region = result > T::TAN_TWELFTH_PI;
    if region {
        result = (result - T::TAN_SIXTH_PI) / (T::ONE + T::TAN_SIXTH_PI * result);
    }

    result = atan_66s(result);

    if region {
        result = result + T::SIXTH_PI;
    }
    if complement {
        result = T::HALF_PI - result;
    }
    if sign {
        result = -result;
    }
    result
}

/// Deterministic two-argument arctangent, `|atan(y / x)| · sign(y) · sign(x)`
///
/// This is not a full `atan2`: the result stays in `[-π/2, π/2]` (no ±π
/// branch for negative `x`) and `x = 0` gets no special case, so
/// `atan2(y, 0)` is `±0` for `y ≠ 0` and NaN for `y = 0`.
#[inline]
pub fn atan2<T: Float>(y: T, x: T) -> T {
    let sgn = y.sign() * x.sign();
    atan(y / x).abs() * sgn
}

/// Deterministic arcsine, `atan(x / sqrt(1 - x²))`
#[inline]
pub fn asin<T: Float>(x: T) -> T {
    atan(x / (T::ONE - x * x).sqrt())
}

/// Deterministic arccosine, `π/2 - asin(x)`
#[inline]
pub fn acos<T: Float>(x: T) -> T {
    T::HALF_PI - asin(x)
}
