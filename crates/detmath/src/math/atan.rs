//! Inverse trigonometric functions

use crate::scalar;
use crate::traits::FloatVector;

/// Arcsine, component-wise. Inputs outside `[-1, 1]` give NaN.
#[inline(always)]
pub fn asin<V: FloatVector>(x: V) -> V {
    x.map(scalar::asin)
}

/// Arccosine, component-wise. Inputs outside `[-1, 1]` give NaN.
#[inline(always)]
pub fn acos<V: FloatVector>(x: V) -> V {
    x.map(scalar::acos)
}

/// Arctangent, component-wise, in `[-π/2, π/2]`
#[inline(always)]
pub fn atan<V: FloatVector>(x: V) -> V {
    x.map(scalar::atan)
}

/// Two-argument arctangent of `y / x`, pairing components positionally
///
/// With the `deterministic` feature the result is
/// `|atan(y / x)| · sign(y) · sign(x)`, which stays in `[-π/2, π/2]` and
/// does not special-case `x = 0`. Use [`crate::DETERMINISTIC`] to check which
/// behavior is compiled in.
///
/// # Example
///
/// ```rust
/// use detmath::{atan2, vec2};
///
/// let a = atan2(vec2(1.0f32, -1.0), vec2(1.0, 1.0));
/// assert!((a[0] - core::f32::consts::FRAC_PI_4).abs() < 1e-6);
/// assert!((a[1] + core::f32::consts::FRAC_PI_4).abs() < 1e-6);
/// ```
#[inline(always)]
pub fn atan2<V: FloatVector>(y: V, x: V) -> V {
    y.zip_map(x, scalar::atan2)
}
