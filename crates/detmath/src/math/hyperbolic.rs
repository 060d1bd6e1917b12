//! Hyperbolic functions and their inverses
//!
//! `sinh`, `cosh` and `tanh` are always the platform functions; the
//! `deterministic` feature does not replace them. The inverses are closed-form
//! logarithms over `sqrt` and `ln`.
//!
//! # Domain Handling
//!
//! `acosh` returns `0` below 1 and `atanh` returns `0` for `|x| >= 1` rather
//! than NaN or infinity. Since `acosh(1) = atanh(0) = 0` as well, a zero result
//! alone does not tell the caller the input was out of domain.
//!
//! ```rust
//! use detmath::{acosh, atanh, vec3};
//!
//! assert_eq!(acosh(vec3(0.5f32, -1.0, 1.0)), vec3(0.0, 0.0, 0.0));
//! assert_eq!(atanh(1.5f64), 0.0);
//! ```

use crate::scalar;
use crate::traits::FloatVector;

/// Hyperbolic sine, component-wise
#[inline(always)]
pub fn sinh<V: FloatVector>(x: V) -> V {
    x.map(scalar::sinh)
}

/// Hyperbolic cosine, component-wise
#[inline(always)]
pub fn cosh<V: FloatVector>(x: V) -> V {
    x.map(scalar::cosh)
}

/// Hyperbolic tangent, component-wise
#[inline(always)]
pub fn tanh<V: FloatVector>(x: V) -> V {
    x.map(scalar::tanh)
}

/// Inverse hyperbolic sine, component-wise
#[inline(always)]
pub fn asinh<V: FloatVector>(x: V) -> V {
    x.map(scalar::asinh)
}

/// Inverse hyperbolic cosine, component-wise (`0` for `x < 1`)
#[inline(always)]
pub fn acosh<V: FloatVector>(x: V) -> V {
    x.map(scalar::acosh)
}

/// Inverse hyperbolic tangent, component-wise (`0` for `|x| >= 1`)
#[inline(always)]
pub fn atanh<V: FloatVector>(x: V) -> V {
    x.map(scalar::atanh)
}
