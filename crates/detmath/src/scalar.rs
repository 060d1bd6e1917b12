//! Scalar kernels
//!
//! One function per operation, generic over [`Float`]. These are what the
//! element-wise lift in [`crate::math`] applies to every component, so a
//! vector result is bit-identical to calling these on each component.
//!
//! # Mode Dispatch
//!
//! `cos`, `sin`, `tan`, `asin`, `acos`, `atan` and `atan2` resolve at compile
//! time to either the platform primitive (default) or the fixed-coefficient
//! kernels in `crate::kernels` (`deterministic` feature). Everything else is
//! the same in both modes.
//!
//! # Example
//!
//! ```rust
//! use detmath::scalar;
//!
//! let r = scalar::radians(180.0f64);
//! assert!((r - core::f64::consts::PI).abs() < 1e-15);
//! assert_eq!(scalar::acosh(0.5f32), 0.0);
//! ```

#[cfg(feature = "deterministic")]
use crate::kernels;
use crate::traits::Float;

/// Degrees to radians
#[inline(always)]
pub fn radians<T: Float>(degrees: T) -> T {
    degrees * T::DEG_TO_RAD
}

/// Radians to degrees
#[inline(always)]
pub fn degrees<T: Float>(radians: T) -> T {
    radians * T::RAD_TO_DEG
}

/// Cosine
#[inline(always)]
pub fn cos<T: Float>(angle: T) -> T {
    #[cfg(feature = "deterministic")]
    {
        kernels::cos(angle)
    }
    #[cfg(not(feature = "deterministic"))]
    {
        angle.cos()
    }
}

/// Sine
#[inline(always)]
pub fn sin<T: Float>(angle: T) -> T {
    #[cfg(feature = "deterministic")]
    {
        kernels::sin(angle)
    }
    #[cfg(not(feature = "deterministic"))]
    {
        angle.sin()
    }
}

/// Tangent
#[inline(always)]
pub fn tan<T: Float>(angle: T) -> T {
    #[cfg(feature = "deterministic")]
    {
        kernels::tan(angle)
    }
    #[cfg(not(feature = "deterministic"))]
    {
        angle.tan()
    }
}

/// Arcsine, defined on `[-1, 1]`
#[inline(always)]
pub fn asin<T: Float>(x: T) -> T {
    #[cfg(feature = "deterministic")]
    {
        kernels::asin(x)
    }
    #[cfg(not(feature = "deterministic"))]
    {
        x.asin()
    }
}

/// Arccosine, defined on `[-1, 1]`
#[inline(always)]
pub fn acos<T: Float>(x: T) -> T {
    #[cfg(feature = "deterministic")]
    {
        kernels::acos(x)
    }
    #[cfg(not(feature = "deterministic"))]
    {
        x.acos()
    }
}

/// Arctangent
#[inline(always)]
pub fn atan<T: Float>(x: T) -> T {
    #[cfg(feature = "deterministic")]
    {
        kernels::atan(x)
    }
    #[cfg(not(feature = "deterministic"))]
    {
        x.atan()
    }
}

/// Two-argument arctangent of `y / x`
///
/// The platform version returns the full `(-π, π]` angle. The deterministic
/// one only combines signs and stays in `[-π/2, π/2]`, see
/// `kernels::atan2`.
#[inline(always)]
pub fn atan2<T: Float>(y: T, x: T) -> T {
    #[cfg(feature = "deterministic")]
    {
        kernels::atan2(y, x)
    }
    #[cfg(not(feature = "deterministic"))]
    {
        y.atan2(x)
    }
}

/// Hyperbolic sine
#[inline(always)]
pub fn sinh<T: Float>(x: T) -> T {
    x.sinh()
}

/// Hyperbolic cosine
#[inline(always)]
pub fn cosh<T: Float>(x: T) -> T {
    x.cosh()
}

/// Hyperbolic tangent
#[inline(always)]
pub fn tanh<T: Float>(x: T) -> T {
    x.tanh()
}

/// Inverse hyperbolic sine, `sign(x) · ln(|x| + sqrt(1 + x²))`
#[inline(always)]
pub fn asinh<T: Float>(x: T) -> T {
    x.sign() * (x.abs() + (T::ONE + x * x).sqrt()).ln()
}

/// Inverse hyperbolic cosine
///
/// Returns `0` for `x < 1` instead of NaN. Note that `acosh(1)` is also `0`.
#[inline(always)]
pub fn acosh<T: Float>(x: T) -> T {
    if x < T::ONE {
        return T::ZERO;
    }
    (x + (x * x - T::ONE).sqrt()).ln()
}

/// Inverse hyperbolic tangent
///
/// Returns `0` for `|x| >= 1` instead of ±inf or NaN.
#[inline(always)]
pub fn atanh<T: Float>(x: T) -> T {
    if x.abs() >= T::ONE {
        return T::ZERO;
    }
    T::HALF * ((T::ONE + x) / (T::ONE - x)).ln()
}
