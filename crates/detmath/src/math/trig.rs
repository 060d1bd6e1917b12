//! Sine, cosine and tangent
//!
//! In the default build these are the platform functions. With the
//! `deterministic` feature they are the minimax kernels, which trade accuracy
//! (about 2e-5 absolute for `sin`/`cos`) for identical bits on every target.

use crate::scalar;
use crate::traits::FloatVector;

/// Cosine, component-wise
///
/// # Example
///
/// ```rust
/// use detmath::{cos, vec2};
///
/// let c = cos(vec2(0.0f32, core::f32::consts::PI));
/// assert!((c[0] - 1.0).abs() < 1e-4);
/// assert!((c[1] + 1.0).abs() < 1e-4);
/// ```
#[inline(always)]
pub fn cos<V: FloatVector>(angle: V) -> V {
    angle.map(scalar::cos)
}

/// Sine, component-wise
#[inline(always)]
pub fn sin<V: FloatVector>(angle: V) -> V {
    angle.map(scalar::sin)
}

/// Tangent, component-wise
///
/// Unbounded near odd multiples of π/2.
#[inline(always)]
pub fn tan<V: FloatVector>(angle: V) -> V {
    angle.map(scalar::tan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{vec3, Vec3};

    #[test]
    fn test_pythagorean_identity() {
        for i in -500..=500 {
            let x = i as f32 * 0.0173;
            let s = sin(x);
            let c = cos(x);
            assert!((s * s + c * c - 1.0).abs() < 1e-4, "x = {}", x);
        }
    }

    #[test]
    fn test_vector_matches_scalar() {
        let v: Vec3<f64> = vec3(-2.5, 0.3, 7.0);
        let (s, c, t) = (sin(v), cos(v), tan(v));
        for i in 0..3 {
            assert_eq!(s[i].to_bits(), sin(v[i]).to_bits());
            assert_eq!(c[i].to_bits(), cos(v[i]).to_bits());
            assert_eq!(t[i].to_bits(), tan(v[i]).to_bits());
        }
    }

    #[test]
    fn test_tan_is_sin_over_cos() {
        for &x in &[0.1f32, 0.7, -1.2, 2.0] {
            let ratio = sin(x) / cos(x);
            assert!((tan(x) - ratio).abs() / ratio.abs().max(1.0) < 2e-4, "x = {}", x);
        }
    }
}
