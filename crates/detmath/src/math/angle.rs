//! Angle unit conversion

use crate::scalar;
use crate::traits::FloatVector;

/// Convert degrees to radians, component-wise
///
/// # Example
///
/// ```rust
/// use detmath::{radians, vec2};
///
/// let r = radians(vec2(180.0f64, -90.0));
/// assert!((r[0] - core::f64::consts::PI).abs() < 1e-15);
/// assert!((r[1] + core::f64::consts::FRAC_PI_2).abs() < 1e-15);
/// ```
#[inline(always)]
pub fn radians<V: FloatVector>(degrees: V) -> V {
    degrees.map(scalar::radians)
}

/// Convert radians to degrees, component-wise
#[inline(always)]
pub fn degrees<V: FloatVector>(radians: V) -> V {
    radians.map(scalar::degrees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::vec4;

    #[test]
    fn test_round_trip_within_few_ulps() {
        for i in -360..=360 {
            let d = i as f64 * 1.25;
            let back = degrees(radians(d));
            assert!((back - d).abs() <= 4.0 * f64::EPSILON * d.abs().max(1.0));
        }
    }

    #[test]
    fn test_vector_matches_scalar() {
        let v = vec4(0.0f32, 45.0, -30.0, 720.0);
        let r = radians(v);
        for i in 0..4 {
            assert_eq!(r[i].to_bits(), radians(v[i]).to_bits());
        }
    }
}
