//! Domain reduction for the deterministic kernels
//!
//! Every deterministic kernel starts from [`wrap_angle`], which folds an
//! arbitrary angle into `[0, 2π)`, and then classifies the result by
//! [`Quadrant`] (cosine) or octant (tangent).

use crate::traits::Float;

/// Fold `angle` into `[0, 2π)`
///
/// Takes the floored modulo by the largest float strictly below 2π, so a
/// wrapped value can never round up to exactly 2π, then takes the absolute
/// value of the remainder.
///
/// # Example
///
/// ```rust
/// use detmath::kernels::wrap_angle;
///
/// let r = wrap_angle(-core::f32::consts::FRAC_PI_2);
/// assert!((r - 3.0 * core::f32::consts::FRAC_PI_2).abs() < 1e-6);
/// ```
#[inline(always)]
pub fn wrap_angle<T: Float>(angle: T) -> T {
    let before_two_pi = T::TWO_PI.next_toward_zero();
    angle.modulo(before_two_pi).abs()
}

/// Quarter of the circle a wrapped angle falls in
///
/// Intervals are half-open: a value exactly on π/2, π or 3π/2 belongs to the
/// quadrant that starts there.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Quadrant {
    /// `[0, π/2)`
    First,
    /// `[π/2, π)`
    Second,
    /// `[π, 3π/2)`
    Third,
    /// `[3π/2, 2π)`
    Fourth,
}

impl Quadrant {
    /// Classify an angle already wrapped into `[0, 2π)`
    #[inline(always)]
    pub fn of<T: Float>(wrapped: T) -> Self {
        if wrapped < T::HALF_PI {
            Quadrant::First
        } else if wrapped < T::PI {
            Quadrant::Second
        } else if wrapped < T::THREE_OVER_TWO_PI {
            Quadrant::Third
        } else {
            Quadrant::Fourth
        }
    }
}

/// Octant index `floor(wrapped / (π/4))` of an angle wrapped into `[0, 2π)`
///
/// The result is in `0..8` whenever `wrapped` came out of [`wrap_angle`].
/// Anything else means the wrap invariant was broken upstream: debug builds
/// assert, release builds clamp to the last octant.
#[inline(always)]
pub fn octant<T: Float>(wrapped: T) -> usize {
    let index = (wrapped / T::QUARTER_PI).to_index();
    debug_assert!(
        index < 8,
        "wrapped angle {:?} produced octant {}",
        wrapped,
        index
    );
    index.min(7)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

    #[test]
    fn test_wrap_angle_identity_inside_range() {
        for &x in &[0.0f32, 0.5, 1.0, 3.0, 6.0] {
            assert_eq!(wrap_angle(x), x);
        }
    }

    #[test]
    fn test_wrap_angle_never_reaches_two_pi() {
        for &x in &[TAU, -TAU, 2.0 * TAU, -1e-9f32, -f32::MIN_POSITIVE, 1000.0, -1000.0] {
            let r = wrap_angle(x);
            assert!((0.0..TAU).contains(&r), "wrap_angle({}) = {}", x, r);
        }
        for &x in &[core::f64::consts::TAU, -1e-300f64, 1e6, -1e6] {
            let r = wrap_angle(x);
            assert!((0.0..core::f64::consts::TAU).contains(&r), "wrap_angle({}) = {}", x, r);
        }
    }

    #[test]
    fn test_wrap_angle_negative_maps_to_complement() {
        let r = wrap_angle(-1.0f64);
        let expected = core::f64::consts::TAU.next_toward_zero() - 1.0;
        assert!((r - expected).abs() < 1e-12);
    }

    #[test]
    fn test_quadrant_boundaries_are_half_open() {
        assert_eq!(Quadrant::of(0.0f32), Quadrant::First);
        assert_eq!(Quadrant::of(FRAC_PI_2.next_toward_zero()), Quadrant::First);
        assert_eq!(Quadrant::of(FRAC_PI_2), Quadrant::Second);
        assert_eq!(Quadrant::of(PI), Quadrant::Third);
        assert_eq!(Quadrant::of(3.0 * FRAC_PI_2), Quadrant::Fourth);
        assert_eq!(Quadrant::of(TAU.next_toward_zero()), Quadrant::Fourth);
    }

    #[test]
    fn test_octant_covers_all_eight() {
        for k in 0..8 {
            let mid = (k as f32 + 0.5) * FRAC_PI_4;
            assert_eq!(octant(wrap_angle(mid)), k);
        }
        assert_eq!(octant(TAU.next_toward_zero()), 7);
        assert_eq!(octant(core::f64::consts::TAU.next_toward_zero()), 7);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "produced octant 8")]
    fn test_octant_past_wrap_range_asserts() {
        // 2π itself is outside what wrap_angle can return.
        let _ = octant(TAU);
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn test_octant_past_wrap_range_clamps() {
        assert_eq!(octant(TAU), 7);
        assert_eq!(octant(100.0f64), 7);
    }
}
