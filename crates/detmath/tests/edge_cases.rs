//! Edge case tests
//!
//! NaN and infinity propagation, domain policies of the inverse hyperbolic
//! functions, and the platform-mode behavior of `atan2`.

use detmath::{acos, acosh, asin, asinh, atan, atanh, cos, sin, tan, vec3};

#[test]
fn test_nan_propagates() {
    let nan = f32::NAN;
    assert!(sin(nan).is_nan());
    assert!(cos(nan).is_nan());
    assert!(tan(nan).is_nan());
    assert!(asin(nan).is_nan());
    assert!(acos(nan).is_nan());
    assert!(atan(nan).is_nan());
    assert!(asinh(nan).is_nan());
    assert!(acosh(nan).is_nan());
    assert!(atanh(nan).is_nan());
}

#[test]
fn test_asin_acos_outside_domain() {
    assert!(asin(1.5f32).is_nan());
    assert!(acos(-1.01f64).is_nan());
}

#[test]
fn test_atan_at_infinity() {
    let limit = atan(f32::INFINITY);
    assert!((limit - core::f32::consts::FRAC_PI_2).abs() < 1e-6);
    assert!((atan(f32::NEG_INFINITY) + limit).abs() < 1e-6);
}

#[test]
fn test_acosh_below_one_is_zero() {
    assert_eq!(acosh(0.5f32), 0.0);
    assert_eq!(acosh(0.0f64), 0.0);
    assert_eq!(acosh(-10.0f32), 0.0);
    assert_eq!(acosh(1.0f32), 0.0);
    assert!(acosh(1.0001f32) > 0.0);
}

#[test]
fn test_atanh_outside_open_unit_interval_is_zero() {
    assert_eq!(atanh(1.5f32), 0.0);
    assert_eq!(atanh(1.0f64), 0.0);
    assert_eq!(atanh(-1.0f32), 0.0);
    assert_eq!(atanh(-7.0f64), 0.0);
    assert!(atanh(0.9999f64) > 4.0);
}

#[test]
fn test_domain_policy_per_component() {
    let a = acosh(vec3(0.5f32, 1.0, 2.0));
    assert_eq!(a[0], 0.0);
    assert_eq!(a[1], 0.0);
    assert!((a[2] - libm::acoshf(2.0)).abs() < 1e-6);
}

#[test]
fn test_asinh_zero_and_sign() {
    assert_eq!(asinh(0.0f32), 0.0);
    assert_eq!(asinh(-0.0f64), 0.0);
    assert!(asinh(-3.0f32) < 0.0);
}

#[test]
fn test_zero_inputs() {
    assert_eq!(atan(0.0f32), 0.0);
    assert_eq!(asin(0.0f32), 0.0);
    assert_eq!(tan(0.0f64), 0.0);
}

#[cfg(not(feature = "deterministic"))]
mod platform {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};
    use detmath::atan2;

    #[test]
    fn test_flag_is_clear() {
        assert!(!detmath::DETERMINISTIC);
    }

    #[test]
    fn test_atan2_full_range() {
        assert!((atan2(1.0f64, -1.0) - 3.0 * PI / 4.0).abs() < 1e-15);
        assert!((atan2(-1.0f64, -1.0) + 3.0 * PI / 4.0).abs() < 1e-15);
        assert_eq!(atan2(0.0f64, -1.0), PI);
    }

    #[test]
    fn test_atan2_zero_denominator() {
        assert_eq!(atan2(1.0f64, 0.0), FRAC_PI_2);
        assert_eq!(atan2(-1.0f64, 0.0), -FRAC_PI_2);
        assert_eq!(atan2(0.0f64, 0.0), 0.0);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_matches_std() {
        for i in -100..=100 {
            let x = i as f64 * 0.173;
            assert_eq!(sin(x).to_bits(), x.sin().to_bits());
            assert_eq!(cos(x).to_bits(), x.cos().to_bits());
        }
    }
}
