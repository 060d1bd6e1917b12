//! Property-based tests for detmath
//!
//! Uses proptest to check identities that hold for both kernel families, with
//! tolerances wide enough for the deterministic approximations.

use detmath::{acos, asin, atan, atan2, cos, degrees, radians, sin, tan};
use proptest::prelude::*;


#[cfg(test)]
use test_utils::*;

use proptest::test_runner::Config as ProptestConfig;

fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 10_000,
        ..ProptestConfig::default()
    }
}

/// Property: sin² + cos² = 1
#[test]
fn test_pythagorean_identity() {
    proptest!(proptest_config(), |(x in angle_f32())| {
        let s = sin(x);
        let c = cos(x);
        prop_assert!((s * s + c * c - 1.0).abs() < 1e-4, "x = {}", x);
    });
}

/// Property: sin is odd, cos is even
#[test]
fn test_symmetry() {
    proptest!(proptest_config(), |(x in angle_f32())| {
        prop_assert!((sin(-x) + sin(x)).abs() < 5e-5, "sin not odd at {}", x);
        prop_assert!((cos(-x) - cos(x)).abs() < 5e-5, "cos not even at {}", x);
    });
}

/// Property: shifting by a full turn leaves sin and cos unchanged
#[test]
fn test_periodicity() {
    proptest!(proptest_config(), |(x in -10.0f32..=10.0f32)| {
        let shifted = x + core::f32::consts::TAU;
        prop_assert!((sin(shifted) - sin(x)).abs() < 5e-5, "sin at {}", x);
        prop_assert!((cos(shifted) - cos(x)).abs() < 5e-5, "cos at {}", x);
    });
}

/// Property: degrees and radians invert each other within a few ULP
#[test]
fn test_angle_conversion_inverse() {
    proptest!(proptest_config(), |(x in normal_f32())| {
        prop_assert!(ulp_distance(degrees(radians(x)), x) <= 4);
        prop_assert!(ulp_distance(radians(degrees(x)), x) <= 4);
    });
}

/// Property: atan(tan(x)) = x away from the poles
#[test]
fn test_atan_inverts_tan() {
    proptest!(proptest_config(), |(x in open_half_turn_f32())| {
        prop_assert!((atan(tan(x)) - x).abs() < 2e-5, "x = {}", x);
    });
}

/// Property: asin(sin(x)) = x and acos(cos(x)) = x on their principal ranges
///
/// The ranges stop short of ±π/2 and 0/π where the inverse slopes blow up
/// and any error in sin/cos is amplified.
#[test]
fn test_asin_acos_invert_sin_cos() {
    proptest!(proptest_config(), |(x in -1.4f32..=1.4f32, y in 0.2f32..=2.9f32)| {
        prop_assert!((asin(sin(x)) - x).abs() < 1e-4, "asin(sin({}))", x);
        prop_assert!((acos(cos(y)) - y).abs() < 1e-4, "acos(cos({}))", y);
    });
}

/// Property: asin(x) + acos(x) = π/2
#[test]
fn test_asin_acos_complementary() {
    proptest!(proptest_config(), |(x in unit_f32())| {
        let sum = asin(x) + acos(x);
        prop_assert!((sum - core::f32::consts::FRAC_PI_2).abs() < 1e-6, "x = {}", x);
    });
}

/// Property: atan2 for positive x equals atan(y / x)
#[test]
fn test_atan2_matches_atan_of_ratio() {
    proptest!(proptest_config(), |(y in normal_f32(), x in 0.01f32..=1000.0f32)| {
        let expected = atan(y / x);
        prop_assert!((atan2(y, x) - expected).abs() < 1e-6, "atan2({}, {})", y, x);
    });
}
