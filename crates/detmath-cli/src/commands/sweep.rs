//! `detmath sweep`: measure a kernel over a range against libm.

use anyhow::{bail, Result};
use detmath::{kernels, Float};

use super::{Family, Function};

/// Error statistics for one sweep
#[derive(Debug, Clone, PartialEq)]
pub struct SweepReport {
    /// Samples evaluated
    pub samples: usize,
    /// Largest absolute error against the reference
    pub max_abs_error: f64,
    /// Input where `max_abs_error` occurred
    pub max_abs_at: f64,
    /// Largest error in f32 ULPs
    pub max_ulps: u64,
    /// Input where `max_ulps` occurred
    pub max_ulps_at: f64,
    /// Samples where exactly one of result and reference is NaN
    pub nan_mismatches: usize,
}

/// Execute the sweep command.
pub fn execute(
    function: Function,
    family: Family,
    start: Option<f64>,
    end: Option<f64>,
    steps: usize,
    x: f64,
) -> Result<()> {
    let (default_start, default_end) = function.default_range();
    let start = start.unwrap_or(default_start);
    let end = end.unwrap_or(default_end);

    if steps == 0 {
        bail!("--steps must be at least 1");
    }
    if start.is_nan() || end.is_nan() || start >= end {
        bail!("--start ({}) must be below --end ({})", start, end);
    }

    let report = run(function, family, start, end, steps, x);
    print_report(function, family, start, end, x, &report);

    Ok(())
}

/// Evaluate `steps + 1` evenly spaced f32 samples over `[start, end]`.
pub fn run(
    function: Function,
    family: Family,
    start: f64,
    end: f64,
    steps: usize,
    x: f64,
) -> SweepReport {
    let mut report = SweepReport {
        samples: 0,
        max_abs_error: 0.0,
        max_abs_at: start,
        max_ulps: 0,
        max_ulps_at: start,
        nan_mismatches: 0,
    };
    let x = x as f32;

    for i in 0..=steps {
        let a = (start + (end - start) * i as f64 / steps as f64) as f32;
        let actual = evaluate(function, family, a, x);
        let reference = function.reference(a as f64, x as f64);
        report.samples += 1;

        match (actual.is_nan(), reference.is_nan()) {
            (true, true) => continue,
            (true, false) | (false, true) => {
                report.nan_mismatches += 1;
                continue;
            }
            (false, false) => {}
        }

        let abs_error = (actual as f64 - reference).abs();
        if abs_error > report.max_abs_error {
            report.max_abs_error = abs_error;
            report.max_abs_at = a as f64;
        }

        let ulps = ulp_distance(actual, reference as f32);
        if ulps > report.max_ulps {
            report.max_ulps = ulps;
            report.max_ulps_at = a as f64;
        }
    }

    report
}

/// Evaluate one f32 sample with the requested kernel family.
///
/// `b` is only read by atan2. Functions the deterministic feature never
/// replaces evaluate the same way in every family.
pub fn evaluate(function: Function, family: Family, a: f32, b: f32) -> f32 {
    match (family, function) {
        (Family::Deterministic, Function::Cos) => kernels::cos(a),
        (Family::Deterministic, Function::Sin) => kernels::sin(a),
        (Family::Deterministic, Function::Tan) => kernels::tan(a),
        (Family::Deterministic, Function::Asin) => kernels::asin(a),
        (Family::Deterministic, Function::Acos) => kernels::acos(a),
        (Family::Deterministic, Function::Atan) => kernels::atan(a),
        (Family::Deterministic, Function::Atan2) => kernels::atan2(a, b),
        (Family::Platform, Function::Cos) => Float::cos(a),
        (Family::Platform, Function::Sin) => Float::sin(a),
        (Family::Platform, Function::Tan) => Float::tan(a),
        (Family::Platform, Function::Asin) => Float::asin(a),
        (Family::Platform, Function::Acos) => Float::acos(a),
        (Family::Platform, Function::Atan) => Float::atan(a),
        (Family::Platform, Function::Atan2) => Float::atan2(a, b),
        (_, function) => match function.unary::<f32>() {
            Some(f) => f(a),
            None => detmath::atan2(a, b),
        },
    }
}

/// Distance between two floats in units in the last place.
pub fn ulp_distance(a: f32, b: f32) -> u64 {
    fn ordered(x: f32) -> i64 {
        let bits = x.to_bits() as i32;
        if bits < 0 {
            i32::MIN as i64 - bits as i64
        } else {
            bits as i64
        }
    }
    (ordered(a) - ordered(b)).unsigned_abs()
}

fn print_report(
    function: Function,
    family: Family,
    start: f64,
    end: f64,
    x: f64,
    report: &SweepReport,
) {
    println!("Function: {} (f32, {})", function.name(), family.describe());
    if function == Function::Atan2 {
        println!("Range: y in [{}, {}], x = {}", start, end, x);
    } else {
        println!("Range: [{}, {}]", start, end);
    }
    println!("Samples: {}", report.samples);
    println!(
        "Max abs error: {:.3e} at {}",
        report.max_abs_error, report.max_abs_at
    );
    println!("Max ULP error: {} at {}", report.max_ulps, report.max_ulps_at);
    if report.nan_mismatches > 0 {
        println!("NaN mismatches: {}", report.nan_mismatches);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ulp_distance() {
        assert_eq!(ulp_distance(1.0, 1.0), 0);
        assert_eq!(ulp_distance(1.0, f32::from_bits(1.0f32.to_bits() + 3)), 3);
        assert_eq!(ulp_distance(0.0, -0.0), 0);
        assert_eq!(ulp_distance(f32::from_bits(1), -f32::from_bits(1)), 2);
    }

    #[test]
    fn test_deterministic_cos_error_is_bounded() {
        let report = run(
            Function::Cos,
            Family::Deterministic,
            -3.14,
            3.14,
            2000,
            1.0,
        );
        assert_eq!(report.samples, 2001);
        assert!(report.max_abs_error < 2e-5);
        assert!(report.max_abs_error > 0.0);
        assert_eq!(report.nan_mismatches, 0);
    }

    #[test]
    fn test_platform_family_is_close_to_reference() {
        let report = run(Function::Sin, Family::Platform, -3.0, 3.0, 1000, 1.0);
        assert!(report.max_ulps <= 2, "max ulps {}", report.max_ulps);
    }

    #[test]
    fn test_out_of_domain_counts_nan_mismatches() {
        // acosh returns 0 where the reference is NaN
        let report = run(Function::Acosh, Family::Active, 0.0, 2.0, 20, 1.0);
        assert_eq!(report.nan_mismatches, 10);
    }

    #[test]
    fn test_families_share_unreplaced_functions() {
        for &a in &[-2.0f32, 0.5, 3.0] {
            let active = evaluate(Function::Tanh, Family::Active, a, 1.0);
            let det = evaluate(Function::Tanh, Family::Deterministic, a, 1.0);
            assert_eq!(active.to_bits(), det.to_bits());
        }
    }

    #[test]
    fn test_report_locates_worst_samples() {
        let report = run(Function::Atan, Family::Deterministic, -4.0, 4.0, 800, 1.0);
        assert!((-4.0..=4.0).contains(&report.max_abs_at));
        assert!((-4.0..=4.0).contains(&report.max_ulps_at));

        let at = report.max_abs_at as f32;
        let error = (kernels::atan(at) as f64 - libm::atan(at as f64)).abs();
        assert_eq!(error, report.max_abs_error);

        let at = report.max_ulps_at as f32;
        let ulps = ulp_distance(kernels::atan(at), libm::atan(at as f64) as f32);
        assert_eq!(ulps, report.max_ulps);
    }
}
