//! Fixed-coefficient minimax approximations
//!
//! Each kernel is only valid on its reduced domain; callers are responsible
//! for range reduction (see [`super::reduce`]). Coefficients are narrowed from
//! the same `f64` literals for both precisions, so a given build produces the
//! same bits on every platform.

use crate::traits::Float;

/// Cosine on `[0, π/2]`, even polynomial of degree 6
///
/// Absolute error below 7e-6 on the valid range.
#[inline(always)]
pub fn cos_52s<T: Float>(x: T) -> T {
    let c0 = T::from_f64(0.999_993_294_6);
    let c1 = T::from_f64(-0.499_912_437_6);
    let c2 = T::from_f64(0.041_487_747_2);
    let c3 = T::from_f64(-0.001_271_209_5);

    let xx = x * x;
    c0 + xx * (c1 + xx * (c2 + xx * c3))
}

/// `tan(x · π/4)` for `x` in `[0, 1]`, odd rational approximation
///
/// Relative error below 3e-5 on the valid range.
#[inline(always)]
pub fn tan_56s<T: Float>(x: T) -> T {
    let c1 = T::from_f64(-3.167_830_27);
    let c2 = T::from_f64(0.134_516_124);
    let c3 = T::from_f64(-4.033_321_984);

    let xx = x * x;
    x * (c1 + c2 * xx) / (c3 + xx)
}

/// Arctangent for `|x| ≤ tan(π/12)`, odd rational approximation
///
/// Absolute error below 2e-7 on the valid range.
#[inline(always)]
pub fn atan_66s<T: Float>(x: T) -> T {
    let c1 = T::from_f64(1.686_762_910_6);
    let c2 = T::from_f64(0.437_849_730_4);
    let c3 = T::from_f64(1.686_763_313_4);

    let xx = x * x;
    x * (c1 + c2 * xx) / (c3 + xx)
}
