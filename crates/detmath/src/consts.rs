//! Angle constants as generic functions
//!
//! Thin accessors over the [`Float`] associated constants, for call sites
//! that read better as `pi::<T>()` than `T::PI`.

use crate::traits::Float;

/// π
#[inline(always)]
pub fn pi<T: Float>() -> T {
    T::PI
}

/// π/2
#[inline(always)]
pub fn half_pi<T: Float>() -> T {
    T::HALF_PI
}

/// 2π
#[inline(always)]
pub fn two_pi<T: Float>() -> T {
    T::TWO_PI
}

/// π/4
#[inline(always)]
pub fn quarter_pi<T: Float>() -> T {
    T::QUARTER_PI
}

/// 3π/2
#[inline(always)]
pub fn three_over_two_pi<T: Float>() -> T {
    T::THREE_OVER_TWO_PI
}

/// 4/π
#[inline(always)]
pub fn four_over_pi<T: Float>() -> T {
    T::FOUR_OVER_PI
}
