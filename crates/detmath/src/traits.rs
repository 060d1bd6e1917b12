//! Core numeric traits
//!
//! This module defines the two traits every function in the crate is written
//! against:
//!
//! - [`Float`]: the scalar element type. Sealed and implemented only for `f32`
//!   and `f64`, so passing an integer (or any other type) is a compile error
//!   rather than a runtime one.
//! - [`FloatVector`]: anything a scalar kernel can be lifted over. Scalars are
//!   their own single-lane vector; [`Vector`](crate::Vector) and plain arrays
//!   apply the kernel to every component in order.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};

mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// IEEE-754 binary floating-point scalar (`f32` or `f64`)
///
/// Carries the constants and primitive operations the trigonometric kernels
/// are built from. The platform methods (`sin`, `cos`, ...) call `std` when
/// the `std` feature is enabled and `libm` otherwise.
///
/// # Example
///
/// ```rust
/// use detmath::Float;
///
/// fn half_turn<T: Float>() -> T {
///     T::PI
/// }
///
/// assert_eq!(half_turn::<f32>(), core::f32::consts::PI);
/// ```
pub trait Float:
    private::Sealed
    + Copy
    + Debug
    + Default
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
{
    /// 0
    const ZERO: Self;
    /// 1
    const ONE: Self;
    /// 0.5
    const HALF: Self;
    /// π
    const PI: Self;
    /// π/2
    const HALF_PI: Self;
    /// 2π
    const TWO_PI: Self;
    /// π/4
    const QUARTER_PI: Self;
    /// 3π/2
    const THREE_OVER_TWO_PI: Self;
    /// 4/π
    const FOUR_OVER_PI: Self;
    /// π/6
    const SIXTH_PI: Self;
    /// tan(π/12)
    const TAN_TWELFTH_PI: Self;
    /// tan(π/6)
    const TAN_SIXTH_PI: Self;
    /// π/180
    const DEG_TO_RAD: Self;
    /// 180/π
    const RAD_TO_DEG: Self;

    /// Round an `f64` literal to this precision.
    ///
    /// Kernel coefficients are written once as `f64` and narrowed here, so
    /// both precisions see the same decimal source.
    fn from_f64(value: f64) -> Self;

    /// Widen to `f64` (exact for both precisions)
    fn to_f64(self) -> f64;

    /// Absolute value
    fn abs(self) -> Self;

    /// `-1`, `0` or `1` depending on the sign of `self`
    ///
    /// Unlike `f32::signum`, zero (of either sign) and NaN map to `0`.
    fn sign(self) -> Self;

    /// Floored modulo, `self - rhs * floor(self / rhs)` in exact arithmetic
    ///
    /// The result takes the sign of `rhs`, so a negative angle wrapped by a
    /// positive period lands in `[0, rhs]`.
    fn modulo(self, rhs: Self) -> Self;

    /// Largest float with a smaller magnitude than `self` (same sign)
    ///
    /// Zero and non-finite values are returned unchanged.
    fn next_toward_zero(self) -> Self;

    /// Truncate a non-negative value to an index. NaN maps to 0.
    fn to_index(self) -> usize;

    /// Square root
    fn sqrt(self) -> Self;

    /// Natural logarithm
    fn ln(self) -> Self;

    /// Platform sine
    fn sin(self) -> Self;

    /// Platform cosine
    fn cos(self) -> Self;

    /// Platform tangent
    fn tan(self) -> Self;

    /// Platform arcsine
    fn asin(self) -> Self;

    /// Platform arccosine
    fn acos(self) -> Self;

    /// Platform arctangent
    fn atan(self) -> Self;

    /// Platform four-quadrant arctangent of `self / x`
    fn atan2(self, x: Self) -> Self;

    /// Platform hyperbolic sine
    fn sinh(self) -> Self;

    /// Platform hyperbolic cosine
    fn cosh(self) -> Self;

    /// Platform hyperbolic tangent
    fn tanh(self) -> Self;
}

// f64 sources for the constants that `core::f*::consts` does not carry.
const THREE_OVER_TWO_PI: f64 = 4.712_388_980_384_689_857_693_965_074_919_254;
const FOUR_OVER_PI: f64 = 1.273_239_544_735_162_686_151_070_106_980_114_9;
const SIXTH_PI: f64 = 0.523_598_775_598_298_873_077_107_230_546_583_8;
const TAN_TWELFTH_PI: f64 = 0.267_949_192_431_122_706_472_553_658_494_127_6;
const TAN_SIXTH_PI: f64 = 0.577_350_269_189_625_764_509_148_780_501_957_5;
const DEG_TO_RAD: f64 = 0.017_453_292_519_943_295_769_236_907_684_886;
const RAD_TO_DEG: f64 = 57.295_779_513_082_320_876_798_154_814_105;

/// Pick the `std` or `libm` spelling of a primitive at compile time.
macro_rules! platform {
    ($std:path, $libm:path, $($arg:expr),+) => {{
        #[cfg(feature = "std")]
        {
            $std($($arg),+)
        }
        #[cfg(not(feature = "std"))]
        {
            $libm($($arg),+)
        }
    }};
}

macro_rules! impl_float {
    (
        $t:ident, $consts:ident,
        libm: {
            abs: $abs:ident, sqrt: $sqrt:ident, ln: $ln:ident,
            sin: $sin:ident, cos: $cos:ident, tan: $tan:ident,
            asin: $asin:ident, acos: $acos:ident, atan: $atan:ident, atan2: $atan2:ident,
            sinh: $sinh:ident, cosh: $cosh:ident, tanh: $tanh:ident $(,)?
        }
    ) => {
        impl Float for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const HALF: Self = 0.5;
            const PI: Self = core::$consts::consts::PI;
            const HALF_PI: Self = core::$consts::consts::FRAC_PI_2;
            const TWO_PI: Self = core::$consts::consts::TAU;
            const QUARTER_PI: Self = core::$consts::consts::FRAC_PI_4;
            const THREE_OVER_TWO_PI: Self = THREE_OVER_TWO_PI as $t;
            const FOUR_OVER_PI: Self = FOUR_OVER_PI as $t;
            const SIXTH_PI: Self = SIXTH_PI as $t;
            const TAN_TWELFTH_PI: Self = TAN_TWELFTH_PI as $t;
            const TAN_SIXTH_PI: Self = TAN_SIXTH_PI as $t;
            const DEG_TO_RAD: Self = DEG_TO_RAD as $t;
            const RAD_TO_DEG: Self = RAD_TO_DEG as $t;

            #[inline(always)]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline(always)]
            fn abs(self) -> Self {
                platform!($t::abs, libm::$abs, self)
            }

            #[inline(always)]
            fn sign(self) -> Self {
                if self > 0.0 {
                    1.0
                } else if self < 0.0 {
                    -1.0
                } else {
                    0.0
                }
            }

            #[inline(always)]
            fn modulo(self, rhs: Self) -> Self {
                // `%` is the exact IEEE remainder with the sign of `self`;
                // shift by one period when the signs disagree.
                let r = self % rhs;
                if r != 0.0 && (r < 0.0) != (rhs < 0.0) {
                    r + rhs
                } else {
                    r
                }
            }

            #[inline(always)]
            fn next_toward_zero(self) -> Self {
                if self == 0.0 || !self.is_finite() {
                    return self;
                }
                <$t>::from_bits(self.to_bits() - 1)
            }

            #[inline(always)]
            fn to_index(self) -> usize {
                self as usize
            }

            #[inline(always)]
            fn sqrt(self) -> Self {
                platform!($t::sqrt, libm::$sqrt, self)
            }

            #[inline(always)]
            fn ln(self) -> Self {
                platform!($t::ln, libm::$ln, self)
            }

            #[inline(always)]
            fn sin(self) -> Self {
                platform!($t::sin, libm::$sin, self)
            }

            #[inline(always)]
            fn cos(self) -> Self {
                platform!($t::cos, libm::$cos, self)
            }

            #[inline(always)]
            fn tan(self) -> Self {
                platform!($t::tan, libm::$tan, self)
            }

            #[inline(always)]
            fn asin(self) -> Self {
                platform!($t::asin, libm::$asin, self)
            }

            #[inline(always)]
            fn acos(self) -> Self {
                platform!($t::acos, libm::$acos, self)
            }

            #[inline(always)]
            fn atan(self) -> Self {
                platform!($t::atan, libm::$atan, self)
            }

            #[inline(always)]
            fn atan2(self, x: Self) -> Self {
                platform!($t::atan2, libm::$atan2, self, x)
            }

            #[inline(always)]
            fn sinh(self) -> Self {
                platform!($t::sinh, libm::$sinh, self)
            }

            #[inline(always)]
            fn cosh(self) -> Self {
                platform!($t::cosh, libm::$cosh, self)
            }

            #[inline(always)]
            fn tanh(self) -> Self {
                platform!($t::tanh, libm::$tanh, self)
            }
        }

        // Scalars are single-lane vectors: the lift is plain application.
        impl FloatVector for $t {
            type Scalar = $t;

            const LANES: usize = 1;

            #[inline(always)]
            fn map<F>(self, mut f: F) -> Self
            where
                F: FnMut(Self::Scalar) -> Self::Scalar,
            {
                f(self)
            }

            #[inline(always)]
            fn zip_map<F>(self, other: Self, mut f: F) -> Self
            where
                F: FnMut(Self::Scalar, Self::Scalar) -> Self::Scalar,
            {
                f(self, other)
            }
        }
    };
}

impl_float!(
    f32, f32,
    libm: {
        abs: fabsf, sqrt: sqrtf, ln: logf,
        sin: sinf, cos: cosf, tan: tanf,
        asin: asinf, acos: acosf, atan: atanf, atan2: atan2f,
        sinh: sinhf, cosh: coshf, tanh: tanhf,
    }
);

impl_float!(
    f64, f64,
    libm: {
        abs: fabs, sqrt: sqrt, ln: log,
        sin: sin, cos: cos, tan: tan,
        asin: asin, acos: acos, atan: atan, atan2: atan2,
        sinh: sinh, cosh: cosh, tanh: tanh,
    }
);

/// A value a scalar kernel can be lifted over, component by component
///
/// Implemented for `f32`/`f64` (one lane), for [`Vector<T, N>`](crate::Vector)
/// and for `[T; N]`. Every public function in the crate is written once as
/// `fn f<V: FloatVector>(x: V) -> V` and dispatches through [`map`] or
/// [`zip_map`], so there is exactly one lift shared by every arity.
///
/// Components are visited in index order and never interact.
///
/// [`map`]: FloatVector::map
/// [`zip_map`]: FloatVector::zip_map
///
/// # Example
///
/// ```rust
/// use detmath::{FloatVector, Vec3};
///
/// let v = Vec3::new(1.0f32, 2.0, 3.0);
/// let doubled = v.map(|x| x * 2.0);
/// assert_eq!(doubled, Vec3::new(2.0, 4.0, 6.0));
/// ```
pub trait FloatVector: Copy {
    /// Component type
    type Scalar: Float;

    /// Number of components (1 for scalars)
    const LANES: usize;

    /// Apply `f` to every component, in order.
    fn map<F>(self, f: F) -> Self
    where
        F: FnMut(Self::Scalar) -> Self::Scalar;

    /// Apply `f` to corresponding components of `self` and `other`, in order.
    fn zip_map<F>(self, other: Self, f: F) -> Self
    where
        F: FnMut(Self::Scalar, Self::Scalar) -> Self::Scalar;
}

impl<T: Float, const N: usize> FloatVector for [T; N] {
    type Scalar = T;

    const LANES: usize = N;

    #[inline(always)]
    fn map<F>(self, f: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        <[T; N]>::map(self, f)
    }

    #[inline(always)]
    fn zip_map<F>(self, other: Self, mut f: F) -> Self
    where
        F: FnMut(T, T) -> T,
    {
        core::array::from_fn(|i| f(self[i], other[i]))
    }
}
