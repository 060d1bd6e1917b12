//! Public trigonometric and hyperbolic functions
//!
//! Every function here takes any [`FloatVector`](crate::FloatVector): a
//! scalar `f32`/`f64` or a [`Vector<T, N>`](crate::Vector). Each one is the
//! matching [`scalar`](crate::scalar) kernel lifted through
//! `FloatVector::map` (or `zip_map` for `atan2`), so components are evaluated
//! independently and in order.
//!
//! # Modules
//!
//! - `angle`: `radians`, `degrees`
//! - `trig`: `sin`, `cos`, `tan`
//! - `atan`: `asin`, `acos`, `atan`, `atan2`
//! - `hyperbolic`: `sinh`, `cosh`, `tanh`, `asinh`, `acosh`, `atanh`
//!
//! # Example
//!
//! ```rust
//! use detmath::{vec3, Vec3};
//! use detmath::math::{cos, degrees};
//!
//! let turns: Vec3<f32> = vec3(0.0, 90.0, 180.0);
//! let c = cos(detmath::math::radians(turns));
//! assert!((c[0] - 1.0).abs() < 1e-4);
//! assert!((c[2] + 1.0).abs() < 1e-4);
//! assert!((degrees(core::f32::consts::PI) - 180.0).abs() < 1e-4);
//! ```

pub mod angle;
pub mod atan;
pub mod hyperbolic;
pub mod trig;

pub use self::angle::{degrees, radians};
pub use self::atan::{acos, asin, atan, atan2};
pub use self::hyperbolic::{acosh, asinh, atanh, cosh, sinh, tanh};
pub use self::trig::{cos, sin, tan};
