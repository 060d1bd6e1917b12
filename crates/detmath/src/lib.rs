#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! detmath: trigonometric and hyperbolic functions over scalars and small vectors
//!
//! Every function takes an `f32`, an `f64`, or a [`Vector<T, N>`] of either and
//! applies the same scalar kernel to each component. The kernel family is
//! chosen at compile time:
//!
//! - default: the platform math functions (`std` float methods, or `libm`
//!   when built without the `std` feature)
//! - `deterministic` feature: fixed-coefficient minimax approximations for
//!   `cos`, `sin`, `tan`, `asin`, `acos`, `atan` and `atan2` that give the same
//!   bits on every target, at roughly 1e-5 absolute accuracy
//!
//! # Features
//!
//! - **Element-wise lift**: one generic `map`/`zip_map` adapter covers scalars
//!   and 2, 3, 4 component vectors
//! - **Sealed float bound**: only `f32` and `f64` implement [`Float`]
//! - **No allocations**: pure, stateless functions, usable from `no_std`
//!
//! # Quick Start
//!
//! ```rust
//! use detmath::{atan2, degrees, sin, vec4, Vec4};
//!
//! let phases: Vec4<f32> = vec4(0.0, 0.5, 1.0, 1.5);
//! let wave = sin(phases);
//! for i in 0..4 {
//!     assert_eq!(wave[i].to_bits(), sin(phases[i]).to_bits());
//! }
//!
//! let heading = degrees(atan2(1.0f64, 1.0));
//! assert!((heading - 45.0).abs() < 1e-4);
//!
//! if detmath::DETERMINISTIC {
//!     // Same bits on every platform
//! }
//! ```
//!
//! Non-float element types are rejected at compile time:
//!
//! ```compile_fail
//! let _ = detmath::sin(3i32);
//! ```

extern crate libm;

// Scalar float bound and the element-wise lift
pub mod traits;

// Fixed-size vector container
pub mod vector;

// Angle constants
pub mod consts;

// Deterministic kernels, always available for direct use
pub mod kernels;

// Per-scalar dispatch
pub mod scalar;

// Public lifted functions
pub mod math;

pub use math::{
    acos, acosh, asin, asinh, atan, atan2, atanh, cos, cosh, degrees, radians, sin, sinh, tan,
    tanh,
};
pub use traits::{Float, FloatVector};
pub use vector::{vec2, vec3, vec4, Vec2, Vec3, Vec4, Vector};

/// `true` when the crate was built with the `deterministic` feature
///
/// Cargo unifies features across a build, so every crate linked into one
/// binary observes the same value.
pub const DETERMINISTIC: bool = cfg!(feature = "deterministic");
