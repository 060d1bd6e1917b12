//! Component-wise forms of the reduction and minimax kernels
//!
//! Same names as the scalar kernels, taking any [`FloatVector`]. Each
//! component gets exactly the bits of the scalar call.
//!
//! ```rust
//! use detmath::kernels::{self, lifted};
//! use detmath::vec3;
//!
//! let v = vec3(-1.0f32, 0.5, 7.0);
//! let wrapped = lifted::wrap_angle(v);
//! assert_eq!(wrapped[0], kernels::wrap_angle(-1.0f32));
//! assert_eq!(lifted::cos_52s(wrapped)[1], kernels::cos_52s(0.5f32));
//! ```

use crate::traits::FloatVector;

use super::{minimax, reduce};

/// [`reduce::wrap_angle`] on every component
#[inline(always)]
pub fn wrap_angle<V: FloatVector>(angle: V) -> V {
    angle.map(reduce::wrap_angle)
}

/// [`minimax::cos_52s`] on every component
#[inline(always)]
pub fn cos_52s<V: FloatVector>(x: V) -> V {
    x.map(minimax::cos_52s)
}

/// [`minimax::tan_56s`] on every component
#[inline(always)]
pub fn tan_56s<V: FloatVector>(x: V) -> V {
    x.map(minimax::tan_56s)
}

/// [`minimax::atan_66s`] on every component
#[inline(always)]
pub fn atan_66s<V: FloatVector>(x: V) -> V {
    x.map(minimax::atan_66s)
}
