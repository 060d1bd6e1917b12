//! Fixed-size float vectors
//!
//! [`Vector<T, N>`] is a transparent wrapper over `[T; N]` used as the
//! container for element-wise evaluation. It deliberately carries no
//! arithmetic operators: it exists so that every function in the crate can be
//! applied to 2, 3 and 4 component values through the single
//! [`FloatVector`] lift.

use core::ops::{Index, IndexMut};

use crate::traits::{Float, FloatVector};

/// Fixed-size vector of `N` float components
///
/// # Example
///
/// ```rust
/// use detmath::{vec3, Vec3};
///
/// let v: Vec3<f32> = vec3(1.0, 2.0, 3.0);
/// assert_eq!(v[1], 2.0);
/// assert_eq!(v.into_array(), [1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub [T; N]);

/// Two-component vector
pub type Vec2<T> = Vector<T, 2>;

/// Three-component vector
pub type Vec3<T> = Vector<T, 3>;

/// Four-component vector
pub type Vec4<T> = Vector<T, 4>;

impl<T: Float, const N: usize> Vector<T, N> {
    /// Broadcast a scalar to every component
    #[inline(always)]
    pub fn splat(value: T) -> Self {
        Vector([value; N])
    }

    /// Load from a slice (must have at least N elements)
    ///
    /// # Panics
    ///
    /// Panics if slice has fewer than N elements
    #[inline(always)]
    pub fn from_slice(slice: &[T]) -> Self {
        assert!(slice.len() >= N, "Slice too short for vector load");
        Vector(core::array::from_fn(|i| slice[i]))
    }

    /// Store to a slice (must have at least N elements)
    ///
    /// # Panics
    ///
    /// Panics if slice has fewer than N elements
    #[inline(always)]
    pub fn to_slice(self, slice: &mut [T]) {
        assert!(slice.len() >= N, "Slice too short for vector store");
        slice[..N].copy_from_slice(&self.0);
    }

    /// Borrow the components
    #[inline(always)]
    pub fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Unwrap into the component array
    #[inline(always)]
    pub fn into_array(self) -> [T; N] {
        self.0
    }
}

impl<T: Float> Vector<T, 2> {
    /// Build from components
    #[inline(always)]
    pub const fn new(x: T, y: T) -> Self {
        Vector([x, y])
    }
}

impl<T: Float> Vector<T, 3> {
    /// Build from components
    #[inline(always)]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Vector([x, y, z])
    }
}

impl<T: Float> Vector<T, 4> {
    /// Build from components
    #[inline(always)]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Vector([x, y, z, w])
    }
}

/// Shorthand for [`Vec2::new`]
#[inline(always)]
pub const fn vec2<T: Float>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Shorthand for [`Vec3::new`]
#[inline(always)]
pub const fn vec3<T: Float>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Shorthand for [`Vec4::new`]
#[inline(always)]
pub const fn vec4<T: Float>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

impl<T: Float, const N: usize> FloatVector for Vector<T, N> {
    type Scalar = T;

    const LANES: usize = N;

    #[inline(always)]
    fn map<F>(self, f: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        Vector(FloatVector::map(self.0, f))
    }

    #[inline(always)]
    fn zip_map<F>(self, other: Self, f: F) -> Self
    where
        F: FnMut(T, T) -> T,
    {
        Vector(FloatVector::zip_map(self.0, other.0, f))
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline(always)]
    fn from(components: [T; N]) -> Self {
        Vector(components)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline(always)]
    fn from(vector: Vector<T, N>) -> Self {
        vector.0
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}
