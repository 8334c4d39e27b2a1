use std::{array, fmt};

use crate::{elem, One, Scalar, Zero};

mod ops;
mod view;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;

/// An `N`-element vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly
///   create vectors from provided values.
/// - [`Vector::splat`] copies one value into every element, and
///   [`Vector::from_fn`] invokes a closure with each element's index.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`Vector::ZERO`] is a vector containing all-zeroes; the [`Default`]
///   implementation produces the same thing for primitive element types.
/// - For vectors with 2 to 4 dimensions, `Vector::X`, `Vector::Y`,
///   `Vector::Z` and `Vector::W` are the unit basis vectors.
///
/// # Element Access
///
/// - For vectors with 2 to 4 dimensions, elements can be accessed as fields
///   `x`, `y`, `z`, and `w`. The fields are views of the same storage the
///   indexed elements live in, so mutating by name and by index is
///   observably identical.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`] and their `mut` variants
///   expose the underlying elements; [`Vector::into_array`] and the
///   [`From`] impls convert in both directions.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a
    /// closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gyre_linalg::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Returns a reference to the underlying elements as an array of length
    /// `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns the magnitude (Euclidean norm) of this vector, as [`f64`]
    /// regardless of the element type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gyre_linalg::*;
    /// assert!((vec3(2.0, 3.0, 4.0).magnitude() - 5.3852).abs() < 0.01);
    /// assert_eq!(Vec3f::Z.magnitude(), 1.0);
    /// ```
    pub fn magnitude(&self) -> f64
    where
        T: Scalar,
    {
        elem::magnitude(self.as_slice())
    }

    /// Whether the squared magnitude is within
    /// [`elem::DEFAULT_NORMALIZED_EPSILON`] of one.
    pub fn is_normalized(&self) -> bool
    where
        T: Scalar,
    {
        elem::is_normalized(self.as_slice(), elem::DEFAULT_NORMALIZED_EPSILON)
    }

    /// Whether the squared magnitude is within `epsilon` of one.
    pub fn is_normalized_within(&self, epsilon: f64) -> bool
    where
        T: Scalar,
    {
        elem::is_normalized(self.as_slice(), epsilon)
    }

    /// Scales this vector to unit magnitude in place, keeping its
    /// direction. Returns `false` — leaving the vector untouched — when
    /// the magnitude is zero and there is no direction to keep.
    ///
    /// The divisions happen in `f64` and are narrowed back through
    /// [`Scalar::from_f64`]. For an integer element type every sub-unit
    /// quotient truncates to zero, so a typical integer vector normalizes
    /// to all-zeroes while still reporting success; see [`Scalar`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use gyre_linalg::*;
    /// let mut v = vec3(0.0, 0.0, 4.0);
    /// assert!(v.normalize());
    /// assert_eq!(v, vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn normalize(&mut self) -> bool
    where
        T: Scalar,
    {
        elem::normalize(self.as_mut_slice()) != 0
    }

    /// Computes the dot product of `self` and `other`, as [`f64`]
    /// regardless of the element type.
    ///
    /// Geometrically, the dot product provides information about the
    /// relative angle of the two vectors: positive means the angle is less
    /// than 90°, zero means exactly 90°, negative means more than 90°.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gyre_linalg::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3.0);
    /// ```
    pub fn dot(self, other: Self) -> f64
    where
        T: Scalar,
    {
        elem::dot(self.as_slice(), other.as_slice())
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs. Its direction depends
    /// on the order of the arguments: swapping them negates the result.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gyre_linalg::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross(self, other: Self) -> Self {
        Self(elem::cross(self.into_array(), other.into_array()))
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

/// Renders the vector as a single bracketed row with two fixed fraction
/// digits, eg. `[ 1.00, 2.00 ]`.
impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        elem::fmt_grid(f, &self.0, N)
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}
