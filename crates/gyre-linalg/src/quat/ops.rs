//! Implementations of `std::ops` and approximate comparison.

use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};

use crate::{Quat, Scalar};

impl<T> Index<usize> for Quat<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.vec[index]
    }
}

impl<T> IndexMut<usize> for Quat<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.vec[index]
    }
}

impl<T, U> PartialEq<Quat<U>> for Quat<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Quat<U>) -> bool {
        self.vec == other.vec
    }
}

impl<T> Eq for Quat<T> where T: Eq {}

/// The Hamilton product: composes the rotations of the two operands.
///
/// Quaternion multiplication does not commute; `a * b` and `b * a` are
/// different rotations.
impl<T: Scalar> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (x1, y1, z1, w1) = (self.x(), self.y(), self.z(), self.w());
        let (x2, y2, z2, w2) = (rhs.x(), rhs.y(), rhs.z(), rhs.w());

        Self::new(
            w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
            w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
            w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
            w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
        )
    }
}

/// Component-wise negation.
impl<T> Neg for Quat<T>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_vec(-self.vec)
    }
}

/// Component-wise addition.
impl<T: Scalar> Add for Quat<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_vec(self.vec + rhs.vec)
    }
}

/// Component-wise addition.
impl<T: Scalar> AddAssign for Quat<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.vec += rhs.vec;
    }
}

/// Component-wise subtraction.
impl<T: Scalar> Sub for Quat<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_vec(self.vec - rhs.vec)
    }
}

/// Component-wise subtraction.
impl<T: Scalar> SubAssign for Quat<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.vec -= rhs.vec;
    }
}

/// Quaternion-Scalar multiplication (scaling).
impl<T: Scalar> Mul<T> for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::from_vec(self.vec * rhs)
    }
}

/// Quaternion-Scalar multiplication (scaling).
impl<T: Scalar> MulAssign<T> for Quat<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.vec *= rhs;
    }
}

// `Mul<Quat<T>> for T` cannot be written generically (the scalar is the
// receiver), so spell it out for the built-in numeric types.
macro_rules! scalar_lhs_mul {
    ($($ty:ty),+) => {
        $(
            /// Scalar-Quaternion multiplication with the scalar on the left.
            impl Mul<Quat<$ty>> for $ty {
                type Output = Quat<$ty>;

                fn mul(self, rhs: Quat<$ty>) -> Quat<$ty> {
                    rhs * self
                }
            }
        )+
    };
}
scalar_lhs_mul!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

impl<T> AbsDiffEq for Quat<T>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.vec.abs_diff_eq(&other.vec, epsilon)
    }
}

impl<T> RelativeEq for Quat<T>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.vec.relative_eq(&other.vec, epsilon, max_relative)
    }
}
