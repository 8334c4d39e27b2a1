//! Implementations of `std::ops` and approximate comparison.

use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};

use crate::{elem, Matrix, Scalar, Vector};

/// Row indexing: `m[row]` is the row array, so `m[row][col]` reaches an
/// element.
impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = [T; C];

    #[inline]
    fn index(&self, row: usize) -> &[T; C] {
        &self.0[row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut [T; C] {
        &mut self.0[row]
    }
}

/// Direct element indexing with a `(row, col)` tuple.
impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.0[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.0[row][col]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

/// Element-wise negation.
impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Neg,
{
    type Output = Matrix<T::Output, R, C>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise addition.
impl<T: Scalar, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut out = Self::ZERO;
        elem::add(self.as_slice(), rhs.as_slice(), out.as_mut_slice());
        out
    }
}

/// Element-wise addition.
impl<T: Scalar, const R: usize, const C: usize> AddAssign for Matrix<T, R, C> {
    fn add_assign(&mut self, rhs: Self) {
        elem::add_assign(self.as_mut_slice(), rhs.as_slice());
    }
}

/// Element-wise subtraction.
impl<T: Scalar, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut out = Self::ZERO;
        elem::sub(self.as_slice(), rhs.as_slice(), out.as_mut_slice());
        out
    }
}

/// Element-wise subtraction.
impl<T: Scalar, const R: usize, const C: usize> SubAssign for Matrix<T, R, C> {
    fn sub_assign(&mut self, rhs: Self) {
        elem::sub_assign(self.as_mut_slice(), rhs.as_slice());
    }
}

/// Matrix * Matrix.
///
/// The inner dimension is enforced by the types: a shape mismatch does not
/// compile. Each result element accumulates in `T` starting from zero.
impl<T: Scalar, const R: usize, const C: usize, const K: usize> Mul<Matrix<T, C, K>>
    for Matrix<T, R, C>
{
    type Output = Matrix<T, R, K>;

    fn mul(self, rhs: Matrix<T, C, K>) -> Matrix<T, R, K> {
        let mut out = Matrix::ZERO;
        elem::mat_mul(self.as_slice(), R, C, rhs.as_slice(), K, out.as_mut_slice());
        out
    }
}

/// In-place Matrix * Matrix, restricted to square right-hand sides (any
/// other shape would change the dimensions of `self`).
///
/// The product cannot be computed aliasing its own inputs, so it goes
/// through a temporary that then replaces `self`.
impl<T: Scalar, const R: usize, const C: usize> MulAssign<Matrix<T, C, C>> for Matrix<T, R, C> {
    fn mul_assign(&mut self, rhs: Matrix<T, C, C>) {
        *self = *self * rhs;
    }
}

/// Matrix * Column Vector: the matrix-vector transform.
impl<T: Scalar, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Vector<T, R> {
        let mut out: Vector<T, R> = Vector::ZERO;
        elem::mat_mul(self.as_slice(), R, C, rhs.as_slice(), 1, out.as_mut_slice());
        out
    }
}

/// Matrix * Scalar (scaling).
impl<T: Scalar, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        let mut out = Self::ZERO;
        elem::scale(self.as_slice(), rhs, out.as_mut_slice());
        out
    }
}

/// Matrix * Scalar (scaling).
impl<T: Scalar, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C> {
    fn mul_assign(&mut self, rhs: T) {
        elem::scale_assign(self.as_mut_slice(), rhs);
    }
}

// `Mul<Matrix<T, R, C>> for T` cannot be written generically (the scalar is
// the receiver), so spell it out for the built-in numeric types.
macro_rules! scalar_lhs_mul {
    ($($ty:ty),+) => {
        $(
            /// Scalar-Matrix multiplication with the scalar on the left.
            impl<const R: usize, const C: usize> Mul<Matrix<$ty, R, C>> for $ty {
                type Output = Matrix<$ty, R, C>;

                fn mul(self, rhs: Matrix<$ty, R, C>) -> Matrix<$ty, R, C> {
                    rhs * self
                }
            }
        )+
    };
}
scalar_lhs_mul!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

impl<T, const R: usize, const C: usize> AbsDiffEq for Matrix<T, R, C>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| T::abs_diff_eq(a, b, epsilon))
    }
}

impl<T, const R: usize, const C: usize> RelativeEq for Matrix<T, R, C>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| T::relative_eq(a, b, epsilon, max_relative))
    }
}
