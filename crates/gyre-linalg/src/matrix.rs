use std::{array, fmt};

use crate::{elem, Scalar, Vector};

mod ops;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 2x2 matrix with [`f64`] elements.
pub type Mat2d = Mat2<f64>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// Element `(i, j)` lives at flat index `i * C + j`; the inner arrays are
/// the rows.
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] fill a matrix from
///   arrays or row/column vectors.
/// - [`Matrix::from_fn`] creates each element by invoking a closure with
///   its row and column.
/// - [`Matrix::ZERO`] has every element set to 0, and
///   [`Matrix::identity`] builds the square identity for the matrix's
///   column dimension.
///
/// # Element Access
///
/// Indexing with a `usize` yields a whole row, so elements can be reached
/// with `m[row][col]`; indexing with a `(row, col)` tuple reaches an
/// element directly. Both panic when out of bounds, like slices do.
///
/// ```
/// # use gyre_linalg::*;
/// let mut m = Matrix::from_rows([
///     [0, 1],
///     [2, 3],
/// ]);
/// m[0][1] = 9;
/// assert_eq!(m[(0, 1)], 9);
/// assert_eq!(m[1], [2, 3]);
/// ```
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; C]; R]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gyre_linalg::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// assert_eq!(rows[(1, 0)], 2);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Self(rows.map(|row| row.into().into_array()))
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gyre_linalg::*;
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(columns, Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]));
    /// ```
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self
    where
        T: Copy,
    {
        Matrix::from_rows(columns).transpose()
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row
    /// and column) of each element.
    ///
    /// This mirrors [`array::from_fn`].
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(|v| f(v))))
    }

    /// Returns the number of rows (`R`).
    #[inline]
    pub const fn rows(&self) -> usize {
        R
    }

    /// Returns the number of columns (`C`).
    #[inline]
    pub const fn cols(&self) -> usize {
        C
    }

    /// Flat row-major view of the elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_flattened()
    }

    /// Mutable flat row-major view of the elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.0.as_flattened_mut()
    }

    /// Swaps the rows and columns of this matrix, producing fresh storage.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gyre_linalg::*;
    /// let m = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(m, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self.0[col][row])
    }
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; C]; R]);
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Returns the identity matrix: 1 on the diagonal, 0 everywhere else.
    ///
    /// Right-multiplying any matrix by the identity of its column
    /// dimension (or left-multiplying by the identity of its row
    /// dimension) returns the matrix unchanged, and the dimension is
    /// usually inferred from that product.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gyre_linalg::*;
    /// let m = Matrix::from_rows([
    ///     [1.0, 2.0, 3.0],
    ///     [4.0, 5.0, 6.0],
    /// ]);
    /// assert_eq!(m * Matrix::identity(), m);
    /// ```
    pub fn identity() -> Self {
        let mut out = Self::ZERO;
        elem::identity(N, out.as_mut_slice());
        out
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Renders the matrix as a bracketed grid with two fixed fraction digits,
/// one line per row, eg. `[ 1.00, 2.00,\n  3.00, 4.00 ]`.
impl<T, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        elem::fmt_grid(f, self.as_slice(), C)
    }
}
