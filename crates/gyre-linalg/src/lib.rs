//! A small linear algebra library for fixed-dimension vectors, matrices and
//! quaternions.
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. The API can be
//!   significantly simplified by relying on const generics to specify vector
//!   and matrix dimensions, and every consumer of this library knows its
//!   dimensions at compile time.
//! - Support only a single, row-major, unpadded data layout for matrices, so
//!   that a matrix, its flat element slice, and its nested row arrays are
//!   always the same bytes.
//! - Be generic over the element type. Magnitudes, dot products and angles
//!   are computed in [`f64`] regardless of the element type; results that
//!   have to be stored again are narrowed back through [`Scalar::from_f64`].
//! - No decompositions, no SIMD, no sparse storage. Rotations are covered by
//!   [`Quat`] and its matrix conversions; everything heavier is out of scope.
//!
//! # Layers
//!
//! The [`elem`] module operates on plain element slices and is where the
//! arithmetic actually happens; [`Vector`], [`Matrix`] and [`Quat`] are thin
//! typed wrappers over it. The typed API makes dimension mismatches a type
//! error, while the slice-level API signals degenerate sizes through its
//! return values.

pub mod elem;
mod matrix;
mod quat;
mod traits;
mod vector;

pub use matrix::*;
pub use quat::*;
pub use traits::*;
pub use vector::*;
