use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Numeric element types usable inside vectors, matrices and quaternions.
///
/// Besides basic arithmetic, every element type can be widened to [`f64`]
/// and narrowed back. Magnitudes, dot products and angles are always
/// computed in `f64`; values that have to be stored again go back through
/// [`Scalar::from_f64`]. For integer element types that narrowing truncates
/// toward zero, so normalizing an integer vector of unit scale collapses it
/// to all zeros — callers picking an integer `T` need to be aware of this.
pub trait Scalar:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
    /// Widens this value to `f64`.
    fn to_f64(self) -> f64;

    /// Narrows an `f64` back to this type, with `as`-cast semantics.
    fn from_f64(value: f64) -> Self;
}

macro_rules! int_scalar {
    ($($ty:ty),+) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = 0;
            }

            impl One for $ty {
                const ONE: Self = 1;
            }

            impl Scalar for $ty {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $ty
                }
            }
        )+
    };
}
int_scalar!(u8, u16, u32, u64, i8, i16, i32, i64);

macro_rules! float_scalar {
    ($($ty:ty),+) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = 0.0;
            }

            impl One for $ty {
                const ONE: Self = 1.0;
            }

            impl Scalar for $ty {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $ty
                }
            }
        )+
    };
}
float_scalar!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widening_and_narrowing() {
        assert_eq!(3i32.to_f64(), 3.0);
        assert_eq!(f32::from_f64(0.25), 0.25f32);

        // Narrowing to an integer truncates toward zero.
        assert_eq!(i32::from_f64(0.9), 0);
        assert_eq!(i32::from_f64(-0.9), 0);
        assert_eq!(i32::from_f64(2.7), 2);
    }

    #[test]
    fn identities() {
        assert_eq!(i64::ZERO + i64::ONE, 1);
        assert_eq!(f64::ZERO + f64::ONE, 1.0);
    }
}
