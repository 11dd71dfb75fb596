use std::fmt::{Debug, Display};

use num_traits::{CheckedAdd, CheckedMul, Num, ToPrimitive};

/// Element type for [`Vector`](super::Vector) and [`Matrix`](super::Matrix).
///
/// Covers the primitive integers and floats. A single instance never mixes
/// numeric types.
pub trait Scalar: Copy + PartialEq + Debug + Display + Num + ToPrimitive {
    /// `self * rhs`, or `None` when an integer product overflows.
    fn mul_checked(self, rhs: Self) -> Option<Self>;

    /// `self + rhs`, or `None` when an integer sum overflows.
    fn add_checked(self, rhs: Self) -> Option<Self>;

    /// Widen to `f64` for magnitude computations.
    #[inline]
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn mul_checked(self, rhs: Self) -> Option<Self> {
                CheckedMul::checked_mul(&self, &rhs)
            }

            #[inline]
            fn add_checked(self, rhs: Self) -> Option<Self> {
                CheckedAdd::checked_add(&self, &rhs)
            }
        }
    )*};
}

// IEEE arithmetic saturates to infinity instead of wrapping.
macro_rules! impl_scalar_float {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn mul_checked(self, rhs: Self) -> Option<Self> {
                Some(self * rhs)
            }

            #[inline]
            fn add_checked(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }
        }
    )*};
}

impl_scalar_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_scalar_float!(f32, f64);

/// Every entry of `values` times `a`, or `None` on the first overflow.
pub(crate) fn checked_scale<T: Scalar>(values: &[T], a: T) -> Option<Vec<T>> {
    values.iter().map(|&v| v.mul_checked(a)).collect()
}

/// Sum of elementwise products, or `None` on overflow.
pub(crate) fn checked_dot<T: Scalar>(lhs: &[T], rhs: &[T]) -> Option<T> {
    lhs.iter()
        .zip(rhs.iter())
        .try_fold(T::zero(), |acc, (&a, &b)| acc.add_checked(a.mul_checked(b)?))
}
