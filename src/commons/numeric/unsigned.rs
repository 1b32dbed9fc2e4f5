use super::{CastFrom, CastInto, Numeric, UnsignedNumeric};
use std::ops::{Add, BitAnd, Shl, Shr, Sub};

/// A trait shared by all the unsigned integer types used as raw torus words.
pub trait UnsignedInteger:
    UnsignedNumeric
    + Ord
    + Eq
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + BitAnd<Self, Output = Self>
    + Shl<usize, Output = Self>
    + Shr<usize, Output = Self>
    + CastFrom<u128>
    + CastInto<u128>
    + CastInto<f64>
{
    /// The signed type of the same precision.
    type Signed: CastFrom<f64> + CastInto<Self> + Copy;
    /// Compute an addition, modulo the max of the type.
    #[must_use]
    fn wrapping_add(self, other: Self) -> Self;
    /// Compute a subtraction, modulo the max of the type.
    #[must_use]
    fn wrapping_sub(self, other: Self) -> Self;
    /// Compute a multiplication, modulo the max of the type.
    #[must_use]
    fn wrapping_mul(self, other: Self) -> Self;
    /// Compute a negation, modulo the max of the type.
    #[must_use]
    fn wrapping_neg(self) -> Self;
    #[must_use]
    fn is_power_of_two(self) -> bool;
    #[must_use]
    fn ilog2(self) -> u32;
}

macro_rules! implement {
    ($Type: tt, $SignedType:ty, $bits:expr) => {
        impl Numeric for $Type {
            const BITS: usize = $bits;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const TWO: Self = 2;
            const MAX: Self = <$Type>::MAX;
        }

        impl UnsignedNumeric for $Type {}

        impl UnsignedInteger for $Type {
            type Signed = $SignedType;
            #[inline]
            fn wrapping_add(self, other: Self) -> Self {
                self.wrapping_add(other)
            }
            #[inline]
            fn wrapping_sub(self, other: Self) -> Self {
                self.wrapping_sub(other)
            }
            #[inline]
            fn wrapping_mul(self, other: Self) -> Self {
                self.wrapping_mul(other)
            }
            #[inline]
            fn wrapping_neg(self) -> Self {
                self.wrapping_neg()
            }
            #[inline]
            fn is_power_of_two(self) -> bool {
                self.is_power_of_two()
            }
            #[inline]
            fn ilog2(self) -> u32 {
                self.ilog2()
            }
        }
    };
}

implement!(u32, i32, 32);
implement!(u64, i64, 64);
implement!(u128, i128, 128);

#[cfg(test)]
mod test {
    use super::*;

    fn wrapping_cycle<T: UnsignedInteger>() {
        assert_eq!(T::MAX.wrapping_add(T::ONE), T::ZERO);
        assert_eq!(T::ZERO.wrapping_sub(T::ONE), T::MAX);
        assert_eq!(T::ONE.wrapping_neg(), T::MAX);
    }

    #[test]
    fn test_wrapping_cycle_u32() {
        wrapping_cycle::<u32>()
    }

    #[test]
    fn test_wrapping_cycle_u64() {
        wrapping_cycle::<u64>()
    }

    #[test]
    fn test_wrapping_cycle_u128() {
        wrapping_cycle::<u128>()
    }
}
