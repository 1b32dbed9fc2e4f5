//! Module with traits and casts used to manipulate generic numeric types.

mod unsigned;

pub use unsigned::*;

/// A trait that allows to generically cast a type from another.
pub trait CastFrom<Input>: Sized {
    fn cast_from(input: Input) -> Self;
}

/// A trait that allows to generically cast a type into another.
pub trait CastInto<Output>: Sized {
    fn cast_into(self) -> Output;
}

impl<Input, Output> CastInto<Output> for Input
where
    Output: CastFrom<Input>,
{
    #[inline]
    fn cast_into(self) -> Output {
        Output::cast_from(self)
    }
}

macro_rules! implement_cast {
    ($Input:ty => $($Output:ty),+) => {
        $(
            impl CastFrom<$Input> for $Output {
                #[inline]
                fn cast_from(input: $Input) -> $Output {
                    input as $Output
                }
            }
        )+
    };
}

implement_cast!(u32 => u32, u64, u128, usize, f64);
implement_cast!(u64 => u32, u64, u128, usize, f64);
implement_cast!(u128 => u32, u64, u128, f64);
implement_cast!(usize => u32, u64, u128, usize, f64);
implement_cast!(f64 => f64, i32, i64, i128);
implement_cast!(i32 => u32);
implement_cast!(i64 => u64);
implement_cast!(i128 => u128);

/// A trait shared by all the numeric types.
pub trait Numeric:
    Copy + PartialEq + PartialOrd + Send + Sync + std::fmt::Debug + std::fmt::Display + 'static
{
    /// The number of bits of the representation.
    const BITS: usize;
    /// The null element of the type.
    const ZERO: Self;
    /// The identity element of the type.
    const ONE: Self;
    /// A value of two.
    const TWO: Self;
    /// The largest value that can be encoded by the type.
    const MAX: Self;
}

/// A marker trait for unsigned numeric types.
pub trait UnsignedNumeric: Numeric {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cast_round_trip_widening() {
        let a: u32 = 0xdead_beef;
        let wide: u128 = a.cast_into();
        let back: u32 = wide.cast_into();
        assert_eq!(a, back);
    }

    #[test]
    fn test_cast_truncates_like_as() {
        let a: u64 = (1 << 40) | 17;
        let small: u32 = a.cast_into();
        assert_eq!(small, 17);
    }
}
