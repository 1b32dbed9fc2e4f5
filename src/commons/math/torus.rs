//! Module with the unsigned integer view of the real torus.
//!
//! An unsigned integer `raw` of width $W$ stands for the real number
//! $raw / 2^W \in \[0, 1)$, identified modulo 1. Wrapping arithmetic on the raw
//! word is exact torus arithmetic, which is why every operation in this crate
//! uses explicit `wrapping_*` calls on the representation.

use crate::commons::numeric::{CastInto, Numeric, UnsignedInteger};

/// A trait for unsigned integer types seen as a fixed-point sampling of the torus.
pub trait UnsignedTorus: UnsignedInteger {
    /// Round `input` to the closest representable torus element.
    ///
    /// Only the fractional part of `input` is meaningful; the value is taken
    /// modulo 1 before scaling to the full width of the type.
    fn from_torus(input: f64) -> Self;
    /// Return the real number in $\[0, 1)$ represented by `self`.
    fn into_torus(self) -> f64;
}

macro_rules! implement_torus {
    ($Type: ty) => {
        impl UnsignedTorus for $Type {
            #[inline]
            fn from_torus(input: f64) -> Self {
                // input - round(input) lies in [-0.5, 0.5); scaled and cast
                // through the signed type it wraps to the right raw word
                let mut fract = input - input.round();
                fract *= 2f64.powi(<$Type as Numeric>::BITS as i32);
                fract = fract.round();
                let signed: <$Type as UnsignedInteger>::Signed = fract.cast_into();
                signed.cast_into()
            }

            #[inline]
            fn into_torus(self) -> f64 {
                let self_f64: f64 = self.cast_into();
                self_f64 / 2f64.powi(<$Type as Numeric>::BITS as i32)
            }
        }
    };
}

implement_torus!(u32);
implement_torus!(u64);
implement_torus!(u128);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_torus_quarters() {
        assert_eq!(u64::from_torus(0.0), 0);
        assert_eq!(u64::from_torus(0.25), 1u64 << 62);
        assert_eq!(u64::from_torus(0.5), 1u64 << 63);
        assert_eq!(u64::from_torus(0.75), 3u64 << 62);
    }

    #[test]
    fn test_from_torus_uses_fractional_part() {
        assert_eq!(u64::from_torus(3.25), u64::from_torus(0.25));
        assert_eq!(u64::from_torus(-0.75), u64::from_torus(0.25));
        assert_eq!(u64::from_torus(-3.0), 0);
    }

    #[test]
    fn test_into_torus_range() {
        for raw in [0u64, 1, 1 << 32, u64::MAX - (1 << 11)] {
            let real = raw.into_torus();
            assert!((0.0..1.0).contains(&real), "{real} out of [0, 1)");
        }
        assert_eq!((1u64 << 63).into_torus(), 0.5);
        // the raw words closest to the wrap round up to 1.0 when cast to f64
        assert_eq!(u64::MAX.into_torus(), 1.0);
    }

    #[test]
    fn test_round_trip_wide_word() {
        // a value just below 1 wraps to raw 0 at full width rounding
        let raw = u128::from_torus(1.0 - 2f64.powi(-140));
        assert_eq!(raw, 0);

        let raw = u128::from_torus(0.5);
        assert_eq!(raw, 1u128 << 127);
        assert_eq!(raw.into_torus(), 0.5);
    }
}
