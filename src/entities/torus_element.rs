use crate::commons::math::torus::UnsignedTorus;
use crate::commons::parameters::{EncodingRange, MessageModulus};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A single element of the real torus $\mathbb{R}/\mathbb{Z}$, stored as a dyadic
/// fraction over the full width of the scalar type.
///
/// The raw word `raw` stands for the real `raw / 2^W`. Addition and subtraction
/// wrap around the scalar width, which is exact arithmetic modulo 1 on the torus.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorusElement<Scalar: UnsignedTorus>(pub Scalar);

impl<Scalar: UnsignedTorus> TorusElement<Scalar> {
    /// Encode an integer modulo `p` in the high bits of the torus word.
    ///
    /// The encoding is exact: `value mod p` lands on the point `value / p` of the
    /// torus, with the unused low bits left at zero. Values at or above the
    /// modulus wrap, as dictated by the ring structure.
    ///
    /// # Example
    ///
    /// ```
    /// use torus_core::commons::parameters::MessageModulus;
    /// use torus_core::entities::TorusElement;
    /// let modulus = MessageModulus::<u64>::try_new(16).unwrap();
    /// let t = TorusElement::from_int(3, modulus);
    /// assert_eq!(t.0, 3u64 << 60);
    /// assert_eq!(t.to_int(modulus), 3);
    /// ```
    pub fn from_int(value: Scalar, modulus: MessageModulus<Scalar>) -> Self {
        if modulus.log2() == 0 {
            return Self(Scalar::ZERO);
        }
        Self(value << modulus.shift())
    }

    /// Round the torus word to the nearest multiple of `1/p` and return it as an
    /// integer below `p`.
    ///
    /// Rounds to nearest rather than truncating, so `to_int(from_int(i, p), p) == i`
    /// holds exactly for every `i < p`; a word closer to 1 than to the last grid
    /// point rounds across the wrap to 0.
    pub fn to_int(self, modulus: MessageModulus<Scalar>) -> Scalar {
        if modulus.log2() == 0 {
            return Scalar::ZERO;
        }
        let shift = modulus.shift();
        if shift == 0 {
            self.0
        } else {
            // adding the half step before shifting implements round half up,
            // with the wrap of the addition performing the torus rounding at 1
            self.0.wrapping_add(Scalar::ONE << (shift - 1)) >> shift
        }
    }

    /// Encode the fractional part of a real number at full torus precision.
    pub fn from_real(value: f64) -> Self {
        Self(Scalar::from_torus(value))
    }

    /// Decode the torus word to a real in $\[0, 1)$, quantized at granularity `1/p`.
    pub fn to_real(self, modulus: MessageModulus<Scalar>) -> f64 {
        let int: f64 = self.to_int(modulus).cast_into();
        int / modulus.as_f64()
    }

    /// Encode a real known to lie in `range`, rescaled onto $\[0, 1)$ and snapped
    /// to the `1/p` encoding grid.
    ///
    /// The decoded value is guaranteed within `range.width() / p` of the input,
    /// measured with the torus wrap.
    pub fn from_float(value: f64, modulus: MessageModulus<Scalar>, range: EncodingRange) -> Self {
        let on_torus = Self::from_real(range.normalize(value));
        Self::from_int(on_torus.to_int(modulus), modulus)
    }

    /// Decode the torus word back onto `range`.
    pub fn to_float(self, modulus: MessageModulus<Scalar>, range: EncodingRange) -> f64 {
        range.denormalize(self.to_real(modulus))
    }
}

impl<Scalar: UnsignedTorus> Add for TorusElement<Scalar> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl<Scalar: UnsignedTorus> Sub for TorusElement<Scalar> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }
}
