//! Module containing the definition of the [`MessageModulus`].

use crate::commons::numeric::UnsignedInteger;
use crate::error::{Error, InvalidModulusError};
use std::marker::PhantomData;

/// Structure representing the quantization modulus $p = 2^k$ used when encoding
/// application values on the torus.
///
/// Only powers of two no wider than the associated scalar type can be
/// instantiated, so a value of this type is always usable for encoding and
/// decoding. The granularity of the encoding grid is $1/p$.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct MessageModulus<Scalar: UnsignedInteger> {
    log2: usize,
    _scalar: PhantomData<Scalar>,
}

#[derive(serde::Serialize, serde::Deserialize)]
struct SerializableMessageModulus {
    pub log2: usize,
    pub scalar_bits: usize,
}

// Manual impl to be able to carry the UnsignedInteger bitwidth information
impl<Scalar: UnsignedInteger> serde::Serialize for MessageModulus<Scalar> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        SerializableMessageModulus {
            log2: self.log2,
            scalar_bits: Scalar::BITS,
        }
        .serialize(serializer)
    }
}

impl<'de, Scalar: UnsignedInteger> serde::Deserialize<'de> for MessageModulus<Scalar> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let thing =
            SerializableMessageModulus::deserialize(deserializer).map_err(serde::de::Error::custom)?;

        if thing.scalar_bits != Scalar::BITS {
            return Err(serde::de::Error::custom(format!(
                "Expected an unsigned integer with {} bits, \
            found {} bits during deserialization of MessageModulus, \
            have you mixed types during deserialization?",
                Scalar::BITS,
                thing.scalar_bits
            )));
        }

        Self::try_new_power_of_2(thing.log2).map_err(serde::de::Error::custom)
    }
}

impl<Scalar: UnsignedInteger> MessageModulus<Scalar> {
    /// Return the modulus covering the full width of the scalar type, $p = 2^W$.
    pub fn new_native() -> Self {
        Self {
            log2: Scalar::BITS,
            _scalar: PhantomData,
        }
    }

    /// Build the modulus $p = 2^{exponent}$.
    ///
    /// Fails with [`InvalidModulusError::WiderThanScalar`] when the exponent
    /// exceeds the scalar width.
    pub fn try_new_power_of_2(exponent: usize) -> Result<Self, Error> {
        if exponent > Scalar::BITS {
            return Err(InvalidModulusError::WiderThanScalar.into());
        }
        Ok(Self {
            log2: exponent,
            _scalar: PhantomData,
        })
    }

    /// Build a modulus from its value.
    ///
    /// Fails with [`InvalidModulusError::NotPowerOfTwo`] when `modulus` is zero
    /// or not a power of two, and with [`InvalidModulusError::WiderThanScalar`]
    /// when it does not fit the scalar type. The native modulus $2^W$ itself is
    /// not representable as a `u128` for 128 bit scalars; use
    /// [`MessageModulus::new_native`] for it.
    pub fn try_new(modulus: u128) -> Result<Self, Error> {
        if modulus == 0 || !modulus.is_power_of_two() {
            return Err(InvalidModulusError::NotPowerOfTwo.into());
        }
        Self::try_new_power_of_2(modulus.ilog2() as usize)
    }

    /// Return $k$ such that $p = 2^k$.
    pub fn log2(&self) -> usize {
        self.log2
    }

    /// Return whether the modulus covers the full scalar width.
    pub fn is_native(&self) -> bool {
        self.log2 == Scalar::BITS
    }

    /// Return the modulus as a float, $2^k$.
    pub fn as_f64(&self) -> f64 {
        2f64.powi(self.log2 as i32)
    }

    /// Number of unused low bits in the raw torus word for this granularity.
    pub(crate) fn shift(&self) -> usize {
        Scalar::BITS - self.log2
    }

    /// Bit mask keeping an integer below the modulus.
    pub(crate) fn mask(&self) -> Scalar {
        if self.is_native() {
            Scalar::MAX
        } else {
            (Scalar::ONE << self.log2).wrapping_sub(Scalar::ONE)
        }
    }
}

impl<Scalar: UnsignedInteger> std::fmt::Display for MessageModulus<Scalar> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MessageModulus(2^{})", self.log2)
    }
}

impl<Scalar: UnsignedInteger> std::fmt::Debug for MessageModulus<Scalar> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as std::fmt::Display>::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use crate::commons::parameters::MessageModulus;
    use crate::ErrorKind;

    #[test]
    fn test_modulus_struct() {
        {
            let mod_16 = MessageModulus::<u64>::try_new(1 << 16).unwrap();
            assert_eq!(mod_16.log2(), 16);
            assert!(!mod_16.is_native());
            assert_eq!(mod_16.as_f64(), 65536.0);

            let std_fmt = format!("{mod_16}");
            assert_eq!(&std_fmt, "MessageModulus(2^16)");

            let dbg_fmt = format!("{mod_16:?}");
            assert_eq!(&dbg_fmt, "MessageModulus(2^16)");
        }

        {
            let native_32 = MessageModulus::<u32>::try_new_power_of_2(32).unwrap();
            assert!(native_32.is_native());
            assert_eq!(native_32, MessageModulus::<u32>::new_native());
        }

        {
            let bad_mod_32 = MessageModulus::<u32>::try_new_power_of_2(64);
            assert!(bad_mod_32.is_err());
            match bad_mod_32.unwrap_err().kind() {
                ErrorKind::InvalidModulus(_) => {}
                other => panic!("unexpected error kind: {other:?}"),
            }
        }

        {
            let not_a_power = MessageModulus::<u64>::try_new(48);
            assert!(not_a_power.is_err());
            let zero = MessageModulus::<u64>::try_new(0);
            assert!(zero.is_err());
        }
    }

    #[test]
    fn test_modulus_serde() {
        let mod_8 = MessageModulus::<u64>::try_new_power_of_2(8).unwrap();

        let ser = bincode::serialize(&mod_8).unwrap();
        let deser: MessageModulus<u64> = bincode::deserialize(&ser).unwrap();
        assert_eq!(mod_8, deser);

        let deser_error: Result<MessageModulus<u32>, _> = bincode::deserialize(&ser);
        assert!(deser_error.is_err());
        match deser_error {
            Ok(_) => unreachable!(),
            Err(e) => match *e {
                bincode::ErrorKind::Custom(err) => {
                    assert!(err.contains("have you mixed types during deserialization?"));
                }
                _ => unreachable!(),
            },
        }
    }
}
