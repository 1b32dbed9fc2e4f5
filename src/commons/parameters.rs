//! Module with new-types wrapping basic rust types, giving them a particular meaning, to avoid
//! common mistakes when passing parameters to functions.

use crate::error::{Error, InvalidRangeError};
use serde::{Deserialize, Serialize};

pub use super::message_modulus::MessageModulus;

/// The number of coefficients of a polynomial.
///
/// Assuming a polynomial $a\_0 + a\_1X + \dots + a\_{N-1}X^{N-1}$, this new-type contains $N$.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PolynomialSize(pub usize);

/// The half-open interval $\[min, max)$ on which a bounded float encoding operates.
///
/// Values in the interval are rescaled onto $\[0, 1)$ before being placed on the
/// torus, and rescaled back on decoding. Only finite, non-empty intervals can be
/// instantiated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EncodingRange {
    min: f64,
    max: f64,
}

impl EncodingRange {
    pub fn try_new(min: f64, max: f64) -> Result<Self, Error> {
        if !min.is_finite() || !max.is_finite() {
            return Err(InvalidRangeError::NotFinite.into());
        }
        if min >= max {
            return Err(InvalidRangeError::WrongOrder.into());
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width of the interval, `max - min`.
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Affine map from $\[min, max)$ onto $\[0, 1)$.
    pub(crate) fn normalize(&self, value: f64) -> f64 {
        (value - self.min) / self.width()
    }

    /// Affine map from $\[0, 1)$ back onto $\[min, max)$.
    pub(crate) fn denormalize(&self, value: f64) -> f64 {
        self.min + value * self.width()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_encoding_range_validation() {
        assert!(EncodingRange::try_new(-5.5, -4.0).is_ok());

        let empty = EncodingRange::try_new(1.0, 1.0);
        assert!(matches!(
            empty.unwrap_err().kind(),
            ErrorKind::InvalidRange(crate::InvalidRangeError::WrongOrder)
        ));

        let backwards = EncodingRange::try_new(3.0, -3.0);
        assert!(backwards.is_err());

        let not_finite = EncodingRange::try_new(f64::NEG_INFINITY, 0.0);
        assert!(matches!(
            not_finite.unwrap_err().kind(),
            ErrorKind::InvalidRange(crate::InvalidRangeError::NotFinite)
        ));
        assert!(EncodingRange::try_new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_encoding_range_affine_maps() {
        let range = EncodingRange::try_new(-2.0, 2.0).unwrap();
        assert_eq!(range.width(), 4.0);
        assert_eq!(range.normalize(-2.0), 0.0);
        assert_eq!(range.normalize(0.0), 0.5);
        assert_eq!(range.denormalize(0.75), 1.0);
    }
}
