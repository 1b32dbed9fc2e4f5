use crate::commons::parameters::PolynomialSize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    /// The requested encoding modulus cannot be used on the chosen torus width
    InvalidModulus(InvalidModulusError),
    /// The bounds supplied for a bounded float encoding do not form a valid interval
    InvalidRange(InvalidRangeError),
    /// A ring operation was invoked on polynomials with different coefficient counts
    SizeMismatch {
        lhs: PolynomialSize,
        rhs: PolynomialSize,
    },
}

#[derive(Debug, Clone)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind() {
            ErrorKind::InvalidModulus(err) => write!(f, "Invalid modulus: {err}"),
            ErrorKind::InvalidRange(err) => write!(f, "Invalid range: {err}"),
            ErrorKind::SizeMismatch { lhs, rhs } => write!(
                f,
                "Operands have different polynomial sizes: {lhs:?} != {rhs:?}"
            ),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self { kind }
    }
}

impl From<InvalidModulusError> for Error {
    fn from(value: InvalidModulusError) -> Self {
        let kind = ErrorKind::InvalidModulus(value);
        Self { kind }
    }
}

impl From<InvalidRangeError> for Error {
    fn from(value: InvalidRangeError) -> Self {
        let kind = ErrorKind::InvalidRange(value);
        Self { kind }
    }
}

impl std::error::Error for Error {}

/// Error returned when the modulus supplied for an encoding is unusable
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum InvalidModulusError {
    /// The modulus is not a power of two
    NotPowerOfTwo,
    /// The modulus is bigger than the maximum value of the associated scalar type
    WiderThanScalar,
}

impl Display for InvalidModulusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotPowerOfTwo => write!(f, "The modulus is not a power of two"),
            Self::WiderThanScalar => write!(
                f,
                "The modulus is bigger than the maximum value of the associated scalar type"
            ),
        }
    }
}

impl std::error::Error for InvalidModulusError {}

/// Error returned when the bounds provided for a float encoding are invalid
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum InvalidRangeError {
    /// The lower bound is greater than or equal to the upper bound
    WrongOrder,
    /// One of the bounds is not a finite float
    NotFinite,
}

impl Display for InvalidRangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongOrder => {
                write!(f, "The lower bound is greater than or equal to the upper bound")
            }
            Self::NotFinite => write!(f, "One of the bounds is not a finite float"),
        }
    }
}

impl std::error::Error for InvalidRangeError {}
