//! Module with the definition of the prelude.
//!
//! The TFHE-flavored crates expose a prelude re-exporting the types and free functions a
//! user manipulates day to day, so that a single `use torus_core::prelude::*;` is enough
//! to get started.

pub use crate::algorithms::polynomial_algorithms::*;
pub use crate::algorithms::slice_algorithms::*;
pub use crate::commons::math::torus::UnsignedTorus;
pub use crate::commons::numeric::{CastFrom, CastInto, Numeric, UnsignedInteger};
pub use crate::commons::parameters::{EncodingRange, MessageModulus, PolynomialSize};
pub use crate::commons::traits::{Container, ContainerMut};
pub use crate::entities::{
    TorusElement, TorusPolynomial, TorusPolynomialBase, TorusPolynomialMutView,
    TorusPolynomialView,
};
pub use crate::{Error, ErrorKind, InvalidModulusError, InvalidRangeError};
