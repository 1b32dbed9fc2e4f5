#![deny(rustdoc::broken_intra_doc_links)]
//! Welcome to the `torus-core` documentation!
//!
//! This library contains the numeric substrate used by torus-based homomorphic
//! encryption schemes: fixed-point encodings of integers, reals and bounded floats
//! on the real torus $\mathbb{R}/\mathbb{Z}$, and arithmetic over polynomials with
//! torus coefficients in the negacyclic ring $\mathbb{Z}\[X\]/(X^N + 1)$.
//!
//! # Audience
//!
//! This library is geared towards people who already know their way around FHE
//! plaintext encodings. It exposes the quantization contract directly and leaves
//! key generation, noise injection and ciphertext operations to the surrounding
//! system.
//!
//! # Architecture
//!
//! The crate revolves around three modules:
//!
//! + The [`commons`] module contains the numeric traits, the torus representation
//!   of real numbers and the validated parameter types ([`MessageModulus`],
//!   [`EncodingRange`], [`PolynomialSize`]).
//! + The [`entities`] module contains the value types: [`TorusElement`] for a
//!   single torus scalar and [`TorusPolynomial`] for a coefficient vector modulo
//!   $X^N + 1$.
//! + The [`algorithms`] module contains the free functions performing wrapping
//!   ring arithmetic on those entities, including the naive negacyclic
//!   convolution and the karatsuba substitution producing bit-identical results.
//!
//! [`MessageModulus`]: crate::commons::parameters::MessageModulus
//! [`EncodingRange`]: crate::commons::parameters::EncodingRange
//! [`PolynomialSize`]: crate::commons::parameters::PolynomialSize
//! [`TorusElement`]: crate::entities::TorusElement
//! [`TorusPolynomial`]: crate::entities::TorusPolynomial

pub mod algorithms;
pub mod commons;
pub mod entities;
mod error;
pub mod prelude;

pub use error::{Error, ErrorKind, InvalidModulusError, InvalidRangeError};
