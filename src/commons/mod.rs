//! Module containing common mathematical objects and traits expected to be re-used in the
//! entities and algorithms implementations.
//!
//! # Numeric
//! This module contains the generic integer traits and casts the rest of the crate is
//! written against.
//!
//! # Parameters
//! This module contains structures that wrap and validate parameters like the polynomial
//! size, the quantization modulus or the bounded float range.

pub mod math;
mod message_modulus;
pub mod numeric;
pub mod parameters;
pub mod traits;
