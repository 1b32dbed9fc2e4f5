//! Module containing the value types manipulated by the crate.

pub mod torus_element;
pub mod torus_polynomial;

pub use torus_element::*;
pub use torus_polynomial::*;
