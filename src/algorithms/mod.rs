//! Module providing the algorithms performing computations on torus polynomials and raw
//! coefficient slices.

pub mod polynomial_algorithms;
pub mod slice_algorithms;
