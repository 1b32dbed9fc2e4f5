//! Module containing the mathematical representation of torus elements.

pub mod torus;
