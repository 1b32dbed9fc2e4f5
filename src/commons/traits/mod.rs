//! Module containing common traits used throughout the crate.

pub mod container;

pub use container::*;

// Convenience re-exports
pub use super::math::torus::UnsignedTorus;
pub use super::numeric::*;
