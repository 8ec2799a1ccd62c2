//! Core traits for pricing models.
//!
//! This module defines the seam between the model layer and the
//! application layer:
//! - Price calculation for one input tuple (`Priceable` trait)
//!
//! Application code (scenario grids, the CLI) is generic over `Priceable`
//! and never names a concrete model.

pub mod priceable;

pub use priceable::Priceable;
