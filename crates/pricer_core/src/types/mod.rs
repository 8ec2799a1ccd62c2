//! Core pricing types.
//!
//! This module provides:
//! - `inputs`: The five-scalar Black-Scholes input tuple and the call/put result pair
//! - `error`: Structured error types for input validation and pricing
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`PricingInputs`], [`PriceResult`] from `inputs`
//! - [`InputError`], [`PricingError`] from `error`

pub mod error;
pub mod inputs;

// Re-export commonly used types at module level
pub use error::{InputError, PricingError};
pub use inputs::{PriceResult, PricingInputs};
