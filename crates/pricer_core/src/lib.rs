//! # pricer_core: Foundation Types for the Black-Scholes Grid Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the workspace, providing:
//! - Validated pricing inputs: `PricingInputs` (`types::inputs`)
//! - Call/put price pairs: `PriceResult` (`types::inputs`)
//! - Error types: `InputError`, `PricingError` (`types::error`)
//! - The pricing seam implemented by models: `Priceable` (`traits`)
//! - Display rounding helpers (`math::rounding`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - thiserror: Error derives
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{InputError, PricingInputs};
//!
//! let inputs = PricingInputs::new(0.05, 100.0, 100.0, 1.0, 0.2).unwrap();
//! assert_eq!(inputs.spot(), 100.0);
//!
//! // Zero spot is rejected before any arithmetic happens
//! let err = PricingInputs::new(0.05, 0.0, 100.0, 1.0, 0.2).unwrap_err();
//! assert_eq!(err, InputError::InvalidSpot { spot: 0.0 });
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `PricingInputs` and `PriceResult`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
