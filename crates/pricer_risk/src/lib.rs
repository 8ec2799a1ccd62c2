//! # Pricer Risk (L4: Application)
//!
//! Scenario analysis around a single European option.
//!
//! This crate provides:
//! - Relative perturbation axes for spot and volatility
//! - Dense price tables indexed by (volatility row, spot column)
//! - The sensitivity grid generator, generic over any `Priceable` model
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! ├─────────────────────────────────────────┤
//! │  scenarios/axis   - AxisSpec            │
//! │  scenarios/table  - PriceTable          │
//! │  scenarios/grid   - SensitivityGrid     │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_models (L2)            │
//! │  Closed-form Black-Scholes              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_core::types::PricingInputs;
//! use pricer_risk::scenarios::SensitivityGrid;
//!
//! let inputs = PricingInputs::new(0.05, 100.0, 100.0, 1.0, 0.2).unwrap();
//! let grid = SensitivityGrid::generate(&inputs).unwrap();
//!
//! assert_eq!(grid.spot_axis().len(), 11);
//! assert_eq!(grid.vol_axis().len(), 11);
//!
//! // Centre cell is the base case
//! let centre = grid.rounded(2);
//! assert_eq!(centre.call_table()[(5, 5)], 10.45);
//! assert_eq!(centre.put_table()[(5, 5)], 5.57);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod scenarios;

// Re-export commonly used types
pub use scenarios::{grid, AxisSpec, GridError, GridSpec, PriceTable, SensitivityGrid};
