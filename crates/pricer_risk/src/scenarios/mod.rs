//! Scenario analysis over spot and volatility.
//!
//! This module provides infrastructure for:
//! - Relative axis specifications (`AxisSpec`)
//! - Row-major price tables (`PriceTable`)
//! - Grid generation and display rounding (`SensitivityGrid`)
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              Sensitivity Grid                │
//! ├──────────────────────────────────────────────┤
//! │  AxisSpec        - start + step · i factors  │
//! │  GridSpec        - spot axis × vol axis      │
//! │  PriceTable      - rows = vol, cols = spot   │
//! │  SensitivityGrid - axes + call/put tables    │
//! └──────────────────────────────────────────────┘
//! ```

mod axis;
mod error;
mod grid;
mod table;

pub use axis::AxisSpec;
pub use error::GridError;
pub use grid::{grid, GridSpec, SensitivityGrid};
pub use table::PriceTable;
