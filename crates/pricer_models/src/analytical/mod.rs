//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model for lognormal dynamics
//!
//! ## Design Principles
//!
//! - **Full double precision**: Φ is built on statrs' `erfc`
//! - **No silent faults**: domain violations and overflow surface as
//!   [`AnalyticalError`]

pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use black_scholes::{price, BlackScholes};
pub use distributions::norm_cdf;
pub use error::AnalyticalError;
