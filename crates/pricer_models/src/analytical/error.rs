//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors specific to analytical pricing models

use pricer_core::types::{InputError, PricingError};
use thiserror::Error;

/// Analytical pricing errors.
///
/// Provides structured error handling for analytical pricing operations
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidInput`: A parameter outside its domain (spot, strike, maturity,
///   volatility ≤ 0, or any non-finite value)
/// - `NumericOverflow`: The discount factor or a price is not finite
///
/// # Examples
/// ```
/// use pricer_core::types::InputError;
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::from(InputError::InvalidVolatility { volatility: -0.2 });
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Parameter outside its mathematical domain.
    #[error(transparent)]
    InvalidInput(#[from] InputError),

    /// A quantity overflowed to infinity or became NaN.
    #[error("Numeric overflow in {quantity}: {value}")]
    NumericOverflow {
        /// Name of the quantity that overflowed
        quantity: &'static str,
        /// The non-finite value produced
        value: f64,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::InvalidInput(input) => PricingError::InvalidInput(input),
            AnalyticalError::NumericOverflow { .. } => {
                PricingError::NumericOverflow(err.to_string())
            }
        }
    }
}
