//! Error types for sensitivity grid generation.

use pricer_core::types::{InputError, PricingError};
use thiserror::Error;

/// Errors from building or evaluating a sensitivity grid.
///
/// # Variants
/// - `InvalidInput`: The base inputs violate their domain
/// - `InvalidAxis`: An axis specification that would produce
///   non-positive or non-finite perturbation factors
/// - `CellPricing`: The model rejected or overflowed on one cell
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GridError {
    /// Base inputs outside their domain.
    #[error(transparent)]
    InvalidInput(#[from] InputError),

    /// Axis specification is unusable.
    #[error("Invalid {axis} axis: {reason}")]
    InvalidAxis {
        /// Which axis ("spot" or "volatility")
        axis: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// Pricing failed for one cell of the grid.
    #[error("Pricing failed at row {row}, column {col}: {source}")]
    CellPricing {
        /// Volatility row index
        row: usize,
        /// Spot column index
        col: usize,
        /// The underlying pricing error
        #[source]
        source: PricingError,
    },
}

impl GridError {
    /// Create an axis validation error.
    pub fn invalid_axis(axis: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidAxis {
            axis,
            reason: reason.into(),
        }
    }
}
