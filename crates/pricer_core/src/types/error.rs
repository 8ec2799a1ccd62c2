//! Error types for structured error handling.
//!
//! This module provides:
//! - `InputError`: A pricing parameter outside its mathematical domain
//! - `PricingError`: Errors from pricing operations

use std::fmt;
use thiserror::Error;

/// Domain violations of the Black-Scholes inputs.
///
/// Every variant names the offending parameter and carries the rejected
/// value so the host can point the user at the right field.
///
/// # Variants
/// - `InvalidRate`: Non-finite risk-free rate
/// - `InvalidSpot`: Non-positive or non-finite spot price
/// - `InvalidStrike`: Non-positive or non-finite strike price
/// - `InvalidExpiry`: Non-positive or non-finite time to maturity
/// - `InvalidVolatility`: Non-positive or non-finite volatility
///
/// # Examples
/// ```
/// use pricer_core::types::InputError;
///
/// let err = InputError::InvalidSpot { spot: 0.0 };
/// assert_eq!(err.parameter(), "spot");
/// assert_eq!(format!("{}", err), "Invalid spot price: S = 0");
/// ```
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum InputError {
    /// Risk-free rate is NaN or infinite.
    #[error("Invalid risk-free rate: r = {rate}")]
    InvalidRate {
        /// The rejected rate
        rate: f64,
    },

    /// Spot price is not strictly positive and finite.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The rejected spot price
        spot: f64,
    },

    /// Strike price is not strictly positive and finite.
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The rejected strike price
        strike: f64,
    },

    /// Time to maturity is not strictly positive and finite.
    #[error("Invalid time to maturity: T = {expiry}")]
    InvalidExpiry {
        /// The rejected maturity in years
        expiry: f64,
    },

    /// Volatility is not strictly positive and finite.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The rejected volatility
        volatility: f64,
    },
}

impl InputError {
    /// Name of the parameter that violated its domain.
    pub fn parameter(&self) -> &'static str {
        match self {
            InputError::InvalidRate { .. } => "rate",
            InputError::InvalidSpot { .. } => "spot",
            InputError::InvalidStrike { .. } => "strike",
            InputError::InvalidExpiry { .. } => "expiry",
            InputError::InvalidVolatility { .. } => "volatility",
        }
    }

    /// The rejected value.
    pub fn value(&self) -> f64 {
        match *self {
            InputError::InvalidRate { rate } => rate,
            InputError::InvalidSpot { spot } => spot,
            InputError::InvalidStrike { strike } => strike,
            InputError::InvalidExpiry { expiry } => expiry,
            InputError::InvalidVolatility { volatility } => volatility,
        }
    }
}

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidInput`: A parameter outside its domain
/// - `NumericOverflow`: An intermediate or final quantity is not finite
///
/// # Examples
/// ```
/// use pricer_core::types::{InputError, PricingError};
///
/// let err = PricingError::from(InputError::InvalidStrike { strike: -1.0 });
/// assert_eq!(format!("{}", err), "Invalid input: Invalid strike price: K = -1");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Invalid input data or parameters
    InvalidInput(InputError),

    /// Non-finite discount factor or price
    NumericOverflow(String),
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(err) => write!(f, "Invalid input: {}", err),
            PricingError::NumericOverflow(msg) => write!(f, "Numeric overflow: {}", msg),
        }
    }
}

impl std::error::Error for PricingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PricingError::InvalidInput(err) => Some(err),
            PricingError::NumericOverflow(_) => None,
        }
    }
}

impl From<InputError> for PricingError {
    fn from(err: InputError) -> Self {
        PricingError::InvalidInput(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_display() {
        assert_eq!(
            format!("{}", InputError::InvalidRate { rate: f64::NAN }),
            "Invalid risk-free rate: r = NaN"
        );
        assert_eq!(
            format!("{}", InputError::InvalidExpiry { expiry: 0.0 }),
            "Invalid time to maturity: T = 0"
        );
        assert_eq!(
            format!("{}", InputError::InvalidVolatility { volatility: -0.2 }),
            "Invalid volatility: σ = -0.2"
        );
    }

    #[test]
    fn test_input_error_parameter_and_value() {
        let cases = [
            (InputError::InvalidRate { rate: 1.0 }, "rate"),
            (InputError::InvalidSpot { spot: 1.0 }, "spot"),
            (InputError::InvalidStrike { strike: 1.0 }, "strike"),
            (InputError::InvalidExpiry { expiry: 1.0 }, "expiry"),
            (InputError::InvalidVolatility { volatility: 1.0 }, "volatility"),
        ];
        for (err, name) in cases {
            assert_eq!(err.parameter(), name);
            assert_eq!(err.value(), 1.0);
        }
    }

    #[test]
    fn test_pricing_error_display() {
        let err = PricingError::NumericOverflow("discount factor exp(-rT) = inf".to_string());
        assert_eq!(
            format!("{}", err),
            "Numeric overflow: discount factor exp(-rT) = inf"
        );
    }

    #[test]
    fn test_pricing_error_source_is_input_error() {
        use std::error::Error;

        let err = PricingError::from(InputError::InvalidSpot { spot: 0.0 });
        let source = err.source().expect("input errors carry a source");
        assert!(source.to_string().contains("spot"));

        let overflow = PricingError::NumericOverflow("price".to_string());
        assert!(overflow.source().is_none());
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InputError>();
        assert_send_sync::<PricingError>();
    }
}
