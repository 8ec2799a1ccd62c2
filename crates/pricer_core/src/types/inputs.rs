//! Black-Scholes input tuple and call/put result pair.
//!
//! `PricingInputs` is validated once at construction and is immutable
//! afterwards; perturbed copies for scenario grids are produced through
//! `with_spot` / `with_volatility`, which re-check the replaced field.

#[cfg(feature = "serde")]
use serde::Serialize;

use super::error::InputError;
use crate::math::rounding::round_to;

/// The five scalars of a European option under Black-Scholes.
///
/// # Invariants
/// - `spot`, `strike`, `expiry`, `volatility` are strictly positive and finite
/// - `rate` is finite (negative rates are accepted, range policy belongs to the caller)
///
/// # Examples
/// ```
/// use pricer_core::types::PricingInputs;
///
/// let inputs = PricingInputs::new(0.05, 100.0, 95.0, 0.5, 0.25).unwrap();
/// assert_eq!(inputs.rate(), 0.05);
/// assert_eq!(inputs.spot(), 100.0);
/// assert_eq!(inputs.strike(), 95.0);
/// assert_eq!(inputs.expiry(), 0.5);
/// assert_eq!(inputs.volatility(), 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PricingInputs {
    rate: f64,
    spot: f64,
    strike: f64,
    expiry: f64,
    volatility: f64,
}

impl PricingInputs {
    /// Creates a validated input tuple.
    ///
    /// # Arguments
    /// * `rate` - Risk-free interest rate, continuously compounded (r)
    /// * `spot` - Spot price of the underlying (S₀)
    /// * `strike` - Strike price (K)
    /// * `expiry` - Time to maturity in years (T)
    /// * `volatility` - Annualised volatility as a fraction, 0.2 = 20% (σ)
    ///
    /// # Errors
    /// Returns the `InputError` variant naming the first parameter, in
    /// argument order, that lies outside its domain.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::{InputError, PricingInputs};
    ///
    /// assert!(PricingInputs::new(0.05, 100.0, 100.0, 1.0, 0.2).is_ok());
    ///
    /// let err = PricingInputs::new(0.05, 100.0, 100.0, 0.0, 0.2).unwrap_err();
    /// assert_eq!(err, InputError::InvalidExpiry { expiry: 0.0 });
    /// ```
    pub fn new(
        rate: f64,
        spot: f64,
        strike: f64,
        expiry: f64,
        volatility: f64,
    ) -> Result<Self, InputError> {
        if !rate.is_finite() {
            return Err(InputError::InvalidRate { rate });
        }
        check_spot(spot)?;
        if !is_positive_finite(strike) {
            return Err(InputError::InvalidStrike { strike });
        }
        if !is_positive_finite(expiry) {
            return Err(InputError::InvalidExpiry { expiry });
        }
        check_volatility(volatility)?;

        Ok(Self {
            rate,
            spot,
            strike,
            expiry,
            volatility,
        })
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Copy of these inputs with the spot price replaced.
    ///
    /// # Errors
    /// `InputError::InvalidSpot` if `spot` is not strictly positive and finite.
    pub fn with_spot(&self, spot: f64) -> Result<Self, InputError> {
        check_spot(spot)?;
        Ok(Self { spot, ..*self })
    }

    /// Copy of these inputs with the volatility replaced.
    ///
    /// # Errors
    /// `InputError::InvalidVolatility` if `volatility` is not strictly positive and finite.
    pub fn with_volatility(&self, volatility: f64) -> Result<Self, InputError> {
        check_volatility(volatility)?;
        Ok(Self {
            volatility,
            ..*self
        })
    }
}

#[inline]
fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn check_spot(spot: f64) -> Result<(), InputError> {
    if is_positive_finite(spot) {
        Ok(())
    } else {
        Err(InputError::InvalidSpot { spot })
    }
}

fn check_volatility(volatility: f64) -> Result<(), InputError> {
    if is_positive_finite(volatility) {
        Ok(())
    } else {
        Err(InputError::InvalidVolatility { volatility })
    }
}

/// European call and put prices for one input tuple.
///
/// Values are kept at full precision; use [`PriceResult::rounded`] at the
/// display boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PriceResult {
    /// Call option price
    pub call: f64,
    /// Put option price
    pub put: f64,
}

impl PriceResult {
    /// Creates a new price pair.
    pub fn new(call: f64, put: f64) -> Self {
        Self { call, put }
    }

    /// Both prices rounded to `decimals` places.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::PriceResult;
    ///
    /// let prices = PriceResult::new(10.450583572185565, 5.573526022256971);
    /// assert_eq!(prices.rounded(2), PriceResult::new(10.45, 5.57));
    /// ```
    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            call: round_to(self.call, decimals),
            put: round_to(self.put, decimals),
        }
    }
}
