//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options in closed form.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use pricer_core::traits::Priceable;
use pricer_core::types::{PriceResult, PricingError, PricingInputs};

use super::distributions::norm_cdf;
use super::error::AnalyticalError;

/// Black-Scholes model for European option pricing.
///
/// The model itself carries no state; every quantity is a pure function of
/// the [`PricingInputs`] passed in. No limiting-case branches are taken:
/// the formula is evaluated exactly as written for every valid input.
///
/// # Examples
/// ```
/// use pricer_core::types::PricingInputs;
/// use pricer_models::analytical::BlackScholes;
///
/// let inputs = PricingInputs::new(0.05, 100.0, 100.0, 1.0, 0.2).unwrap();
/// let prices = BlackScholes.price_pair(&inputs).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = prices.call - prices.put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlackScholes;

impl BlackScholes {
    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    #[inline]
    pub fn d1(&self, inputs: &PricingInputs) -> f64 {
        d1_with_drift(inputs, drift(inputs))
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, inputs: &PricingInputs) -> f64 {
        self.d1(inputs) - inputs.volatility() * inputs.expiry().sqrt()
    }

    /// Computes the discount factor e^(-rT).
    ///
    /// # Errors
    /// `AnalyticalError::NumericOverflow` if the factor is not finite, which
    /// happens for strongly negative rate × maturity products.
    #[inline]
    pub fn discount_factor(&self, inputs: &PricingInputs) -> Result<f64, AnalyticalError> {
        let discount = (-inputs.rate() * inputs.expiry()).exp();
        finite("discount factor", discount)
    }

    /// Computes European call and put prices, sharing d1, d2 and the
    /// discount factor.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    ///
    /// # Errors
    /// `AnalyticalError::NumericOverflow` if the drift term of d1 (σ² above
    /// `f64::MAX`), d1 itself, the discount factor or either price is not
    /// representable. Infinite d1 from an extreme S/K ratio is a valid limit
    /// and still prices.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::PricingInputs;
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let inputs = PricingInputs::new(0.05, 100.0, 100.0, 1.0, 0.2).unwrap();
    /// let prices = BlackScholes.price_pair(&inputs).unwrap();
    /// assert!((prices.call - 10.4506).abs() < 1e-4);
    /// assert!((prices.put - 5.5735).abs() < 1e-4);
    /// ```
    pub fn price_pair(&self, inputs: &PricingInputs) -> Result<PriceResult, AnalyticalError> {
        let s0 = inputs.spot();
        let k = inputs.strike();

        let drift = finite("d1", drift(inputs))?;
        let d1 = d1_with_drift(inputs, drift);
        if d1.is_nan() {
            return Err(AnalyticalError::NumericOverflow {
                quantity: "d1",
                value: d1,
            });
        }
        let d2 = d1 - inputs.volatility() * inputs.expiry().sqrt();
        let discount = self.discount_factor(inputs)?;

        let call = s0 * norm_cdf(d1) - k * discount * norm_cdf(d2);
        let put = k * discount * norm_cdf(-d2) - s0 * norm_cdf(-d1);

        Ok(PriceResult::new(
            finite("call price", call)?,
            finite("put price", put)?,
        ))
    }
}

impl Priceable for BlackScholes {
    fn price(&self, inputs: &PricingInputs) -> Result<PriceResult, PricingError> {
        Ok(self.price_pair(inputs)?)
    }
}

/// Prices a European call and put from the five raw scalars.
///
/// Validates the inputs, then evaluates the closed-form formula.
///
/// # Arguments
/// * `rate` - Risk-free rate (r)
/// * `spot` - Spot price (S₀)
/// * `strike` - Strike price (K)
/// * `expiry` - Time to maturity in years (T)
/// * `volatility` - Annualised volatility as a fraction (σ)
///
/// # Errors
/// - `AnalyticalError::InvalidInput` naming the offending parameter
/// - `AnalyticalError::NumericOverflow` for non-finite intermediate results
///
/// # Examples
/// ```
/// use pricer_models::analytical::price;
///
/// let prices = price(0.05, 100.0, 100.0, 1.0, 0.2).unwrap();
/// assert!((prices.call - 10.45).abs() < 0.01);
/// assert!((prices.put - 5.57).abs() < 0.01);
///
/// assert!(price(0.05, 0.0, 100.0, 1.0, 0.2).is_err());
/// ```
pub fn price(
    rate: f64,
    spot: f64,
    strike: f64,
    expiry: f64,
    volatility: f64,
) -> Result<PriceResult, AnalyticalError> {
    let inputs = PricingInputs::new(rate, spot, strike, expiry, volatility)?;
    BlackScholes.price_pair(&inputs)
}

/// (r + σ²/2)·T
#[inline]
fn drift(inputs: &PricingInputs) -> f64 {
    let sig = inputs.volatility();
    (inputs.rate() + sig * sig / 2.0) * inputs.expiry()
}

#[inline]
fn d1_with_drift(inputs: &PricingInputs, drift: f64) -> f64 {
    let log_moneyness = (inputs.spot() / inputs.strike()).ln();
    (log_moneyness + drift) / (inputs.volatility() * inputs.expiry().sqrt())
}

#[inline]
fn finite(quantity: &'static str, value: f64) -> Result<f64, AnalyticalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AnalyticalError::NumericOverflow { quantity, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use pricer_core::types::InputError;

    fn inputs(rate: f64, spot: f64, strike: f64, expiry: f64, volatility: f64) -> PricingInputs {
        PricingInputs::new(rate, spot, strike, expiry, volatility).unwrap()
    }

    // ==========================================================
    // d1 / d2
    // ==========================================================

    #[test]
    fn test_d1_d2_atm() {
        // ATM, r = 0.05, σ = 0.2, T = 1: d1 = (0 + 0.07) / 0.2 = 0.35
        let x = inputs(0.05, 100.0, 100.0, 1.0, 0.2);
        assert_relative_eq!(BlackScholes.d1(&x), 0.35, epsilon = 1e-12);
        assert_relative_eq!(BlackScholes.d2(&x), 0.15, epsilon = 1e-12);
    }

    #[test]
    fn test_d2_offset_is_vol_sqrt_t() {
        let x = inputs(0.03, 120.0, 100.0, 4.0, 0.25);
        let gap = BlackScholes.d1(&x) - BlackScholes.d2(&x);
        assert_relative_eq!(gap, 0.25 * 2.0, epsilon = 1e-12);
    }

    // ==========================================================
    // Reference prices
    // ==========================================================

    #[test]
    fn test_reference_atm_prices() {
        let prices = price(0.05, 100.0, 100.0, 1.0, 0.2).unwrap();
        assert_abs_diff_eq!(prices.call, 10.450583572185565, epsilon = 1e-8);
        assert_abs_diff_eq!(prices.put, 5.573526022256971, epsilon = 1e-8);

        let display = prices.rounded(2);
        assert_eq!(display.call, 10.45);
        assert_eq!(display.put, 5.57);
    }

    #[test]
    fn test_priceable_matches_inherent() {
        let x = inputs(0.05, 100.0, 100.0, 1.0, 0.2);
        let via_trait = Priceable::price(&BlackScholes, &x).unwrap();
        assert_eq!(via_trait, BlackScholes.price_pair(&x).unwrap());
    }

    // ==========================================================
    // Put-call parity and bounds
    // ==========================================================

    #[test]
    fn test_put_call_parity_grid() {
        for &spot in &[50.0, 90.0, 100.0, 110.0, 200.0] {
            for &vol in &[0.05, 0.2, 0.8, 2.0] {
                for &expiry in &[0.1, 1.0, 5.0] {
                    let x = inputs(0.05, spot, 100.0, expiry, vol);
                    let p = BlackScholes.price_pair(&x).unwrap();
                    let forward_gap = spot - 100.0 * (-0.05 * expiry).exp();
                    assert_abs_diff_eq!(p.call - p.put, forward_gap, epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_zero_rate() {
        let p = price(0.0, 100.0, 100.0, 1.0, 0.2).unwrap();
        // ATM with r = 0: call and put coincide
        assert_abs_diff_eq!(p.call, p.put, epsilon = 1e-12);
        assert!(p.call > 0.0);
    }

    #[test]
    fn test_call_increases_with_volatility() {
        let low = price(0.05, 100.0, 100.0, 1.0, 0.1).unwrap();
        let high = price(0.05, 100.0, 100.0, 1.0, 0.4).unwrap();
        assert!(high.call > low.call);
        assert!(high.put > low.put);
    }

    #[test]
    fn test_huge_volatility_prices_bounded() {
        // σ = 50 (5000%): call → S, put → K·e^(-rT)
        let p = price(0.05, 100.0, 100.0, 1.0, 50.0).unwrap();
        assert_abs_diff_eq!(p.call, 100.0, epsilon = 1e-6);
        assert_abs_diff_eq!(p.put, 100.0 * (-0.05_f64).exp(), epsilon = 1e-6);
    }

    // ==========================================================
    // Intrinsic value limit (σ → 0⁺)
    // ==========================================================

    #[test]
    fn test_tiny_volatility_itm_call() {
        let p = price(0.05, 110.0, 100.0, 1.0, 1e-6).unwrap();
        let intrinsic = 110.0 - 100.0 * (-0.05_f64).exp();
        assert_abs_diff_eq!(p.call, intrinsic, epsilon = 1e-9);
        assert_abs_diff_eq!(p.put, 0.0, epsilon = 1e-9);
        assert_eq!(p.rounded(2).call, 14.88);
        assert_eq!(p.rounded(2).put, 0.0);
    }

    #[test]
    fn test_tiny_volatility_itm_put() {
        let p = price(0.05, 100.0, 200.0, 1.0, 1e-6).unwrap();
        let intrinsic = 200.0 * (-0.05_f64).exp() - 100.0;
        assert_abs_diff_eq!(p.call, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.put, intrinsic, epsilon = 1e-9);
    }

    // ==========================================================
    // Error surfacing
    // ==========================================================

    #[test]
    fn test_zero_spot_rejected() {
        let err = price(0.05, 0.0, 100.0, 1.0, 0.2).unwrap_err();
        assert_eq!(
            err,
            AnalyticalError::InvalidInput(InputError::InvalidSpot { spot: 0.0 })
        );
    }

    #[test]
    fn test_each_parameter_named() {
        let cases = [
            (price(0.05, 100.0, 0.0, 1.0, 0.2), "strike"),
            (price(0.05, 100.0, 100.0, -1.0, 0.2), "expiry"),
            (price(0.05, 100.0, 100.0, 1.0, -0.2), "volatility"),
            (price(f64::NAN, 100.0, 100.0, 1.0, 0.2), "rate"),
        ];
        for (result, name) in cases {
            match result {
                Err(AnalyticalError::InvalidInput(err)) => assert_eq!(err.parameter(), name),
                other => panic!("expected invalid {}, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_discount_factor_overflow_reported() {
        // exp(1000 * 5) overflows
        let x = inputs(-1000.0, 100.0, 100.0, 5.0, 0.2);
        let err = BlackScholes.price_pair(&x).unwrap_err();
        assert_eq!(
            err,
            AnalyticalError::NumericOverflow {
                quantity: "discount factor",
                value: f64::INFINITY,
            }
        );
    }

    #[test]
    fn test_price_overflow_reported() {
        // Finite discount factor, but K·e^(-rT) overflows
        let x = inputs(-700.0, 1.0, 1e10, 1.0, 0.2);
        assert!(BlackScholes.discount_factor(&x).is_ok());
        let err = BlackScholes.price_pair(&x).unwrap_err();
        assert!(matches!(err, AnalyticalError::NumericOverflow { .. }));
    }

    #[test]
    fn test_squared_volatility_overflow_reported() {
        // σ² overflows above ~1.34e154, which would send d1 and d2 to +inf
        // together and return a finite but wrong pair
        let err = price(0.05, 100.0, 100.0, 1.0, 1e160).unwrap_err();
        assert_eq!(
            err,
            AnalyticalError::NumericOverflow {
                quantity: "d1",
                value: f64::INFINITY,
            }
        );
    }

    #[test]
    fn test_large_volatility_below_overflow_reaches_limit() {
        let p = price(0.05, 100.0, 100.0, 1.0, 1e153).unwrap();
        assert_abs_diff_eq!(p.call, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.put, 100.0 * (-0.05_f64).exp(), epsilon = 1e-9);
    }

    #[test]
    fn test_extreme_moneyness_is_a_valid_limit() {
        // ln(S/K) = +inf gives d1 = d2 = +inf: call = S - K·e^(-rT), put = 0
        let p = price(0.0, 1e300, 1e-300, 1.0, 0.2).unwrap();
        assert_eq!(p.call, 1e300);
        assert_eq!(p.put, 0.0);
    }

    #[test]
    fn test_overflow_maps_to_pricing_error() {
        let x = inputs(-1000.0, 100.0, 100.0, 5.0, 0.2);
        let err = Priceable::price(&BlackScholes, &x).unwrap_err();
        assert!(matches!(err, PricingError::NumericOverflow(_)));
    }

    // ==========================================================
    // Property-based tests
    // ==========================================================

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_put_call_parity(
                rate in 0.0f64..0.5,
                spot in 1.0f64..1000.0,
                strike in 1.0f64..1000.0,
                expiry in 0.01f64..5.0,
                vol in 0.01f64..3.0,
            ) {
                let p = price(rate, spot, strike, expiry, vol).unwrap();
                let forward_gap = spot - strike * (-rate * expiry).exp();
                prop_assert!(
                    (p.call - p.put - forward_gap).abs() < 1e-9,
                    "parity violated: C={}, P={}, S-Ke^-rT={}",
                    p.call, p.put, forward_gap
                );
            }

            #[test]
            fn test_prices_non_negative(
                rate in 0.0f64..0.5,
                spot in 1.0f64..1000.0,
                strike in 1.0f64..1000.0,
                expiry in 0.01f64..5.0,
                vol in 0.01f64..3.0,
            ) {
                let p = price(rate, spot, strike, expiry, vol).unwrap();
                // Cancellation can leave a few ulps below zero
                prop_assert!(p.call >= -1e-10, "call = {}", p.call);
                prop_assert!(p.put >= -1e-10, "put = {}", p.put);
            }

            #[test]
            fn test_prices_within_no_arbitrage_bounds(
                rate in 0.0f64..0.5,
                spot in 1.0f64..1000.0,
                strike in 1.0f64..1000.0,
                expiry in 0.01f64..5.0,
                vol in 0.01f64..3.0,
            ) {
                let p = price(rate, spot, strike, expiry, vol).unwrap();
                let pv_strike = strike * (-rate * expiry).exp();
                prop_assert!(p.call <= spot + 1e-9);
                prop_assert!(p.put <= pv_strike + 1e-9);
                prop_assert!(p.call >= (spot - pv_strike).max(0.0) - 1e-9);
            }
        }
    }
}
