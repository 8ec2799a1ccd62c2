//! Standard normal distribution function.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//!
//! Built on the complementary error function from `statrs`, which is
//! accurate to full double precision, so Φ(x) and Φ(-x) both stay
//! accurate deep into the tails.

use statrs::function::erf::erfc;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) using the complementary error function.
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The probability P(X <= x) for standard normal X, in range [0, 1].
/// Infinite arguments map to the limits 0 and 1; NaN propagates.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// let cdf_0 = norm_cdf(0.0);
/// assert!((cdf_0 - 0.5).abs() < 1e-15);
///
/// let cdf_neg = norm_cdf(-3.0);
/// assert!(cdf_neg < 0.01);
///
/// let cdf_pos = norm_cdf(3.0);
/// assert!(cdf_pos > 0.99);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x == f64::INFINITY {
        return 1.0;
    }
    if x == f64::NEG_INFINITY {
        return 0.0;
    }
    // Φ(x) = 0.5 * erfc(-x / sqrt(2))
    0.5 * erfc(-x / SQRT_2)
}
