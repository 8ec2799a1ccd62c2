//! Decimal rounding for display values.
//!
//! Prices and axis labels are computed at full precision and rounded only
//! when handed to a presentation layer, so rounding error never feeds back
//! into a computation.

/// Rounds `value` to `decimals` places, halves away from zero.
///
/// Non-finite values pass through unchanged. A result that rounds to zero
/// is always `+0.0`, never `-0.0`.
///
/// # Examples
/// ```
/// use pricer_core::math::round_to;
///
/// assert_eq!(round_to(10.450583572185565, 2), 10.45);
/// assert_eq!(round_to(2.5, 0), 3.0);
/// assert_eq!(round_to(-1.005, 1), -1.0);
/// ```
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(decimals as i32);
    let scaled = value * scale;
    // Beyond 2^52 every f64 is already an integer at this scale
    if !scaled.is_finite() || scaled.abs() >= 4_503_599_627_370_496.0 {
        return value;
    }
    // Adding +0.0 maps -0.0 to +0.0
    scaled.round() / scale + 0.0
}

/// Rounds `value` to two decimal places (cents).
#[inline]
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}
