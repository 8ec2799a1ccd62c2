//! Trait for models that price a European call/put pair.

use crate::types::{PriceResult, PricingError, PricingInputs};

/// A model that prices European call and put options from validated inputs.
///
/// # Design Philosophy
///
/// Implementations are pure: the same inputs always produce the same
/// result, and pricing never mutates the model. Generic callers use static
/// dispatch (`P: Priceable`).
///
/// ```
/// use pricer_core::traits::Priceable;
/// use pricer_core::types::{PriceResult, PricingError, PricingInputs};
///
/// /// Intrinsic value only, ignoring discounting and volatility.
/// struct Intrinsic;
///
/// impl Priceable for Intrinsic {
///     fn price(&self, inputs: &PricingInputs) -> Result<PriceResult, PricingError> {
///         let forward_gap = inputs.spot() - inputs.strike();
///         Ok(PriceResult::new(forward_gap.max(0.0), (-forward_gap).max(0.0)))
///     }
/// }
///
/// let inputs = PricingInputs::new(0.0, 110.0, 100.0, 1.0, 0.2).unwrap();
/// let result = Intrinsic.price(&inputs).unwrap();
/// assert_eq!(result, PriceResult::new(10.0, 0.0));
/// ```
pub trait Priceable {
    /// Calculate the call and put prices for `inputs`.
    ///
    /// # Invariants
    /// - On success both prices are finite
    /// - The method must be pure (no side effects, deterministic)
    fn price(&self, inputs: &PricingInputs) -> Result<PriceResult, PricingError>;
}
