//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

/// Test that rounding helpers are accessible via absolute path.
#[test]
fn test_math_module_exports() {
    use pricer_core::math::rounding::{round2, round_to};

    assert_eq!(round2(1.005_1), 1.01);
    assert_eq!(round_to(1.25, 1), 1.3);
}

/// Test that the pricing trait is usable from outside the crate.
#[test]
fn test_traits_module_exports() {
    use pricer_core::traits::priceable::Priceable;
    use pricer_core::types::error::PricingError;
    use pricer_core::types::inputs::{PriceResult, PricingInputs};

    struct Flat {
        value: f64,
    }

    impl Priceable for Flat {
        fn price(&self, _inputs: &PricingInputs) -> Result<PriceResult, PricingError> {
            Ok(PriceResult::new(self.value, self.value))
        }
    }

    let inputs = PricingInputs::new(0.05, 100.0, 100.0, 1.0, 0.2).unwrap();
    let result = Flat { value: 1.5 }.price(&inputs).unwrap();
    assert_eq!(result.call, 1.5);
    assert_eq!(result.put, 1.5);
}

/// Test that re-exports at the `types` level match the module paths.
#[test]
fn test_types_reexports() {
    use pricer_core::types::{InputError, PriceResult, PricingError, PricingInputs};

    let err: PricingError = InputError::InvalidSpot { spot: 0.0 }.into();
    assert!(matches!(err, PricingError::InvalidInput(_)));

    let inputs: pricer_core::types::inputs::PricingInputs =
        PricingInputs::new(0.0, 1.0, 1.0, 1.0, 1.0).unwrap();
    assert_eq!(inputs.spot(), 1.0);

    let _: pricer_core::types::inputs::PriceResult = PriceResult::new(0.0, 0.0);
}
