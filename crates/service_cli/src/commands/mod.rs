//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod grid;
pub mod price;

use clap::Args;
use pricer_core::types::PricingInputs;
use tracing::{debug, warn};

use crate::config::{DefaultInputs, PricerConfig};
use crate::{CliError, Result};

/// Option inputs shared by `price` and `grid`.
///
/// Any flag left out falls back to the `[defaults]` section of the config.
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Current asset price
    #[arg(short, long)]
    pub spot: Option<f64>,

    /// Strike price
    #[arg(short = 'k', long)]
    pub strike: Option<f64>,

    /// Time to maturity in years
    #[arg(short = 't', long)]
    pub maturity: Option<f64>,

    /// Volatility as a fraction (0.2 = 20%)
    #[arg(long, visible_alias = "vol")]
    pub volatility: Option<f64>,

    /// Continuously compounded risk-free rate
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: Option<f64>,
}

impl InputArgs {
    /// Merge the flags over the configured defaults.
    pub fn merge(&self, defaults: &DefaultInputs) -> DefaultInputs {
        DefaultInputs {
            rate: self.rate.unwrap_or(defaults.rate),
            spot: self.spot.unwrap_or(defaults.spot),
            strike: self.strike.unwrap_or(defaults.strike),
            maturity: self.maturity.unwrap_or(defaults.maturity),
            volatility: self.volatility.unwrap_or(defaults.volatility),
        }
    }

    /// Resolve the effective pricing inputs.
    ///
    /// Values outside the configured `[bounds]` are logged, or rejected
    /// when `enforce_bounds` is set. Values outside the pricer's domain
    /// are always rejected.
    pub fn resolve(&self, config: &PricerConfig) -> Result<PricingInputs> {
        let merged = self.merge(&config.defaults);
        debug!(
            rate = merged.rate,
            spot = merged.spot,
            strike = merged.strike,
            maturity = merged.maturity,
            volatility = merged.volatility,
            "Resolved inputs"
        );

        let violations = config.bounds.violations(&merged);
        if !violations.is_empty() {
            if config.enforce_bounds {
                return Err(CliError::OutOfRange(violations.join("; ")));
            }
            for violation in &violations {
                warn!("Input outside recommended range: {}", violation);
            }
        }

        PricingInputs::new(
            merged.rate,
            merged.spot,
            merged.strike,
            merged.maturity,
            merged.volatility,
        )
        .map_err(|e| {
            warn!(parameter = e.parameter(), value = e.value(), "Input rejected");
            CliError::from(e)
        })
    }
}
