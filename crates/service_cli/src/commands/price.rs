//! Price command implementation
//!
//! Prices a European call and put at a single set of inputs.

use std::io::Write;

use pricer_models::analytical::BlackScholes;
use tracing::info;

use super::InputArgs;
use crate::config::{OutputFormat, PricerConfig};
use crate::render;
use crate::Result;

/// Run the price command
pub fn run(config: &PricerConfig, args: &InputArgs, format: Option<OutputFormat>) -> Result<()> {
    let format = format.unwrap_or(config.output_format);
    let inputs = args.resolve(config)?;

    info!("Pricing European options...");
    let price = BlackScholes.price_pair(&inputs)?;
    info!(call = price.call, put = price.put, "Pricing complete");

    let out = render::render_price(&inputs, &price, format)?;
    std::io::stdout().lock().write_all(out.as_bytes())?;
    Ok(())
}
