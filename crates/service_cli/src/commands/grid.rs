//! Grid command implementation
//!
//! Prices the spot × volatility sensitivity grid around the inputs.

use std::io::Write;
use std::time::Instant;

use pricer_models::analytical::BlackScholes;
use pricer_risk::SensitivityGrid;
use tracing::{debug, info};

use super::InputArgs;
use crate::config::{OutputFormat, PricerConfig};
use crate::render;
use crate::Result;

/// Run the grid command
///
/// `round_axes` forces pricing at the two-decimal axis labels even when the
/// config leaves it off.
pub fn run(
    config: &PricerConfig,
    args: &InputArgs,
    format: Option<OutputFormat>,
    round_axes: bool,
) -> Result<()> {
    let format = format.unwrap_or(config.output_format);
    let inputs = args.resolve(config)?;

    let mut spec = config.grid.to_spec()?;
    spec.round_axes_before_pricing |= round_axes;
    info!(
        rows = spec.volatility.points(),
        cols = spec.spot.points(),
        round_axes = spec.round_axes_before_pricing,
        "Generating sensitivity grid..."
    );

    let price = BlackScholes.price_pair(&inputs)?;

    let start = Instant::now();
    let grid = SensitivityGrid::generate_with(&inputs, &spec, &BlackScholes)?;
    debug!(elapsed_us = start.elapsed().as_micros() as u64, "Grid priced");
    info!("Grid generation complete");

    let out = render::render_grid(&grid, &price, format)?;
    std::io::stdout().lock().write_all(out.as_bytes())?;
    Ok(())
}
