//! Check command implementation
//!
//! Validates the configuration and reports the effective settings.

use std::path::Path;

use pricer_models::analytical::BlackScholes;
use tracing::info;

use crate::config::PricerConfig;
use crate::render::currency;
use crate::Result;

/// Run the check command
pub fn run(config_path: &Path, config: &PricerConfig) -> Result<()> {
    info!("Checking configuration...");
    if config_path.exists() {
        info!("  Config file: {}", config_path.display());
    } else {
        info!("  Config file: {} (not found, using defaults)", config_path.display());
    }

    config.validate()?;

    let d = &config.defaults;
    info!("  Log level: {}", config.log_level);
    info!("  Output format: {:?}", config.output_format);
    info!(
        "  Defaults: S={} K={} T={} σ={} r={}",
        d.spot, d.strike, d.maturity, d.volatility, d.rate
    );
    info!(
        "  Bounds: {} (enforce_bounds = {})",
        if config.bounds.violations(d).is_empty() {
            "defaults within range"
        } else {
            "defaults outside range"
        },
        config.enforce_bounds
    );

    let spec = config.grid.to_spec()?;
    info!(
        "  Grid: {} volatility × {} spot points, round_axes_before_pricing = {}",
        spec.volatility.points(),
        spec.spot.points(),
        spec.round_axes_before_pricing
    );

    // Smoke-price the configured defaults end to end
    let inputs = super::InputArgs::default().resolve(config)?;
    let price = BlackScholes.price_pair(&inputs)?;
    info!(
        "  Pricer: call {} / put {} at defaults",
        currency(price.call),
        currency(price.put)
    );

    info!("Configuration OK");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    #[test]
    fn test_check_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bsgrid.toml");
        assert!(run(&path, &PricerConfig::default()).is_ok());
    }

    #[test]
    fn test_check_reports_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = PricerConfig::default();
        config.grid.volatility.start = 0.0;
        let err = run(&dir.path().join("bsgrid.toml"), &config).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_check_rejects_invalid_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = PricerConfig::default();
        config.defaults.strike = -1.0;
        let err = run(&dir.path().join("bsgrid.toml"), &config).unwrap_err();
        assert!(matches!(err, CliError::Input(_)));
    }
}
