//! CLI configuration management.
//!
//! Handles loading configuration from a TOML file with environment
//! variable overrides. Command-line flags take precedence over both.

use std::path::Path;

use clap::ValueEnum;
use pricer_risk::{AxisSpec, GridError, GridSpec};
use serde::Deserialize;
use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Validation errors, one message per problem
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Output format for rendered results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text tables
    #[default]
    Table,
    /// Pretty-printed JSON document
    Json,
    /// Comma-separated values, one block per table
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ConfigError::Validation(vec![format!(
                "Invalid output_format '{}'. Valid values: table, json, csv",
                s
            )])),
        }
    }
}

/// Default inputs used when a flag is not given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DefaultInputs {
    /// Risk-free interest rate
    pub rate: f64,
    /// Spot price
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to maturity in years
    pub maturity: f64,
    /// Volatility as a fraction
    pub volatility: f64,
}

impl Default for DefaultInputs {
    fn default() -> Self {
        Self {
            rate: 0.05,
            spot: 100.0,
            strike: 100.0,
            maturity: 1.0,
            volatility: 0.2,
        }
    }
}

/// Closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Range {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
}

impl Range {
    /// Creates a new range.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `value` lies within the range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Recommended host-side ranges for each input.
///
/// These are a usability policy, not a mathematical domain: the pricer
/// accepts any positive spot, strike, maturity and volatility.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct InputBounds {
    /// Risk-free rate range
    pub rate: Range,
    /// Spot price range
    pub spot: Range,
    /// Strike price range
    pub strike: Range,
    /// Maturity range in years
    pub maturity: Range,
    /// Volatility range (fraction)
    pub volatility: Range,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            rate: Range::new(0.0, 0.5),
            spot: Range::new(0.0, 10_000.0),
            strike: Range::new(0.0, 10_000.0),
            maturity: Range::new(0.0, 5.0),
            volatility: Range::new(0.0, 100.0),
        }
    }
}

impl InputBounds {
    /// Messages for every input outside its range.
    pub fn violations(&self, inputs: &DefaultInputs) -> Vec<String> {
        let checks = [
            ("rate", inputs.rate, self.rate),
            ("spot", inputs.spot, self.spot),
            ("strike", inputs.strike, self.strike),
            ("maturity", inputs.maturity, self.maturity),
            ("volatility", inputs.volatility, self.volatility),
        ];
        checks
            .iter()
            .filter(|(_, value, range)| !range.contains(*value))
            .map(|(name, value, range)| {
                format!("{} {} outside [{}, {}]", name, value, range.min, range.max)
            })
            .collect()
    }
}

/// One grid axis as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AxisConfig {
    /// First factor
    pub start: f64,
    /// Increment between factors
    pub step: f64,
    /// Number of points
    pub points: usize,
}

impl From<AxisSpec> for AxisConfig {
    fn from(spec: AxisSpec) -> Self {
        Self {
            start: spec.start(),
            step: spec.step(),
            points: spec.points(),
        }
    }
}

/// Sensitivity grid layout.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Spot axis (columns)
    pub spot: AxisConfig,
    /// Volatility axis (rows)
    pub volatility: AxisConfig,
    /// Price cells at the two-decimal axis labels
    pub round_axes_before_pricing: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            spot: AxisSpec::spot_default().into(),
            volatility: AxisSpec::volatility_default().into(),
            round_axes_before_pricing: false,
        }
    }
}

impl GridConfig {
    /// Validated grid layout.
    pub fn to_spec(&self) -> Result<GridSpec, GridError> {
        Ok(GridSpec {
            spot: AxisSpec::new("spot", self.spot.start, self.spot.step, self.spot.points)?,
            volatility: AxisSpec::new(
                "volatility",
                self.volatility.start,
                self.volatility.step,
                self.volatility.points,
            )?,
            round_axes_before_pricing: self.round_axes_before_pricing,
        })
    }
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PricerConfig {
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,

    /// Output format
    pub output_format: OutputFormat,

    /// Reject inputs outside `bounds` instead of warning
    pub enforce_bounds: bool,

    /// Inputs used when a flag is omitted
    pub defaults: DefaultInputs,

    /// Recommended input ranges
    pub bounds: InputBounds,

    /// Grid layout
    pub grid: GridConfig,
}

impl Default for PricerConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            output_format: OutputFormat::default(),
            enforce_bounds: false,
            defaults: DefaultInputs::default(),
            bounds: InputBounds::default(),
            grid: GridConfig::default(),
        }
    }
}

impl PricerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from `path` if it exists, otherwise return the defaults.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Recognised keys: `BSGRID_LOG_LEVEL`, `BSGRID_FORMAT`. An unparseable
    /// format leaves the current value in place.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(log_level) = lookup("BSGRID_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(format) = lookup("BSGRID_FORMAT") {
            self.output_format = format.parse().unwrap_or(self.output_format);
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        let ranges = [
            ("rate", self.bounds.rate),
            ("spot", self.bounds.spot),
            ("strike", self.bounds.strike),
            ("maturity", self.bounds.maturity),
            ("volatility", self.bounds.volatility),
        ];
        for (name, range) in ranges {
            if !(range.min <= range.max) {
                errors.push(format!(
                    "bounds.{} has min {} greater than max {}",
                    name, range.min, range.max
                ));
            }
        }

        if let Err(e) = self.grid.to_spec() {
            errors.push(e.to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}
