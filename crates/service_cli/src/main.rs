//! bsgrid - Black-Scholes pricer with a spot × volatility sensitivity grid
//!
//! This is the operational entry point for the pricing library.
//!
//! # Commands
//!
//! - `bsgrid price` - Price a European call and put
//! - `bsgrid grid` - Price the call and put sensitivity grids
//! - `bsgrid check` - Validate configuration
//!
//! # Architecture
//!
//! As the service layer, this crate wires configuration, logging and
//! rendering around `pricer_models` and `pricer_risk`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod render;

pub use error::{CliError, Result};

use commands::InputArgs;
use config::{OutputFormat, PricerConfig};

/// Black-Scholes option pricer CLI
#[derive(Parser)]
#[command(name = "bsgrid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "BSGRID_CONFIG", default_value = "bsgrid.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European call and put
    Price {
        #[command(flatten)]
        inputs: InputArgs,

        /// Output format [default: from config]
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Price the call and put grids over spot and volatility
    Grid {
        #[command(flatten)]
        inputs: InputArgs,

        /// Output format [default: from config]
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Price each cell at the two-decimal axis label
        #[arg(long)]
        round_axes: bool,
    },

    /// Check configuration and report effective settings
    Check,
}

fn init_tracing(verbose: bool, config: &PricerConfig) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = PricerConfig::load_or_default(&cli.config)?.with_env_override();

    init_tracing(cli.verbose, &config);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(config = %cli.config.display(), "Configuration loaded");

    match cli.command {
        Commands::Price { inputs, format } => {
            config.validate()?;
            commands::price::run(&config, &inputs, format)
        }
        Commands::Grid {
            inputs,
            format,
            round_axes,
        } => {
            config.validate()?;
            commands::grid::run(&config, &inputs, format, round_axes)
        }
        Commands::Check => commands::check::run(&cli.config, &config),
    }
}
