//! Kudu CLI - JSE bond and asset swap pricing from TOML input files.
//!
//! # Usage
//!
//! ```bash
//! # Spot measures of a bond at a yield
//! kudu spot demos/spot.toml
//!
//! # Par asset swap spread
//! kudu asset-swap demos/asset_swap.toml
//!
//! # Bond future forward price, as JSON
//! kudu --format json forward-price demos/forward_price.toml
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let format = cli.format;

    match cli.command {
        Commands::AssetSwap(args) => commands::asset_swap::execute(args, format)?,
        Commands::ForwardPrice(args) => commands::forward_price::execute(args, format)?,
        Commands::Spot(args) => commands::spot::execute(args, format)?,
    }

    Ok(())
}
