//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{AssetSwapArgs, ForwardPriceArgs, SpotArgs};

/// Kudu - JSE fixed income valuation CLI
#[derive(Parser)]
#[command(name = "kudu")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Log schedule construction and solves to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Solve the par asset swap spread of a bond
    AssetSwap(AssetSwapArgs),

    /// Forward price of a JSE bond future
    ForwardPrice(ForwardPriceArgs),

    /// All-in, clean and accrued of a bond at a yield
    Spot(SpotArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
}
