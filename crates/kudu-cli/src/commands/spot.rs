//! Spot command implementation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use kudu_analytics::SpotMeasures;

use crate::cli::OutputFormat;
use crate::config::{load, SpotInput};
use crate::output::print_results;

/// Arguments for the spot command.
#[derive(Args, Debug)]
pub struct SpotArgs {
    /// TOML file with [bond] and [trade] tables
    pub input: PathBuf,
}

/// Execute the spot command.
pub fn execute(args: SpotArgs, format: OutputFormat) -> Result<()> {
    let input: SpotInput = load(&args.input)?;
    let bond = input.bond.to_bond()?;
    info!(
        "pricing bond maturing {} at {} for settlement {}",
        bond.maturity_date(),
        input.trade.ytm,
        input.trade.settle
    );

    let store = bond.spot_measures(input.trade.settle, input.trade.ytm)?;
    print_results("Spot measures", &store, format)
}
