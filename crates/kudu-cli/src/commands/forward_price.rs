//! Forward price command implementation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use kudu_analytics::forward_price;
use kudu_products::sa_market::JseBondFuture;

use crate::cli::OutputFormat;
use crate::config::{load, ForwardPriceInput};
use crate::output::print_results;

/// Arguments for the forward-price command.
#[derive(Args, Debug)]
pub struct ForwardPriceArgs {
    /// TOML file with [bond], [trade] and [future] tables
    pub input: PathBuf,
}

/// Execute the forward-price command.
pub fn execute(args: ForwardPriceArgs, format: OutputFormat) -> Result<()> {
    let input: ForwardPriceInput = load(&args.input)?;
    let bond = input.bond.to_bond()?;

    let mut future = JseBondFuture::new(input.future.forward_date, bond);
    if let Some(calendar) = input.future.calendar {
        future = future.with_calendar(calendar);
    }
    info!(
        "forward price to {} from settlement {} at repo {}",
        future.forward_date(),
        input.trade.settle,
        input.future.repo
    );

    let store = forward_price(&future, input.trade.settle, input.trade.ytm, input.future.repo)?;
    print_results("Bond future forward price", &store, format)
}
