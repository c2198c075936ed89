//! Asset swap command implementation.
//!
//! Builds the swap against the forecast curve, then solves its par spread.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use kudu_analytics::{asset_swap_measures, create_asset_swap};
use kudu_curves::ForecastCurve;

use crate::cli::OutputFormat;
use crate::config::{load, AssetSwapInput};
use crate::output::print_results;

/// Arguments for the asset-swap command.
#[derive(Args, Debug)]
pub struct AssetSwapArgs {
    /// TOML file with [bond], [trade], [swap], [discount_curve] and [forecast_curve] tables
    pub input: PathBuf,
}

/// Execute the asset-swap command.
pub fn execute(args: AssetSwapArgs, format: OutputFormat) -> Result<()> {
    let input: AssetSwapInput = load(&args.input)?;
    let bond = input.bond.to_bond()?;
    let index = input.swap.index()?;
    let settle = input.trade.settle;

    let forecast = ForecastCurve::new(
        settle,
        index.clone(),
        input.forecast_curve.dates.clone(),
        input.forecast_curve.rates.clone(),
    )?;
    let calendar = bond.calendar().clone();
    let currency = bond.currency();
    let swap = create_asset_swap(
        input.swap.direction,
        bond,
        settle,
        index,
        input.swap.spread,
        calendar,
        currency,
        &forecast,
    )?;
    info!(
        "{} asset swap with {} floating and {} fixed payments",
        swap.direction(),
        swap.floating_payment_dates().len(),
        swap.fixed_payment_dates().len()
    );

    let store = asset_swap_measures(
        &swap,
        settle,
        input.trade.ytm,
        &input.discount_curve.dates,
        &input.discount_curve.rates,
        &input.forecast_curve.dates,
        &input.forecast_curve.rates,
    )?;
    print_results("Asset swap", &store, format)
}
