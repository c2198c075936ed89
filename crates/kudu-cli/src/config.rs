//! TOML input files read by the commands.
//!
//! ```toml
//! [bond]
//! maturity = "2030-01-31"
//! coupon_rate = 0.08
//! coupon_dates = [[1, 31], [7, 31]]
//!
//! [trade]
//! settle = "2025-03-04"
//! ytm = 0.085
//! ```

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use kudu_core::calendars::HolidayCalendar;
use kudu_core::types::{Currency, Date};
use kudu_curves::FloatRateIndex;
use kudu_products::rates::SwapDirection;
use kudu_products::sa_market::{JseBond, DEFAULT_BOOKS_CLOSE_DAYS};

use crate::error::{CliError, CliResult};

/// Reads and parses a TOML input file.
pub fn load<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// `[bond]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct BondInput {
    /// Final coupon and redemption date
    pub maturity: Date,

    /// Annual coupon rate as a decimal
    pub coupon_rate: f64,

    /// The two (month, day) coupon dates
    pub coupon_dates: [[u32; 2]; 2],

    /// Calendar days between books close and the coupon date
    #[serde(default = "default_books_close_days")]
    pub books_close_days: i64,

    /// Business day calendar name
    #[serde(default = "default_calendar")]
    pub calendar: HolidayCalendar,

    /// Payment currency
    #[serde(default)]
    pub currency: Currency,
}

fn default_books_close_days() -> i64 {
    DEFAULT_BOOKS_CLOSE_DAYS
}

fn default_calendar() -> HolidayCalendar {
    HolidayCalendar::south_africa()
}

impl BondInput {
    /// Builds the bond terms.
    pub fn to_bond(&self) -> anyhow::Result<JseBond> {
        let [[m1, d1], [m2, d2]] = self.coupon_dates;
        Ok(JseBond::new(self.maturity, self.coupon_rate, (m1, d1), (m2, d2))?
            .with_books_close_days(self.books_close_days)
            .with_calendar(self.calendar.clone())
            .with_currency(self.currency))
    }
}

/// `[trade]` table: a settlement date and the bond's yield.
#[derive(Debug, Clone, Deserialize)]
pub struct TradeInput {
    /// Settlement date
    pub settle: Date,

    /// Yield to maturity as a decimal
    pub ytm: f64,
}

/// A curve given as parallel arrays of pillar dates and rates.
#[derive(Debug, Clone, Deserialize)]
pub struct CurveInput {
    /// Pillar dates, strictly increasing
    pub dates: Vec<Date>,

    /// One rate per pillar
    pub rates: Vec<f64>,
}

/// `[swap]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct SwapInput {
    /// `PayFixed` or `ReceiveFixed`
    #[serde(default = "default_direction")]
    pub direction: SwapDirection,

    /// Floating index as `CCY.NAME.TENOR`
    #[serde(default = "default_index")]
    pub index: String,

    /// Spread over the index already on the swap
    #[serde(default)]
    pub spread: f64,
}

fn default_direction() -> SwapDirection {
    SwapDirection::PayFixed
}

fn default_index() -> String {
    FloatRateIndex::jibar_3m().to_string()
}

impl SwapInput {
    /// Parses the floating index.
    pub fn index(&self) -> CliResult<FloatRateIndex> {
        self.index.parse().map_err(|e| CliError::InvalidField {
            field: "swap.index",
            message: format!("{e}"),
        })
    }
}

/// `[future]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct FutureInput {
    /// Delivery date
    pub forward_date: Date,

    /// Simple Actual/365 repo rate
    pub repo: f64,

    /// Settlement calendar, defaulting to the bond's
    pub calendar: Option<HolidayCalendar>,
}

/// Input of `kudu spot`.
#[derive(Debug, Clone, Deserialize)]
pub struct SpotInput {
    /// Bond terms
    pub bond: BondInput,
    /// Settlement and yield
    pub trade: TradeInput,
}

/// Input of `kudu asset-swap`.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetSwapInput {
    /// Bond terms
    pub bond: BondInput,
    /// Settlement and yield
    pub trade: TradeInput,
    /// Swap terms
    #[serde(default = "default_swap")]
    pub swap: SwapInput,
    /// Continuously compounded Actual/365 zero rates
    pub discount_curve: CurveInput,
    /// Forward rates of the swap's index
    pub forecast_curve: CurveInput,
}

fn default_swap() -> SwapInput {
    SwapInput {
        direction: default_direction(),
        index: default_index(),
        spread: 0.0,
    }
}

/// Input of `kudu forward-price`.
#[derive(Debug, Clone, Deserialize)]
pub struct ForwardPriceInput {
    /// Underlying bond terms
    pub bond: BondInput,
    /// Settlement and yield
    pub trade: TradeInput,
    /// Future terms and repo
    pub future: FutureInput,
}
