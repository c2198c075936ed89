//! Asset swap schedule construction and par spread solve.
//!
//! The floating leg is rolled backward from the bond's maturity by the index
//! tenor, with a first period running from settlement. The fixed leg steps
//! forward from the bond's coupon cycle in six-month increments. Both legs
//! are modified-following adjusted on the swap calendar.

use kudu_core::calendars::{BusinessDayConvention, Calendar, HolidayCalendar};
use kudu_core::daycounts::{Act365Fixed, DayCount};
use kudu_core::types::{CashFlow, Currency, Date, Tenor};
use kudu_curves::{
    DatesAndRates, FloatRateIndex, FloatingRateSource, ForecastCurve, MarketObservable,
    PresentValue,
};
use kudu_products::rates::{AssetSwap, AssetSwapTerms, SwapDirection};
use kudu_products::sa_market::JseBond;
use kudu_products::Product;

use crate::bond_spot::{self, SpotMeasures};
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::results::ResultStore;

/// Result keys written by [`asset_swap_measures`].
pub mod keys {
    /// Rounded all-in price of the bond at settlement.
    pub const ROUNDED_AIP: &str = "roundedAip";
    /// Present value of the upfront `aip - 100` exchange.
    pub const PV_FIRST_CF: &str = "pvFirstCF";
    /// Present value of the swap cash flows.
    pub const NUMERATOR_CFS: &str = "numeratorCFs";
    /// Present value of the floating leg annuity.
    pub const DENOMINATOR_CFS: &str = "denominatorCFs";
    /// Solved spread over the floating index.
    pub const ASSET_SWAP_SPREAD: &str = "assetSwapSpread";
}

/// Calendar days between trade date and settlement.
const SETTLEMENT_LAG_DAYS: i64 = 3;

/// Months between the bond's coupon dates.
const COUPON_FREQUENCY_MONTHS: i32 = 6;

const NOMINAL: f64 = 100.0;

/// Floating leg dates of an asset swap.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingSchedule {
    /// Fixing dates; the first is the settlement date.
    pub reset_dates: Vec<Date>,
    /// Payment dates, the last being the adjusted maturity.
    pub payment_dates: Vec<Date>,
    /// Actual/365 year fraction of each period.
    pub accrual_fractions: Vec<f64>,
}

/// Builds the floating leg backward from `maturity`.
///
/// Each unadjusted reset is one tenor before the previous unadjusted reset,
/// so a day clamped at a short month end stays clamped for earlier periods.
/// Periods are collected while the unadjusted reset is not before `settle`,
/// and the earliest period is then stretched back to start on `settle`.
///
/// # Errors
///
/// `InvalidArgument` for a non-positive tenor or `settle` not before
/// `maturity`, `InvalidSchedule` if no whole period fits.
pub fn floating_schedule(
    maturity: Date,
    settle: Date,
    tenor: Tenor,
    calendar: &HolidayCalendar,
) -> AnalyticsResult<FloatingSchedule> {
    if tenor.amount() <= 0 {
        return Err(AnalyticsError::invalid_argument(format!(
            "floating tenor {tenor} must be positive"
        )));
    }
    if settle >= maturity {
        return Err(AnalyticsError::invalid_argument(format!(
            "settlement {settle} is not before maturity {maturity}"
        )));
    }

    let mf = BusinessDayConvention::ModifiedFollowing;
    let mut periods = Vec::new();
    let mut payment = maturity;
    let mut reset = payment.subtract_tenor(tenor)?;
    while reset >= settle {
        periods.push((calendar.adjust(reset, mf), calendar.adjust(payment, mf)));
        payment = reset;
        reset = payment.subtract_tenor(tenor)?;
    }
    if periods.is_empty() {
        return Err(AnalyticsError::invalid_schedule(format!(
            "no {tenor} period between settlement {settle} and maturity {maturity}"
        )));
    }
    periods.reverse();
    periods[0].0 = settle;

    let (reset_dates, payment_dates): (Vec<Date>, Vec<Date>) = periods.into_iter().unzip();
    let accrual_fractions = reset_dates
        .iter()
        .zip(&payment_dates)
        .map(|(reset, pay)| Act365Fixed.year_fraction(*reset, *pay))
        .collect();

    Ok(FloatingSchedule {
        reset_dates,
        payment_dates,
        accrual_fractions,
    })
}

/// Fixed leg payment dates of an asset swap on `bond` settling on `settle`.
///
/// Steps six months at a time from the coupon date following the last
/// coupon date on or before `settle`, starting one step after it, while the
/// unadjusted date does not pass maturity. Each step rolls from the previous
/// unadjusted date, so a coupon day clamped to a 30-day month carries on.
pub fn fixed_schedule(
    bond: &JseBond,
    settle: Date,
    calendar: &HolidayCalendar,
) -> AnalyticsResult<Vec<Date>> {
    let lcd = bond.last_coupon_date(settle)?;
    let ncd = bond.next_coupon_date(lcd)?;
    let maturity = bond.maturity_date();

    let mut dates = Vec::new();
    let mut date = ncd.add_months(COUPON_FREQUENCY_MONTHS)?;
    while date <= maturity {
        dates.push(calendar.adjust(date, BusinessDayConvention::ModifiedFollowing));
        date = date.add_months(COUPON_FREQUENCY_MONTHS)?;
    }
    Ok(dates)
}

/// Builds an asset swap on `bond` from settlement, with forecast fixings
/// read off `forecast` for every reset date.
///
/// # Errors
///
/// `InvalidArgument` if `forecast` does not project `index`, plus any
/// schedule or curve error.
#[allow(clippy::too_many_arguments)]
pub fn create_asset_swap(
    direction: SwapDirection,
    bond: JseBond,
    settle: Date,
    index: FloatRateIndex,
    spread: f64,
    calendar: HolidayCalendar,
    currency: Currency,
    forecast: &dyn FloatingRateSource,
) -> AnalyticsResult<AssetSwap> {
    let observable = MarketObservable::Rate(index.clone());
    if forecast.observable() != observable {
        return Err(AnalyticsError::invalid_argument(format!(
            "forecast curve projects {} but the swap floats on {observable}",
            forecast.observable()
        )));
    }

    let floating = floating_schedule(bond.maturity_date(), settle, index.tenor(), &calendar)?;
    let fixed_payment_dates = fixed_schedule(&bond, settle, &calendar)?;
    let fixings = floating
        .reset_dates
        .iter()
        .map(|reset| forecast.forward_rate(*reset))
        .collect::<Result<Vec<f64>, _>>()?;

    log::debug!(
        "asset swap on {} settling {settle}: {} floating and {} fixed payments",
        bond.maturity_date(),
        floating.payment_dates.len(),
        fixed_payment_dates.len()
    );

    let terms = AssetSwapTerms {
        direction,
        index,
        bond,
        reset_dates: floating.reset_dates,
        floating_payment_dates: floating.payment_dates,
        fixed_payment_dates,
        accrual_fractions: floating.accrual_fractions,
        spread,
        calendar,
        currency,
    };
    Ok(AssetSwap::new(terms)?.with_forecast_fixings(fixings)?)
}

/// Solves the par asset swap spread of `swap`'s bond at `settle`.
///
/// Both curves are anchored at the trade date, three calendar days before
/// settlement adjusted modified-following. The swap is rebuilt from its own
/// terms against the forecast curve and valued at the trade date. With
/// `PV(x)` discounting on the discount curve:
///
/// ```text
/// spread = (PV(roundedAip - 100 at settle) + PV(swap cash flows))
///        / PV(-100 * accrual on each floating payment date)
/// ```
///
/// # Errors
///
/// `DivisionByZero` if the floating annuity discounts to zero or a
/// non-finite value, plus any curve, schedule or pricing error.
pub fn asset_swap_measures(
    swap: &AssetSwap,
    settle: Date,
    ytm: f64,
    discount_dates: &[Date],
    discount_rates: &[f64],
    forecast_dates: &[Date],
    forecast_rates: &[f64],
) -> AnalyticsResult<ResultStore> {
    let trade_date = swap.calendar().adjust(
        settle - SETTLEMENT_LAG_DAYS,
        BusinessDayConvention::ModifiedFollowing,
    );
    let currency = swap.currency();
    let discount = DatesAndRates::new(
        currency,
        trade_date,
        discount_dates.to_vec(),
        discount_rates.to_vec(),
    )?;
    let forecast = ForecastCurve::new(
        trade_date,
        swap.index().clone(),
        forecast_dates.to_vec(),
        forecast_rates.to_vec(),
    )?;

    let mut valued = create_asset_swap(
        swap.direction(),
        swap.bond().clone(),
        settle,
        swap.index().clone(),
        swap.spread(),
        swap.calendar().clone(),
        currency,
        &forecast,
    )?;
    valued.set_value_date(trade_date);
    valued.inject_forecast_fixings()?;
    let numerator = valued.cashflows()?.pv(&discount)?;

    let annuity: Vec<CashFlow> = valued
        .floating_payment_dates()
        .iter()
        .zip(valued.accrual_fractions())
        .filter(|(pay, _)| **pay > trade_date)
        .map(|(pay, accrual)| CashFlow::new(*pay, -NOMINAL * accrual, currency))
        .collect();
    let denominator = annuity.pv(&discount)?;

    let rounded_aip = swap
        .bond()
        .spot_measures(settle, ytm)?
        .get_scalar(bond_spot::keys::ROUNDED_AIP)?;
    let first_cf = CashFlow::new(settle, rounded_aip - NOMINAL, currency).pv(&discount)?;

    if denominator == 0.0 || !denominator.is_finite() {
        return Err(AnalyticsError::DivisionByZero(format!(
            "floating annuity discounts to {denominator}"
        )));
    }
    let spread = (first_cf + numerator) / denominator;

    log::debug!(
        "asset swap spread at {settle} (trade {trade_date}): {spread:.8} \
         (first {first_cf:.6}, numerator {numerator:.6}, denominator {denominator:.6})"
    );

    let mut store = ResultStore::new();
    store.add(keys::ROUNDED_AIP, rounded_aip)?;
    store.add(keys::PV_FIRST_CF, first_cf)?;
    store.add(keys::NUMERATOR_CFS, numerator)?;
    store.add(keys::DENOMINATOR_CFS, denominator)?;
    store.add(keys::ASSET_SWAP_SPREAD, spread)?;
    Ok(store)
}
