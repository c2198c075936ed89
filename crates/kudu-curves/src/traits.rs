//! Curve interfaces consumed by the pricing code.
//!
//! Market data layers own the construction of curves; products and
//! pricing routines only see these two traits.

use kudu_core::types::{Currency, Date};

use crate::error::CurveResult;
use crate::observables::MarketObservable;

/// A source of discount factors in one currency.
pub trait DiscountingSource: Send + Sync {
    /// Date at which discount factors equal one.
    fn anchor_date(&self) -> Date;

    /// Currency of the cash flows this curve discounts.
    fn currency(&self) -> Currency;

    /// Discount factor from `date` back to the anchor date.
    ///
    /// # Errors
    ///
    /// Fails for dates the curve cannot discount (e.g. before the anchor).
    fn discount_factor(&self, date: Date) -> CurveResult<f64>;
}

/// A source of forward values for one floating observable.
pub trait FloatingRateSource: Send + Sync {
    /// The observable this curve forecasts.
    fn observable(&self) -> MarketObservable;

    /// Forecast fixing of the observable on `date`.
    fn forward_rate(&self, date: Date) -> CurveResult<f64>;
}
