//! JSE bond pricing formula.
//!
//! Prices a semi-annual JSE bond per 100 nominal from a yield to maturity,
//! following the exchange's convention: whole coupon periods are discounted
//! at the semi-annual yield, the broken period to the next coupon date by a
//! fractional power of the same factor (or simple interest once only the
//! final coupon is left), and accrued interest is Actual/365 from the last
//! coupon date, negative while the bond trades ex-coupon.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use kudu_core::types::Date;
use kudu_products::sa_market::JseBond;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::results::ResultStore;

/// Result keys written by [`SpotMeasures::spot_measures`].
pub mod keys {
    /// All-in (dirty) price before rounding.
    pub const UNROUNDED_AIP: &str = "unroundedAip";
    /// All-in price rounded to five decimals.
    pub const ROUNDED_AIP: &str = "roundedAip";
    /// Accrued interest before rounding.
    pub const UNROUNDED_ACCRUED: &str = "unroundedAccrued";
    /// Accrued interest rounded to five decimals.
    pub const ROUNDED_ACCRUED: &str = "roundedAccrued";
    /// Clean price before rounding.
    pub const UNROUNDED_CLEAN: &str = "unroundedClean";
    /// Rounded all-in price less rounded accrued interest.
    pub const ROUNDED_CLEAN: &str = "roundedClean";
}

/// Decimal places JSE prices are quoted to.
const PRICE_DECIMALS: u32 = 5;

/// Bonds that can be priced from a yield at a settlement date.
pub trait SpotMeasures {
    /// Prices, accrued interest and clean prices at `settle` for `ytm`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `settle` is not before maturity or the yield is
    /// not finite.
    fn spot_measures(&self, settle: Date, ytm: f64) -> AnalyticsResult<ResultStore>;
}

impl SpotMeasures for JseBond {
    fn spot_measures(&self, settle: Date, ytm: f64) -> AnalyticsResult<ResultStore> {
        let maturity = self.maturity_date();
        if settle >= maturity {
            return Err(AnalyticsError::invalid_argument(format!(
                "settlement {settle} is not before maturity {maturity}"
            )));
        }
        if !ytm.is_finite() {
            return Err(AnalyticsError::invalid_argument(format!(
                "yield {ytm} is not finite"
            )));
        }

        let lcd = self.last_coupon_date(settle)?;
        let ncd = self.next_coupon_date(settle)?;
        if ncd > maturity {
            return Err(AnalyticsError::invalid_argument(format!(
                "maturity {maturity} is not a coupon date"
            )));
        }
        let cum = settle < self.books_close_date(ncd);
        let remaining = self.coupon_dates_between(ncd, maturity)?.len();

        let coupon = 100.0 * self.annual_coupon_rate();
        let half_coupon = coupon / 2.0;
        let v = 1.0 / (1.0 + ytm / 2.0);
        let to_ncd = (ncd - settle) as f64;

        let broken_period = if remaining > 0 {
            v.powf(to_ncd / (ncd - lcd) as f64)
        } else {
            1.0 / (1.0 + ytm * to_ncd / 365.0)
        };
        let n = i32::try_from(remaining)
            .map_err(|_| AnalyticsError::invalid_argument("too many coupon periods"))?;
        let annuity: f64 = (1..=n).map(|k| v.powi(k)).sum();
        let next_coupon = if cum { half_coupon } else { 0.0 };

        let aip = broken_period * (next_coupon + half_coupon * annuity + 100.0 * v.powi(n));
        let accrued_days = if cum { settle - lcd } else { settle - ncd };
        let accrued = accrued_days as f64 * coupon / 365.0;

        log::debug!(
            "spot {settle}: lcd {lcd}, ncd {ncd}, {} coupon, {remaining} further coupons",
            if cum { "cum" } else { "ex" }
        );

        let rounded_aip = round_price(aip)?;
        let rounded_accrued = round_price(accrued)?;
        let rounded_clean = (rounded_aip - rounded_accrued)
            .to_f64()
            .ok_or_else(|| AnalyticsError::invalid_argument("clean price out of range"))?;

        let mut store = ResultStore::new();
        store.add(keys::UNROUNDED_AIP, aip)?;
        store.add(keys::ROUNDED_AIP, to_f64(rounded_aip)?)?;
        store.add(keys::UNROUNDED_ACCRUED, accrued)?;
        store.add(keys::ROUNDED_ACCRUED, to_f64(rounded_accrued)?)?;
        store.add(keys::UNROUNDED_CLEAN, aip - accrued)?;
        store.add(keys::ROUNDED_CLEAN, rounded_clean)?;
        Ok(store)
    }
}

/// Rounds half away from zero to the quoted number of decimals.
fn round_price(value: f64) -> AnalyticsResult<Decimal> {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(PRICE_DECIMALS, RoundingStrategy::MidpointAwayFromZero))
        .ok_or_else(|| AnalyticsError::invalid_argument(format!("cannot round {value}")))
}

fn to_f64(value: Decimal) -> AnalyticsResult<f64> {
    value
        .to_f64()
        .ok_or_else(|| AnalyticsError::invalid_argument(format!("{value} out of range")))
}
