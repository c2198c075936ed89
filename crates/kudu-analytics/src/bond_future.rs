//! Forward price of a JSE bond future.

use kudu_core::calendars::Calendar;
use kudu_core::types::Date;
use kudu_products::sa_market::JseBondFuture;

use crate::bond_spot::{self, SpotMeasures};
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::results::ResultStore;

/// Result keys written by [`forward_price`].
pub mod keys {
    /// Forward all-in price net of coupons paid before delivery.
    pub const FORWARD_PRICE: &str = "AdjustedForwardPrice";
}

/// Coupon dates of the future's bond whose books close strictly between
/// `settle` and the forward date, ascending.
///
/// A coupon paid shortly after the forward date is included when its books
/// close before it.
pub fn coupons_before_delivery(future: &JseBondFuture, settle: Date) -> AnalyticsResult<Vec<Date>> {
    let bond = future.underlying();
    let forward = future.forward_date();
    let last_year = forward.add_days(bond.books_close_days()).year();

    let mut dates = Vec::new();
    for year in settle.year()..=last_year {
        for coupon in bond.coupon_dates_in_year(year)? {
            let books_close = bond.books_close_date(coupon);
            if settle < books_close && books_close < forward {
                dates.push(coupon);
            }
        }
    }
    Ok(dates)
}

/// Forward price of `future` for a trade settling on `settle`.
///
/// The rounded all-in price at `ytm` is carried to the forward date at the
/// simple `repo` rate. Coupons whose books close before delivery go to the
/// spot holder, so each is deducted with its own carry factor, together with
/// the accrued interest at settlement.
///
/// # Errors
///
/// `InvalidArgument` if `settle` is not before the forward date or is not a
/// Tuesday or Thursday business day on the future's calendar.
pub fn forward_price(
    future: &JseBondFuture,
    settle: Date,
    ytm: f64,
    repo: f64,
) -> AnalyticsResult<ResultStore> {
    let forward = future.forward_date();
    if settle >= forward {
        log::warn!("rejected settlement {settle}: not before forward date {forward}");
        return Err(AnalyticsError::invalid_argument(format!(
            "settlement {settle} is not before forward date {forward}"
        )));
    }
    if !future.is_valid_settlement(settle) {
        log::warn!(
            "rejected settlement {settle}: {} is not a business Tuesday or Thursday on {}",
            settle.weekday(),
            future.calendar().name()
        );
        return Err(AnalyticsError::invalid_argument(format!(
            "settlement {settle} must be a Tuesday or Thursday business day"
        )));
    }

    let bond = future.underlying();
    let spot = bond.spot_measures(settle, ytm)?;
    let aip = spot.get_scalar(bond_spot::keys::ROUNDED_AIP)?;
    let accrued = spot.get_scalar(bond_spot::keys::UNROUNDED_ACCRUED)?;

    let unadjusted = aip * (1.0 + repo * (forward - settle) as f64 / 365.0);
    let coupons = coupons_before_delivery(future, settle)?;

    let adjusted = if coupons.is_empty() {
        unadjusted
    } else {
        let carried: f64 = coupons
            .iter()
            .map(|coupon| {
                if *coupon <= forward {
                    1.0 + repo * (forward - *coupon) as f64 / 365.0
                } else {
                    1.0 / (1.0 + repo * (*coupon - forward) as f64 / 365.0)
                }
            })
            .sum();
        unadjusted - bond.coupon_amount() * carried - accrued
    };

    log::debug!(
        "forward {forward} from {settle}: unadjusted {unadjusted:.6}, {} coupons, adjusted {adjusted:.6}",
        coupons.len()
    );

    let mut store = ResultStore::new();
    store.add(keys::FORWARD_PRICE, adjusted)?;
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use kudu_products::sa_market::JseBond;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn r2030() -> JseBond {
        JseBond::new(d(2030, 1, 31), 0.08, (1, 31), (7, 31)).unwrap()
    }

    fn rounded_aip(settle: Date, ytm: f64) -> f64 {
        r2030()
            .spot_measures(settle, ytm)
            .unwrap()
            .get_scalar(bond_spot::keys::ROUNDED_AIP)
            .unwrap()
    }

    #[test]
    fn test_no_coupon_is_carry_only() {
        let future = JseBondFuture::new(d(2025, 6, 5), r2030());
        let settle = d(2025, 3, 4);
        assert!(coupons_before_delivery(&future, settle).unwrap().is_empty());

        let store = forward_price(&future, settle, 0.085, 0.07).unwrap();
        let expected = rounded_aip(settle, 0.085) * (1.0 + 0.07 * 93.0 / 365.0);
        assert_relative_eq!(store.get_scalar(keys::FORWARD_PRICE).unwrap(), expected, epsilon = 1e-10);
    }

    #[test]
    fn test_coupon_before_delivery_is_deducted() {
        let future = JseBondFuture::new(d(2025, 8, 7), r2030());
        let settle = d(2025, 6, 3);
        assert_eq!(coupons_before_delivery(&future, settle).unwrap(), vec![d(2025, 7, 31)]);

        let spot = r2030().spot_measures(settle, 0.085).unwrap();
        let accrued = spot.get_scalar(bond_spot::keys::UNROUNDED_ACCRUED).unwrap();
        let unadjusted = rounded_aip(settle, 0.085) * (1.0 + 0.07 * 65.0 / 365.0);
        let expected = unadjusted - 4.0 * (1.0 + 0.07 * 7.0 / 365.0) - accrued;

        let store = forward_price(&future, settle, 0.085, 0.07).unwrap();
        assert_relative_eq!(store.get_scalar(keys::FORWARD_PRICE).unwrap(), expected, epsilon = 1e-10);
    }

    #[test]
    fn test_coupon_after_delivery_with_books_closed() {
        // Books for the 31 July coupon close on 21 July
        let future = JseBondFuture::new(d(2025, 7, 24), r2030());
        let settle = d(2025, 6, 3);
        assert_eq!(coupons_before_delivery(&future, settle).unwrap(), vec![d(2025, 7, 31)]);

        let spot = r2030().spot_measures(settle, 0.085).unwrap();
        let accrued = spot.get_scalar(bond_spot::keys::UNROUNDED_ACCRUED).unwrap();
        let unadjusted = rounded_aip(settle, 0.085) * (1.0 + 0.07 * 51.0 / 365.0);
        let expected = unadjusted - 4.0 / (1.0 + 0.07 * 7.0 / 365.0) - accrued;

        let store = forward_price(&future, settle, 0.085, 0.07).unwrap();
        assert_relative_eq!(store.get_scalar(keys::FORWARD_PRICE).unwrap(), expected, epsilon = 1e-10);
    }

    #[test]
    fn test_coupon_in_next_year_counts() {
        // Books for 31 January 2026 close on 21 January
        let future = JseBondFuture::new(d(2026, 1, 27), r2030());
        let coupons = coupons_before_delivery(&future, d(2025, 12, 2)).unwrap();
        assert_eq!(coupons, vec![d(2026, 1, 31)]);
    }

    #[test]
    fn test_settle_after_forward_fails() {
        let future = JseBondFuture::new(d(2025, 6, 5), r2030());
        assert!(matches!(
            forward_price(&future, d(2025, 6, 10), 0.085, 0.07),
            Err(AnalyticsError::InvalidArgument(_))
        ));
        assert!(matches!(
            forward_price(&future, d(2025, 6, 5), 0.085, 0.07),
            Err(AnalyticsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_settlement_weekday_enforced() {
        let future = JseBondFuture::new(d(2025, 8, 7), r2030());
        // Wednesday
        assert!(matches!(
            forward_price(&future, d(2025, 6, 4), 0.085, 0.07),
            Err(AnalyticsError::InvalidArgument(_))
        ));
        // Workers' Day 2025 falls on a Thursday
        assert!(forward_price(&future, d(2025, 5, 1), 0.085, 0.07).is_err());
        assert!(forward_price(&future, d(2025, 6, 5), 0.085, 0.07).is_ok());
    }
}
