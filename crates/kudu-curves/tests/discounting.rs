//! Integration tests for discounting and forecasting.

use approx::assert_relative_eq;
use kudu_core::prelude::*;
use kudu_curves::prelude::*;
use proptest::prelude::*;

fn d(y: i32, m: u32, day: u32) -> Date {
    Date::from_ymd(y, m, day).unwrap()
}

fn zar_curve() -> DatesAndRates {
    let anchor = d(2025, 3, 3);
    let dates: Vec<Date> = [3, 6, 12, 24, 60, 120]
        .iter()
        .map(|m| anchor.add_months(*m).unwrap())
        .collect();
    DatesAndRates::new(
        Currency::ZAR,
        anchor,
        dates,
        vec![0.0745, 0.0750, 0.0762, 0.0790, 0.0850, 0.0960],
    )
    .unwrap()
}

#[test]
fn bond_cashflows_discount_below_face() {
    let curve = zar_curve();
    let coupon = 100.0 * 0.08 / 2.0;
    let mut cfs: Vec<CashFlow> = (1..=10)
        .map(|k| CashFlow::new(d(2025, 3, 3).add_months(6 * k).unwrap(), coupon, Currency::ZAR))
        .collect();
    cfs.push(CashFlow::new(d(2030, 3, 3), 100.0, Currency::ZAR));

    let pv = cfs.pv(&curve).unwrap();
    // 8% coupons against 7.5%-8.5% rates price close to par
    assert!(pv > 95.0 && pv < 105.0, "pv = {pv}");
}

#[test]
fn forecast_and_discount_are_independent_of_each_other() {
    let anchor = d(2025, 3, 3);
    let forecast = ForecastCurve::new(
        anchor,
        FloatRateIndex::jibar_3m(),
        vec![anchor, anchor.add_months(12).unwrap()],
        vec![0.075, 0.077],
    )
    .unwrap();

    let observable = forecast.observable();
    assert_eq!(observable.to_string(), "ZAR.JIBAR.3M");
    assert_relative_eq!(forecast.forward_rate(anchor).unwrap(), 0.075);
    assert_eq!(zar_curve().anchor_date(), forecast.anchor_date());
}

proptest! {
    #[test]
    fn discount_factors_are_positive_and_at_most_one(days in 0i64..20_000) {
        let curve = zar_curve();
        let df = curve.discount_factor(curve.anchor_date().add_days(days)).unwrap();
        prop_assert!(df > 0.0 && df <= 1.0);
    }
}
