//! Drives a product through the valuation protocol against market data.
//!
//! [`generate_cashflows`] is the revaluation entry point: call it again with
//! another [`IndexValueSource`] to reprice the same product under a bumped
//! or stressed market.

use std::collections::HashMap;

use kudu_core::types::{CashFlow, Date};
use kudu_curves::{DiscountingSource, FloatingRateSource, MarketObservable, PresentValue};

use crate::error::{ProductError, ProductResult};
use crate::product::Product;

/// Supplies the value of an observable on a date.
pub trait IndexValueSource {
    /// Value of `observable` on `date`.
    ///
    /// # Errors
    ///
    /// `UnknownIndex` if the source has nothing for `observable`.
    fn index_value(&self, observable: &MarketObservable, date: Date) -> ProductResult<f64>;
}

/// Routes each observable to the forecast curve that projects it.
#[derive(Default)]
pub struct ForecastMarket<'a> {
    sources: Vec<&'a dyn FloatingRateSource>,
}

impl<'a> ForecastMarket<'a> {
    /// An empty market.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a forecast curve.
    #[must_use]
    pub fn with_source(mut self, source: &'a dyn FloatingRateSource) -> Self {
        self.sources.push(source);
        self
    }
}

impl IndexValueSource for ForecastMarket<'_> {
    fn index_value(&self, observable: &MarketObservable, date: Date) -> ProductResult<f64> {
        let source = self
            .sources
            .iter()
            .find(|s| s.observable() == *observable)
            .ok_or_else(|| ProductError::unknown_index(observable))?;
        Ok(source.forward_rate(date)?)
    }
}

/// A flat value per observable, for every date.
impl IndexValueSource for HashMap<MarketObservable, f64> {
    fn index_value(&self, observable: &MarketObservable, _date: Date) -> ProductResult<f64> {
        self.get(observable)
            .copied()
            .ok_or_else(|| ProductError::unknown_index(observable))
    }
}

/// Runs the full protocol on `product` and returns its cash flows.
///
/// Sets the value date (clearing earlier fixings), injects a value from
/// `source` for every required observable and date, then generates the
/// cash flows.
pub fn generate_cashflows(
    product: &mut dyn Product,
    value_date: Date,
    source: &dyn IndexValueSource,
) -> ProductResult<Vec<CashFlow>> {
    product.set_value_date(value_date);
    for observable in product.required_indices() {
        let dates = product.required_index_dates(&observable);
        let values = dates
            .iter()
            .map(|date| source.index_value(&observable, *date))
            .collect::<ProductResult<Vec<f64>>>()?;
        log::debug!(
            "injecting {} fixings for {observable} as of {value_date}",
            values.len()
        );
        product.set_index_values(&observable, &values)?;
    }
    product.cashflows()
}

/// Values `product` at `value_date`: cash flows from `source`, discounted on `discount`.
pub fn present_value(
    product: &mut dyn Product,
    value_date: Date,
    source: &dyn IndexValueSource,
    discount: &dyn DiscountingSource,
) -> ProductResult<f64> {
    let cfs = generate_cashflows(product, value_date, source)?;
    Ok(cfs.pv(discount)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equity::{EuropeanOption, PutOrCall};
    use approx::assert_relative_eq;
    use kudu_core::types::Currency;
    use kudu_curves::{DatesAndRates, FloatRateIndex, ForecastCurve, Share};

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_option_through_flat_source() {
        let share = Share::new("NPN", Currency::ZAR);
        let mut opt = EuropeanOption::new(share.clone(), PutOrCall::Call, 100.0, d(2026, 1, 1));
        let mut market = HashMap::new();
        market.insert(MarketObservable::Share(share), 110.0);

        let cfs = generate_cashflows(&mut opt, d(2025, 1, 1), &market).unwrap();
        assert_eq!(cfs.len(), 1);
        assert_relative_eq!(cfs[0].amount(), 10.0);

        let discount =
            DatesAndRates::new(Currency::ZAR, d(2025, 1, 1), vec![d(2026, 1, 1)], vec![0.08])
                .unwrap();
        let pv = present_value(&mut opt, d(2025, 1, 1), &market, &discount).unwrap();
        assert_relative_eq!(pv, 10.0 * (-0.08f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_revaluation_under_bumped_market() {
        let share = Share::new("NPN", Currency::ZAR);
        let mut opt = EuropeanOption::new(share.clone(), PutOrCall::Call, 100.0, d(2026, 1, 1));
        let obs = MarketObservable::Share(share);

        let base: HashMap<_, _> = [(obs.clone(), 105.0)].into_iter().collect();
        let bumped: HashMap<_, _> = [(obs, 106.0)].into_iter().collect();

        let v0 = generate_cashflows(&mut opt, d(2025, 1, 1), &base).unwrap()[0].amount();
        let v1 = generate_cashflows(&mut opt, d(2025, 1, 1), &bumped).unwrap()[0].amount();
        assert_relative_eq!(v1 - v0, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_missing_observable_fails() {
        let share = Share::new("NPN", Currency::ZAR);
        let mut opt = EuropeanOption::new(share, PutOrCall::Put, 100.0, d(2026, 1, 1));
        let curve = ForecastCurve::new(
            d(2025, 1, 1),
            FloatRateIndex::jibar_3m(),
            vec![d(2025, 1, 1)],
            vec![0.07],
        )
        .unwrap();
        let market = ForecastMarket::new().with_source(&curve);

        assert!(matches!(
            generate_cashflows(&mut opt, d(2025, 1, 1), &market),
            Err(ProductError::UnknownIndex { .. })
        ));
    }

    #[test]
    fn test_forecast_market_routes_by_observable() {
        let curve = ForecastCurve::new(
            d(2025, 1, 1),
            FloatRateIndex::jibar_3m(),
            vec![d(2025, 1, 1)],
            vec![0.0725],
        )
        .unwrap();
        let market = ForecastMarket::new().with_source(&curve);
        let jibar = MarketObservable::Rate(FloatRateIndex::jibar_3m());

        assert_relative_eq!(market.index_value(&jibar, d(2025, 6, 1)).unwrap(), 0.0725);
    }
}
