//! Forecast curve for a floating rate index.

use kudu_core::types::Date;

use crate::error::CurveResult;
use crate::interpolation::LinearOnDates;
use crate::observables::{FloatRateIndex, MarketObservable};
use crate::traits::FloatingRateSource;

/// Forward fixings of one index on pillar dates.
///
/// Forward values are interpolated linearly between pillars and held flat
/// outside them.
#[derive(Debug, Clone)]
pub struct ForecastCurve {
    anchor: Date,
    index: FloatRateIndex,
    forwards: LinearOnDates,
}

impl ForecastCurve {
    /// Builds the curve from parallel arrays of dates and forward rates.
    pub fn new(
        anchor: Date,
        index: FloatRateIndex,
        dates: Vec<Date>,
        rates: Vec<f64>,
    ) -> CurveResult<Self> {
        let forwards = LinearOnDates::new(dates, rates)?;
        log::debug!(
            "forecast curve {index} anchored {anchor} with {} pillars",
            forwards.dates().len()
        );
        Ok(Self {
            anchor,
            index,
            forwards,
        })
    }

    /// Date the curve was built for.
    #[must_use]
    pub fn anchor_date(&self) -> Date {
        self.anchor
    }

    /// The forecast index.
    #[must_use]
    pub fn index(&self) -> &FloatRateIndex {
        &self.index
    }
}

impl FloatingRateSource for ForecastCurve {
    fn observable(&self) -> MarketObservable {
        MarketObservable::Rate(self.index.clone())
    }

    fn forward_rate(&self, date: Date) -> CurveResult<f64> {
        Ok(self.forwards.value_at(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_forward_interpolation() {
        let curve = ForecastCurve::new(
            d(2025, 1, 1),
            FloatRateIndex::jibar_3m(),
            vec![d(2025, 1, 1), d(2025, 1, 31)],
            vec![0.07, 0.073],
        )
        .unwrap();

        assert_relative_eq!(curve.forward_rate(d(2025, 1, 16)).unwrap(), 0.0715, epsilon = 1e-12);
        assert_relative_eq!(curve.forward_rate(d(2024, 1, 1)).unwrap(), 0.07);
        assert_relative_eq!(curve.forward_rate(d(2027, 1, 1)).unwrap(), 0.073);
        assert_eq!(
            curve.observable(),
            MarketObservable::Rate(FloatRateIndex::jibar_3m())
        );
    }
}
