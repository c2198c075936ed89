//! Zero curve defined by dated continuously-compounded rates.

use kudu_core::daycounts::{Act365Fixed, DayCount};
use kudu_core::types::{Currency, Date};

use crate::error::{CurveError, CurveResult};
use crate::interpolation::LinearOnDates;
use crate::traits::DiscountingSource;

/// A discount curve built from pillar dates and zero rates.
///
/// Rates are continuously compounded on an Actual/365 Fixed basis from the
/// anchor date. Between pillars the rate is interpolated linearly; outside
/// the pillars it is held flat.
///
/// ```rust
/// use kudu_core::types::{Currency, Date};
/// use kudu_curves::{DatesAndRates, DiscountingSource};
///
/// let anchor = Date::from_ymd(2025, 1, 1).unwrap();
/// let curve = DatesAndRates::new(
///     Currency::ZAR,
///     anchor,
///     vec![Date::from_ymd(2026, 1, 1).unwrap()],
///     vec![0.08],
/// )
/// .unwrap();
/// let df = curve.discount_factor(Date::from_ymd(2026, 1, 1).unwrap()).unwrap();
/// assert!((df - (-0.08f64).exp()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct DatesAndRates {
    currency: Currency,
    anchor: Date,
    rates: LinearOnDates,
}

impl DatesAndRates {
    /// Builds the curve from parallel arrays of dates and rates.
    pub fn new(
        currency: Currency,
        anchor: Date,
        dates: Vec<Date>,
        rates: Vec<f64>,
    ) -> CurveResult<Self> {
        let rates = LinearOnDates::new(dates, rates)?;
        log::debug!(
            "discount curve {currency} anchored {anchor} with {} pillars",
            rates.dates().len()
        );
        Ok(Self {
            currency,
            anchor,
            rates,
        })
    }

    /// Interpolated zero rate at `date`.
    #[must_use]
    pub fn zero_rate(&self, date: Date) -> f64 {
        self.rates.value_at(date)
    }
}

impl DiscountingSource for DatesAndRates {
    fn anchor_date(&self) -> Date {
        self.anchor
    }

    fn currency(&self) -> Currency {
        self.currency
    }

    fn discount_factor(&self, date: Date) -> CurveResult<f64> {
        if date < self.anchor {
            return Err(CurveError::DateBeforeAnchor {
                date,
                anchor: self.anchor,
            });
        }
        let t = Act365Fixed.year_fraction(self.anchor, date);
        Ok((-self.zero_rate(date) * t).exp())
    }
}
