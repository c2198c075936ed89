//! Linear interpolation on dated pillars.

use kudu_core::types::Date;

use crate::error::{CurveError, CurveResult};

/// Piecewise-linear interpolation over pillar dates, flat outside the range.
///
/// Abscissae are days from the first pillar, so interpolation is linear
/// in calendar time.
#[derive(Debug, Clone)]
pub struct LinearOnDates {
    dates: Vec<Date>,
    values: Vec<f64>,
}

impl LinearOnDates {
    /// Creates an interpolator from parallel arrays.
    ///
    /// # Errors
    ///
    /// Fails if the arrays are empty, differ in length, the dates are not
    /// strictly increasing, or a value is not finite.
    pub fn new(dates: Vec<Date>, values: Vec<f64>) -> CurveResult<Self> {
        if dates.len() != values.len() {
            return Err(CurveError::LengthMismatch {
                dates: dates.len(),
                values: values.len(),
            });
        }
        if dates.is_empty() {
            return Err(CurveError::insufficient_points(1, 0));
        }
        for i in 1..dates.len() {
            if dates[i] <= dates[i - 1] {
                return Err(CurveError::NonMonotonicDates {
                    index: i,
                    prev: dates[i - 1],
                    current: dates[i],
                });
            }
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(CurveError::invalid_value(format!("non-finite pillar value {bad}")));
        }

        Ok(Self { dates, values })
    }

    /// Pillar dates.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Pillar values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value at `date`: linear between pillars, flat beyond either end.
    #[must_use]
    pub fn value_at(&self, date: Date) -> f64 {
        let last = self.dates.len() - 1;
        if date <= self.dates[0] {
            return self.values[0];
        }
        if date >= self.dates[last] {
            return self.values[last];
        }

        // First pillar strictly after date; the guards above keep 1 <= i <= last.
        let i = self.dates.partition_point(|d| *d <= date);
        let (d0, d1) = (self.dates[i - 1], self.dates[i]);
        let (v0, v1) = (self.values[i - 1], self.values[i]);

        let t = (date - d0) as f64 / (d1 - d0) as f64;
        v0 + t * (v1 - v0)
    }
}
