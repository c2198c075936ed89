//! Present value of cash flows against a discount curve.

use kudu_core::types::CashFlow;

use crate::error::{CurveError, CurveResult};
use crate::traits::DiscountingSource;

/// Types whose value can be discounted to a curve's anchor date.
pub trait PresentValue {
    /// Sum of `amount * df(date)`.
    ///
    /// # Errors
    ///
    /// Fails with `CurrencyMismatch` if a cash flow is not in the curve's
    /// currency, or with the curve's own error for undiscountable dates.
    fn pv(&self, curve: &dyn DiscountingSource) -> CurveResult<f64>;
}

impl PresentValue for CashFlow {
    fn pv(&self, curve: &dyn DiscountingSource) -> CurveResult<f64> {
        if self.currency() != curve.currency() {
            return Err(CurveError::CurrencyMismatch {
                curve: curve.currency(),
                cashflow: self.currency(),
            });
        }
        Ok(self.amount() * curve.discount_factor(self.date())?)
    }
}

impl PresentValue for [CashFlow] {
    fn pv(&self, curve: &dyn DiscountingSource) -> CurveResult<f64> {
        self.iter().map(|cf| cf.pv(curve)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DatesAndRates;
    use approx::assert_relative_eq;
    use kudu_core::types::{Currency, Date};

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn flat(rate: f64) -> DatesAndRates {
        DatesAndRates::new(Currency::ZAR, d(2025, 1, 1), vec![d(2026, 1, 1)], vec![rate]).unwrap()
    }

    #[test]
    fn test_pv_sums_discounted_amounts() {
        let curve = flat(0.1);
        let cfs = vec![
            CashFlow::new(d(2025, 1, 1), 5.0, Currency::ZAR),
            CashFlow::new(d(2026, 1, 1), 105.0, Currency::ZAR),
        ];

        let pv = cfs.pv(&curve).unwrap();
        assert_relative_eq!(pv, 5.0 + 105.0 * (-0.1f64).exp(), epsilon = 1e-10);
    }

    #[test]
    fn test_empty_pv_is_zero() {
        let cfs: Vec<CashFlow> = Vec::new();
        assert_eq!(cfs.pv(&flat(0.1)).unwrap(), 0.0);
    }

    #[test]
    fn test_foreign_currency_fails() {
        let cfs = vec![CashFlow::new(d(2025, 6, 1), 1.0, Currency::USD)];
        assert!(matches!(
            cfs.pv(&flat(0.1)),
            Err(CurveError::CurrencyMismatch {
                curve: Currency::ZAR,
                cashflow: Currency::USD
            })
        ));
    }
}
