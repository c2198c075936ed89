//! Dated payment amounts.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Currency, Date};

/// A single payment: an amount in a currency on a date.
///
/// Cash flows are produced by products and never mutated afterwards.
///
/// ```rust
/// use kudu_core::types::{CashFlow, Currency, Date};
///
/// let date = Date::from_ymd(2025, 6, 15).unwrap();
/// let cf = CashFlow::new(date, 4.25, Currency::ZAR);
/// assert_eq!(cf.amount(), 4.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    date: Date,
    amount: f64,
    currency: Currency,
}

impl CashFlow {
    /// Creates a new cash flow.
    #[must_use]
    pub fn new(date: Date, amount: f64, currency: Currency) -> Self {
        Self {
            date,
            amount,
            currency,
        }
    }

    /// Payment date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Signed amount; positive is received.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Currency of the amount.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.6} {}", self.date, self.amount, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let cf = CashFlow::new(Date::from_ymd(2025, 3, 31).unwrap(), -1.5, Currency::ZAR);
        assert_eq!(cf.to_string(), "2025-03-31: -1.500000 ZAR");
    }
}
