//! The two-phase valuation protocol every instrument implements.
//!
//! A product first declares which market observables it needs and on which
//! dates, then receives those values and produces its cash flows. How the
//! values were produced (bootstrapped curve, flat scenario, bumped curve) is
//! invisible to the product, so one instance can be revalued repeatedly:
//!
//! 1. [`Product::set_value_date`]
//! 2. [`Product::required_indices`] and [`Product::required_index_dates`]
//! 3. [`Product::set_index_values`] for each observable
//! 4. [`Product::cashflows`]
//! 5. [`Product::reset`] and back to 3 under a new market
//!
//! Only the value date and injected fixings are mutable. They live in a
//! [`FixingState`] next to immutable, `Arc`-shared contract terms, so cloning
//! a product for a scenario is cheap.

use std::fmt;

use kudu_core::types::{CashFlow, Currency, Date};
use kudu_curves::MarketObservable;

use crate::error::{ProductError, ProductResult};

/// Where a product is in the valuation protocol.
///
/// The stage is derived from the value date and the injected fixings, not
/// recorded. Declaring indices and reading cash flows are `&self` queries
/// that leave no trace, so "value date set" and "indices declared" share
/// [`IndicesDeclared`](Self::IndicesDeclared), and "indices injected" and
/// "cash flows ready" share [`CashflowsReady`](Self::CashflowsReady).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValuationStage {
    /// No value date yet.
    Created,
    /// Value date set, some required fixing still missing.
    IndicesDeclared,
    /// Every required fixing injected; cash flows can be generated.
    CashflowsReady,
}

/// Trait implemented by every valued instrument.
pub trait Product: Send + Sync + fmt::Debug {
    /// Records the valuation date and clears injected fixings.
    ///
    /// Only dates strictly after the value date take part in valuation.
    fn set_value_date(&mut self, value_date: Date);

    /// The current value date, if set.
    fn value_date(&self) -> Option<Date>;

    /// Distinct observables with outstanding fixings.
    fn required_indices(&self) -> Vec<MarketObservable>;

    /// Outstanding fixing dates of `observable`, ascending.
    ///
    /// Empty before a value date is set, once every fixing lies in the past,
    /// or for an observable the product does not depend on.
    fn required_index_dates(&self, observable: &MarketObservable) -> Vec<Date>;

    /// Injects one value per date returned by [`Product::required_index_dates`].
    ///
    /// # Errors
    ///
    /// `ValueDateNotSet`, `UnknownIndex` for a foreign observable, or
    /// `ArgumentMismatch` when `values` has the wrong length.
    fn set_index_values(&mut self, observable: &MarketObservable, values: &[f64])
        -> ProductResult<()>;

    /// Clears injected fixings, keeping terms and value date.
    fn reset(&mut self);

    /// Cash flows strictly after the value date.
    ///
    /// # Errors
    ///
    /// `ValueDateNotSet`, or `IndicesNotSet` while a required fixing is missing.
    fn cashflows(&self) -> ProductResult<Vec<CashFlow>>;

    /// Currencies the product pays in.
    fn cashflow_currencies(&self) -> Vec<Currency>;

    /// Dates of the cash flows in `currency`, in the order [`Product::cashflows`]
    /// returns them.
    fn cashflow_dates(&self, currency: Currency) -> Vec<Date>;

    /// Current protocol stage.
    fn stage(&self) -> ValuationStage {
        if self.value_date().is_none() {
            ValuationStage::Created
        } else if self.cashflows().is_ok() {
            ValuationStage::CashflowsReady
        } else {
            ValuationStage::IndicesDeclared
        }
    }
}

/// Mutable valuation state: the value date and fixings by schedule position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixingState {
    value_date: Option<Date>,
    fixings: Vec<Option<f64>>,
}

impl FixingState {
    /// State for a product with `slots` fixing dates.
    #[must_use]
    pub fn new(slots: usize) -> Self {
        Self {
            value_date: None,
            fixings: vec![None; slots],
        }
    }

    /// The value date, if set.
    #[must_use]
    pub fn value_date(&self) -> Option<Date> {
        self.value_date
    }

    /// The value date, or `ValueDateNotSet`.
    pub fn require_value_date(&self) -> ProductResult<Date> {
        self.value_date.ok_or(ProductError::ValueDateNotSet)
    }

    /// Sets the value date and forgets every fixing.
    pub fn set_value_date(&mut self, value_date: Date) {
        self.value_date = Some(value_date);
        self.clear();
    }

    /// Forgets every fixing.
    pub fn clear(&mut self) {
        self.fixings.iter_mut().for_each(|f| *f = None);
    }

    /// Stores `values` at `positions`, pairwise.
    ///
    /// # Errors
    ///
    /// `ArgumentMismatch` if the lengths differ.
    pub fn inject(&mut self, positions: &[usize], values: &[f64]) -> ProductResult<()> {
        if positions.len() != values.len() {
            return Err(ProductError::ArgumentMismatch {
                expected: positions.len(),
                got: values.len(),
            });
        }
        for (&pos, &value) in positions.iter().zip(values) {
            if let Some(slot) = self.fixings.get_mut(pos) {
                *slot = Some(value);
            }
        }
        Ok(())
    }

    /// The fixing at `position`, if injected.
    #[must_use]
    pub fn fixing(&self, position: usize) -> Option<f64> {
        self.fixings.get(position).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixing_state_lifecycle() {
        let mut state = FixingState::new(3);
        assert_eq!(state.require_value_date(), Err(ProductError::ValueDateNotSet));

        let date = Date::from_ymd(2025, 1, 1).unwrap();
        state.set_value_date(date);
        assert_eq!(state.value_date(), Some(date));

        state.inject(&[1, 2], &[0.07, 0.08]).unwrap();
        assert_eq!(state.fixing(0), None);
        assert_eq!(state.fixing(2), Some(0.08));

        state.clear();
        assert_eq!(state.fixing(2), None);
        assert_eq!(state.value_date(), Some(date));
    }

    #[test]
    fn test_inject_length_mismatch() {
        let mut state = FixingState::new(2);
        assert_eq!(
            state.inject(&[0, 1], &[0.07]),
            Err(ProductError::ArgumentMismatch {
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn test_new_value_date_clears_fixings() {
        let mut state = FixingState::new(1);
        state.set_value_date(Date::from_ymd(2025, 1, 1).unwrap());
        state.inject(&[0], &[1.0]).unwrap();
        state.set_value_date(Date::from_ymd(2025, 2, 1).unwrap());
        assert_eq!(state.fixing(0), None);
    }
}
