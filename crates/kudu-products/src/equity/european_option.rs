//! European option on a share, paying its intrinsic value at exercise.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use kudu_core::types::{CashFlow, Currency, Date};
use kudu_curves::{MarketObservable, Share};

use crate::error::{ProductError, ProductResult};
use crate::product::{FixingState, Product};

/// Option type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PutOrCall {
    /// Right to buy.
    Call,
    /// Right to sell.
    Put,
}

impl PutOrCall {
    /// `+1` for a call, `-1` for a put.
    #[must_use]
    pub fn sign(&self) -> f64 {
        match self {
            PutOrCall::Call => 1.0,
            PutOrCall::Put => -1.0,
        }
    }
}

impl fmt::Display for PutOrCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PutOrCall::Call => write!(f, "Call"),
            PutOrCall::Put => write!(f, "Put"),
        }
    }
}

#[derive(Debug)]
struct OptionTerms {
    share: Share,
    observable: MarketObservable,
    put_or_call: PutOrCall,
    strike: f64,
    exercise_date: Date,
}

/// A European option settled in cash on its exercise date.
///
/// The single cash flow is `max(0, sign * (F - K))` where `F` is the share
/// value injected for the exercise date.
///
/// An option valued on its exercise date still needs that day's fixing and
/// still pays on that date; after the exercise date it needs nothing and pays
/// nothing.
#[derive(Debug, Clone)]
pub struct EuropeanOption {
    terms: Arc<OptionTerms>,
    state: FixingState,
}

impl EuropeanOption {
    /// Creates a new option.
    #[must_use]
    pub fn new(share: Share, put_or_call: PutOrCall, strike: f64, exercise_date: Date) -> Self {
        let observable = MarketObservable::Share(share.clone());
        Self {
            terms: Arc::new(OptionTerms {
                share,
                observable,
                put_or_call,
                strike,
                exercise_date,
            }),
            state: FixingState::new(1),
        }
    }

    /// Underlying share.
    #[must_use]
    pub fn share(&self) -> &Share {
        &self.terms.share
    }

    /// Call or put.
    #[must_use]
    pub fn put_or_call(&self) -> PutOrCall {
        self.terms.put_or_call
    }

    /// Strike price.
    #[must_use]
    pub fn strike(&self) -> f64 {
        self.terms.strike
    }

    /// Exercise and payment date.
    #[must_use]
    pub fn exercise_date(&self) -> Date {
        self.terms.exercise_date
    }

    fn is_live(&self) -> bool {
        self.state
            .value_date()
            .is_some_and(|vd| vd <= self.terms.exercise_date)
    }
}

impl Product for EuropeanOption {
    fn set_value_date(&mut self, value_date: Date) {
        self.state.set_value_date(value_date);
    }

    fn value_date(&self) -> Option<Date> {
        self.state.value_date()
    }

    fn required_indices(&self) -> Vec<MarketObservable> {
        if self.is_live() {
            vec![self.terms.observable.clone()]
        } else {
            Vec::new()
        }
    }

    fn required_index_dates(&self, observable: &MarketObservable) -> Vec<Date> {
        if self.is_live() && *observable == self.terms.observable {
            vec![self.terms.exercise_date]
        } else {
            Vec::new()
        }
    }

    fn set_index_values(
        &mut self,
        observable: &MarketObservable,
        values: &[f64],
    ) -> ProductResult<()> {
        self.state.require_value_date()?;
        if *observable != self.terms.observable {
            return Err(ProductError::unknown_index(observable));
        }
        let positions: &[usize] = if self.is_live() { &[0] } else { &[] };
        self.state.inject(positions, values)
    }

    fn reset(&mut self) {
        self.state.clear();
    }

    fn cashflows(&self) -> ProductResult<Vec<CashFlow>> {
        self.state.require_value_date()?;
        if !self.is_live() {
            return Ok(Vec::new());
        }
        let forward = self
            .state
            .fixing(0)
            .ok_or_else(|| ProductError::indices_not_set(&self.terms.observable))?;
        let amount = (self.terms.put_or_call.sign() * (forward - self.terms.strike)).max(0.0);
        Ok(vec![CashFlow::new(
            self.terms.exercise_date,
            amount,
            self.terms.share.currency(),
        )])
    }

    fn cashflow_currencies(&self) -> Vec<Currency> {
        vec![self.terms.share.currency()]
    }

    fn cashflow_dates(&self, currency: Currency) -> Vec<Date> {
        if self.is_live() && currency == self.terms.share.currency() {
            vec![self.terms.exercise_date]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ValuationStage;
    use approx::assert_relative_eq;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn option(put_or_call: PutOrCall) -> EuropeanOption {
        EuropeanOption::new(
            Share::new("NPN", Currency::ZAR),
            put_or_call,
            100.0,
            d(2025, 12, 19),
        )
    }

    fn value(mut opt: EuropeanOption, forward: f64) -> Vec<CashFlow> {
        opt.set_value_date(d(2025, 6, 1));
        let obs = opt.required_indices().remove(0);
        assert_eq!(opt.required_index_dates(&obs), vec![d(2025, 12, 19)]);
        opt.set_index_values(&obs, &[forward]).unwrap();
        opt.cashflows().unwrap()
    }

    #[test]
    fn test_call_payoff() {
        let cfs = value(option(PutOrCall::Call), 110.0);
        assert_eq!(cfs.len(), 1);
        assert_relative_eq!(cfs[0].amount(), 10.0);
        assert_eq!(cfs[0].date(), d(2025, 12, 19));
        assert_eq!(cfs[0].currency(), Currency::ZAR);
    }

    #[test]
    fn test_put_payoff_floors_at_zero() {
        let cfs = value(option(PutOrCall::Put), 110.0);
        assert_eq!(cfs.len(), 1);
        assert_eq!(cfs[0].amount(), 0.0);

        let cfs = value(option(PutOrCall::Put), 92.5);
        assert_relative_eq!(cfs[0].amount(), 7.5);
    }

    #[test]
    fn test_expired_option_needs_nothing() {
        let mut opt = option(PutOrCall::Call);
        opt.set_value_date(d(2026, 1, 5));
        let obs = MarketObservable::Share(Share::new("NPN", Currency::ZAR));

        assert!(opt.required_indices().is_empty());
        assert!(opt.required_index_dates(&obs).is_empty());
        assert!(opt.cashflows().unwrap().is_empty());
        assert!(opt.cashflow_dates(Currency::ZAR).is_empty());
        assert_eq!(opt.stage(), ValuationStage::CashflowsReady);
    }

    #[test]
    fn test_valued_on_exercise_date_still_fixes() {
        let mut opt = option(PutOrCall::Call);
        opt.set_value_date(d(2025, 12, 19));
        let obs = opt.required_indices().remove(0);
        assert_eq!(opt.required_index_dates(&obs), vec![d(2025, 12, 19)]);

        opt.set_index_values(&obs, &[130.0]).unwrap();
        let cfs = opt.cashflows().unwrap();
        assert_eq!(cfs.len(), 1);
        assert_eq!(cfs[0].date(), d(2025, 12, 19));
        assert_eq!(opt.cashflow_dates(Currency::ZAR), vec![d(2025, 12, 19)]);
    }

    #[test]
    fn test_protocol_errors() {
        let mut opt = option(PutOrCall::Call);
        let obs = MarketObservable::Share(Share::new("NPN", Currency::ZAR));
        assert_eq!(opt.stage(), ValuationStage::Created);
        assert_eq!(opt.cashflows(), Err(ProductError::ValueDateNotSet));
        assert_eq!(
            opt.set_index_values(&obs, &[1.0]),
            Err(ProductError::ValueDateNotSet)
        );

        opt.set_value_date(d(2025, 6, 1));
        assert_eq!(opt.stage(), ValuationStage::IndicesDeclared);
        assert!(matches!(
            opt.cashflows(),
            Err(ProductError::IndicesNotSet { .. })
        ));
        assert_eq!(
            opt.set_index_values(&obs, &[1.0, 2.0]),
            Err(ProductError::ArgumentMismatch {
                expected: 1,
                got: 2
            })
        );
        let other = MarketObservable::Share(Share::new("SOL", Currency::ZAR));
        assert!(matches!(
            opt.set_index_values(&other, &[1.0]),
            Err(ProductError::UnknownIndex { .. })
        ));
    }

    #[test]
    fn test_clone_has_independent_state() {
        let mut opt = option(PutOrCall::Call);
        opt.set_value_date(d(2025, 6, 1));
        let obs = opt.required_indices().remove(0);

        let mut scenario = opt.clone();
        scenario.set_index_values(&obs, &[120.0]).unwrap();

        assert_eq!(scenario.stage(), ValuationStage::CashflowsReady);
        assert_eq!(opt.stage(), ValuationStage::IndicesDeclared);
    }
}
