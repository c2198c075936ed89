//! Par asset swap on a JSE bond.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use kudu_core::calendars::HolidayCalendar;
use kudu_core::types::{CashFlow, Currency, Date};
use kudu_curves::{FloatRateIndex, MarketObservable};

use crate::error::{ProductError, ProductResult};
use crate::product::{FixingState, Product};
use crate::sa_market::JseBond;

/// Notional the swap cash flows are quoted on.
const NOMINAL: f64 = 100.0;

/// Which side of the fixed leg the holder is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapDirection {
    /// Pay the bond coupons, receive floating plus spread.
    PayFixed,
    /// Receive the bond coupons, pay floating plus spread.
    ReceiveFixed,
}

impl SwapDirection {
    /// `-1` for pay-fixed, `+1` for receive-fixed.
    #[must_use]
    pub fn sign(&self) -> f64 {
        match self {
            SwapDirection::PayFixed => -1.0,
            SwapDirection::ReceiveFixed => 1.0,
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapDirection::PayFixed => write!(f, "PayFixed"),
            SwapDirection::ReceiveFixed => write!(f, "ReceiveFixed"),
        }
    }
}

/// Contract terms of an [`AssetSwap`].
///
/// Floating-leg vectors are parallel: period `i` fixes on `reset_dates[i]`,
/// accrues `accrual_fractions[i]` and pays on `floating_payment_dates[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetSwapTerms {
    /// Fixed leg side.
    pub direction: SwapDirection,
    /// Floating index.
    pub index: FloatRateIndex,
    /// Bond whose coupons form the fixed leg.
    pub bond: JseBond,
    /// Floating fixing dates.
    pub reset_dates: Vec<Date>,
    /// Floating payment dates.
    pub floating_payment_dates: Vec<Date>,
    /// Fixed payment dates.
    pub fixed_payment_dates: Vec<Date>,
    /// Year fraction of each floating period.
    pub accrual_fractions: Vec<f64>,
    /// Spread over the floating index.
    pub spread: f64,
    /// Business day calendar.
    pub calendar: HolidayCalendar,
    /// Payment currency.
    pub currency: Currency,
}

#[derive(Debug)]
struct SwapContract {
    terms: AssetSwapTerms,
    observable: MarketObservable,
    forecast_fixings: Option<Vec<f64>>,
}

/// A bond asset swap: floating plus spread against the bond's coupons.
///
/// Per 100 nominal, with `s` the direction sign:
///
/// - floating period `i` pays `-s * 100 * accrual[i] * (fixing[i] + spread)`
/// - each fixed date pays `s * 100 * coupon_rate / 2`
///
/// Cash flows are returned floating leg first, then fixed leg.
#[derive(Debug, Clone)]
pub struct AssetSwap {
    contract: Arc<SwapContract>,
    state: FixingState,
}

impl AssetSwap {
    /// Creates a swap from validated terms.
    ///
    /// # Errors
    ///
    /// `InvalidSchedule` if the floating vectors differ in length, a leg's
    /// dates are not strictly increasing, or a reset is not before its payment.
    pub fn new(terms: AssetSwapTerms) -> ProductResult<Self> {
        validate(&terms)?;
        let slots = terms.reset_dates.len();
        let observable = MarketObservable::Rate(terms.index.clone());
        Ok(Self {
            contract: Arc::new(SwapContract {
                terms,
                observable,
                forecast_fixings: None,
            }),
            state: FixingState::new(slots),
        })
    }

    /// Attaches forecast fixings, one per reset date, captured at construction.
    ///
    /// # Errors
    ///
    /// `ArgumentMismatch` if there is not exactly one fixing per reset date.
    pub fn with_forecast_fixings(self, fixings: Vec<f64>) -> ProductResult<Self> {
        let expected = self.contract.terms.reset_dates.len();
        if fixings.len() != expected {
            return Err(ProductError::ArgumentMismatch {
                expected,
                got: fixings.len(),
            });
        }
        let contract = SwapContract {
            terms: self.contract.terms.clone(),
            observable: self.contract.observable.clone(),
            forecast_fixings: Some(fixings),
        };
        Ok(Self {
            contract: Arc::new(contract),
            state: FixingState::new(expected),
        })
    }

    /// Injects the forecast fixings captured at construction.
    ///
    /// # Errors
    ///
    /// `ValueDateNotSet` before a value date, `IndicesNotSet` if the swap
    /// was built without forecast fixings.
    pub fn inject_forecast_fixings(&mut self) -> ProductResult<()> {
        self.state.require_value_date()?;
        let fixings = self
            .contract
            .forecast_fixings
            .as_ref()
            .ok_or_else(|| ProductError::indices_not_set(&self.contract.observable))?;
        let positions = self.future_floating_positions();
        let values: Vec<f64> = positions.iter().map(|&i| fixings[i]).collect();
        self.state.inject(&positions, &values)
    }

    /// All contract terms.
    #[must_use]
    pub fn terms(&self) -> &AssetSwapTerms {
        &self.contract.terms
    }

    /// Fixed leg side.
    #[must_use]
    pub fn direction(&self) -> SwapDirection {
        self.contract.terms.direction
    }

    /// Floating index.
    #[must_use]
    pub fn index(&self) -> &FloatRateIndex {
        &self.contract.terms.index
    }

    /// Underlying bond.
    #[must_use]
    pub fn bond(&self) -> &JseBond {
        &self.contract.terms.bond
    }

    /// Floating fixing dates.
    #[must_use]
    pub fn reset_dates(&self) -> &[Date] {
        &self.contract.terms.reset_dates
    }

    /// Floating payment dates.
    #[must_use]
    pub fn floating_payment_dates(&self) -> &[Date] {
        &self.contract.terms.floating_payment_dates
    }

    /// Fixed payment dates.
    #[must_use]
    pub fn fixed_payment_dates(&self) -> &[Date] {
        &self.contract.terms.fixed_payment_dates
    }

    /// Floating accrual fractions.
    #[must_use]
    pub fn accrual_fractions(&self) -> &[f64] {
        &self.contract.terms.accrual_fractions
    }

    /// Spread over the index.
    #[must_use]
    pub fn spread(&self) -> f64 {
        self.contract.terms.spread
    }

    /// Business day calendar.
    #[must_use]
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.contract.terms.calendar
    }

    /// Payment currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.contract.terms.currency
    }

    /// Forecast fixings captured at construction, if any.
    #[must_use]
    pub fn forecast_fixings(&self) -> Option<&[f64]> {
        self.contract.forecast_fixings.as_deref()
    }

    /// Floating periods paying strictly after the value date.
    fn future_floating_positions(&self) -> Vec<usize> {
        let Some(value_date) = self.state.value_date() else {
            return Vec::new();
        };
        self.contract
            .terms
            .floating_payment_dates
            .iter()
            .enumerate()
            .filter(|(_, pay)| **pay > value_date)
            .map(|(i, _)| i)
            .collect()
    }

    fn future_fixed_dates(&self) -> Vec<Date> {
        let Some(value_date) = self.state.value_date() else {
            return Vec::new();
        };
        self.contract
            .terms
            .fixed_payment_dates
            .iter()
            .copied()
            .filter(|pay| *pay > value_date)
            .collect()
    }
}

fn validate(terms: &AssetSwapTerms) -> ProductResult<()> {
    let n = terms.reset_dates.len();
    if terms.floating_payment_dates.len() != n || terms.accrual_fractions.len() != n {
        return Err(ProductError::invalid_schedule(format!(
            "{} reset dates, {} floating payment dates and {} accrual fractions",
            n,
            terms.floating_payment_dates.len(),
            terms.accrual_fractions.len()
        )));
    }
    strictly_increasing("reset", &terms.reset_dates)?;
    strictly_increasing("floating payment", &terms.floating_payment_dates)?;
    strictly_increasing("fixed payment", &terms.fixed_payment_dates)?;
    for (reset, pay) in terms.reset_dates.iter().zip(&terms.floating_payment_dates) {
        if reset >= pay {
            return Err(ProductError::invalid_schedule(format!(
                "reset {reset} is not before payment {pay}"
            )));
        }
    }
    Ok(())
}

fn strictly_increasing(leg: &str, dates: &[Date]) -> ProductResult<()> {
    match dates.windows(2).find(|w| w[1] <= w[0]) {
        Some(w) => Err(ProductError::invalid_schedule(format!(
            "{leg} dates not strictly increasing: {} then {}",
            w[0], w[1]
        ))),
        None => Ok(()),
    }
}

impl Product for AssetSwap {
    fn set_value_date(&mut self, value_date: Date) {
        self.state.set_value_date(value_date);
    }

    fn value_date(&self) -> Option<Date> {
        self.state.value_date()
    }

    fn required_indices(&self) -> Vec<MarketObservable> {
        if self.future_floating_positions().is_empty() {
            Vec::new()
        } else {
            vec![self.contract.observable.clone()]
        }
    }

    fn required_index_dates(&self, observable: &MarketObservable) -> Vec<Date> {
        if *observable != self.contract.observable {
            return Vec::new();
        }
        self.future_floating_positions()
            .into_iter()
            .map(|i| self.contract.terms.reset_dates[i])
            .collect()
    }

    fn set_index_values(
        &mut self,
        observable: &MarketObservable,
        values: &[f64],
    ) -> ProductResult<()> {
        self.state.require_value_date()?;
        if *observable != self.contract.observable {
            return Err(ProductError::unknown_index(observable));
        }
        let positions = self.future_floating_positions();
        self.state.inject(&positions, values)
    }

    fn reset(&mut self) {
        self.state.clear();
    }

    fn cashflows(&self) -> ProductResult<Vec<CashFlow>> {
        self.state.require_value_date()?;
        let terms = &self.contract.terms;
        let sign = terms.direction.sign();
        let mut cfs = Vec::new();

        for i in self.future_floating_positions() {
            let fixing = self
                .state
                .fixing(i)
                .ok_or_else(|| ProductError::indices_not_set(&self.contract.observable))?;
            let amount = -sign * NOMINAL * terms.accrual_fractions[i] * (fixing + terms.spread);
            cfs.push(CashFlow::new(
                terms.floating_payment_dates[i],
                amount,
                terms.currency,
            ));
        }

        let fixed_amount = sign * NOMINAL * terms.bond.annual_coupon_rate() / 2.0;
        for date in self.future_fixed_dates() {
            cfs.push(CashFlow::new(date, fixed_amount, terms.currency));
        }

        Ok(cfs)
    }

    fn cashflow_currencies(&self) -> Vec<Currency> {
        vec![self.contract.terms.currency]
    }

    fn cashflow_dates(&self, currency: Currency) -> Vec<Date> {
        if currency != self.contract.terms.currency {
            return Vec::new();
        }
        let mut dates: Vec<Date> = self
            .future_floating_positions()
            .into_iter()
            .map(|i| self.contract.terms.floating_payment_dates[i])
            .collect();
        dates.extend(self.future_fixed_dates());
        dates
    }
}
