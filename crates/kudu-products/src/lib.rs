//! # Kudu Products
//!
//! Instruments and the two-phase valuation protocol they share.
//!
//! - [`product`]: the [`Product`] trait and its mutable [`FixingState`]
//! - [`equity`]: European options on shares
//! - [`rates`]: bond asset swaps
//! - [`sa_market`]: JSE bond and bond future terms
//! - [`valuation`]: drives any product against market data
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use kudu_core::types::{Currency, Date};
//! use kudu_curves::{MarketObservable, Share};
//! use kudu_products::equity::{EuropeanOption, PutOrCall};
//! use kudu_products::valuation::generate_cashflows;
//!
//! let share = Share::new("NPN", Currency::ZAR);
//! let mut call = EuropeanOption::new(share.clone(), PutOrCall::Call, 100.0,
//!     Date::from_ymd(2026, 3, 20).unwrap());
//! let market: HashMap<_, _> = [(MarketObservable::Share(share), 110.0)].into_iter().collect();
//!
//! let cfs = generate_cashflows(&mut call, Date::from_ymd(2025, 9, 1).unwrap(), &market).unwrap();
//! assert_eq!(cfs[0].amount(), 10.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod equity;
pub mod error;
pub mod product;
pub mod rates;
pub mod sa_market;
pub mod valuation;

pub use error::{ProductError, ProductResult};
pub use product::{FixingState, Product, ValuationStage};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::equity::{EuropeanOption, PutOrCall};
    pub use crate::rates::{AssetSwap, AssetSwapTerms, SwapDirection};
    pub use crate::sa_market::{JseBond, JseBondFuture};
    pub use crate::valuation::{generate_cashflows, present_value, ForecastMarket, IndexValueSource};
    pub use crate::{Product, ProductError, ProductResult, ValuationStage};
}
