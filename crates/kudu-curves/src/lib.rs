//! # Kudu Curves
//!
//! Market observables and the curve interfaces products are valued against.
//!
//! - [`MarketObservable`]: identity of a rate index or share
//! - [`DiscountingSource`] / [`FloatingRateSource`]: the curve seams
//! - [`DatesAndRates`]: zero curve from dated continuously-compounded rates
//! - [`ForecastCurve`]: forward fixings of one index
//! - [`PresentValue`]: discounting of cash flows

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

pub mod dates_and_rates;
pub mod error;
pub mod forecast;
pub mod interpolation;
pub mod observables;
pub mod pv;
pub mod traits;

pub use dates_and_rates::DatesAndRates;
pub use error::{CurveError, CurveResult};
pub use forecast::ForecastCurve;
pub use observables::{FloatRateIndex, MarketObservable, Share};
pub use pv::PresentValue;
pub use traits::{DiscountingSource, FloatingRateSource};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        CurveError, CurveResult, DatesAndRates, DiscountingSource, FloatRateIndex,
        FloatingRateSource, ForecastCurve, MarketObservable, PresentValue, Share,
    };
}
