//! # Kudu Analytics
//!
//! Pricing routines for the South African bond market. Each routine returns
//! its outputs as named scalars in a [`ResultStore`].
//!
//! - [`bond_spot`]: JSE bond all-in, clean and accrued from a yield
//! - [`asset_swap`]: asset swap schedules and the par spread solve
//! - [`bond_future`]: forward price of a JSE bond future
//!
//! ## Example
//!
//! ```rust
//! use kudu_core::types::Date;
//! use kudu_products::sa_market::{JseBond, JseBondFuture};
//! use kudu_analytics::bond_future::{forward_price, keys};
//!
//! let bond = JseBond::new(Date::from_ymd(2030, 1, 31).unwrap(), 0.08, (1, 31), (7, 31)).unwrap();
//! let future = JseBondFuture::new(Date::from_ymd(2025, 6, 5).unwrap(), bond);
//!
//! let store = forward_price(&future, Date::from_ymd(2025, 3, 4).unwrap(), 0.085, 0.07).unwrap();
//! assert!(store.get_scalar(keys::FORWARD_PRICE).unwrap() > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

pub mod asset_swap;
pub mod bond_future;
pub mod bond_spot;
pub mod error;
pub mod results;

pub use asset_swap::{asset_swap_measures, create_asset_swap};
pub use bond_future::forward_price;
pub use bond_spot::SpotMeasures;
pub use error::{AnalyticsError, AnalyticsResult};
pub use results::ResultStore;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::asset_swap::{asset_swap_measures, create_asset_swap, FloatingSchedule};
    pub use crate::bond_future::forward_price;
    pub use crate::{AnalyticsError, AnalyticsResult, ResultStore, SpotMeasures};
}
