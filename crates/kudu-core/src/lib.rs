//! # Kudu Core
//!
//! Date and convention primitives for the Kudu valuation library.
//!
//! - **Types**: [`Date`], [`Tenor`], [`Currency`], [`CashFlow`]
//! - **Calendars**: the [`Calendar`](calendars::Calendar) trait, the rule-based
//!   South African calendar and business day conventions
//! - **Day Counts**: Actual/365 Fixed, Actual/360 and 30/360 Euro
//!
//! ## Example
//!
//! ```rust
//! use kudu_core::prelude::*;
//!
//! let zar = HolidayCalendar::south_africa();
//! let maturity = Date::from_ymd(2030, 1, 31).unwrap();
//! let reset = maturity.subtract_tenor(Tenor::months(3)).unwrap();
//! let adjusted = zar.adjust(reset, BusinessDayConvention::ModifiedFollowing);
//! assert_eq!(adjusted, Date::from_ymd(2029, 10, 31).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::similar_names)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{BusinessDayConvention, Calendar, HolidayCalendar};
    pub use crate::daycounts::{Act360, Act365Fixed, DayCount, DayCountConvention, Thirty360Euro};
    pub use crate::error::{KuduError, KuduResult};
    pub use crate::types::{CashFlow, Currency, Date, Tenor, TenorUnit};
}

pub use error::{KuduError, KuduResult};
pub use types::{CashFlow, Currency, Date, Tenor};
