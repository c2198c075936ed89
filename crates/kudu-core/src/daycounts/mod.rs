//! Day count conventions.
//!
//! - [`Act365Fixed`]: Actual/365 Fixed, the ZAR money and swap market basis
//! - [`Act360`]: Actual/360
//! - [`Thirty360Euro`]: 30/360 with the Euro month-length rule
//!
//! ```rust
//! use kudu_core::daycounts::{DayCount, Thirty360Euro};
//! use kudu_core::types::Date;
//!
//! let start = Date::from_ymd(2020, 1, 30).unwrap();
//! let end = Date::from_ymd(2020, 3, 31).unwrap();
//! assert!((Thirty360Euro.year_fraction(start, end) - 60.0 / 360.0).abs() < 1e-12);
//! ```

mod act360;
mod act365;
mod thirty360;

pub use act360::Act360;
pub use act365::Act365Fixed;
pub use thirty360::Thirty360Euro;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::KuduError;
use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations are stateless and can be shared freely.
pub trait DayCount: Send + Sync {
    /// Returns the market name of the convention (e.g. "ACT/365F").
    fn name(&self) -> &'static str;

    /// Fraction of a year between two dates. Negative if `end < start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Day count between two dates under the convention.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Runtime selection of a day count convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DayCountConvention {
    /// Actual/365 Fixed
    #[default]
    Act365Fixed,
    /// Actual/360
    Act360,
    /// 30/360 Euro
    Thirty360Euro,
}

impl DayCountConvention {
    /// Returns the convention as a shared trait object.
    #[must_use]
    pub fn to_day_count(&self) -> &'static dyn DayCount {
        match self {
            DayCountConvention::Act365Fixed => &Act365Fixed,
            DayCountConvention::Act360 => &Act360,
            DayCountConvention::Thirty360Euro => &Thirty360Euro,
        }
    }

    /// Year fraction under this convention.
    #[must_use]
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.to_day_count().year_fraction(start, end)
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_day_count().name())
    }
}

impl FromStr for DayCountConvention {
    type Err = KuduError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace(' ', "").as_str() {
            "ACT/365F" | "ACT/365FIXED" | "ACT365FIXED" => Ok(DayCountConvention::Act365Fixed),
            "ACT/360" | "ACT360" => Ok(DayCountConvention::Act360),
            "30E/360" | "30/360EURO" | "THIRTY360EURO" => Ok(DayCountConvention::Thirty360Euro),
            _ => Err(KuduError::UnknownDayCount {
                name: s.to_string(),
            }),
        }
    }
}
