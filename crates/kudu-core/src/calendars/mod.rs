//! Business day calendars and conventions.
//!
//! This module provides:
//! - The [`Calendar`] trait answering "is this a business day"
//! - [`HolidayCalendar`], a named rule-generated holiday set
//! - [`BusinessDayConvention`] adjustment rules

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

mod conventions;
mod holidays;
mod south_africa;

pub use conventions::{adjust, BusinessDayConvention};
pub use holidays::{easter_sunday, HolidayCalendarBuilder};

use crate::error::{KuduError, KuduResult};
use crate::types::Date;

/// First year for which rule-based holidays are generated.
pub const MIN_YEAR: i32 = 1990;

/// Last year for which rule-based holidays are generated.
pub const MAX_YEAR: i32 = 2100;

/// Trait for business day calendars.
///
/// Calendars determine which days are business days vs holidays
/// for a specific market.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is a weekend day or a holiday.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Adjusts a date according to the given business day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Date {
        conventions::adjust(date, convention, self)
    }
}

/// Weekend rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekendType {
    /// Saturday and Sunday
    #[default]
    SaturdaySunday,
    /// No weekends
    None,
}

impl WeekendType {
    /// Check if a weekday is a weekend day for this type.
    #[inline]
    pub fn is_weekend(&self, weekday: Weekday) -> bool {
        match self {
            WeekendType::SaturdaySunday => matches!(weekday, Weekday::Sat | Weekday::Sun),
            WeekendType::None => false,
        }
    }
}

/// A named calendar: a weekend rule plus a set of holidays.
///
/// Cloning shares the holiday set, so calendars can be held by value
/// inside contract terms. Serializes as its name and is rebuilt with
/// [`HolidayCalendar::by_name`].
///
/// ```rust
/// use kudu_core::calendars::{Calendar, HolidayCalendar};
/// use kudu_core::types::Date;
///
/// let zar = HolidayCalendar::south_africa();
/// assert!(!zar.is_business_day(Date::from_ymd(2025, 4, 28).unwrap())); // Freedom Day observed
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HolidayCalendar {
    name: String,
    weekend: WeekendType,
    holidays: Arc<BTreeSet<Date>>,
}

impl HolidayCalendar {
    /// Name of the South African calendar.
    pub const ZAR: &'static str = "ZAR";

    /// Name of the weekends-only calendar.
    pub const WEEKEND: &'static str = "WEEKEND";

    pub(crate) fn from_parts(
        name: impl Into<String>,
        weekend: WeekendType,
        holidays: BTreeSet<Date>,
    ) -> Self {
        Self {
            name: name.into(),
            weekend,
            holidays: Arc::new(holidays),
        }
    }

    /// The Johannesburg calendar: weekends plus South African public holidays.
    #[must_use]
    pub fn south_africa() -> Self {
        south_africa::build()
    }

    /// Saturdays and Sundays only.
    #[must_use]
    pub fn weekends_only() -> Self {
        Self::from_parts(Self::WEEKEND, WeekendType::SaturdaySunday, BTreeSet::new())
    }

    /// Rebuilds a calendar from its name (`"ZAR"` or `"WEEKEND"`, any case).
    pub fn by_name(name: &str) -> KuduResult<Self> {
        match name.trim().to_uppercase().as_str() {
            Self::ZAR => Ok(Self::south_africa()),
            Self::WEEKEND => Ok(Self::weekends_only()),
            _ => Err(KuduError::UnknownCalendar {
                name: name.to_string(),
            }),
        }
    }

    /// Number of holidays in the set (weekends excluded).
    #[must_use]
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.weekend.is_weekend(date.weekday()) && !self.holidays.contains(&date)
    }
}

impl fmt::Debug for HolidayCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HolidayCalendar")
            .field("name", &self.name)
            .field("weekend", &self.weekend)
            .field("holidays", &self.holidays.len())
            .finish()
    }
}

impl PartialEq for HolidayCalendar {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl TryFrom<String> for HolidayCalendar {
    type Error = KuduError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::by_name(&value)
    }
}

impl From<HolidayCalendar> for String {
    fn from(calendar: HolidayCalendar) -> Self {
        calendar.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_weekend_calendar() {
        let cal = HolidayCalendar::weekends_only();

        assert!(cal.is_business_day(d(2025, 1, 6)));
        assert!(!cal.is_business_day(d(2025, 1, 4)));
        assert!(!cal.is_business_day(d(2025, 1, 5)));
        // New Year is not a holiday on this calendar
        assert!(cal.is_business_day(d(2025, 1, 1)));
    }

    #[test]
    fn test_by_name_round_trips() {
        let zar = HolidayCalendar::by_name("zar").unwrap();
        assert_eq!(zar.name(), "ZAR");
        assert_eq!(zar, HolidayCalendar::south_africa());
        assert!(HolidayCalendar::by_name("TARGET").is_err());
    }

    #[test]
    fn test_serde_as_name() {
        let json = serde_json::to_string(&HolidayCalendar::south_africa()).unwrap();
        assert_eq!(json, "\"ZAR\"");
        let cal: HolidayCalendar = serde_json::from_str("\"WEEKEND\"").unwrap();
        assert_eq!(cal.holiday_count(), 0);
    }
}
