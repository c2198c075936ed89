//! Rule-based holiday generation.

use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeSet;

use super::{HolidayCalendar, WeekendType, MAX_YEAR, MIN_YEAR};
use crate::types::Date;

/// Builder for calendars whose holidays follow yearly rules.
pub struct HolidayCalendarBuilder {
    name: String,
    weekend: WeekendType,
    holidays: BTreeSet<Date>,
    start_year: i32,
    end_year: i32,
}

impl HolidayCalendarBuilder {
    /// Create a new builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weekend: WeekendType::SaturdaySunday,
            holidays: BTreeSet::new(),
            start_year: MIN_YEAR,
            end_year: MAX_YEAR,
        }
    }

    /// Set the weekend type.
    pub fn weekend(mut self, weekend: WeekendType) -> Self {
        self.weekend = weekend;
        self
    }

    /// Set the year range for generating holidays.
    pub fn year_range(mut self, start: i32, end: i32) -> Self {
        self.start_year = start;
        self.end_year = end;
        self
    }

    /// Add a specific holiday date.
    pub fn add_holiday(mut self, date: Date) -> Self {
        self.holidays.insert(date);
        self
    }

    /// Add a fixed holiday (same month and day every year).
    ///
    /// With `sunday_to_monday`, a holiday falling on a Sunday is observed
    /// on the following Monday.
    pub fn add_fixed_holiday(mut self, month: u32, day: u32, sunday_to_monday: bool) -> Self {
        for year in self.start_year..=self.end_year {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                let observed = if sunday_to_monday && date.weekday() == Weekday::Sun {
                    date.succ_opt().unwrap_or(date)
                } else {
                    date
                };
                self.holidays.insert(observed.into());
            }
        }
        self
    }

    /// Add Easter-based holiday (offset from Easter Sunday).
    pub fn add_easter_holiday(mut self, offset_days: i64) -> Self {
        for year in self.start_year..=self.end_year {
            if let Some(easter) = easter_sunday(year) {
                self.holidays.insert(Date::from(easter).add_days(offset_days));
            }
        }
        self
    }

    /// Build the calendar.
    pub fn build(self) -> HolidayCalendar {
        HolidayCalendar::from_parts(self.name, self.weekend, self.holidays)
    }
}

/// Calculate Easter Sunday using the Anonymous Gregorian algorithm.
#[allow(clippy::many_single_char_names)]
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = ((h + l - 7 * m + 114) % 31) + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}
