//! Date type for financial calculations.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use super::{Tenor, TenorUnit};
use crate::error::{KuduError, KuduResult};

/// A calendar date for financial calculations.
///
/// This is a newtype wrapper around `chrono::NaiveDate` providing
/// tenor arithmetic and the day-difference operator used throughout
/// the pricing code.
///
/// # Example
///
/// ```rust
/// use kudu_core::types::{Date, Tenor};
///
/// let date = Date::from_ymd(2025, 6, 15).unwrap();
/// let future = date.add_tenor(Tenor::months(6)).unwrap();
/// assert_eq!(future, Date::from_ymd(2025, 12, 15).unwrap());
/// assert_eq!(future - date, 183);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `KuduError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> KuduResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| KuduError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `KuduError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> KuduResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| KuduError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of months to the date.
    ///
    /// If the resulting day would be invalid (e.g., Jan 31 + 1 month),
    /// it rolls back to the last valid day of the month.
    ///
    /// # Errors
    ///
    /// Returns `KuduError::InvalidDate` if the result is out of range.
    pub fn add_months(&self, months: i32) -> KuduResult<Self> {
        let total_months = self.year() * 12 + self.month() as i32 - 1 + months;
        let new_year = total_months.div_euclid(12);
        let new_month = (total_months.rem_euclid(12) + 1) as u32;

        let max_day = days_in_month(new_year, new_month);
        let new_day = self.day().min(max_day);

        Self::from_ymd(new_year, new_month, new_day)
    }

    /// Adds a number of years to the date (Feb 29 rolls back to Feb 28).
    ///
    /// # Errors
    ///
    /// Returns `KuduError::InvalidDate` if the result is invalid.
    pub fn add_years(&self, years: i32) -> KuduResult<Self> {
        self.add_months(years * 12)
    }

    /// Moves the date by a tenor.
    ///
    /// Month and year tenors clamp to the end of the month; day and week
    /// tenors count calendar days.
    pub fn add_tenor(&self, tenor: Tenor) -> KuduResult<Self> {
        match tenor.unit() {
            TenorUnit::Days => Ok(self.add_days(i64::from(tenor.amount()))),
            TenorUnit::Weeks => Ok(self.add_days(7 * i64::from(tenor.amount()))),
            TenorUnit::Months => self.add_months(tenor.amount()),
            TenorUnit::Years => self.add_years(tenor.amount()),
        }
    }

    /// Moves the date backwards by a tenor.
    pub fn subtract_tenor(&self, tenor: Tenor) -> KuduResult<Self> {
        self.add_tenor(-tenor)
    }

    /// Calendar days from `self` to `other`, negative if `other` is earlier.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = KuduError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

/// Days in a month for a given year.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if is_leap_year(year) => 29,
        _ => 28,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_date_creation() {
        let date = d(2025, 6, 15);
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2025, 2, 30).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
    }

    #[test]
    fn test_add_months_clamps_to_month_end() {
        assert_eq!(d(2025, 1, 31).add_months(1).unwrap(), d(2025, 2, 28));
        assert_eq!(d(2024, 1, 31).add_months(1).unwrap(), d(2024, 2, 29));
        assert_eq!(d(2025, 3, 31).add_months(-1).unwrap(), d(2025, 2, 28));
    }

    #[test]
    fn test_add_months_across_years() {
        assert_eq!(d(2025, 11, 15).add_months(3).unwrap(), d(2026, 2, 15));
        assert_eq!(d(2025, 2, 15).add_months(-3).unwrap(), d(2024, 11, 15));
        assert_eq!(d(2025, 1, 15).add_months(-13).unwrap(), d(2023, 12, 15));
    }

    #[test]
    fn test_tenor_arithmetic() {
        let date = d(2025, 1, 31);
        assert_eq!(date.add_tenor(Tenor::days(3)).unwrap(), d(2025, 2, 3));
        assert_eq!(date.add_tenor(Tenor::weeks(2)).unwrap(), d(2025, 2, 14));
        assert_eq!(date.add_tenor(Tenor::months(3)).unwrap(), d(2025, 4, 30));
        assert_eq!(d(2024, 2, 29).add_tenor(Tenor::years(1)).unwrap(), d(2025, 2, 28));
        assert_eq!(date.subtract_tenor(Tenor::months(3)).unwrap(), d(2024, 10, 31));
    }

    #[test]
    fn test_day_difference_operator() {
        let d1 = d(2025, 1, 1);
        let d2 = d(2025, 1, 31);
        assert_eq!(d2 - d1, 30);
        assert_eq!(d1 - d2, -30);
        assert_eq!(d1 + 30, d2);
        assert_eq!(d2 - 30, d1);
    }

    #[test]
    fn test_parse_and_display() {
        let date: Date = "2025-06-15".parse().unwrap();
        assert_eq!(date, d(2025, 6, 15));
        assert_eq!(date.to_string(), "2025-06-15");
        assert!(Date::parse("15/06/2025").is_err());
    }

    #[test]
    fn test_weekday() {
        assert_eq!(d(2025, 1, 6).weekday(), Weekday::Mon);
    }

    #[test]
    fn test_serde_is_iso_string() {
        let json = serde_json::to_string(&d(2025, 6, 15)).unwrap();
        assert_eq!(json, "\"2025-06-15\"");
    }
}
