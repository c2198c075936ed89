//! Terms of a JSE-listed fixed coupon government bond.

use serde::{Deserialize, Serialize};

use kudu_core::calendars::HolidayCalendar;
use kudu_core::types::{Currency, Date};

use crate::error::{ProductError, ProductResult};

/// Default number of calendar days between books close and the coupon date.
pub const DEFAULT_BOOKS_CLOSE_DAYS: i64 = 10;

/// A semi-annual JSE bond (e.g. R186, R2030).
///
/// Coupons of `100 * annual_coupon_rate / 2` per 100 nominal are paid on
/// two fixed (month, day) pairs every year. Holders registered at books
/// close, `books_close_days` before a coupon date, receive that coupon.
///
/// ```rust
/// use kudu_core::types::Date;
/// use kudu_products::sa_market::JseBond;
///
/// let r186 = JseBond::new(Date::from_ymd(2026, 12, 21).unwrap(), 0.105, (6, 21), (12, 21)).unwrap();
/// let settle = Date::from_ymd(2025, 3, 4).unwrap();
/// assert_eq!(r186.last_coupon_date(settle).unwrap(), Date::from_ymd(2024, 12, 21).unwrap());
/// assert_eq!(r186.next_coupon_date(settle).unwrap(), Date::from_ymd(2025, 6, 21).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JseBond {
    maturity_date: Date,
    annual_coupon_rate: f64,
    coupon_month1: u32,
    coupon_day1: u32,
    coupon_month2: u32,
    coupon_day2: u32,
    books_close_days: i64,
    calendar: HolidayCalendar,
    currency: Currency,
}

impl JseBond {
    /// Creates a bond on the ZAR calendar with ten books-close days.
    ///
    /// The coupon pairs may be given in either order.
    ///
    /// # Errors
    ///
    /// `InvalidTerms` if a pair is not a valid day in every year, the two
    /// pairs coincide, or the rate is not finite.
    pub fn new(
        maturity_date: Date,
        annual_coupon_rate: f64,
        coupon1: (u32, u32),
        coupon2: (u32, u32),
    ) -> ProductResult<Self> {
        for (month, day) in [coupon1, coupon2] {
            // 2001 is not a leap year, so 29 February is rejected
            if Date::from_ymd(2001, month, day).is_err() {
                return Err(ProductError::invalid_terms(format!(
                    "coupon date {month:02}-{day:02} is not valid in every year"
                )));
            }
        }
        if coupon1 == coupon2 {
            return Err(ProductError::invalid_terms("coupon dates coincide"));
        }
        if !annual_coupon_rate.is_finite() {
            return Err(ProductError::invalid_terms("coupon rate is not finite"));
        }
        let (first, second) = if coupon1 < coupon2 {
            (coupon1, coupon2)
        } else {
            (coupon2, coupon1)
        };

        Ok(Self {
            maturity_date,
            annual_coupon_rate,
            coupon_month1: first.0,
            coupon_day1: first.1,
            coupon_month2: second.0,
            coupon_day2: second.1,
            books_close_days: DEFAULT_BOOKS_CLOSE_DAYS,
            calendar: HolidayCalendar::south_africa(),
            currency: Currency::ZAR,
        })
    }

    /// Sets the books-close period in calendar days.
    #[must_use]
    pub fn with_books_close_days(mut self, days: i64) -> Self {
        self.books_close_days = days;
        self
    }

    /// Sets the business day calendar.
    #[must_use]
    pub fn with_calendar(mut self, calendar: HolidayCalendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// Sets the currency.
    #[must_use]
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Final coupon and redemption date.
    #[must_use]
    pub fn maturity_date(&self) -> Date {
        self.maturity_date
    }

    /// Annual coupon rate as a decimal (0.105 for 10.5%).
    #[must_use]
    pub fn annual_coupon_rate(&self) -> f64 {
        self.annual_coupon_rate
    }

    /// Coupon paid per 100 nominal on each coupon date.
    #[must_use]
    pub fn coupon_amount(&self) -> f64 {
        100.0 * self.annual_coupon_rate / 2.0
    }

    /// Earlier coupon (month, day) in the calendar year.
    #[must_use]
    pub fn first_coupon(&self) -> (u32, u32) {
        (self.coupon_month1, self.coupon_day1)
    }

    /// Later coupon (month, day) in the calendar year.
    #[must_use]
    pub fn second_coupon(&self) -> (u32, u32) {
        (self.coupon_month2, self.coupon_day2)
    }

    /// Calendar days between books close and the coupon date.
    #[must_use]
    pub fn books_close_days(&self) -> i64 {
        self.books_close_days
    }

    /// Business day calendar.
    #[must_use]
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Currency of the bond.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// The two coupon dates falling in `year`, ascending.
    pub fn coupon_dates_in_year(&self, year: i32) -> ProductResult<[Date; 2]> {
        Ok([
            Date::from_ymd(year, self.coupon_month1, self.coupon_day1)?,
            Date::from_ymd(year, self.coupon_month2, self.coupon_day2)?,
        ])
    }

    /// Latest coupon date on or before `date`.
    pub fn last_coupon_date(&self, date: Date) -> ProductResult<Date> {
        let [first, second] = self.coupon_dates_in_year(date.year())?;
        if date >= second {
            Ok(second)
        } else if date >= first {
            Ok(first)
        } else {
            Ok(self.coupon_dates_in_year(date.year() - 1)?[1])
        }
    }

    /// Earliest coupon date strictly after `date`.
    pub fn next_coupon_date(&self, date: Date) -> ProductResult<Date> {
        let [first, second] = self.coupon_dates_in_year(date.year())?;
        if date < first {
            Ok(first)
        } else if date < second {
            Ok(second)
        } else {
            Ok(self.coupon_dates_in_year(date.year() + 1)?[0])
        }
    }

    /// Books-close date of a coupon paid on `coupon_date`.
    #[must_use]
    pub fn books_close_date(&self, coupon_date: Date) -> Date {
        coupon_date.add_days(-self.books_close_days)
    }

    /// Coupon dates in `(after, up_to]`, ascending.
    pub fn coupon_dates_between(&self, after: Date, up_to: Date) -> ProductResult<Vec<Date>> {
        let mut dates = Vec::new();
        let mut next = self.next_coupon_date(after)?;
        while next <= up_to {
            dates.push(next);
            next = self.next_coupon_date(next)?;
        }
        Ok(dates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn r2030() -> JseBond {
        JseBond::new(d(2030, 1, 31), 0.08, (7, 31), (1, 31)).unwrap()
    }

    #[test]
    fn test_coupon_pairs_are_ordered() {
        let bond = r2030();
        assert_eq!(bond.first_coupon(), (1, 31));
        assert_eq!(bond.second_coupon(), (7, 31));
        assert_eq!(bond.coupon_amount(), 4.0);
        assert_eq!(bond.books_close_days(), 10);
    }

    #[test]
    fn test_last_and_next_coupon() {
        let bond = r2030();

        assert_eq!(bond.last_coupon_date(d(2025, 1, 15)).unwrap(), d(2024, 7, 31));
        assert_eq!(bond.next_coupon_date(d(2025, 1, 15)).unwrap(), d(2025, 1, 31));

        // On a coupon date the coupon is the last one, not the next
        assert_eq!(bond.last_coupon_date(d(2025, 1, 31)).unwrap(), d(2025, 1, 31));
        assert_eq!(bond.next_coupon_date(d(2025, 1, 31)).unwrap(), d(2025, 7, 31));

        assert_eq!(bond.last_coupon_date(d(2025, 12, 1)).unwrap(), d(2025, 7, 31));
        assert_eq!(bond.next_coupon_date(d(2025, 12, 1)).unwrap(), d(2026, 1, 31));
    }

    #[test]
    fn test_coupon_dates_between() {
        let bond = r2030();
        let dates = bond.coupon_dates_between(d(2028, 3, 1), d(2030, 1, 31)).unwrap();
        assert_eq!(
            dates,
            vec![d(2028, 7, 31), d(2029, 1, 31), d(2029, 7, 31), d(2030, 1, 31)]
        );
        assert!(bond
            .coupon_dates_between(d(2030, 1, 31), d(2030, 1, 31))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_books_close() {
        let bond = r2030().with_books_close_days(7);
        assert_eq!(bond.books_close_date(d(2025, 7, 31)), d(2025, 7, 24));
    }

    #[test]
    fn test_invalid_terms() {
        assert!(JseBond::new(d(2030, 1, 31), 0.08, (2, 29), (8, 29)).is_err());
        assert!(JseBond::new(d(2030, 1, 31), 0.08, (6, 31), (12, 31)).is_err());
        assert!(JseBond::new(d(2030, 1, 31), 0.08, (1, 31), (1, 31)).is_err());
        assert!(JseBond::new(d(2030, 1, 31), f64::NAN, (1, 31), (7, 31)).is_err());
    }

    #[test]
    fn test_serde_round_trip_keeps_calendar() {
        let bond = r2030();
        let json = serde_json::to_string(&bond).unwrap();
        assert!(json.contains("\"calendar\":\"ZAR\""));
        let back: JseBond = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bond);
    }
}
