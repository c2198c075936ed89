//! JSE bond future contract terms.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use kudu_core::calendars::{Calendar, HolidayCalendar};
use kudu_core::types::Date;

use super::JseBond;

/// A JSE bond future: delivery of a [`JseBond`] on the forward date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JseBondFuture {
    forward_date: Date,
    underlying: JseBond,
    calendar: HolidayCalendar,
}

impl JseBondFuture {
    /// Creates a future on `underlying`, using the bond's calendar.
    #[must_use]
    pub fn new(forward_date: Date, underlying: JseBond) -> Self {
        let calendar = underlying.calendar().clone();
        Self {
            forward_date,
            underlying,
            calendar,
        }
    }

    /// Overrides the settlement calendar.
    #[must_use]
    pub fn with_calendar(mut self, calendar: HolidayCalendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// Delivery date.
    #[must_use]
    pub fn forward_date(&self) -> Date {
        self.forward_date
    }

    /// The deliverable bond.
    #[must_use]
    pub fn underlying(&self) -> &JseBond {
        &self.underlying
    }

    /// Settlement calendar.
    #[must_use]
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// A trade settles only on a Tuesday or Thursday that is a business day.
    #[must_use]
    pub fn is_valid_settlement(&self, settle: Date) -> bool {
        matches!(settle.weekday(), Weekday::Tue | Weekday::Thu)
            && self.calendar.is_business_day(settle)
    }
}
