//! Johannesburg (JSE) business day calendar.

use super::{HolidayCalendar, HolidayCalendarBuilder, WeekendType, MAX_YEAR, MIN_YEAR};

/// Builds the South African public-holiday calendar.
///
/// Fixed-date holidays falling on a Sunday are observed on the Monday.
pub(super) fn build() -> HolidayCalendar {
    HolidayCalendarBuilder::new(HolidayCalendar::ZAR)
        .weekend(WeekendType::SaturdaySunday)
        .year_range(MIN_YEAR, MAX_YEAR)
        // New Year's Day
        .add_fixed_holiday(1, 1, true)
        // Human Rights Day
        .add_fixed_holiday(3, 21, true)
        // Good Friday
        .add_easter_holiday(-2)
        // Family Day
        .add_easter_holiday(1)
        // Freedom Day
        .add_fixed_holiday(4, 27, true)
        // Workers' Day
        .add_fixed_holiday(5, 1, true)
        // Youth Day
        .add_fixed_holiday(6, 16, true)
        // National Women's Day
        .add_fixed_holiday(8, 9, true)
        // Heritage Day
        .add_fixed_holiday(9, 24, true)
        // Day of Reconciliation
        .add_fixed_holiday(12, 16, true)
        // Christmas Day
        .add_fixed_holiday(12, 25, true)
        // Day of Goodwill
        .add_fixed_holiday(12, 26, true)
        .build()
}

#[cfg(test)]
mod tests {
    use crate::calendars::{Calendar, HolidayCalendar};
    use crate::types::Date;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_fixed_holidays_2025() {
        let zar = HolidayCalendar::south_africa();
        for date in [
            d(2025, 1, 1),
            d(2025, 3, 21),
            d(2025, 5, 1),
            d(2025, 6, 16),
            d(2025, 9, 24),
            d(2025, 12, 16),
            d(2025, 12, 25),
            d(2025, 12, 26),
        ] {
            assert!(!zar.is_business_day(date), "{date} should be a holiday");
        }
    }

    #[test]
    fn test_easter_holidays() {
        let zar = HolidayCalendar::south_africa();
        // Easter 2024 was 31 March
        assert!(!zar.is_business_day(d(2024, 3, 29)));
        assert!(!zar.is_business_day(d(2024, 4, 1)));
        assert!(zar.is_business_day(d(2024, 4, 2)));
    }

    #[test]
    fn test_sunday_holidays_move_to_monday() {
        let zar = HolidayCalendar::south_africa();
        // Freedom Day 2025 and Women's Day 2020 fell on Sundays
        assert!(!zar.is_business_day(d(2025, 4, 28)));
        assert!(!zar.is_business_day(d(2020, 8, 10)));
        // Day of Goodwill 2021 fell on a Sunday
        assert!(!zar.is_business_day(d(2021, 12, 27)));
        // Saturday holidays are not moved (1 January 2022)
        assert!(zar.is_business_day(d(2022, 1, 3)));
    }

    #[test]
    fn test_ordinary_days() {
        let zar = HolidayCalendar::south_africa();
        assert!(zar.is_business_day(d(2025, 6, 17)));
        assert!(!zar.is_business_day(d(2025, 6, 14)));
    }
}
