//! 30/360 Euro day count convention.

use super::DayCount;
use crate::types::Date;

/// 30/360 Euro day count convention.
///
/// Every month counts as 30 days: the start month contributes
/// `max(0, 30 - D1)` days and the end month `min(30, D2)`.
///
/// # Formula
///
/// $$\frac{360(Y_2-Y_1) + 30(M_2-M_1-1) + \max(0, 30-D_1) + \min(30, D_2)}{360}$$
///
/// No check is made on date order; a backward period gives a negative fraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360Euro;

impl DayCount for Thirty360Euro {
    fn name(&self) -> &'static str {
        "30E/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 360.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let y1 = start.year() as i64;
        let y2 = end.year() as i64;
        let m1 = start.month() as i64;
        let m2 = end.month() as i64;
        let d1 = start.day() as i64;
        let d2 = end.day() as i64;

        360 * (y2 - y1) + 30 * (m2 - m1 - 1) + (30 - d1).max(0) + d2.min(30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_thirty360_euro_month_end() {
        let dc = Thirty360Euro;

        assert_eq!(dc.day_count(d(2020, 1, 30), d(2020, 3, 31)), 60);
        assert_abs_diff_eq!(
            dc.year_fraction(d(2020, 1, 30), d(2020, 3, 31)),
            60.0 / 360.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_thirty360_euro_full_year() {
        let dc = Thirty360Euro;
        assert_eq!(dc.day_count(d(2025, 1, 1), d(2026, 1, 1)), 360);
        assert_eq!(dc.day_count(d(2025, 1, 31), d(2025, 3, 31)), 60);
        assert_eq!(dc.day_count(d(2025, 2, 28), d(2025, 3, 31)), 32);
    }

    #[test]
    fn test_thirty360_euro_backward_is_negative() {
        let dc = Thirty360Euro;
        assert_eq!(dc.day_count(d(2025, 7, 15), d(2025, 1, 15)), -180);
        assert!(dc.year_fraction(d(2025, 7, 15), d(2025, 1, 15)) < 0.0);
    }
}
