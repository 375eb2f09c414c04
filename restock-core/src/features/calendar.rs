//! Calendar features — pure functions of the date.

use chrono::{Datelike, NaiveDate};

/// Calendar attributes derived from one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarFeatures {
    /// Monday = 0 .. Sunday = 6.
    pub day_of_week: u32,
    pub month: u32,
    pub quarter: u32,
    pub year: i32,
    pub day_of_year: u32,
}

impl CalendarFeatures {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            day_of_week: date.weekday().num_days_from_monday(),
            month: date.month(),
            quarter: (date.month() - 1) / 3 + 1,
            year: date.year(),
            day_of_year: date.ordinal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn monday_is_zero() {
        // 2024-01-01 was a Monday.
        assert_eq!(CalendarFeatures::from_date(date(2024, 1, 1)).day_of_week, 0);
        // 2024-01-07 was a Sunday.
        assert_eq!(CalendarFeatures::from_date(date(2024, 1, 7)).day_of_week, 6);
    }

    #[test]
    fn quarter_boundaries() {
        assert_eq!(CalendarFeatures::from_date(date(2024, 1, 15)).quarter, 1);
        assert_eq!(CalendarFeatures::from_date(date(2024, 3, 31)).quarter, 1);
        assert_eq!(CalendarFeatures::from_date(date(2024, 4, 1)).quarter, 2);
        assert_eq!(CalendarFeatures::from_date(date(2024, 9, 30)).quarter, 3);
        assert_eq!(CalendarFeatures::from_date(date(2024, 12, 31)).quarter, 4);
    }

    #[test]
    fn day_of_year_handles_leap_years() {
        assert_eq!(
            CalendarFeatures::from_date(date(2024, 12, 31)).day_of_year,
            366
        );
        assert_eq!(
            CalendarFeatures::from_date(date(2023, 12, 31)).day_of_year,
            365
        );
        assert_eq!(CalendarFeatures::from_date(date(2024, 3, 1)).day_of_year, 61);
    }

    #[test]
    fn year_and_month_pass_through() {
        let f = CalendarFeatures::from_date(date(2019, 11, 5));
        assert_eq!(f.year, 2019);
        assert_eq!(f.month, 11);
    }
}
