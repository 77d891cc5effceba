// Date utility functions

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};

/// Midnight at the start of the given calendar day, in naive wall-clock time.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

/// Number of days in the given month, or `None` if the month is out of range.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((next_month - first).num_days() as u32)
}

/// Every calendar day of the given month, in order, for the dashboard
/// calendar widget. Empty when the month is out of range.
pub fn month_days(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let Some(count) = days_in_month(year, month) else {
        return Vec::new();
    };
    (0..count)
        .filter_map(|offset| first.checked_add_days(Days::new(offset as u64)))
        .collect()
}

/// True when `date` falls on a weekend (used to shade the calendar grid).
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), chrono::Weekday::Sat | chrono::Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn start_of_day_drops_time() {
        let noon = date(2026, 1, 10).and_hms_opt(12, 34, 56).unwrap();
        assert_eq!(start_of_day(noon.date()), date(2026, 1, 10).and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn same_day_ignores_time_of_day() {
        let morning = date(2026, 3, 5).and_hms_opt(8, 0, 0).unwrap();
        let evening = date(2026, 3, 5).and_hms_opt(21, 15, 0).unwrap();
        let next_day = date(2026, 3, 6).and_hms_opt(0, 0, 0).unwrap();
        assert!(is_same_day(morning, evening));
        assert!(!is_same_day(evening, next_day));
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2026, 2), Some(28));
        assert_eq!(days_in_month(2026, 12), Some(31));
        assert_eq!(days_in_month(2026, 4), Some(30));
        assert_eq!(days_in_month(2026, 13), None);
    }

    #[test]
    fn month_days_enumerates_whole_month() {
        let days = month_days(2026, 1);
        assert_eq!(days.len(), 31);
        assert_eq!(days[0], date(2026, 1, 1));
        assert_eq!(days[30], date(2026, 1, 31));
    }

    #[test]
    fn month_days_out_of_range_is_empty() {
        assert!(month_days(2026, 0).is_empty());
    }

    #[test]
    fn weekend_detection() {
        assert!(is_weekend(date(2026, 1, 10))); // Saturday
        assert!(is_weekend(date(2026, 1, 11))); // Sunday
        assert!(!is_weekend(date(2026, 1, 12))); // Monday
    }
}
