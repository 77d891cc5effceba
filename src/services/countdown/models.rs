use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Key under which the target exam date is persisted.
pub const TARGET_DATE_KEY: &str = "targetExamDate";

/// Calendar time remaining until midnight of the target date.
///
/// All fields are non-negative; once the target instant has passed the whole
/// struct reads zero. Recomputed on every tick, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RemainingTime {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl RemainingTime {
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
    }
}

/// Zero-padded `DD:HH:MM:SS`. Two digits is a minimum width; days past 99
/// are rendered in full.
impl fmt::Display for RemainingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Serialized form of a target date: ISO-8601 local midnight.
pub fn serialize_target(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}

/// Parse a persisted target date back to its calendar day.
///
/// Accepts the canonical `YYYY-MM-DDT00:00:00` form, a bare `YYYY-MM-DD`,
/// and full RFC 3339 instants left behind by older builds. Returns `None`
/// for anything unparseable; the controller degrades to the unset state.
pub fn parse_persisted_target(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn display_pads_to_two_digits() {
        let remaining = RemainingTime {
            days: 3,
            hours: 4,
            minutes: 5,
            seconds: 9,
        };
        assert_eq!(remaining.to_string(), "03:04:05:09");
    }

    #[test]
    fn display_does_not_truncate_large_day_counts() {
        let remaining = RemainingTime {
            days: 123,
            hours: 0,
            minutes: 59,
            seconds: 0,
        };
        assert_eq!(remaining.to_string(), "123:00:59:00");
    }

    #[test]
    fn total_seconds_sums_fields() {
        let remaining = RemainingTime {
            days: 1,
            hours: 14,
            minutes: 0,
            seconds: 0,
        };
        assert_eq!(remaining.total_seconds(), 136_800);
    }

    #[test]
    fn serialize_then_parse_round_trips_the_calendar_day() {
        let day = date(2026, 1, 10);
        let raw = serialize_target(day);
        assert_eq!(raw, "2026-01-10T00:00:00");
        assert_eq!(parse_persisted_target(&raw), Some(day));
    }

    #[test]
    fn parse_accepts_bare_dates_and_rfc3339() {
        assert_eq!(parse_persisted_target("2026-01-10"), Some(date(2026, 1, 10)));
        assert_eq!(
            parse_persisted_target("2026-01-10T00:00:00+05:30"),
            Some(date(2026, 1, 10))
        );
        assert_eq!(parse_persisted_target("  2026-01-10  "), Some(date(2026, 1, 10)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_persisted_target(""), None);
        assert_eq!(parse_persisted_target("next tuesday"), None);
        assert_eq!(parse_persisted_target("2026-13-40"), None);
    }
}
