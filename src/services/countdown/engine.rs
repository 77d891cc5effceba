//! Pure remaining-time computation.
//!
//! Works entirely in naive local wall-clock time: the target date is
//! normalized to the viewer's local midnight and the caller supplies `now`
//! as `Local::now().naive_local()`. Keeping the engine timezone-free makes
//! it deterministic under test on any host.

use chrono::{NaiveDate, NaiveDateTime};

use super::models::RemainingTime;
use crate::utils::date::start_of_day;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Time remaining from `now` until midnight of `target`.
///
/// An absent target means "no countdown configured" and yields all zeros,
/// as does a target whose midnight has already passed. Total over its input
/// domain; never fails.
pub fn remaining_until(target: Option<NaiveDate>, now: NaiveDateTime) -> RemainingTime {
    let Some(date) = target else {
        return RemainingTime::ZERO;
    };

    let midnight = start_of_day(date);
    let diff_ms = midnight.signed_duration_since(now).num_milliseconds();
    if diff_ms <= 0 {
        return RemainingTime::ZERO;
    }

    RemainingTime {
        days: (diff_ms / MS_PER_DAY) as u64,
        hours: ((diff_ms / MS_PER_HOUR) % 24) as u64,
        minutes: ((diff_ms / MS_PER_MINUTE) % 60) as u64,
        seconds: ((diff_ms / MS_PER_SECOND) % 60) as u64,
    }
}
