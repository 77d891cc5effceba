// Property-based tests for the remaining-time computation

use chrono::{NaiveDate, NaiveTime};
use exam_countdown::services::countdown::{remaining_until, RemainingTime};
use exam_countdown::utils::date::start_of_day;
use proptest::prelude::*;

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2020i32..2035, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn arb_time() -> impl Strategy<Value = NaiveTime> {
    (0u32..24, 0u32..60, 0u32..60)
        .prop_map(|(h, m, s)| NaiveTime::from_hms_opt(h, m, s).unwrap())
}

proptest! {
    /// Property: with no target configured, every instant computes to zero.
    #[test]
    fn prop_absent_target_is_always_zero(now_date in arb_date(), now_time in arb_time()) {
        let now = now_date.and_time(now_time);
        prop_assert_eq!(remaining_until(None, now), RemainingTime::ZERO);
    }

    /// Property: for a future target, the field decomposition adds back up
    /// to the floor of the millisecond difference in whole seconds, and
    /// every field stays in range.
    #[test]
    fn prop_decomposition_is_exact_for_future_targets(
        target in arb_date(),
        now_date in arb_date(),
        now_time in arb_time(),
    ) {
        let now = now_date.and_time(now_time);
        let midnight = start_of_day(target);
        prop_assume!(midnight > now);

        let remaining = remaining_until(Some(target), now);
        let diff_secs = midnight.signed_duration_since(now).num_seconds();

        prop_assert_eq!(remaining.total_seconds(), diff_secs as u64);
        prop_assert!(remaining.hours < 24);
        prop_assert!(remaining.minutes < 60);
        prop_assert!(remaining.seconds < 60);
    }

    /// Property: once the target midnight has arrived or passed, the
    /// breakdown is pinned at zero.
    #[test]
    fn prop_passed_target_is_always_zero(
        target in arb_date(),
        now_date in arb_date(),
        now_time in arb_time(),
    ) {
        let now = now_date.and_time(now_time);
        prop_assume!(start_of_day(target) <= now);
        prop_assert_eq!(remaining_until(Some(target), now), RemainingTime::ZERO);
    }

    /// Property: the computation is a pure function of its inputs.
    #[test]
    fn prop_compute_is_idempotent(
        target in arb_date(),
        now_date in arb_date(),
        now_time in arb_time(),
    ) {
        let now = now_date.and_time(now_time);
        prop_assert_eq!(
            remaining_until(Some(target), now),
            remaining_until(Some(target), now)
        );
    }
}
