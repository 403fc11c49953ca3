//! Tests for local-time day boundaries across daylight saving changes.
//!
//! The process time zone is pinned to a US-Eastern rule string before any
//! local time is resolved. This file holds a single test so no other test
//! in the binary observes the changed environment.

#![cfg(unix)]

use chrono::{NaiveDate, TimeZone, Utc};
use lookback::{Calendar, FilterCriteria, FilterEngine, GroupingEngine, QuickTimeFilter, VisitRecord};

/// US Eastern: UTC-5 in winter, UTC-4 from March to November.
const EASTERN: &str = "EST5EDT,M3.2.0,M11.1.0";

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_local_calendar_resolves_offset_per_timestamp() {
    // SAFETY: this is the only test in this binary and it runs before any
    // other code reads the environment.
    unsafe {
        std::env::set_var("TZ", EASTERN);
    }

    let calendar = Calendar::local();

    // 04:30Z is 23:30 the previous evening under both EST and EDT
    let winter = Utc.with_ymd_and_hms(2026, 12, 10, 4, 30, 0).unwrap();
    let summer = Utc.with_ymd_and_hms(2026, 7, 10, 3, 30, 0).unwrap();
    assert_eq!(calendar.day_of(winter), day(2026, 12, 9));
    assert_eq!(calendar.day_of(summer), day(2026, 7, 9));

    // Grouping on either side of the November change
    let before_change = Utc.with_ymd_and_hms(2026, 10, 31, 3, 30, 0).unwrap();
    let after_change = Utc.with_ymd_and_hms(2026, 11, 2, 4, 30, 0).unwrap();
    let records = vec![
        VisitRecord::new("hist-0", "https://a.com/", "After", after_change),
        VisitRecord::new("hist-1", "https://a.com/", "Before", before_change),
    ];
    let groups = GroupingEngine::new(calendar).group_by_date(&records);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].date, day(2026, 11, 1));
    assert_eq!(groups[1].date, day(2026, 10, 30));

    // "today" compares local days even when now and the visit straddle the change
    let now = Utc.with_ymd_and_hms(2026, 11, 1, 12, 0, 0).unwrap();
    let early = Utc.with_ymd_and_hms(2026, 11, 1, 4, 30, 0).unwrap();
    let visits = vec![VisitRecord::new("hist-2", "https://b.com/", "Early", early)];
    let today = FilterCriteria::new().with_quick(QuickTimeFilter::Today);
    assert_eq!(FilterEngine::new(calendar).filter(&visits, &today, now).len(), 1);
}
