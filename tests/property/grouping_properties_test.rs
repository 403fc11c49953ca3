//! Property-based tests for grouping and selection.
//!
//! Date and domain grouping must partition their input exactly, and
//! selection toggles must be reversible for arbitrary id sets.

use chrono::{DateTime, Duration, TimeZone, Utc};
use lookback::grouping::summarize_domains;
use lookback::{Calendar, GroupingEngine, RecordId, SelectionTracker, VisitRecord};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

/// Strategy for records spread over a month across a handful of domains
fn arb_records() -> impl Strategy<Value = Vec<VisitRecord>> {
    prop::collection::vec(
        (
            prop_oneof![
                Just("github.com"),
                Just("docs.rs"),
                Just("crates.io"),
                Just("not a url"),
            ],
            0i64..(60 * 24 * 30),
            1u32..=10,
        ),
        0..40,
    )
    .prop_map(|parts| {
        parts
            .into_iter()
            .enumerate()
            .map(|(i, (host, minutes, visits))| {
                let url = if host.contains(' ') {
                    host.to_string()
                } else {
                    format!("https://{}/page-{}", host, i)
                };
                VisitRecord::new(format!("hist-{}", i), url, "Page", now() - Duration::minutes(minutes))
                    .with_visit_count(visits)
            })
            .collect()
    })
}

/// Strategy for calendar offsets between -12h and +14h, in quarter hours
fn arb_calendar() -> impl Strategy<Value = Calendar> {
    (-48i32..=56).prop_map(|quarters| {
        Calendar::with_offset_minutes(quarters * 15).unwrap_or_default()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn date_groups_partition_records(records in arb_records(), calendar in arb_calendar()) {
        let engine = GroupingEngine::new(calendar);
        let groups = engine.group_by_date(&records);

        let total: usize = groups.iter().map(|g| g.len()).sum();
        prop_assert_eq!(total, records.len());

        for pair in groups.windows(2) {
            prop_assert!(pair[0].date > pair[1].date, "days must be strictly descending");
        }

        for group in &groups {
            prop_assert!(!group.is_empty());
            for record in &group.records {
                prop_assert_eq!(calendar.day_of(record.visit_time()), group.date);
            }
        }
    }

    #[test]
    fn date_groups_keep_input_order(records in arb_records()) {
        let engine = GroupingEngine::new(Calendar::utc());
        for group in engine.group_by_date(&records) {
            let positions: Vec<usize> = group
                .records
                .iter()
                .map(|r| records.iter().position(|o| o.id() == r.id()).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn domain_groups_cover_each_domain_once(records in arb_records()) {
        let engine = GroupingEngine::new(Calendar::utc());
        let groups = engine.group_by_domain(&records);

        let expected: BTreeSet<String> = records.iter().map(|r| r.domain().to_string()).collect();
        let keys: BTreeSet<String> = groups.keys().cloned().collect();
        prop_assert_eq!(keys, expected);

        for (domain, members) in &groups {
            let count = records.iter().filter(|r| r.domain() == domain.as_str()).count();
            prop_assert_eq!(members.len(), count);
            prop_assert!(members.iter().all(|r| r.domain() == domain.as_str()));
        }
    }

    #[test]
    fn summaries_total_visits(records in arb_records()) {
        let engine = GroupingEngine::new(Calendar::utc());
        let summaries = summarize_domains(&engine.group_by_domain(&records));

        let expected: u64 = records.iter().map(|r| u64::from(r.visit_count())).sum();
        let total: u64 = summaries.iter().map(|s| s.total_visits).sum();
        prop_assert_eq!(total, expected);

        for pair in summaries.windows(2) {
            prop_assert!(pair[0].latest_visit >= pair[1].latest_visit);
        }
        for summary in &summaries {
            prop_assert!(summary
                .records
                .windows(2)
                .all(|w| w[0].visit_time() >= w[1].visit_time()));
        }
    }

    #[test]
    fn toggle_twice_restores_selection(
        initial in prop::collection::btree_set("hist-[0-9]{1,2}", 0..10),
        id in "hist-[0-9]{1,2}",
    ) {
        let initial: Vec<RecordId> = initial.into_iter().map(RecordId::new).collect();
        let mut selection = SelectionTracker::new();
        selection.select_all(&initial);
        let before = selection.clone();

        let id = RecordId::new(id);
        selection.toggle(&id);
        prop_assert_ne!(selection.is_selected(&id), before.is_selected(&id));
        selection.toggle(&id);
        prop_assert_eq!(selection, before);
    }

    #[test]
    fn toggle_all_twice_clears(visible in prop::collection::btree_set("hist-[0-9]{1,2}", 1..10)) {
        let visible: Vec<RecordId> = visible.into_iter().map(RecordId::new).collect();
        let mut selection = SelectionTracker::new();

        selection.toggle_all(&visible);
        prop_assert_eq!(selection.len(), visible.len());
        prop_assert!(visible.iter().all(|id| selection.is_selected(id)));

        selection.toggle_all(&visible);
        prop_assert!(selection.is_empty());
    }
}
