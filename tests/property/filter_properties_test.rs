//! Property-based tests for the filter engine.
//!
//! These tests generate arbitrary record sets relative to a fixed instant
//! and check that filtering behaves as a pure, order-preserving selection
//! whose criteria compose with AND semantics.

use chrono::{DateTime, Duration, TimeZone, Utc};
use lookback::{Calendar, FilterCriteria, FilterEngine, QuickTimeFilter, VisitRecord};
use proptest::prelude::*;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

/// Strategy for one record: domain, path, title, minutes before `now`, tag
fn arb_record_parts() -> impl Strategy<Value = (String, String, String, i64, Option<String>)> {
    (
        prop_oneof![
            Just("github.com".to_string()),
            Just("docs.rs".to_string()),
            Just("news.ycombinator.com".to_string()),
            Just("example.org".to_string()),
        ],
        "[a-z0-9]{1,8}",
        "[a-zA-Z][a-zA-Z ]{0,20}",
        0i64..(60 * 24 * 45),
        proptest::option::of(prop_oneof![
            Just("work".to_string()),
            Just("read-later".to_string()),
        ]),
    )
}

/// Strategy for a record list with unique ids, in generation order
fn arb_records() -> impl Strategy<Value = Vec<VisitRecord>> {
    prop::collection::vec(arb_record_parts(), 0..40).prop_map(|parts| {
        parts
            .into_iter()
            .enumerate()
            .map(|(i, (domain, path, title, minutes, tag))| {
                let record = VisitRecord::new(
                    format!("hist-{}", i),
                    format!("https://{}/{}", domain, path),
                    title,
                    now() - Duration::minutes(minutes),
                );
                match tag {
                    Some(tag) => record.with_tag(tag),
                    None => record,
                }
            })
            .collect()
    })
}

fn arb_quick() -> impl Strategy<Value = QuickTimeFilter> {
    prop::sample::select(QuickTimeFilter::ALL.to_vec())
}

fn ids(records: &[VisitRecord]) -> Vec<String> {
    records.iter().map(|r| r.id().to_string()).collect()
}

// Default criteria keep every record in its original order.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn default_criteria_is_identity(records in arb_records()) {
        let engine = FilterEngine::new(Calendar::utc());
        let result = engine.filter(&records, &FilterCriteria::default(), now());
        prop_assert_eq!(result, records);
    }

    #[test]
    fn filter_preserves_input_order(
        records in arb_records(),
        quick in arb_quick(),
        query in "[a-z]{0,2}",
    ) {
        let engine = FilterEngine::new(Calendar::utc());
        let criteria = FilterCriteria::new().with_quick(quick).with_search(query);
        let result = engine.filter(&records, &criteria, now());

        // Result must be a subsequence of the input
        let mut input = records.iter();
        for kept in &result {
            prop_assert!(
                input.any(|r| r.id() == kept.id()),
                "record {} out of order or not from input",
                kept.id()
            );
        }
    }

    #[test]
    fn search_matches_title_url_or_domain(records in arb_records(), query in "[a-zA-Z]{1,3}") {
        let engine = FilterEngine::new(Calendar::utc());
        let criteria = FilterCriteria::new().with_search(query.clone());
        let result = engine.filter(&records, &criteria, now());
        let kept = ids(&result);
        let needle = query.to_lowercase();

        for record in &records {
            let hit = record.title().to_lowercase().contains(&needle)
                || record.url().to_lowercase().contains(&needle)
                || record.domain().to_lowercase().contains(&needle);
            prop_assert_eq!(
                hit,
                kept.contains(&record.id().to_string()),
                "search '{}' disagrees on {}",
                query,
                record.id()
            );
        }
    }

    #[test]
    fn combined_criteria_are_intersection(
        records in arb_records(),
        quick in arb_quick(),
        domain in prop_oneof![Just("github.com"), Just("docs.rs")],
        use_tag in any::<bool>(),
    ) {
        let engine = FilterEngine::new(Calendar::utc());

        let mut combined = FilterCriteria::new().with_quick(quick).with_domain(domain);
        let mut tag_only = FilterCriteria::new();
        if use_tag {
            combined = combined.with_tag("work");
            tag_only = tag_only.with_tag("work");
        }

        let by_time = ids(&engine.filter(&records, &FilterCriteria::new().with_quick(quick), now()));
        let by_domain = ids(&engine.filter(&records, &FilterCriteria::new().with_domain(domain), now()));
        let by_tag = ids(&engine.filter(&records, &tag_only, now()));

        let expected: Vec<String> = ids(&records)
            .into_iter()
            .filter(|id| by_time.contains(id) && by_domain.contains(id) && by_tag.contains(id))
            .collect();

        prop_assert_eq!(ids(&engine.filter(&records, &combined, now())), expected);
    }

    #[test]
    fn quick_filters_nest(records in arb_records()) {
        let engine = FilterEngine::new(Calendar::utc());
        let count = |quick| {
            engine
                .filter(&records, &FilterCriteria::new().with_quick(quick), now())
                .len()
        };

        let today = count(QuickTimeFilter::Today);
        let week = count(QuickTimeFilter::Week);
        let month = count(QuickTimeFilter::Month);
        let all = count(QuickTimeFilter::All);

        prop_assert!(today <= week);
        prop_assert!(week <= month);
        prop_assert!(month <= all);
        prop_assert_eq!(all, records.len());
    }

    #[test]
    fn filtering_is_repeatable(records in arb_records(), quick in arb_quick()) {
        let engine = FilterEngine::new(Calendar::utc());
        let criteria = FilterCriteria::new().with_quick(quick);
        let first = engine.filter(&records, &criteria, now());
        let again = engine.filter(&first, &criteria, now());
        prop_assert_eq!(first, again);
    }
}
