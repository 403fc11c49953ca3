//! End-to-end tests for the HistoryBrowser public API.
//!
//! These drive a browser over a small hand-built store with a pinned
//! clock, and use `RecordingActions` to observe the requests it hands off.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use lookback::actions::{ActionCall, RecordingActions};
use lookback::{
    Calendar, Clock, ComposedView, FilterCriteria, FixtureGenerator, HistoryBrowser,
    QuickTimeFilter, RecordId, RecordStore, ViewMode, VisitRecord,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 10, 18, 30, 0).unwrap()
}

/// Helper: browser over `records` with a recording collaborator.
fn setup(records: Vec<VisitRecord>) -> HistoryBrowser<RecordingActions> {
    let store = RecordStore::new(records).expect("unique ids");
    HistoryBrowser::with_actions(store, Calendar::utc(), RecordingActions::default())
        .with_clock(Clock::Fixed(now()))
}

fn ids(records: &[VisitRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id().as_str()).collect()
}

/// A visit at exactly now is today; one 25 hours earlier is not.
#[test]
fn test_today_boundary() {
    let mut browser = setup(vec![
        VisitRecord::new("hist-0", "https://a.com/", "Now", now()),
        VisitRecord::new("hist-1", "https://a.com/old", "Earlier", now() - Duration::hours(25)),
    ]);

    browser.update_criteria(|c| c.quick_time_filter = QuickTimeFilter::Today);
    assert_eq!(ids(&browser.filtered()), vec!["hist-0"]);

    browser.update_criteria(|c| c.quick_time_filter = QuickTimeFilter::Yesterday);
    assert_eq!(ids(&browser.filtered()), vec!["hist-1"]);
}

/// Grouping by domain and by date over the same three records.
#[test]
fn test_grouping_worked_example() {
    let day0 = Utc.with_ymd_and_hms(2024, 3, 9, 10, 0, 0).unwrap();
    let day1 = Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap();
    let mut browser = setup(vec![
        VisitRecord::new("rec0", "https://a.com/one", "One", day0),
        VisitRecord::new("rec1", "https://b.com/two", "Two", day0),
        VisitRecord::new("rec2", "https://a.com/three", "Three", day1),
    ]);

    let by_domain = browser.grouped();
    assert_eq!(by_domain.len(), 2);
    assert_eq!(ids(&by_domain["a.com"]), vec!["rec0", "rec2"]);
    assert_eq!(ids(&by_domain["b.com"]), vec!["rec1"]);

    let by_date = browser.timeline();
    assert_eq!(by_date.len(), 2);
    assert_eq!(by_date[0].date, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    assert_eq!(by_date[0].len(), 1);
    assert_eq!(by_date[1].date, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
    assert_eq!(ids(&by_date[1].records), vec!["rec0", "rec1"]);

    browser.set_view_mode(ViewMode::Grouped);
    match browser.compose() {
        ComposedView::Grouped(summaries) => {
            assert_eq!(summaries[0].domain, "a.com");
            assert_eq!(ids(&summaries[0].records), vec!["rec2", "rec0"]);
        }
        other => panic!("expected grouped view, got {:?}", other.mode()),
    }
}

/// Every active criterion must hold; an empty list leaves its axis open.
#[test]
fn test_criteria_combine_with_and() {
    let mut browser = setup(vec![
        VisitRecord::new("hist-0", "https://github.com/rust", "Rust repo", now()).with_tag("work"),
        VisitRecord::new("hist-1", "https://github.com/go", "Go repo", now()),
        VisitRecord::new("hist-2", "https://docs.rs/serde", "Serde docs", now()).with_tag("work"),
        VisitRecord::new(
            "hist-3",
            "https://github.com/old",
            "Old repo",
            now() - Duration::days(10),
        )
        .with_tag("work"),
    ]);

    browser.set_criteria(
        FilterCriteria::new()
            .with_domain("github.com")
            .with_tag("work")
            .with_quick(QuickTimeFilter::Week),
    );
    assert_eq!(ids(&browser.filtered()), vec!["hist-0"]);

    browser.set_criteria(FilterCriteria::new().with_domain("github.com").with_domain("docs.rs"));
    assert_eq!(browser.filtered().len(), 4);

    browser.set_criteria(FilterCriteria::new().with_search("REPO").with_tag("work"));
    assert_eq!(ids(&browser.filtered()), vec!["hist-0", "hist-3"]);

    browser.update_criteria(|c| c.clear());
    assert!(!browser.criteria().has_active_filters());
    assert_eq!(browser.filtered().len(), 4);
}

/// Custom range bounds are inclusive and combine with the quick filter.
#[test]
fn test_custom_range_is_inclusive() {
    let start = now() - Duration::days(3);
    let mut browser = setup(vec![
        VisitRecord::new("hist-0", "https://a.com/", "Start", start),
        VisitRecord::new("hist-1", "https://a.com/", "Before", start - Duration::seconds(1)),
        VisitRecord::new("hist-2", "https://a.com/", "End", now()),
    ]);

    browser.set_criteria(FilterCriteria::new().with_range(Some(start), Some(now())));
    assert_eq!(ids(&browser.filtered()), vec!["hist-0", "hist-2"]);

    browser.update_criteria(|c| c.quick_time_filter = QuickTimeFilter::Today);
    assert_eq!(ids(&browser.filtered()), vec!["hist-2"]);
}

/// Selection survives filtering and feeds the collaborator requests.
#[test]
fn test_selection_drives_requests() {
    let mut browser = setup(vec![
        VisitRecord::new("hist-0", "https://a.com/x", "Alpha", now()),
        VisitRecord::new("hist-1", "https://b.com/y", "Beta", now()),
        VisitRecord::new("hist-2", "https://a.com/z", "Gamma", now()),
    ]);

    browser.selection_mut().toggle(&RecordId::new("hist-1"));
    browser.set_criteria(FilterCriteria::new().with_domain("a.com"));
    assert!(browser.selection().is_selected("hist-1"));

    browser.select_all_visible();
    assert_eq!(
        browser.selection().selected_ids(),
        vec![RecordId::new("hist-0"), RecordId::new("hist-2")]
    );

    browser.tag_selection("reading").unwrap();
    browser.delete_selection();
    browser.open("hist-1").unwrap();
    assert!(browser.tag_selection("   ").is_err());

    assert_eq!(
        browser.actions().calls,
        vec![
            ActionCall::AddTag {
                ids: vec![RecordId::new("hist-0"), RecordId::new("hist-2")],
                tag: "reading".to_string(),
            },
            ActionCall::Delete {
                ids: vec![RecordId::new("hist-0"), RecordId::new("hist-2")],
            },
            ActionCall::Open {
                url: "https://b.com/y".to_string(),
            },
        ]
    );

    // Requests never touch the store
    assert_eq!(browser.store().len(), 3);
    assert!(browser.store().records().iter().all(|r| r.tags().is_empty()));
}

/// Generated fixtures are deterministic per seed and browsable.
#[test]
fn test_generated_store_is_browsable() {
    let first = FixtureGenerator::new(120).with_seed(42).generate(now());
    let second = FixtureGenerator::new(120).with_seed(42).generate(now());
    assert_eq!(first, second);

    let store = FixtureGenerator::new(120).with_seed(42).into_store(now());
    let browser = HistoryBrowser::with_actions(store, Calendar::utc(), RecordingActions::default())
        .with_clock(Clock::Fixed(now()));

    let timeline = browser.timeline();
    assert_eq!(timeline.iter().map(|g| g.len()).sum::<usize>(), 120);
    assert!(timeline.windows(2).all(|w| w[0].date > w[1].date));

    let domains = browser.available_domains();
    assert_eq!(browser.grouped().len(), domains.len());
    assert!(domains.windows(2).all(|w| w[0] < w[1]));
}
