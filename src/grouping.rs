//! Grouping engine for Lookback
//!
//! Partitions an already filtered record list by calendar day or by
//! domain. Both transforms keep every record exactly once and preserve
//! input order inside each group.

use crate::calendar::Calendar;
use crate::record::VisitRecord;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Records that share a calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryGroup {
    pub date: NaiveDate,
    pub records: Vec<VisitRecord>,
}

impl HistoryGroup {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Domain grouping: domain -> records in input order
pub type DomainGroups = BTreeMap<String, Vec<VisitRecord>>;

/// Aggregate view of one domain group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainSummary {
    pub domain: String,
    /// Records sorted newest first
    pub records: Vec<VisitRecord>,
    pub total_visits: u64,
    pub latest_visit: DateTime<Utc>,
    pub favicon: Option<String>,
}

impl DomainSummary {
    pub fn page_count(&self) -> usize {
        self.records.len()
    }
}

/// Grouping engine bound to a calendar
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupingEngine {
    calendar: Calendar,
}

impl GroupingEngine {
    pub fn new(calendar: Calendar) -> Self {
        Self { calendar }
    }

    /// One group per distinct day, most recent day first
    pub fn group_by_date(&self, records: &[VisitRecord]) -> Vec<HistoryGroup> {
        let mut by_day: BTreeMap<NaiveDate, Vec<VisitRecord>> = BTreeMap::new();
        for record in records {
            by_day
                .entry(self.calendar.day_of(record.visit_time()))
                .or_default()
                .push(record.clone());
        }

        let groups: Vec<HistoryGroup> = by_day
            .into_iter()
            .rev()
            .map(|(date, records)| HistoryGroup { date, records })
            .collect();

        tracing::debug!(records = records.len(), groups = groups.len(), "grouped by date");
        groups
    }

    /// Partition by exact domain string
    pub fn group_by_domain(&self, records: &[VisitRecord]) -> DomainGroups {
        let mut groups = DomainGroups::new();
        for record in records {
            groups
                .entry(record.domain().to_string())
                .or_default()
                .push(record.clone());
        }

        tracing::debug!(records = records.len(), groups = groups.len(), "grouped by domain");
        groups
    }
}

/// Summaries of domain groups, most recently visited domain first
///
/// Ties on the latest visit fall back to domain name so the order is
/// deterministic.
pub fn summarize_domains(groups: &DomainGroups) -> Vec<DomainSummary> {
    let mut summaries: Vec<DomainSummary> = groups
        .iter()
        .filter_map(|(domain, records)| {
            let latest_visit = records.iter().map(|r| r.visit_time()).max()?;
            let mut sorted = records.clone();
            sorted.sort_by(|a, b| b.visit_time().cmp(&a.visit_time()));

            Some(DomainSummary {
                domain: domain.clone(),
                total_visits: records.iter().map(|r| u64::from(r.visit_count())).sum(),
                latest_visit,
                favicon: records
                    .iter()
                    .find_map(|r| r.favicon().map(str::to_string)),
                records: sorted,
            })
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.latest_visit
            .cmp(&a.latest_visit)
            .then_with(|| a.domain.cmp(&b.domain))
    });
    summaries
}

/// Sorted distinct domains
pub fn all_domains(records: &[VisitRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.domain().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Sorted distinct tags
pub fn all_tags(records: &[VisitRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|r| r.tags().iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
