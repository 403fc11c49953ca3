//! Filter engine for Lookback
//!
//! Maps a record list and a [`FilterCriteria`] to the records that pass
//! every active predicate. Record order is never changed.

use crate::calendar::Calendar;
use crate::record::VisitRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Preset relative-date buckets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuickTimeFilter {
    #[default]
    All,
    Today,
    Yesterday,
    Week,
    Month,
}

impl QuickTimeFilter {
    /// All presets in menu order
    pub const ALL: [QuickTimeFilter; 5] = [
        QuickTimeFilter::All,
        QuickTimeFilter::Today,
        QuickTimeFilter::Yesterday,
        QuickTimeFilter::Week,
        QuickTimeFilter::Month,
    ];

    /// The preset after this one, wrapping around
    pub fn next(self) -> Self {
        match self {
            QuickTimeFilter::All => QuickTimeFilter::Today,
            QuickTimeFilter::Today => QuickTimeFilter::Yesterday,
            QuickTimeFilter::Yesterday => QuickTimeFilter::Week,
            QuickTimeFilter::Week => QuickTimeFilter::Month,
            QuickTimeFilter::Month => QuickTimeFilter::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QuickTimeFilter::All => "all",
            QuickTimeFilter::Today => "today",
            QuickTimeFilter::Yesterday => "yesterday",
            QuickTimeFilter::Week => "week",
            QuickTimeFilter::Month => "month",
        }
    }

    /// Whether a visit at `ts` falls inside this preset relative to `now`
    pub fn matches(self, ts: DateTime<Utc>, now: DateTime<Utc>, calendar: &Calendar) -> bool {
        match self {
            QuickTimeFilter::All => true,
            QuickTimeFilter::Today => calendar.day_of(ts) == calendar.day_of(now),
            QuickTimeFilter::Yesterday => calendar.day_of(ts) == calendar.day_before(now),
            QuickTimeFilter::Week => ts >= calendar.week_before(now),
            QuickTimeFilter::Month => ts >= calendar.month_before(now),
        }
    }
}

impl fmt::Display for QuickTimeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuickTimeFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuickTimeFilter::ALL
            .into_iter()
            .find(|q| q.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                Error::invalid_arguments(format!(
                    "unknown time filter '{}', expected all, today, yesterday, week or month",
                    s
                ))
            })
    }
}

/// Custom time bounds; each side is unbounded when absent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl TimeRange {
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Inclusive on both ends
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        if let Some(start) = self.start {
            if ts < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if ts > end {
                return false;
            }
        }
        true
    }
}

/// The current filter selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub time_range: TimeRange,
    pub quick_time_filter: QuickTimeFilter,
    pub domains: Vec<String>,
    pub tags: Vec<String>,
    pub search_query: String,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    /// Set the quick time preset
    pub fn with_quick(mut self, quick: QuickTimeFilter) -> Self {
        self.quick_time_filter = quick;
        self
    }

    /// Set the custom time range
    pub fn with_range(mut self, start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        self.time_range = TimeRange::new(start, end);
        self
    }

    /// Require a domain
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.add_domain(domain);
        self
    }

    /// Require a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.add_tag(tag);
        self
    }

    /// Add a domain constraint; returns false if it was already present
    pub fn add_domain(&mut self, domain: impl Into<String>) -> bool {
        push_unique(&mut self.domains, domain.into())
    }

    /// Remove a domain constraint; returns false if it was absent
    pub fn remove_domain(&mut self, domain: &str) -> bool {
        remove_value(&mut self.domains, domain)
    }

    /// Add a tag constraint; returns false if it was already present
    pub fn add_tag(&mut self, tag: impl Into<String>) -> bool {
        push_unique(&mut self.tags, tag.into())
    }

    /// Remove a tag constraint; returns false if it was absent
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        remove_value(&mut self.tags, tag)
    }

    /// Reset every axis to its unconstrained default
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when any axis would constrain the result
    pub fn has_active_filters(&self) -> bool {
        self.quick_time_filter != QuickTimeFilter::All
            || !self.time_range.is_unbounded()
            || !self.domains.is_empty()
            || !self.tags.is_empty()
            || !self.search_query.is_empty()
    }

    /// Whether a single record passes these criteria
    ///
    /// Axes are checked in order: quick time, custom range, domains, tags.
    /// A present search query is checked last and its outcome is final.
    pub fn matches(&self, record: &VisitRecord, now: DateTime<Utc>, calendar: &Calendar) -> bool {
        if !self
            .quick_time_filter
            .matches(record.visit_time(), now, calendar)
        {
            return false;
        }

        if !self.time_range.contains(record.visit_time()) {
            return false;
        }

        if !self.domains.is_empty() && !self.domains.iter().any(|d| d == record.domain()) {
            return false;
        }

        if !self.tags.is_empty() && !self.tags.iter().any(|t| record.has_tag(t)) {
            return false;
        }

        if !self.search_query.is_empty() {
            return matches_search(record, &self.search_query.to_lowercase());
        }

        true
    }
}

fn push_unique(values: &mut Vec<String>, value: String) -> bool {
    if values.contains(&value) {
        return false;
    }
    values.push(value);
    true
}

fn remove_value(values: &mut Vec<String>, value: &str) -> bool {
    let before = values.len();
    values.retain(|v| v != value);
    values.len() != before
}

/// Case-insensitive substring match over title, url and domain
///
/// `query_lower` must already be lowercased.
fn matches_search(record: &VisitRecord, query_lower: &str) -> bool {
    record.title().to_lowercase().contains(query_lower)
        || record.url().to_lowercase().contains(query_lower)
        || record.domain().to_lowercase().contains(query_lower)
}

/// Filter engine bound to a calendar
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterEngine {
    calendar: Calendar,
}

impl FilterEngine {
    pub fn new(calendar: Calendar) -> Self {
        Self { calendar }
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Records passing `criteria`, in input order
    pub fn filter(
        &self,
        records: &[VisitRecord],
        criteria: &FilterCriteria,
        now: DateTime<Utc>,
    ) -> Vec<VisitRecord> {
        let result: Vec<VisitRecord> = records
            .iter()
            .filter(|record| criteria.matches(record, now, &self.calendar))
            .cloned()
            .collect();

        tracing::debug!(
            total = records.len(),
            matched = result.len(),
            quick = %criteria.quick_time_filter,
            "filtered records"
        );
        result
    }
}
