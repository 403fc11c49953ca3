//! History browser controller
//!
//! Ties the record store, the current filter, the view mode and the
//! selection together. Views are recomputed from scratch by calling the
//! pure engines whenever they are requested; nothing is cached.

use crate::actions::{normalize_tag, HistoryActions, LoggingActions};
use crate::calendar::Calendar;
use crate::error::Result;
use crate::filter::{FilterCriteria, FilterEngine};
use crate::grouping::{self, DomainGroups, DomainSummary, GroupingEngine, HistoryGroup};
use crate::record::{RecordStore, VisitRecord};
use crate::selection::SelectionTracker;
use crate::types::{RecordId, ViewMode};
use chrono::{DateTime, Utc};

/// Source of the current instant for relative time filters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(ts) => *ts,
        }
    }
}

/// Output of the active view mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposedView {
    List(Vec<VisitRecord>),
    Timeline(Vec<HistoryGroup>),
    Grouped(Vec<DomainSummary>),
}

impl ComposedView {
    pub fn mode(&self) -> ViewMode {
        match self {
            ComposedView::List(_) => ViewMode::List,
            ComposedView::Timeline(_) => ViewMode::Timeline,
            ComposedView::Grouped(_) => ViewMode::Grouped,
        }
    }

    /// Number of records across the whole view
    pub fn record_count(&self) -> usize {
        match self {
            ComposedView::List(records) => records.len(),
            ComposedView::Timeline(groups) => groups.iter().map(HistoryGroup::len).sum(),
            ComposedView::Grouped(summaries) => summaries.iter().map(DomainSummary::page_count).sum(),
        }
    }
}

pub struct HistoryBrowser<A: HistoryActions = LoggingActions> {
    store: RecordStore,
    criteria: FilterCriteria,
    view_mode: ViewMode,
    selection: SelectionTracker,
    filter_engine: FilterEngine,
    grouping_engine: GroupingEngine,
    clock: Clock,
    actions: A,
}

impl HistoryBrowser<LoggingActions> {
    /// Browser over `store` using the logging collaborator
    pub fn new(store: RecordStore, calendar: Calendar) -> Self {
        Self::with_actions(store, calendar, LoggingActions)
    }
}

impl<A: HistoryActions> HistoryBrowser<A> {
    pub fn with_actions(store: RecordStore, calendar: Calendar, actions: A) -> Self {
        Self {
            store,
            criteria: FilterCriteria::default(),
            view_mode: ViewMode::default(),
            selection: SelectionTracker::new(),
            filter_engine: FilterEngine::new(calendar),
            grouping_engine: GroupingEngine::new(calendar),
            clock: Clock::System,
            actions,
        }
    }

    /// Pin the instant used for relative time filters
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionTracker {
        &mut self.selection
    }

    pub fn actions(&self) -> &A {
        &self.actions
    }

    pub fn calendar(&self) -> &Calendar {
        self.filter_engine.calendar()
    }

    /// Replace the filter criteria
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// Edit the filter criteria in place
    pub fn update_criteria<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut FilterCriteria),
    {
        edit(&mut self.criteria);
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Records passing the current criteria, in store order
    pub fn filtered(&self) -> Vec<VisitRecord> {
        self.filter_engine
            .filter(self.store.records(), &self.criteria, self.clock.now())
    }

    /// Filtered records grouped by day
    pub fn timeline(&self) -> Vec<HistoryGroup> {
        self.grouping_engine.group_by_date(&self.filtered())
    }

    /// Filtered records grouped by domain
    pub fn grouped(&self) -> DomainGroups {
        self.grouping_engine.group_by_domain(&self.filtered())
    }

    /// Output of the active view mode
    pub fn compose(&self) -> ComposedView {
        let filtered = self.filtered();
        match self.view_mode {
            ViewMode::List => ComposedView::List(filtered),
            ViewMode::Timeline => {
                ComposedView::Timeline(self.grouping_engine.group_by_date(&filtered))
            }
            ViewMode::Grouped => ComposedView::Grouped(grouping::summarize_domains(
                &self.grouping_engine.group_by_domain(&filtered),
            )),
        }
    }

    /// Domains available for the domain filter
    pub fn available_domains(&self) -> Vec<String> {
        grouping::all_domains(self.store.records())
    }

    /// Tags available for the tag filter
    pub fn available_tags(&self) -> Vec<String> {
        grouping::all_tags(self.store.records())
    }

    /// Select exactly the currently visible records
    pub fn select_all_visible(&mut self) {
        let visible = self.visible_ids();
        self.selection.select_all(&visible);
    }

    /// Select all visible records, or clear if they already are selected
    pub fn toggle_all_visible(&mut self) {
        let visible = self.visible_ids();
        self.selection.toggle_all(&visible);
    }

    fn visible_ids(&self) -> Vec<RecordId> {
        self.filtered().iter().map(|r| r.id().clone()).collect()
    }

    pub fn add_tag(&mut self, ids: &[RecordId], tag: &str) -> Result<()> {
        let tag = normalize_tag(tag)?;
        self.actions.add_tag(ids, &tag);
        Ok(())
    }

    pub fn remove_tag(&mut self, ids: &[RecordId], tag: &str) -> Result<()> {
        let tag = normalize_tag(tag)?;
        self.actions.remove_tag(ids, &tag);
        Ok(())
    }

    pub fn delete(&mut self, ids: &[RecordId]) {
        self.actions.delete(ids);
    }

    /// Hand the record's URL to the page opener
    pub fn open(&mut self, id: &str) -> Result<()> {
        let url = self.store.require(id)?.url().to_string();
        self.actions.open_record(&url);
        Ok(())
    }

    /// Tag every selected record
    pub fn tag_selection(&mut self, tag: &str) -> Result<()> {
        let ids = self.selection.selected_ids();
        self.add_tag(&ids, tag)
    }

    /// Delete every selected record
    pub fn delete_selection(&mut self) {
        let ids = self.selection.selected_ids();
        self.delete(&ids);
    }
}
