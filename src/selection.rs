//! Selection tracking
//!
//! A set of record ids the user has marked. Selection is keyed by id and
//! is independent of the current filter, so ids of records that are
//! filtered out stay selected and are simply not shown.

use crate::types::RecordId;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    selected: HashSet<RecordId>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`
    pub fn toggle(&mut self, id: &RecordId) {
        if !self.selected.remove(id) {
            self.selected.insert(id.clone());
        }
    }

    /// Replace the selection with exactly `ids`
    pub fn select_all<'a, I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = &'a RecordId>,
    {
        self.selected = ids.into_iter().cloned().collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Select every visible id, or clear when that is already the selection
    pub fn toggle_all<'a, I>(&mut self, visible: I)
    where
        I: IntoIterator<Item = &'a RecordId>,
    {
        let visible: HashSet<&RecordId> = visible.into_iter().collect();
        let all_selected = self.selected.len() == visible.len()
            && visible.iter().all(|id| self.selected.contains(*id));

        if all_selected {
            self.clear();
        } else {
            self.selected = visible.into_iter().cloned().collect();
        }
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecordId> {
        self.selected.iter()
    }

    /// Selected ids in sorted order
    pub fn selected_ids(&self) -> Vec<RecordId> {
        let mut ids: Vec<RecordId> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }
}
