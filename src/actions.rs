//! Record actions
//!
//! Tagging, deleting and opening records are delegated to a collaborator
//! behind the [`HistoryActions`] trait. The shipped [`LoggingActions`]
//! only logs each call; record state is never modified.

use crate::error::{Error, Result};
use crate::types::RecordId;

/// Operations the browser hands off to an external collaborator
pub trait HistoryActions {
    /// Attach `tag` to every record in `ids`
    fn add_tag(&mut self, ids: &[RecordId], tag: &str);

    /// Detach `tag` from every record in `ids`
    fn remove_tag(&mut self, ids: &[RecordId], tag: &str);

    /// Delete the records in `ids`
    fn delete(&mut self, ids: &[RecordId]);

    /// Open a record's page; fire and forget
    fn open_record(&mut self, url: &str);
}

/// Trim a user-entered tag, rejecting blank input
pub fn normalize_tag(tag: &str) -> Result<String> {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_arguments("tag must not be empty"));
    }
    Ok(trimmed.to_string())
}

fn join_ids(ids: &[RecordId]) -> String {
    ids.iter().map(RecordId::as_str).collect::<Vec<_>>().join(",")
}

/// Collaborator that logs each request and changes nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingActions;

impl HistoryActions for LoggingActions {
    fn add_tag(&mut self, ids: &[RecordId], tag: &str) {
        tracing::info!(tag, ids = %join_ids(ids), "adding tag to records");
    }

    fn remove_tag(&mut self, ids: &[RecordId], tag: &str) {
        tracing::info!(tag, ids = %join_ids(ids), "removing tag from records");
    }

    fn delete(&mut self, ids: &[RecordId]) {
        tracing::info!(ids = %join_ids(ids), "deleting records");
    }

    fn open_record(&mut self, url: &str) {
        tracing::info!(url, "opening record");
    }
}

/// A call received by [`RecordingActions`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionCall {
    AddTag { ids: Vec<RecordId>, tag: String },
    RemoveTag { ids: Vec<RecordId>, tag: String },
    Delete { ids: Vec<RecordId> },
    Open { url: String },
}

/// Collaborator that remembers every call, for driving the browser in tests
#[derive(Debug, Clone, Default)]
pub struct RecordingActions {
    pub calls: Vec<ActionCall>,
}

impl HistoryActions for RecordingActions {
    fn add_tag(&mut self, ids: &[RecordId], tag: &str) {
        self.calls.push(ActionCall::AddTag {
            ids: ids.to_vec(),
            tag: tag.to_string(),
        });
    }

    fn remove_tag(&mut self, ids: &[RecordId], tag: &str) {
        self.calls.push(ActionCall::RemoveTag {
            ids: ids.to_vec(),
            tag: tag.to_string(),
        });
    }

    fn delete(&mut self, ids: &[RecordId]) {
        self.calls.push(ActionCall::Delete { ids: ids.to_vec() });
    }

    fn open_record(&mut self, url: &str) {
        self.calls.push(ActionCall::Open {
            url: url.to_string(),
        });
    }
}
