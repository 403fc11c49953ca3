//! Type definitions for Lookback
//!
//! Type-safe wrappers around primitive values used across the engines.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::error::Error;

/// A type-safe wrapper for visit record identifiers
///
/// Record ids are opaque strings such as `hist-42`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    /// Create a new RecordId
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    /// Get a reference to the inner String
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume self and return the inner String
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RecordId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Deref for RecordId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// How the filtered records are presented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Flat list with selection
    #[default]
    List,
    /// Records grouped by calendar day, newest day first
    Timeline,
    /// Records grouped by domain
    Grouped,
}

impl ViewMode {
    /// All view modes in toggle order
    pub const ALL: [ViewMode; 3] = [ViewMode::List, ViewMode::Timeline, ViewMode::Grouped];

    /// The mode that follows this one when cycling
    pub fn next(self) -> Self {
        match self {
            ViewMode::List => ViewMode::Timeline,
            ViewMode::Timeline => ViewMode::Grouped,
            ViewMode::Grouped => ViewMode::List,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::List => "list",
            ViewMode::Timeline => "timeline",
            ViewMode::Grouped => "grouped",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "list" => Ok(ViewMode::List),
            "timeline" => Ok(ViewMode::Timeline),
            "grouped" => Ok(ViewMode::Grouped),
            other => Err(Error::invalid_arguments(format!(
                "unknown view mode '{}', expected list, timeline or grouped",
                other
            ))),
        }
    }
}
