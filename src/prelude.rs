//! Prelude module for Lookback
//!
//! Re-exports commonly used types so callers can pull in the engines
//! with one import.
//!
//! # Usage
//!
//! ```rust
//! use lookback::prelude::*;
//! ```

pub use crate::actions::HistoryActions;
pub use crate::browser::{ComposedView, HistoryBrowser};
pub use crate::calendar::Calendar;
pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::filter::{FilterCriteria, QuickTimeFilter};
pub use crate::record::{RecordStore, VisitRecord};
pub use crate::types::{RecordId, ViewMode};

// Re-export commonly used external types
pub use chrono::{DateTime, Utc};
