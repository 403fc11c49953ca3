//! Lookback - browse, filter and group web browsing history
//!
//! This library provides functionality for:
//! - Holding a session's visit records (generated or read from a fixture)
//! - Filtering records by time, domain, tag and free text
//! - Grouping records by calendar day or by domain
//! - Tracking a selection of records independent of the current filter
//!
//! # Examples
//!
//! ```rust
//! use lookback::{Calendar, FilterCriteria, FixtureGenerator, HistoryBrowser, QuickTimeFilter};
//!
//! let store = FixtureGenerator::new(50).with_seed(7).into_store(chrono::Utc::now());
//! let mut browser = HistoryBrowser::new(store, Calendar::utc());
//! browser.set_criteria(FilterCriteria::new().with_quick(QuickTimeFilter::Week));
//! let days = browser.timeline();
//! assert!(days.windows(2).all(|w| w[0].date > w[1].date));
//! ```

pub mod actions;
pub mod browser;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod fixture;
pub mod grouping;
pub mod manage_tui;
pub mod prelude;
pub mod record;
pub mod selection;
pub mod types;

pub use actions::{HistoryActions, LoggingActions};
pub use browser::{Clock, ComposedView, HistoryBrowser};
pub use calendar::Calendar;
pub use config::Config;
pub use error::{Error, Result};
pub use filter::{FilterCriteria, FilterEngine, QuickTimeFilter, TimeRange};
pub use fixture::FixtureGenerator;
pub use grouping::{DomainGroups, DomainSummary, GroupingEngine, HistoryGroup};
pub use record::{RecordStore, VisitRecord};
pub use selection::SelectionTracker;
pub use types::{RecordId, ViewMode};

/// Build the record store described by a configuration
///
/// Reads the fixture file when one is configured, otherwise generates
/// records relative to the current time.
pub fn load_store(config: &Config) -> Result<RecordStore> {
    match &config.fixture.path {
        Some(path) => RecordStore::load_from_path(path),
        None => {
            let mut generator = FixtureGenerator::new(config.fixture.record_count);
            if let Some(seed) = config.fixture.seed {
                generator = generator.with_seed(seed);
            }
            Ok(generator.into_store(chrono::Utc::now()))
        }
    }
}

/// Initialize a browser with default configuration
///
/// Day boundaries are UTC. Use [`init_with_config`] to follow a
/// configured offset or the machine's local time zone.
pub fn init() -> Result<HistoryBrowser> {
    let mut config = Config::default();
    config.calendar.utc_offset_minutes = Some(0);
    init_with_config(&config)
}

/// Initialize a browser with a custom configuration
pub fn init_with_config(config: &Config) -> Result<HistoryBrowser> {
    config.validate()?;
    let store = load_store(config)?;
    let mut browser = HistoryBrowser::new(store, config.calendar());
    browser.set_view_mode(config.display.default_view);
    Ok(browser)
}
