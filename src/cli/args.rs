//! Command-line argument structures for Lookback

use crate::calendar::Calendar;
use crate::error::{Error, Result};
use crate::filter::{FilterCriteria, QuickTimeFilter};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Filter flags shared by every view command
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive text to find in title, URL or domain
    #[arg(short = 's', long)]
    pub search: Option<String>,

    /// Quick time filter: all, today, yesterday, week, month
    #[arg(short = 'Q', long, default_value = "all")]
    pub quick: String,

    /// Only visits on or after this day (format: YYYY-MM-DD)
    #[arg(long)]
    pub since: Option<String>,

    /// Only visits on or before this day (format: YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<String>,

    /// Restrict to a domain (repeatable)
    #[arg(short = 'd', long = "domain")]
    pub domains: Vec<String>,

    /// Restrict to records carrying any of these tags (repeatable)
    #[arg(short = 't', long = "tag")]
    pub tags: Vec<String>,
}

impl FilterArgs {
    /// Build filter criteria, interpreting dates in `calendar`
    pub fn to_criteria(&self, calendar: &Calendar) -> Result<FilterCriteria> {
        let quick: QuickTimeFilter = self.quick.parse()?;

        let start_of_day = NaiveTime::from_hms_opt(0, 0, 0)
            .ok_or_else(|| Error::custom("invalid start-of-day time"))?;
        let end_of_day = NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999)
            .ok_or_else(|| Error::custom("invalid end-of-day time"))?;

        let start = self
            .since
            .as_deref()
            .map(|day| day_bound(day, start_of_day, calendar))
            .transpose()?;
        let end = self
            .until
            .as_deref()
            .map(|day| day_bound(day, end_of_day, calendar))
            .transpose()?;

        let mut criteria = FilterCriteria::new()
            .with_quick(quick)
            .with_range(start, end)
            .with_search(self.search.clone().unwrap_or_default());
        for domain in &self.domains {
            criteria.add_domain(domain.clone());
        }
        for tag in &self.tags {
            criteria.add_tag(tag.clone());
        }
        Ok(criteria)
    }
}

fn day_bound(day: &str, time: NaiveTime, calendar: &Calendar) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|_| Error::InvalidTimestamp {
        timestamp: day.to_string(),
    })?;

    calendar
        .resolve(NaiveDateTime::new(date, time))
        .ok_or_else(|| Error::InvalidTimestamp {
            timestamp: day.to_string(),
        })
}

#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Maximum number of records to print (defaults to display.max_results)
    #[arg(short = 'L', long)]
    pub limit: Option<usize>,

    /// Show record ids
    #[arg(long)]
    pub ids: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ChoicesArgs {
    /// Show how many records carry each value
    #[arg(long)]
    pub counts: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output file (stdout if not specified)
    #[arg(short = 'O', long)]
    pub output: Option<PathBuf>,

    /// Export the timeline grouping instead of a flat list
    #[arg(long)]
    pub by_date: bool,
}

#[derive(Args, Debug, Clone)]
pub struct TagArgs {
    #[command(subcommand)]
    pub action: TagAction,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TagAction {
    /// Add a tag to records
    Add {
        /// Tag to add
        #[arg(value_name = "TAG")]
        tag: String,
        /// Record ids
        #[arg(value_name = "ID", required = true)]
        ids: Vec<String>,
    },
    /// Remove a tag from records
    Remove {
        /// Tag to remove
        #[arg(value_name = "TAG")]
        tag: String,
        /// Record ids
        #[arg(value_name = "ID", required = true)]
        ids: Vec<String>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct DeleteArgs {
    /// Record ids
    #[arg(value_name = "ID", required = true)]
    pub ids: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct OpenArgs {
    /// Record id
    #[arg(value_name = "ID")]
    pub id: String,
}

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Show current configuration
    #[arg(long)]
    pub show: bool,

    /// Initialize configuration file with defaults
    #[arg(long)]
    pub init: bool,

    /// Validate configuration file
    #[arg(long)]
    pub validate: bool,
}
