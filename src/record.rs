//! Visit records and the record store
//!
//! A [`VisitRecord`] describes one visited page. The [`RecordStore`] owns
//! the records for a session; it is populated once and is read-only
//! afterwards.

use crate::error::{Error, Result};
use crate::types::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use url::{Position, Url};

/// One browsing-history entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitRecord {
    id: RecordId,
    url: String,
    title: String,
    visit_time: DateTime<Utc>,
    domain: String,
    favicon: Option<String>,
    tags: Vec<String>,
    visit_count: u32,
}

/// Extract the host portion of a URL
///
/// Malformed URLs and URLs without a host fail soft: the whole input is
/// used as the domain.
pub fn extract_domain(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => host.to_string(),
            None => url.to_string(),
        },
        Err(err) => {
            tracing::warn!(url, error = %err, "unparseable url, using it as the domain");
            url.to_string()
        }
    }
}

impl VisitRecord {
    /// Create a record; the domain is derived from `url`
    pub fn new(
        id: impl Into<RecordId>,
        url: impl Into<String>,
        title: impl Into<String>,
        visit_time: DateTime<Utc>,
    ) -> Self {
        let url = url.into();
        let domain = extract_domain(&url);
        Self {
            id: id.into(),
            url,
            title: title.into(),
            visit_time,
            domain,
            favicon: None,
            tags: Vec::new(),
            visit_count: 1,
        }
    }

    /// Set the favicon URL
    pub fn with_favicon(mut self, favicon: impl Into<String>) -> Self {
        self.favicon = Some(favicon.into());
        self
    }

    /// Add a tag; a tag the record already carries is ignored
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    /// Set the visit count; zero is raised to one
    pub fn with_visit_count(mut self, visit_count: u32) -> Self {
        self.visit_count = visit_count.max(1);
        self
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn visit_time(&self) -> DateTime<Utc> {
        self.visit_time
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn favicon(&self) -> Option<&str> {
        self.favicon.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn visit_count(&self) -> u32 {
        self.visit_count
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// The URL from its path onwards, for compact display
    ///
    /// Scheme, credentials, host and port are dropped. URLs that do not
    /// parse or have no host are shown whole.
    pub fn path_display(&self) -> String {
        match Url::parse(&self.url) {
            Ok(parsed) if parsed.has_host() => parsed[Position::BeforePath..].to_string(),
            _ => self.url.clone(),
        }
    }
}

/// On-disk shape of a record in a fixture file
///
/// `domain` is intentionally absent; it is always recomputed from `url`.
#[derive(Debug, Deserialize)]
struct RawRecord {
    id: String,
    url: String,
    title: String,
    visit_time: DateTime<Utc>,
    #[serde(default)]
    favicon: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default = "default_visit_count")]
    visit_count: u32,
}

fn default_visit_count() -> u32 {
    1
}

/// Owns the visit records for one session
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<VisitRecord>,
}

impl RecordStore {
    /// Create a store from records, rejecting duplicate ids
    pub fn new(records: Vec<VisitRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(Error::DuplicateRecordId {
                    id: record.id.to_string(),
                });
            }
        }
        Ok(Self { records })
    }

    /// Wrap generated records whose ids are unique by construction
    pub(crate) fn from_generated(records: Vec<VisitRecord>) -> Self {
        Self { records }
    }

    /// Load a store from a JSON fixture file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let raw: Vec<RawRecord> = serde_json::from_str(&content)?;

        let mut records = Vec::with_capacity(raw.len());
        for item in raw {
            if item.visit_count == 0 {
                return Err(Error::invalid_fixture(
                    path,
                    format!("record {} has a visit count of zero", item.id),
                ));
            }

            let mut record = VisitRecord::new(item.id, item.url, item.title, item.visit_time)
                .with_visit_count(item.visit_count);
            if let Some(favicon) = item.favicon {
                record = record.with_favicon(favicon);
            }
            for tag in item.tags {
                record = record.with_tag(tag);
            }
            records.push(record);
        }

        tracing::debug!(count = records.len(), path = %path.display(), "loaded fixture");
        Self::new(records)
    }

    /// All records in store order
    pub fn records(&self) -> &[VisitRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id
    pub fn get(&self, id: &str) -> Option<&VisitRecord> {
        self.records.iter().find(|r| r.id.as_str() == id)
    }

    /// Look up a record by id, failing when it is absent
    pub fn require(&self, id: &str) -> Result<&VisitRecord> {
        self.get(id).ok_or_else(|| Error::RecordNotFound { id: id.to_string() })
    }
}
