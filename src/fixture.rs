//! Locally generated history fixture
//!
//! Produces a plausible set of visit records for a session. Nothing is
//! read from a real browser.

use crate::record::{RecordStore, VisitRecord};
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Default number of generated records
pub const DEFAULT_RECORD_COUNT: usize = 200;

const DOMAINS: [&str; 12] = [
    "github.com",
    "stackoverflow.com",
    "youtube.com",
    "google.com",
    "wikipedia.org",
    "medium.com",
    "dev.to",
    "twitter.com",
    "reddit.com",
    "docs.microsoft.com",
    "mdn.mozilla.org",
    "vercel.com",
];

const TITLES: [&str; 12] = [
    "User interface design best practices",
    "React performance tips",
    "TypeScript in depth",
    "CSS Grid layout guide",
    "Recommended frontend tooling",
    "Code review workflow",
    "Project management methods",
    "Contributing to open source",
    "API design principles",
    "Database tuning strategies",
    "Microservice architecture in practice",
    "Test-driven development",
];

const TAGS: [&str; 6] = ["dev", "design", "tools", "learning", "docs", "project"];

const PATH_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generator for fixture records
#[derive(Debug, Clone)]
pub struct FixtureGenerator {
    count: usize,
    seed: Option<u64>,
}

impl FixtureGenerator {
    pub fn new(count: usize) -> Self {
        Self { count, seed: None }
    }

    /// Make generation deterministic
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generate records relative to `now`, newest first
    pub fn generate(&self, now: DateTime<Utc>) -> Vec<VisitRecord> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut records: Vec<VisitRecord> = (0..self.count)
            .map(|i| generate_record(&mut rng, i, now))
            .collect();

        records.sort_by(|a, b| b.visit_time().cmp(&a.visit_time()));
        tracing::debug!(count = records.len(), seed = ?self.seed, "generated fixture history");
        records
    }

    /// Generate records and wrap them in a store
    pub fn into_store(self, now: DateTime<Utc>) -> RecordStore {
        RecordStore::from_generated(self.generate(now))
    }
}

impl Default for FixtureGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_RECORD_COUNT)
    }
}

fn generate_record(rng: &mut StdRng, index: usize, now: DateTime<Utc>) -> VisitRecord {
    let domain = DOMAINS.choose(rng).copied().unwrap_or(DOMAINS[0]);
    let title = TITLES.choose(rng).copied().unwrap_or(TITLES[0]);
    let days_ago = rng.gen_range(0..30);
    let hours_ago = rng.gen_range(0..24);
    let visit_time = now - Duration::days(days_ago) - Duration::hours(hours_ago);

    let path: String = (0..9)
        .map(|_| PATH_ALPHABET[rng.gen_range(0..PATH_ALPHABET.len())] as char)
        .collect();

    let mut record = VisitRecord::new(
        format!("hist-{}", index),
        format!("https://{}/{}", domain, path),
        title,
        visit_time,
    )
    .with_favicon(format!("https://favicon.im/{}?larger=true", domain))
    .with_visit_count(rng.gen_range(1..=10));

    if rng.gen_bool(0.3) {
        if let Some(tag) = TAGS.choose(rng) {
            record = record.with_tag(*tag);
        }
    }

    record
}
