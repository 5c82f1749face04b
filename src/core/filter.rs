use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::recency::classify;
use super::record::{RecencyBucket, RepositoryRecord};

/// Which categories are shown. Single select.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Project,
    Chapter,
}

impl CategoryFilter {
    pub fn matches(&self, record: &RepositoryRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Project => record.is_project,
            CategoryFilter::Chapter => record.is_chapter,
        }
    }
}

/// Recency selection. `All` is the cleared state; selecting the bucket that is
/// already active clears it again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecencyFilter {
    #[default]
    All,
    Only(RecencyBucket),
}

impl RecencyFilter {
    /// Next state after the user picks `bucket`.
    #[must_use]
    pub fn toggle(self, bucket: RecencyBucket) -> Self {
        match self {
            RecencyFilter::Only(current) if current == bucket => RecencyFilter::All,
            _ => RecencyFilter::Only(bucket),
        }
    }

    /// Records with an unknown update time never match a bucket selection.
    pub fn matches(&self, record: &RepositoryRecord, now: DateTime<Utc>) -> bool {
        match self {
            RecencyFilter::All => true,
            RecencyFilter::Only(bucket) => classify(record, now).bucket == Some(*bucket),
        }
    }
}

/// The caller-held filter selection. All parts are AND-combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub hide_archived: bool,
    pub category: CategoryFilter,
    pub recency: RecencyFilter,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            hide_archived: true,
            category: CategoryFilter::All,
            recency: RecencyFilter::All,
        }
    }
}

impl FilterState {
    /// Test whether a record passes every active filter at instant `now`.
    pub fn matches(&self, record: &RepositoryRecord, now: DateTime<Utc>) -> bool {
        if self.hide_archived && record.archived {
            return false;
        }
        if !self.category.matches(record) {
            return false;
        }
        self.recency.matches(record, now)
    }

    /// Returns true if nothing is hidden.
    pub fn is_empty(&self) -> bool {
        !self.hide_archived
            && self.category == CategoryFilter::All
            && self.recency == RecencyFilter::All
    }
}

/// Case-insensitive free-text search over name, description, title, pitch and tags.
/// An empty term matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Search {
    needle: String,
}

impl Search {
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, record: &RepositoryRecord) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        let hit = |text: &str| text.to_lowercase().contains(&self.needle);
        hit(&record.name)
            || hit(&record.description)
            || hit(&record.title)
            || hit(&record.pitch)
            || record.tags.iter().any(|tag| hit(tag))
    }
}
