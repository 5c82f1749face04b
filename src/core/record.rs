use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Language label used when the catalog does not report one.
pub const UNKNOWN_LANGUAGE: &str = "N/A";

/// Name markers that classify a repository as an OWASP-style project or chapter.
pub const PROJECT_MARKER: &str = "www-project";
pub const CHAPTER_MARKER: &str = "www-chapter";

/// A normalized catalog entry. Built once by the normalizer and never mutated;
/// views over a record set hold references, not copies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepositoryRecord {
    // Identity
    pub name: String,
    pub full_name: String,
    pub url: String,

    // Descriptive
    pub description: String,
    pub title: String,
    pub pitch: String,
    pub tags: Vec<String>,
    pub kind: String,
    pub region: String,
    pub country: String,
    pub language: String,
    pub level: Option<f64>,

    // Classification
    pub is_project: bool,
    pub is_chapter: bool,
    pub archived: bool,

    // Counters
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub open_prs: u64,

    // Timestamps
    pub updated_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,

    /// Weekly commit counts, oldest first. Empty means no data was available,
    /// which is not the same as a year of zero weeks.
    pub weekly_commits: Vec<u64>,
    pub activity_score: u64,
}

impl RepositoryRecord {
    /// The category this record falls into, if any. A name carrying both
    /// markers counts as a project.
    pub fn category(&self) -> Option<Category> {
        if self.is_project {
            Some(Category::Project)
        } else if self.is_chapter {
            Some(Category::Chapter)
        } else {
            None
        }
    }

    pub fn has_language(&self) -> bool {
        self.language != UNKNOWN_LANGUAGE
    }
}

/// Repository category derived from the name markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Project,
    Chapter,
}

/// Recency buckets based on time since the last update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecencyBucket {
    Active,
    Inactive,
    LongInactive,
}

impl RecencyBucket {
    pub const ALL: [RecencyBucket; 3] = [
        RecencyBucket::Active,
        RecencyBucket::Inactive,
        RecencyBucket::LongInactive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RecencyBucket::Active => "active",
            RecencyBucket::Inactive => "inactive",
            RecencyBucket::LongInactive => "long-inactive",
        }
    }

    /// Short badge text, empty for active repositories.
    pub fn badge(&self) -> &'static str {
        match self {
            RecencyBucket::Active => "",
            RecencyBucket::Inactive => "1yr+",
            RecencyBucket::LongInactive => "3yr+",
        }
    }
}

/// Metadata block published inside a repository (front matter of its index page).
/// Parsing the block is the fetcher's job; the core only merges the parsed values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepoMetadata {
    pub title: String,
    pub tags: Vec<String>,
    pub level: Option<f64>,
    pub pitch: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub region: String,
    pub country: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_ordering_runs_from_fresh_to_stale() {
        assert!(RecencyBucket::Active < RecencyBucket::Inactive);
        assert!(RecencyBucket::Inactive < RecencyBucket::LongInactive);
    }

    #[test]
    fn bucket_serde_names() {
        assert_eq!(
            serde_plain::to_string(&RecencyBucket::LongInactive).unwrap(),
            "long-inactive"
        );
        assert_eq!(
            serde_plain::from_str::<RecencyBucket>("inactive").unwrap(),
            RecencyBucket::Inactive
        );
    }

    #[test]
    fn metadata_reads_type_key() {
        let meta: RepoMetadata =
            serde_json::from_str(r#"{"title":"ZAP","type":"tool","level":3.5}"#).unwrap();
        assert_eq!(meta.kind, "tool");
        assert_eq!(meta.level, Some(3.5));
        assert!(meta.tags.is_empty());
    }
}
