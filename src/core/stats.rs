use chrono::{DateTime, Utc};
use serde::Serialize;

use super::recency::classify;
use super::record::{RecencyBucket, RepositoryRecord};

/// Total / archived / active counts for one slice of the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ArchiveSplit {
    pub total: usize,
    pub archived: usize,
    pub active: usize,
}

impl ArchiveSplit {
    fn add(&mut self, archived: bool) {
        self.total += 1;
        if archived {
            self.archived += 1;
        } else {
            self.active += 1;
        }
    }
}

/// Counts per recency bucket. Records with an unknown update time are counted
/// in `unknown` only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RecencyCounts {
    pub active: usize,
    pub inactive: usize,
    pub long_inactive: usize,
    pub unknown: usize,
    /// Records last updated a year or more ago: `inactive + long_inactive`.
    pub older_than_one_year: usize,
}

impl RecencyCounts {
    pub fn get(&self, bucket: RecencyBucket) -> usize {
        match bucket {
            RecencyBucket::Active => self.active,
            RecencyBucket::Inactive => self.inactive,
            RecencyBucket::LongInactive => self.long_inactive,
        }
    }
}

/// Summary figures over a whole record set, independent of any view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatSummary {
    pub repos: ArchiveSplit,
    pub projects: ArchiveSplit,
    pub chapters: ArchiveSplit,
    pub recency: RecencyCounts,
}

impl StatSummary {
    pub fn total(&self) -> usize {
        self.repos.total
    }
}

/// Compute summary counts over the full, unfiltered record set.
pub fn aggregate(records: &[RepositoryRecord], now: DateTime<Utc>) -> StatSummary {
    let mut summary = StatSummary::default();

    for record in records {
        summary.repos.add(record.archived);
        if record.is_project {
            summary.projects.add(record.archived);
        }
        if record.is_chapter {
            summary.chapters.add(record.archived);
        }

        match classify(record, now).bucket {
            Some(RecencyBucket::Active) => summary.recency.active += 1,
            Some(RecencyBucket::Inactive) => summary.recency.inactive += 1,
            Some(RecencyBucket::LongInactive) => summary.recency.long_inactive += 1,
            None => summary.recency.unknown += 1,
        }
    }

    summary.recency.older_than_one_year = summary.recency.inactive + summary.recency.long_inactive;
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::normalize::normalize;
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap()
    }

    fn synthetic(count: usize, archived_every: usize) -> Vec<RepositoryRecord> {
        (0..count)
            .map(|i| {
                let name = if i % 2 == 0 {
                    format!("www-project-{i}")
                } else {
                    format!("www-chapter-{i}")
                };
                normalize(&json!({
                    "name": name,
                    "archived": i % archived_every == 0,
                    "updated_at": (now() - Duration::days((i as i64) * 20)).to_rfc3339(),
                }))
            })
            .collect()
    }

    #[test]
    fn counts_active_and_archived() {
        let mut records = Vec::new();
        for i in 0..100 {
            records.push(normalize(&json!({
                "name": format!("repo-{i}"),
                "archived": i >= 60,
            })));
        }
        let summary = aggregate(&records, now());
        assert_eq!(summary.total(), 100);
        assert_eq!(summary.repos.active, 60);
        assert_eq!(summary.repos.archived, 40);
        assert_eq!(summary.recency.unknown, 100);
        assert_eq!(summary.recency.older_than_one_year, 0);
    }

    #[test]
    fn category_splits() {
        let records = synthetic(10, 3);
        let summary = aggregate(&records, now());
        // projects: 0,2,4,6,8; archived when divisible by 3: 0,6
        assert_eq!(summary.projects, ArchiveSplit { total: 5, archived: 2, active: 3 });
        // chapters: 1,3,5,7,9; archived: 3,9
        assert_eq!(summary.chapters, ArchiveSplit { total: 5, archived: 2, active: 3 });
    }

    #[test]
    fn recency_buckets_partition_known_records() {
        let records = synthetic(100, 7);
        let summary = aggregate(&records, now());
        let r = summary.recency;
        assert_eq!(r.active + r.inactive + r.long_inactive + r.unknown, 100);
        // i * 20 days: < 365.25 for i <= 18, < 1095.75 for i <= 54
        assert_eq!(r.active, 19);
        assert_eq!(r.inactive, 36);
        assert_eq!(r.long_inactive, 45);
        assert_eq!(r.get(RecencyBucket::Inactive), 36);
        assert_eq!(r.older_than_one_year, 81);
    }

    #[test]
    fn summary_shape() {
        let records = vec![
            normalize(&json!({ "name": "www-project-a", "updated_at": "2026-08-01T00:00:00Z" })),
            normalize(&json!({ "name": "www-chapter-b", "archived": true })),
        ];
        insta::assert_json_snapshot!(aggregate(&records, now()), @r###"
        {
          "repos": {
            "total": 2,
            "archived": 1,
            "active": 1
          },
          "projects": {
            "total": 1,
            "archived": 0,
            "active": 1
          },
          "chapters": {
            "total": 1,
            "archived": 1,
            "active": 0
          },
          "recency": {
            "active": 1,
            "inactive": 0,
            "long_inactive": 0,
            "unknown": 1,
            "older_than_one_year": 0
          }
        }
        "###);
    }
}
