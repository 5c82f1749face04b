use chrono::{DateTime, Utc};
use tracing::debug;

use super::filter::{FilterState, Search};
use super::record::RepositoryRecord;
use super::sort::{SortKey, sort_records};

/// Outcome of running the view pipeline over a record set.
#[derive(Debug, Clone, PartialEq)]
pub enum VisibleSet<'a> {
    /// The record set itself is empty; nothing was loaded.
    NoRecords,
    /// Records exist but every one was filtered or searched out.
    NoMatches,
    /// Records to display, in order.
    Records(Vec<&'a RepositoryRecord>),
}

impl<'a> VisibleSet<'a> {
    pub fn records(&self) -> &[&'a RepositoryRecord] {
        match self {
            VisibleSet::Records(records) => records,
            VisibleSet::NoRecords | VisibleSet::NoMatches => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    pub fn names(&self) -> Vec<&'a str> {
        self.records().iter().map(|r| r.name.as_str()).collect()
    }
}

/// Produce the ordered, visible subset of `records`.
///
/// Always in this order: sort the full set, then filter, then search. Both later
/// steps preserve order, so the result is the sorted order restricted to the
/// surviving records.
pub fn view<'a>(
    records: &'a [RepositoryRecord],
    sort_key: SortKey,
    filter: &FilterState,
    search_term: &str,
    now: DateTime<Utc>,
) -> VisibleSet<'a> {
    if records.is_empty() {
        return VisibleSet::NoRecords;
    }

    let search = Search::new(search_term);
    let visible: Vec<&RepositoryRecord> = sort_records(records, sort_key)
        .into_iter()
        .filter(|record| filter.matches(record, now))
        .filter(|record| search.matches(record))
        .collect();

    debug!(
        total = records.len(),
        visible = visible.len(),
        sort = %sort_key,
        "computed view"
    );

    if visible.is_empty() {
        VisibleSet::NoMatches
    } else {
        VisibleSet::Records(visible)
    }
}
