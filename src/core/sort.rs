use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::record::RepositoryRecord;
use crate::error::RepoboardError;

/// Field a record set can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Updated,
    Created,
    Name,
    Stars,
    Forks,
    Activity,
    Prs,
    Issues,
    Level,
}

impl SortField {
    pub const ALL: [SortField; 9] = [
        SortField::Updated,
        SortField::Created,
        SortField::Name,
        SortField::Stars,
        SortField::Forks,
        SortField::Activity,
        SortField::Prs,
        SortField::Issues,
        SortField::Level,
    ];

    /// Ascending comparison for this field.
    pub fn compare(&self, a: &RepositoryRecord, b: &RepositoryRecord) -> Ordering {
        match self {
            // None sorts before any known instant.
            SortField::Updated => a.updated_at.cmp(&b.updated_at),
            SortField::Created => a.created_at.cmp(&b.created_at),
            SortField::Name => locale_cmp(&a.name, &b.name),
            SortField::Stars => a.stars.cmp(&b.stars),
            SortField::Forks => a.forks.cmp(&b.forks),
            SortField::Activity => a.activity_score.cmp(&b.activity_score),
            SortField::Prs => a.open_prs.cmp(&b.open_prs),
            SortField::Issues => a.open_issues.cmp(&b.open_issues),
            SortField::Level => a
                .level
                .unwrap_or(0.0)
                .total_cmp(&b.level.unwrap_or(0.0)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// A field plus a direction, written as `<field>-<asc|desc>` (e.g. `stars-desc`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortKey {
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub const fn asc(field: SortField) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub const fn desc(field: SortField) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Compare two records under this key. Ties stay `Equal` in both directions
    /// so a stable sort keeps their incoming order.
    pub fn compare(&self, a: &RepositoryRecord, b: &RepositoryRecord) -> Ordering {
        let ord = self.field.compare(a, b);
        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::desc(SortField::Activity)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = serde_plain::to_string(&self.field).map_err(|_| fmt::Error)?;
        let direction = serde_plain::to_string(&self.direction).map_err(|_| fmt::Error)?;
        write!(f, "{field}-{direction}")
    }
}

impl FromStr for SortKey {
    type Err = RepoboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RepoboardError::InvalidSortKey(s.to_string());
        let (field, direction) = s.trim().rsplit_once('-').ok_or_else(invalid)?;
        let field = serde_plain::from_str(&field.to_lowercase()).map_err(|_| invalid())?;
        let direction = serde_plain::from_str(&direction.to_lowercase()).map_err(|_| invalid())?;
        Ok(SortKey { field, direction })
    }
}

impl TryFrom<String> for SortKey {
    type Error = RepoboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.to_string()
    }
}

/// Order a record set by `key`, returning references in the new order.
/// Stable: records that compare equal keep their relative input order.
pub fn sort_records<'a>(records: &'a [RepositoryRecord], key: SortKey) -> Vec<&'a RepositoryRecord> {
    let mut sorted: Vec<&RepositoryRecord> = records.iter().collect();
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted
}

/// Human-language ordering for names, compared in levels: base letters first,
/// then accents (unaccented first), then case (lowercase first). The raw strings
/// only break whatever is left.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| {
            a.nfkd()
                .map(char::is_uppercase)
                .cmp(b.nfkd().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

fn collation_key(s: &str) -> String {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn accent_key(s: &str) -> String {
    s.nfkd().flat_map(char::to_lowercase).collect()
}
