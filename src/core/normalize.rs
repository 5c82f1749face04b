use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use tracing::debug;

use super::record::{
    CHAPTER_MARKER, PROJECT_MARKER, RepoMetadata, RepositoryRecord, UNKNOWN_LANGUAGE,
};
use super::score::score;

/// Per-repository data fetched separately from the catalog listing, keyed by
/// repository name. Entries here take precedence over values embedded in the
/// raw record.
#[derive(Debug, Clone, Default)]
pub struct Enrichment {
    pub metadata: HashMap<String, RepoMetadata>,
    pub open_prs: HashMap<String, u64>,
    pub weekly_commits: HashMap<String, Vec<u64>>,
}

/// Normalize a raw catalog entry. Never fails: missing or malformed fields fall
/// back to their defaults.
pub fn normalize(raw: &Value) -> RepositoryRecord {
    normalize_with(raw, &Enrichment::default())
}

/// Normalize a raw catalog entry, merging any enrichment recorded for its name.
pub fn normalize_with(raw: &Value, enrichment: &Enrichment) -> RepositoryRecord {
    let empty = Map::new();
    let fields = match raw.as_object() {
        Some(map) => map,
        None => {
            debug!(kind = value_kind(raw), "catalog entry is not an object");
            &empty
        }
    };

    let name = string_field(fields, "name");
    let lowered = name.to_lowercase();

    let embedded_meta = fields.get("index_md").map(metadata_from_value);
    let meta = enrichment
        .metadata
        .get(&name)
        .cloned()
        .or(embedded_meta)
        .unwrap_or_default();

    let weekly_commits = match enrichment.weekly_commits.get(&name) {
        Some(series) => series.clone(),
        None => series_field(fields, "sparkline"),
    };
    let open_prs = match enrichment.open_prs.get(&name) {
        Some(&count) => count,
        None => count_field(fields, "open_prs_count"),
    };

    let language = match fields.get("language") {
        Some(Value::String(lang)) if !lang.is_empty() => lang.clone(),
        _ => UNKNOWN_LANGUAGE.to_string(),
    };

    RepositoryRecord {
        full_name: string_field(fields, "full_name"),
        url: string_field(fields, "html_url"),
        description: string_field(fields, "description"),
        title: meta.title,
        pitch: meta.pitch,
        tags: meta.tags,
        kind: meta.kind,
        region: meta.region,
        country: meta.country,
        level: meta.level,
        language,
        is_project: lowered.contains(PROJECT_MARKER),
        is_chapter: lowered.contains(CHAPTER_MARKER),
        archived: bool_field(fields, "archived"),
        stars: count_field(fields, "stargazers_count"),
        forks: count_field(fields, "forks_count"),
        open_issues: count_field(fields, "open_issues_count"),
        open_prs,
        updated_at: timestamp_field(fields, "updated_at"),
        created_at: timestamp_field(fields, "created_at"),
        activity_score: score(&weekly_commits),
        weekly_commits,
        name,
    }
}

/// Normalize a whole catalog listing in order.
pub fn normalize_catalog(raws: &[Value], enrichment: &Enrichment) -> Vec<RepositoryRecord> {
    let records: Vec<_> = raws.iter().map(|raw| normalize_with(raw, enrichment)).collect();
    debug!(count = records.len(), "normalized catalog");
    records
}

/// Read a parsed metadata block field by field, so one bad value does not
/// discard the rest.
pub fn metadata_from_value(value: &Value) -> RepoMetadata {
    let Some(fields) = value.as_object() else {
        return RepoMetadata::default();
    };

    let tags = match fields.get("tags") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect(),
        Some(Value::String(list)) => inline_list(list)
            .split(',')
            .map(|t| t.trim().trim_matches(|c: char| c == '"' || c == '\''))
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect(),
        _ => Vec::new(),
    };

    let level = match fields.get("level") {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|l| l.is_finite());

    RepoMetadata {
        title: string_field(fields, "title"),
        tags,
        level,
        pitch: string_field(fields, "pitch"),
        kind: string_field(fields, "type"),
        region: string_field(fields, "region"),
        country: string_field(fields, "country"),
    }
}

/// Strip one pair of surrounding brackets from an inline `[a, b]` list.
fn inline_list(list: &str) -> &str {
    let list = list.trim();
    list.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(list)
}

fn string_field(fields: &Map<String, Value>, key: &str) -> String {
    match fields.get(key) {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) => String::new(),
        Some(other) => {
            debug!(field = key, kind = value_kind(other), "expected a string");
            String::new()
        }
    }
}

fn bool_field(fields: &Map<String, Value>, key: &str) -> bool {
    match fields.get(key) {
        Some(Value::Bool(b)) => *b,
        None | Some(Value::Null) => false,
        Some(other) => {
            debug!(field = key, kind = value_kind(other), "expected a boolean");
            false
        }
    }
}

fn count_field(fields: &Map<String, Value>, key: &str) -> u64 {
    match fields.get(key) {
        None | Some(Value::Null) => 0,
        Some(value) => count_value(value).unwrap_or_else(|| {
            debug!(field = key, kind = value_kind(value), "expected a non-negative count");
            0
        }),
    }
}

/// A non-negative integral count, or `None` for anything else.
pub fn count_value(value: &Value) -> Option<u64> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(u) = n.as_u64() {
        return Some(u);
    }
    // Integral floats such as 12.0 still count.
    let f = n.as_f64()?;
    (f.is_finite() && f >= 0.0 && f.fract() == 0.0).then_some(f as u64)
}

fn series_field(fields: &Map<String, Value>, key: &str) -> Vec<u64> {
    match fields.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| count_value(item).unwrap_or(0))
            .collect(),
        None | Some(Value::Null) => Vec::new(),
        Some(other) => {
            debug!(field = key, kind = value_kind(other), "expected a weekly series");
            Vec::new()
        }
    }
}

fn timestamp_field(fields: &Map<String, Value>, key: &str) -> Option<DateTime<Utc>> {
    let raw = fields.get(key)?.as_str()?;
    if raw.is_empty() {
        return None;
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Some(dt.to_utc()),
        Err(e) => {
            debug!(field = key, value = raw, error = %e, "unparseable timestamp");
            None
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn empty_object_gets_all_defaults() {
        let record = normalize(&json!({}));
        assert_eq!(record.name, "");
        assert_eq!(record.description, "");
        assert_eq!(record.language, UNKNOWN_LANGUAGE);
        assert_eq!(record.stars, 0);
        assert_eq!(record.open_prs, 0);
        assert!(!record.archived);
        assert!(record.updated_at.is_none());
        assert!(record.weekly_commits.is_empty());
        assert_eq!(record.activity_score, 0);
        assert!(record.level.is_none());
    }

    #[test]
    fn non_object_entry_is_absorbed() {
        let record = normalize(&json!("not a repo"));
        assert_eq!(record.name, "");
        assert_eq!(record.language, UNKNOWN_LANGUAGE);
    }

    #[test]
    fn reads_catalog_fields() {
        let record = normalize(&json!({
            "name": "www-project-zap",
            "full_name": "OWASP/www-project-zap",
            "html_url": "https://github.com/OWASP/www-project-zap",
            "description": "Zed Attack Proxy site",
            "language": "HTML",
            "stargazers_count": 42,
            "forks_count": 7,
            "open_issues_count": 3,
            "archived": true,
            "updated_at": "2024-03-01T12:00:00Z",
            "created_at": "2015-01-01T00:00:00Z",
        }));
        assert_eq!(record.full_name, "OWASP/www-project-zap");
        assert_eq!(record.stars, 42);
        assert_eq!(record.forks, 7);
        assert_eq!(record.open_issues, 3);
        assert!(record.archived);
        assert!(record.is_project);
        assert!(!record.is_chapter);
        assert_eq!(
            record.updated_at,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn markers_match_case_insensitively() {
        let record = normalize(&json!({ "name": "WWW-Chapter-London" }));
        assert!(record.is_chapter);
        assert!(!record.is_project);
    }

    #[test]
    fn malformed_fields_fall_back() {
        let record = normalize(&json!({
            "name": 12,
            "description": null,
            "language": null,
            "stargazers_count": -4,
            "forks_count": "many",
            "open_issues_count": 5.0,
            "archived": "yes",
            "updated_at": "last tuesday",
            "sparkline": "none",
        }));
        assert_eq!(record.name, "");
        assert_eq!(record.description, "");
        assert_eq!(record.language, UNKNOWN_LANGUAGE);
        assert_eq!(record.stars, 0);
        assert_eq!(record.forks, 0);
        assert_eq!(record.open_issues, 5);
        assert!(!record.archived);
        assert!(record.updated_at.is_none());
        assert!(record.weekly_commits.is_empty());
    }

    #[test]
    fn series_sets_activity_score() {
        let record = normalize(&json!({ "name": "a", "sparkline": [1, 2, "x", 4] }));
        assert_eq!(record.weekly_commits, vec![1, 2, 0, 4]);
        assert_eq!(record.activity_score, 7);
    }

    #[test]
    fn embedded_metadata_block() {
        let record = normalize(&json!({
            "name": "www-project-foo",
            "index_md": {
                "title": "Foo",
                "tags": ["web", "  ", "api"],
                "level": "2",
                "pitch": "Find bugs",
                "type": "tool",
                "region": "Europe",
                "country": "NL"
            }
        }));
        assert_eq!(record.title, "Foo");
        assert_eq!(record.tags, vec!["web", "api"]);
        assert_eq!(record.level, Some(2.0));
        assert_eq!(record.pitch, "Find bugs");
        assert_eq!(record.kind, "tool");
        assert_eq!(record.country, "NL");
    }

    #[test]
    fn inline_tag_list_is_split() {
        let meta = metadata_from_value(&json!({ "tags": "\"web\", 'api' ,," }));
        assert_eq!(meta.tags, vec!["web", "api"]);
    }

    #[test]
    fn bracketed_tag_list_is_unwrapped() {
        let meta = metadata_from_value(&json!({ "tags": " [web, \"api\"] " }));
        assert_eq!(meta.tags, vec!["web", "api"]);

        let meta = metadata_from_value(&json!({ "tags": "[]" }));
        assert!(meta.tags.is_empty());

        let meta = metadata_from_value(&json!({ "tags": "[web, api" }));
        assert_eq!(meta.tags, vec!["[web", "api"]);
    }

    #[test]
    fn enrichment_overrides_embedded_values() {
        let mut enrichment = Enrichment::default();
        enrichment.open_prs.insert("a".into(), 9);
        enrichment.weekly_commits.insert("a".into(), vec![3, 3]);
        enrichment.metadata.insert(
            "a".into(),
            RepoMetadata {
                title: "From index".into(),
                ..Default::default()
            },
        );

        let raws = vec![
            json!({ "name": "a", "open_prs_count": 1, "sparkline": [1], "index_md": { "title": "old" } }),
            json!({ "name": "b", "open_prs_count": 2 }),
        ];
        let records = normalize_catalog(&raws, &enrichment);

        assert_eq!(records[0].open_prs, 9);
        assert_eq!(records[0].activity_score, 6);
        assert_eq!(records[0].title, "From index");
        assert_eq!(records[1].open_prs, 2);
        assert_eq!(records[1].title, "");
    }
}
