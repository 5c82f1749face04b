//! Display helpers shared by every renderer. Pure functions of a record and an
//! injected instant; nothing here touches the terminal.

use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

use super::recency::{INACTIVE_AFTER_YEARS, classify};
use super::record::RepositoryRecord;

/// Tags shown per record before the list is cut off.
pub const DEFAULT_TAG_CAP: usize = 5;

const BUMP_ISSUE_TITLE: &str = "Repository Activity Reminder";
const BUMP_ISSUE_BODY: &str = "Hello! This repository has not been updated in over a year.\n\n\
If the project is still maintained, a small update or commit would show that it is alive.\n\
If it is no longer maintained, please consider archiving it to keep the organization tidy.\n\n\
Thank you for your contributions!";

/// Relative age of a timestamp, e.g. "3 weeks ago". Unknown gives an empty string.
pub fn time_ago(ts: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(ts) = ts else {
        return String::new();
    };

    let seconds = now.signed_duration_since(ts).num_seconds().max(0);
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;
    let weeks = days / 7;
    let months = days / 30;
    let years = days / 365;

    let (n, unit) = if years > 0 {
        (years, "year")
    } else if months > 0 {
        (months, "month")
    } else if weeks > 0 {
        (weeks, "week")
    } else if days > 0 {
        (days, "day")
    } else if hours > 0 {
        (hours, "hour")
    } else if minutes > 0 {
        (minutes, "minute")
    } else {
        return "just now".to_string();
    };

    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

/// Calendar date as `YYYY-MM-DD`, or `N/A` when unknown.
pub fn format_date(ts: Option<DateTime<Utc>>) -> String {
    match ts {
        Some(ts) => ts.format("%Y-%m-%d").to_string(),
        None => "N/A".to_string(),
    }
}

/// Badge tier (1-4) for a maturity level.
pub fn level_tier(level: Option<f64>) -> Option<u8> {
    let level = level?;
    Some(if level >= 4.0 {
        4
    } else if level >= 3.0 {
        3
    } else if level >= 2.0 {
        2
    } else {
        1
    })
}

/// The first `cap` tags. The record keeps its full list.
pub fn display_tags(record: &RepositoryRecord, cap: usize) -> &[String] {
    &record.tags[..record.tags.len().min(cap)]
}

/// Title worth showing next to the name: non-empty and not just the name again.
pub fn display_title(record: &RepositoryRecord) -> Option<&str> {
    let title = record.title.as_str();
    (!title.is_empty() && title != record.name).then_some(title)
}

/// Pitch when present, otherwise the description, otherwise a placeholder.
pub fn summary_text(record: &RepositoryRecord) -> &str {
    if !record.pitch.is_empty() {
        &record.pitch
    } else if !record.description.is_empty() {
        &record.description
    } else {
        "No description"
    }
}

/// Whether a "please update or archive" reminder can be filed for a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "url", rename_all = "snake_case")]
pub enum BumpState {
    /// Updated within the last year, or never reported an update time.
    NotNeeded,
    /// Stale but archived; issues cannot be opened.
    Archived,
    /// Stale and open: link to a prefilled new-issue form.
    Available(String),
}

pub fn bump_state(record: &RepositoryRecord, now: DateTime<Utc>) -> BumpState {
    let stale = classify(record, now)
        .years
        .is_some_and(|years| years >= INACTIVE_AFTER_YEARS);
    if !stale {
        return BumpState::NotNeeded;
    }
    if record.archived {
        return BumpState::Archived;
    }
    match bump_issue_url(&record.url) {
        Some(url) => BumpState::Available(url),
        None => BumpState::NotNeeded,
    }
}

/// New-issue URL for a repository's web address, with title and body prefilled.
pub fn bump_issue_url(repo_url: &str) -> Option<String> {
    let base = Url::parse(repo_url.trim_end_matches('/')).ok()?;
    let target = format!("{}/issues/new", base.as_str().trim_end_matches('/'));
    let url = Url::parse_with_params(
        &target,
        &[("title", BUMP_ISSUE_TITLE), ("body", BUMP_ISSUE_BODY)],
    )
    .ok()?;
    Some(url.into())
}
