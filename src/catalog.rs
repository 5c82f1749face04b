use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::core::normalize::{Enrichment, count_value, metadata_from_value, normalize_catalog};
use crate::core::record::RepositoryRecord;
use crate::error::{RepoboardError, Result};

/// Read a catalog listing: a JSON array of raw repository objects.
pub fn load_catalog(path: &Path) -> Result<Vec<Value>> {
    match read_json(path)? {
        Value::Array(entries) => Ok(entries),
        _ => Err(RepoboardError::NotACatalog(path.to_path_buf())),
    }
}

/// Read an enrichment file: a JSON object keyed by repository name, each value
/// holding any of `index_md` (a parsed metadata block), `open_prs_count` and
/// `sparkline` (weekly commit counts).
pub fn load_enrichment(path: &Path) -> Result<Enrichment> {
    let Value::Object(entries) = read_json(path)? else {
        return Err(RepoboardError::Config(format!(
            "{}: enrichment must be a JSON object keyed by repository name",
            path.display()
        )));
    };

    let mut enrichment = Enrichment::default();
    for (name, entry) in entries {
        if let Some(meta) = entry.get("index_md") {
            enrichment
                .metadata
                .insert(name.clone(), metadata_from_value(meta));
        }
        if let Some(count) = entry.get("open_prs_count").and_then(count_value) {
            enrichment.open_prs.insert(name.clone(), count);
        }
        if let Some(Value::Array(weeks)) = entry.get("sparkline") {
            let series = weeks.iter().map(|w| count_value(w).unwrap_or(0)).collect();
            enrichment.weekly_commits.insert(name, series);
        }
    }
    Ok(enrichment)
}

/// Load and normalize a catalog, optionally merging an enrichment file.
pub fn load_records(catalog: &Path, enrichment: Option<&Path>) -> Result<Vec<RepositoryRecord>> {
    let raws = load_catalog(catalog)?;
    let enrichment = match enrichment {
        Some(path) => load_enrichment(path)?,
        None => Enrichment::default(),
    };
    let records = normalize_catalog(&raws, &enrichment);
    info!(
        path = %catalog.display(),
        records = records.len(),
        enriched = enrichment.metadata.len(),
        "loaded catalog"
    );
    Ok(records)
}

fn read_json(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path).map_err(|source| RepoboardError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| RepoboardError::CatalogFormat {
        path: path.to_path_buf(),
        source,
    })
}
