pub mod config;
pub mod list;
pub mod show;
pub mod stats;

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use repoboard::core::RepositoryRecord;

/// Catalog input shared by every command that reads records.
#[derive(clap::Args)]
pub struct CatalogArgs {
    /// Catalog file: JSON array of repository objects
    pub catalog: PathBuf,

    /// Enrichment file: JSON object of metadata, PR counts and weekly series by name
    #[arg(long)]
    pub enrichment: Option<PathBuf>,

    /// Reference instant for recency (RFC 3339), defaults to now
    #[arg(long, value_parser = parse_instant)]
    pub now: Option<DateTime<Utc>>,
}

impl CatalogArgs {
    pub fn load(&self) -> anyhow::Result<Vec<RepositoryRecord>> {
        Ok(repoboard::catalog::load_records(
            &self.catalog,
            self.enrichment.as_deref(),
        )?)
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }
}

fn parse_instant(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.to_utc())
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}
