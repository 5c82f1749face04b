use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::cli::display::Palette;
use repoboard::config::types::RepoboardConfig;
use repoboard::core::recency::{Recency, classify};
use repoboard::core::RepositoryRecord;

/// Display settings resolved once per command.
pub struct RenderOptions {
    pub palette: Palette,
    pub max_tags: usize,
    pub sparkline_width: f64,
    pub sparkline_height: f64,
    pub now: DateTime<Utc>,
}

impl RenderOptions {
    pub fn from_config(cfg: &RepoboardConfig, color: bool, now: DateTime<Utc>) -> Self {
        Self {
            palette: if color { Palette::colored() } else { Palette::plain() },
            max_tags: cfg.display.max_tags,
            sparkline_width: cfg.display.sparkline_width,
            sparkline_height: cfg.display.sparkline_height,
            now,
        }
    }
}

/// A record as emitted in JSON output, with recency resolved against `now`.
#[derive(Serialize)]
struct RecordOut<'a> {
    #[serde(flatten)]
    record: &'a RepositoryRecord,
    recency: Recency,
}

/// Write the visible records in the requested output format.
pub fn output_records(
    records: &[&RepositoryRecord],
    total: usize,
    format: OutputFormat,
    opts: &RenderOptions,
    writer: &mut dyn Write,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let out: Vec<RecordOut> = records
                .iter()
                .map(|&record| RecordOut {
                    record,
                    recency: classify(record, opts.now),
                })
                .collect();
            serde_json::to_writer_pretty(&mut *writer, &out)?;
            writeln!(writer)?;
        }
        OutputFormat::Human => {
            for record in records {
                writeln!(writer, "{}", super::display::render_record(record, opts))?;
            }
            writeln!(writer, "{} of {} repositories shown", records.len(), total)?;
        }
    }
    Ok(())
}
