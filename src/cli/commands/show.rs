use serde::Serialize;

use repoboard::config::types::RepoboardConfig;
use repoboard::core::presentation::{BumpState, bump_state};
use repoboard::core::recency::{Recency, classify};
use repoboard::core::{RepositoryRecord, Sparkline, sparkline_geometry};
use repoboard::error::RepoboardError;

use super::CatalogArgs;
use crate::cli::output::RenderOptions;
use crate::cli::{OutputFormat, use_color};

#[derive(clap::Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Repository name (exact, case-insensitive)
    pub name: String,
}

#[derive(Serialize)]
struct Detail<'a> {
    #[serde(flatten)]
    record: &'a RepositoryRecord,
    recency: Recency,
    sparkline: Sparkline,
    bump: BumpState,
}

pub fn run(args: ShowArgs, format: OutputFormat, cfg: &RepoboardConfig) -> anyhow::Result<()> {
    let records = args.catalog.load()?;
    let now = args.catalog.now();

    let Some(record) = records
        .iter()
        .find(|r| r.name.eq_ignore_ascii_case(&args.name))
    else {
        return Err(RepoboardError::RepoNotFound(args.name).into());
    };

    match format {
        OutputFormat::Json => {
            let detail = Detail {
                record,
                recency: classify(record, now),
                sparkline: sparkline_geometry(
                    &record.weekly_commits,
                    cfg.display.sparkline_width,
                    cfg.display.sparkline_height,
                ),
                bump: bump_state(record, now),
            };
            serde_json::to_writer_pretty(std::io::stdout(), &detail)?;
            println!();
        }
        OutputFormat::Human => {
            let opts = RenderOptions::from_config(cfg, use_color(cfg), now);
            println!("{}", crate::cli::display::render_detail(record, &opts));
        }
    }

    Ok(())
}
