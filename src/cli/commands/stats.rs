use repoboard::config::types::RepoboardConfig;
use repoboard::core::aggregate;

use super::CatalogArgs;
use crate::cli::output::RenderOptions;
use crate::cli::{OutputFormat, use_color};

#[derive(clap::Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,
}

pub fn run(args: StatsArgs, format: OutputFormat, cfg: &RepoboardConfig) -> anyhow::Result<()> {
    let records = args.catalog.load()?;
    let now = args.catalog.now();
    let summary = aggregate(&records, now);

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(std::io::stdout(), &summary)?;
            println!();
        }
        OutputFormat::Human => {
            let opts = RenderOptions::from_config(cfg, use_color(cfg), now);
            println!("{}", crate::cli::display::render_stats(&summary, &opts));
        }
    }

    Ok(())
}
