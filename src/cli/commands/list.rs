use repoboard::config::types::RepoboardConfig;
use repoboard::core::{
    CategoryFilter, FilterState, RecencyBucket, RecencyFilter, SortKey, VisibleSet, view,
};

use super::CatalogArgs;
use crate::cli::{OutputFormat, output, use_color};

#[derive(clap::Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Sort key, e.g. stars-desc, name-asc, updated-desc
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// Include archived repositories
    #[arg(long)]
    pub show_archived: bool,

    /// Hide archived repositories even if the config shows them
    #[arg(long, conflicts_with = "show_archived")]
    pub hide_archived: bool,

    /// Show only projects
    #[arg(long, conflicts_with = "chapters")]
    pub projects: bool,

    /// Show only chapters
    #[arg(long)]
    pub chapters: bool,

    /// Show only one recency bucket: active, inactive, long-inactive
    #[arg(long, value_parser = parse_bucket)]
    pub recency: Option<RecencyBucket>,

    /// Case-insensitive text search over name, description, title, pitch and tags
    #[arg(long, default_value = "")]
    pub search: String,
}

impl ListArgs {
    /// Build the filter selection from flags layered over config defaults.
    pub fn filter_state(&self, cfg: &RepoboardConfig) -> FilterState {
        let hide_archived = if self.show_archived {
            false
        } else if self.hide_archived {
            true
        } else {
            cfg.defaults.hide_archived
        };
        let category = if self.projects {
            CategoryFilter::Project
        } else if self.chapters {
            CategoryFilter::Chapter
        } else {
            CategoryFilter::All
        };
        let recency = match self.recency {
            Some(bucket) => RecencyFilter::All.toggle(bucket),
            None => RecencyFilter::All,
        };
        FilterState {
            hide_archived,
            category,
            recency,
        }
    }
}

pub fn run(args: ListArgs, format: OutputFormat, cfg: &RepoboardConfig) -> anyhow::Result<()> {
    let records = args.catalog.load()?;
    let now = args.catalog.now();
    let sort = args.sort.unwrap_or(cfg.defaults.sort);
    let filter = args.filter_state(cfg);

    let visible = view(&records, sort, &filter, &args.search, now);

    // Empty states are reported on stderr in every format.
    match &visible {
        VisibleSet::NoRecords => eprintln!("catalog is empty"),
        VisibleSet::NoMatches => {
            eprintln!("no repositories match your criteria (0 of {})", records.len())
        }
        VisibleSet::Records(_) => {}
    }
    if visible.is_empty() && format == OutputFormat::Human {
        return Ok(());
    }

    let mut stdout = std::io::stdout().lock();
    output::output_records(
        visible.records(),
        records.len(),
        format,
        &output::RenderOptions::from_config(cfg, use_color(cfg), now),
        &mut stdout,
    )
}

fn parse_bucket(s: &str) -> Result<RecencyBucket, String> {
    serde_plain::from_str(&s.to_lowercase())
        .map_err(|_| format!("unknown recency bucket '{s}', expected active, inactive or long-inactive"))
}
