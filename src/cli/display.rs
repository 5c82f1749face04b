use owo_colors::{OwoColorize, Style};

use repoboard::core::presentation::{
    BumpState, bump_state, display_tags, display_title, format_date, level_tier, summary_text,
    time_ago,
};
use repoboard::core::recency::classify;
use repoboard::core::{
    Category, RecencyBucket, RepositoryRecord, Sparkline, StatSummary, sparkline_geometry,
};

use super::output::RenderOptions;

const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Terminal styles for each kind of fragment. `plain()` disables all of them.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub name: Style,
    pub dim: Style,
    pub archived: Style,
    pub project: Style,
    pub chapter: Style,
    pub stale: Style,
    pub spark: Style,
}

impl Palette {
    pub fn colored() -> Self {
        Self {
            name: Style::new().bold(),
            dim: Style::new().dimmed(),
            archived: Style::new().red(),
            project: Style::new().blue(),
            chapter: Style::new().magenta(),
            stale: Style::new().yellow(),
            spark: Style::new().green(),
        }
    }

    pub fn plain() -> Self {
        Self {
            name: Style::new(),
            dim: Style::new(),
            archived: Style::new(),
            project: Style::new(),
            chapter: Style::new(),
            stale: Style::new(),
            spark: Style::new(),
        }
    }
}

/// Render a single record as a short multi-line block for list output.
pub fn render_record(record: &RepositoryRecord, opts: &RenderOptions) -> String {
    let p = &opts.palette;
    let mut header = format!("{}", record.name.style(p.name));
    if let Some(title) = display_title(record) {
        header.push_str(&format!(" ({})", title));
    }

    let badges = badges(record, opts);
    if !badges.is_empty() {
        header.push_str("  ");
        header.push_str(&badges.join(" "));
    }

    let mut lines = vec![header];
    lines.push(format!("  {}", summary_text(record)));

    let tags = display_tags(record, opts.max_tags);
    if !tags.is_empty() {
        lines.push(format!("  {}", format!("#{}", tags.join(" #")).style(p.dim)));
    }

    let mut meta = format!(
        "  ★ {}  ⑂ {}  issues {}",
        record.stars, record.forks, record.open_issues
    );
    if record.open_prs > 0 {
        meta.push_str(&format!("  PRs {}", record.open_prs));
    }
    let ago = time_ago(record.updated_at, opts.now);
    if !ago.is_empty() {
        meta.push_str(&format!("  updated {}", ago));
    }
    lines.push(meta);

    lines.push(format!(
        "  {}  score {}",
        render_sparkline(&record.weekly_commits, opts),
        record.activity_score
    ));

    lines.join("\n")
}

/// Render one record in full, including sparkline coordinates.
pub fn render_detail(record: &RepositoryRecord, opts: &RenderOptions) -> String {
    let p = &opts.palette;
    let recency = classify(record, opts.now);
    let mut lines = vec![format!("{}", record.name.style(p.name))];

    let mut field = |label: &str, value: String| {
        if !value.is_empty() {
            lines.push(format!("  {:<12} {}", format!("{label}:").style(p.dim), value));
        }
    };
    field("title", record.title.clone());
    field("url", record.url.clone());
    field("summary", summary_text(record).to_string());
    field("type", record.kind.clone());
    field("region", record.region.clone());
    field("country", record.country.clone());
    field("language", record.language.clone());
    field("tags", record.tags.join(", "));
    field(
        "level",
        record.level.map(|l| l.to_string()).unwrap_or_default(),
    );
    field("stars", record.stars.to_string());
    field("forks", record.forks.to_string());
    field("issues", record.open_issues.to_string());
    field("PRs", record.open_prs.to_string());
    field("created", format_date(record.created_at));
    field(
        "updated",
        match recency.years {
            Some(years) => format!(
                "{} ({}, {:.2} years)",
                format_date(record.updated_at),
                time_ago(record.updated_at, opts.now),
                years
            ),
            None => format_date(record.updated_at),
        },
    );
    field(
        "recency",
        recency.bucket.map(|b| b.label().to_string()).unwrap_or_else(|| "unknown".into()),
    );
    field("archived", record.archived.to_string());
    field("score", record.activity_score.to_string());
    field("activity", render_sparkline(&record.weekly_commits, opts));
    field(
        "bump",
        match bump_state(record, opts.now) {
            BumpState::NotNeeded => "not needed".into(),
            BumpState::Archived => "archived, cannot bump".into(),
            BumpState::Available(url) => url,
        },
    );

    if let Sparkline::Path(path) = sparkline_geometry(
        &record.weekly_commits,
        opts.sparkline_width,
        opts.sparkline_height,
    ) {
        lines.push(format!("  {:<12} {}", "points:".style(p.dim), path.polyline_points()));
        lines.push(format!("  {:<12} {}", "fill:".style(p.dim), path.fill_path_data()));
    }

    lines.join("\n")
}

/// Render the catalog-wide counts.
pub fn render_stats(summary: &StatSummary, opts: &RenderOptions) -> String {
    let p = &opts.palette;
    let r = &summary.recency;
    let rows = [
        ("repositories", summary.repos.total, summary.repos.active, summary.repos.archived),
        ("projects", summary.projects.total, summary.projects.active, summary.projects.archived),
        ("chapters", summary.chapters.total, summary.chapters.active, summary.chapters.archived),
    ];

    let mut lines = Vec::new();
    for (label, total, active, archived) in rows {
        lines.push(format!(
            "{:<14} {:>5}  {} active  {} archived",
            label.style(p.name),
            total,
            active,
            archived
        ));
    }
    for bucket in RecencyBucket::ALL {
        let style = match bucket {
            RecencyBucket::Active => p.spark,
            RecencyBucket::Inactive => p.stale,
            RecencyBucket::LongInactive => p.archived,
        };
        lines.push(format!("{:<14} {:>5}", bucket.label().style(style), r.get(bucket)));
    }
    lines.push(format!("{:<14} {:>5}", "older than 1y".style(p.stale), r.older_than_one_year));
    if r.unknown > 0 {
        lines.push(format!("{:<14} {:>5}", "never updated".style(p.dim), r.unknown));
    }
    lines.join("\n")
}

/// Badge fragments for the list header.
fn badges(record: &RepositoryRecord, opts: &RenderOptions) -> Vec<String> {
    let p = &opts.palette;
    let mut badges = Vec::new();

    if let (Some(tier), Some(level)) = (level_tier(record.level), record.level) {
        badges.push(format!("[L{}]", level).style(level_style(tier, p)).to_string());
    }
    match record.category() {
        Some(Category::Project) => badges.push("[project]".style(p.project).to_string()),
        Some(Category::Chapter) => badges.push("[chapter]".style(p.chapter).to_string()),
        None => {}
    }
    if record.archived {
        badges.push("[archived]".style(p.archived).to_string());
    }
    if record.has_language() {
        badges.push(format!("[{}]", record.language).style(p.dim).to_string());
    }
    if let Some(bucket) = classify(record, opts.now).bucket {
        if !bucket.badge().is_empty() {
            badges.push(format!("[{}]", bucket.badge()).style(p.stale).to_string());
        }
    }
    badges
}

fn level_style(tier: u8, p: &Palette) -> Style {
    match tier {
        4 => p.spark,
        3 => p.project,
        2 => p.stale,
        _ => p.dim,
    }
}

/// Draw a series as block characters using its sparkline geometry: the higher
/// the point, the taller the bar.
pub fn render_sparkline(series: &[u64], opts: &RenderOptions) -> String {
    match sparkline_geometry(series, opts.sparkline_width, opts.sparkline_height) {
        Sparkline::NoData => "no activity data".style(opts.palette.dim).to_string(),
        Sparkline::Path(path) => {
            let bars: String = path
                .points
                .iter()
                .map(|point| {
                    let fraction = if path.height > 0.0 {
                        ((path.height - point.y) / path.height).clamp(0.0, 1.0)
                    } else {
                        0.0
                    };
                    BARS[(fraction * (BARS.len() - 1) as f64).round() as usize]
                })
                .collect();
            bars.style(opts.palette.spark).to_string()
        }
    }
}
