pub mod filter;
pub mod normalize;
pub mod presentation;
pub mod recency;
pub mod record;
pub mod score;
pub mod sort;
pub mod sparkline;
pub mod stats;
pub mod view;

pub use filter::{CategoryFilter, FilterState, RecencyFilter, Search};
pub use normalize::{Enrichment, normalize, normalize_catalog, normalize_with};
pub use recency::{Recency, classify};
pub use record::{Category, RecencyBucket, RepoMetadata, RepositoryRecord};
pub use score::score;
pub use sort::{SortDirection, SortField, SortKey};
pub use sparkline::{Point, Sparkline, SparklinePath, sparkline_geometry};
pub use stats::{StatSummary, aggregate};
pub use view::{VisibleSet, view};
