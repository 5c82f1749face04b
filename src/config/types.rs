use serde::{Deserialize, Serialize};

use crate::core::presentation::DEFAULT_TAG_CAP;
use crate::core::sort::SortKey;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RepoboardConfig {
    pub display: DisplayConfig,
    pub defaults: DefaultsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: String,
    pub sparkline_width: f64,
    pub sparkline_height: f64,
    pub max_tags: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: "auto".into(),
            sparkline_width: 80.0,
            sparkline_height: 16.0,
            max_tags: DEFAULT_TAG_CAP,
        }
    }
}

/// Initial view selection when no flags override it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub sort: SortKey,
    pub hide_archived: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            sort: SortKey::default(),
            hide_archived: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
        }
    }
}
