pub mod types;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{RepoboardError, Result};
use types::RepoboardConfig;

/// Load config from the XDG path, falling back to defaults when absent.
pub fn load_config() -> Result<RepoboardConfig> {
    load_config_from(&config_path())
}

/// Load config from an explicit file. A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<RepoboardConfig> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(RepoboardConfig::default());
        }
        Err(source) => {
            return Err(RepoboardError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    parse_config(&text)
        .map_err(|e| RepoboardError::Config(format!("{}: {}", path.display(), e)))
}

/// Parse config TOML; unset sections keep their defaults.
pub fn parse_config(text: &str) -> std::result::Result<RepoboardConfig, toml::de::Error> {
    toml::from_str(text)
}

/// Return XDG config dir (~/.config/repoboard/)
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("repoboard")
}

/// Return the config file path
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sort::{SortField, SortKey};

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(cfg.defaults.sort, SortKey::desc(SortField::Activity));
        assert!(cfg.defaults.hide_archived);
        assert_eq!(cfg.display.max_tags, 5);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg = parse_config(
            r#"
            [defaults]
            sort = "stars-desc"

            [display]
            sparkline_width = 52
            "#,
        )
        .unwrap();
        assert_eq!(cfg.defaults.sort, SortKey::desc(SortField::Stars));
        assert!(cfg.defaults.hide_archived);
        assert_eq!(cfg.display.sparkline_width, 52.0);
        assert_eq!(cfg.display.sparkline_height, 16.0);
        assert_eq!(cfg.logging.level, "warn");
    }

    #[test]
    fn bad_sort_key_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[defaults]\nsort = \"stars-up\"\n").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, RepoboardError::Config(_)));
    }
}
