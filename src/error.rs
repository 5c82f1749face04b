use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoboardError {
    #[error("config error: {0}")]
    Config(String),

    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("catalog format error in {path}: {source}")]
    CatalogFormat {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("catalog in {0} must be a JSON array of repository objects")]
    NotACatalog(PathBuf),

    #[error("invalid sort key '{0}', expected <field>-<asc|desc>")]
    InvalidSortKey(String),

    #[error("repo not found: {0}")]
    RepoNotFound(String),
}

pub type Result<T> = std::result::Result<T, RepoboardError>;
