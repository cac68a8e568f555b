//! CLI errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("unsupported scenario format: {} (expected .toml or .json)", .0.display())]
    UnknownFormat(PathBuf),

    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),

    #[error("{0} scenario(s) did not match their expectations")]
    Mismatch(usize),
}
