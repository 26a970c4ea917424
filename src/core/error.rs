use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the configuration boundary.
/// The composition core itself is total and never produces one of these.
#[derive(Debug, Error)]
pub enum LaunchError {
    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ── Configuration ───────────────────────────────────
    #[error("The parameter '{0}' is missing or invalid")]
    MissingParameter(&'static str),

    #[error("Invalid launch configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias used throughout the crate.
pub type LaunchResult<T> = Result<T, LaunchError>;
