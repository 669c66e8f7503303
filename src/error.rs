use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a single package or tweak. The batch always continues.
#[derive(Debug, Error)]
pub enum IttError {
    #[error("{0}")]
    Usage(String),

    #[error("package '{name}' does not exist ({url})")]
    NotFound { name: String, url: String },

    #[error("failed to reach {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{action} {path:?}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("script host failed: {0}")]
    ScriptExecution(String),

    #[error("invalid config {path:?}: {message}")]
    Config { path: PathBuf, message: String },
}

impl IttError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IttError::Io { action, path: path.into(), source }
    }

    /// Short label used when summarising a batch.
    pub fn kind(&self) -> &'static str {
        match self {
            IttError::Usage(_) => "usage",
            IttError::NotFound { .. } => "not found",
            IttError::Network { .. } => "network",
            IttError::Io { .. } => "io",
            IttError::ScriptExecution(_) => "script",
            IttError::Config { .. } => "config",
        }
    }
}
