//! Error taxonomy for the per-application pipeline.
//!
//! Every variant is recoverable at the orchestrator level: the application
//! that produced it is skipped and the run continues with the rest.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum InstdlError {
    /// Page or installer transfer failed (transport error or non-2xx status).
    #[error("network error fetching {url}: {reason}")]
    Network { url: String, reason: String },

    /// Expected pattern or field not found in fetched content.
    #[error("could not find {what} in {url}")]
    Parse { url: String, what: String },

    /// Filesystem operation failed.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Requested key has no entry in the catalog.
    #[error("unknown application: {0}")]
    UnknownApplication(String),
}

impl InstdlError {
    pub(crate) fn network(url: &str, reason: impl std::fmt::Display) -> Self {
        InstdlError::Network {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn parse(url: &str, what: impl Into<String>) -> Self {
        InstdlError::Parse {
            url: url.to_string(),
            what: what.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InstdlError::Io {
            path: path.into(),
            source,
        }
    }

    /// Pipeline stage the error belongs to, for log context.
    pub fn stage(&self) -> &'static str {
        match self {
            InstdlError::Network { .. } => "network",
            InstdlError::Parse { .. } => "parse",
            InstdlError::Io { .. } => "io",
            InstdlError::UnknownApplication(_) => "lookup",
        }
    }
}
