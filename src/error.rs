//! Errors raised while resolving and fetching an artifact.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstallError {
    /// The coordinate did not split into exactly three non-empty parts.
    #[error("Malformed Maven coordinate `{0}`, expected group:artifact:version")]
    MalformedCoordinate(String),

    /// The download tool or server reported a failure.
    #[error("Failed to download {url}: {reason}")]
    DownloadFailed { url: String, reason: String },

    /// The download tool could not be started at all.
    #[error("Failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = InstallError> = std::result::Result<T, E>;
