use std::path::PathBuf;

use thiserror::Error;

/// Core error type for claimcheck.
///
/// Only configuration and file handling can fail; verification itself always
/// returns a structured result, folding abnormal inputs into verdicts.
#[derive(Debug, Error)]
pub enum ClaimcheckError {
    #[error("configuration error: {0}")]
    InvalidConfiguration(String),
    #[error("I/O error while reading {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ClaimcheckError {
    pub fn config_io(path: PathBuf, source: std::io::Error) -> Self {
        Self::ConfigIo { path, source }
    }
}
