use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("source directory not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to traverse '{path}': {source}")]
    Traversal {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("cannot resolve absolute path of '{path}': {source}")]
    CurrentDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl DiscoveryError {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn traversal(path: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::Traversal {
            path: path.into(),
            source,
        }
    }
}
