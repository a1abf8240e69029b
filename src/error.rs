//! Error types for tree walking and report assembly

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the tree renderer.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("cannot access '{}': No such file or directory", .0.display())]
    RootNotFound(PathBuf),

    #[error("cannot list '{}': Not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot list '{}': {source}", path.display())]
    ListingDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid tree type '{0}' (expected 'min' or 'full')")]
    InvalidMode(String),
}

/// Errors surfaced while persisting the diagnostic report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
