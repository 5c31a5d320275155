//! Error types for the crawler.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Crawler error types.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid repository path or scan directory
    #[error("Configuration error: {0}")]
    Config(String),

    /// A candidate file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A candidate file is not valid UTF-8 text
    #[error("Failed to decode {} as UTF-8 text", .path.display())]
    Decode { path: PathBuf },

    /// Blame attributed a single line to other than exactly one commit
    #[error("Expected exactly one commit for {}:{line}, blame returned {found}", .path.display())]
    BlameInvariant {
        path: PathBuf,
        line: usize,
        found: usize,
    },

    /// The output file could not be opened or written
    #[error("Failed to write output {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory enumeration error
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Version-control collaborator error
    #[error("VCS error: {0}")]
    Vcs(String),
}
