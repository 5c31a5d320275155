//! Crawler Core Library
//!
//! Finds lines containing a literal pattern under a directory of a repository
//! and attributes each one to the commit that last touched it.

pub mod blame;
pub mod config;
pub mod crawler;
pub mod error;
pub mod matcher;
pub mod record;
pub mod url;

#[cfg(test)]
pub mod testutils;

pub use blame::{BlameProvider, BlameResolver};
pub use config::{ExtensionFilter, ScanConfiguration};
pub use crawler::{CrawlSummary, Crawler};
pub use error::{Error, Result};
pub use matcher::find_matches;
pub use record::{Attribution, BlameRecord, LineRange, MatchRecord};
pub use url::build_line_url;
