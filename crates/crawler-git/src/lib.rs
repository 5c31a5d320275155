//! Crawler Git Integration
//!
//! Provides branch lookup and single-line blame attribution on top of libgit2.

pub mod blame;
pub mod repository;

pub use blame::BlameInfo;
pub use repository::{GitError, GitRepository};
