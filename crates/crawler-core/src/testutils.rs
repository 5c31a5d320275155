//! Test utilities for the crawler.
//!
//! Provides a stub blame provider that stands in for a real repository.

use crate::blame::BlameProvider;
use crate::error::{Error, Result};
use crate::record::{Attribution, LineRange};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// Blame provider that attributes every line to a fixed author and records
/// each call it receives.
pub struct StubBlame {
    root: PathBuf,
    branch: Option<String>,
    commits_per_line: usize,
    calls: RefCell<Vec<(PathBuf, LineRange)>>,
}

impl StubBlame {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            branch: Some("main".to_string()),
            commits_per_line: 1,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Number of attributions returned for every blamed range.
    pub fn with_commits_per_line(mut self, count: usize) -> Self {
        self.commits_per_line = count;
        self
    }

    /// Simulate a detached HEAD.
    pub fn detached(mut self) -> Self {
        self.branch = None;
        self
    }

    pub fn calls(&self) -> Vec<(PathBuf, LineRange)> {
        self.calls.borrow().clone()
    }

    /// Revision the stub reports for a given line.
    pub fn revision_for(line: usize) -> String {
        format!("{:040x}", line)
    }
}

impl BlameProvider for StubBlame {
    fn root(&self) -> &Path {
        &self.root
    }

    fn current_branch_name(&self) -> Result<String> {
        self.branch
            .clone()
            .ok_or_else(|| Error::Vcs("HEAD is detached".to_string()))
    }

    fn blame(&self, relative_path: &Path, range: LineRange) -> Result<Vec<Attribution>> {
        self.calls
            .borrow_mut()
            .push((relative_path.to_path_buf(), range));

        Ok((0..self.commits_per_line)
            .map(|_| Attribution {
                author_identity: "Stub Author".to_string(),
                revision_id: Self::revision_for(range.start),
            })
            .collect())
    }
}
