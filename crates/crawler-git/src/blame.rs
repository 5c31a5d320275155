//! Git blame functionality.

use crate::repository::{GitRepository, Result};
use chrono::{DateTime, TimeZone, Utc};
use crawler_core::{Attribution, BlameProvider, LineRange};
use git2::BlameOptions;
use std::path::Path;

/// Blame information for a hunk of lines.
#[derive(Debug, Clone)]
pub struct BlameInfo {
    /// Commit hash that last modified these lines.
    pub commit_hash: String,
    /// Author name.
    pub author_name: String,
    /// Author email.
    pub author_email: String,
    /// When the lines were last modified.
    pub timestamp: DateTime<Utc>,
    /// First line of the hunk in the blamed file.
    pub final_line: usize,
    /// Number of lines in the hunk.
    pub lines: usize,
}

impl From<BlameInfo> for Attribution {
    fn from(info: BlameInfo) -> Self {
        Attribution {
            author_identity: info.author_name,
            revision_id: info.commit_hash,
        }
    }
}

impl GitRepository {
    /// Blame `start_line..=end_line` of `file_path` as of HEAD.
    ///
    /// `file_path` is relative to the repository root. Returns one entry per
    /// hunk, each attributed to a single commit.
    pub fn blame_lines(
        &self,
        file_path: &Path,
        start_line: usize,
        end_line: usize,
    ) -> Result<Vec<BlameInfo>> {
        let head = self.inner().head()?.peel_to_commit()?;

        let mut opts = BlameOptions::new();
        opts.newest_commit(head.id())
            .min_line(start_line)
            .max_line(end_line);

        let blame = self.inner().blame_file(file_path, Some(&mut opts))?;

        let mut infos = Vec::with_capacity(blame.len());
        for hunk in blame.iter() {
            let sig = hunk.final_signature();
            let time = sig.when();
            let timestamp = Utc.timestamp_opt(time.seconds(), 0)
                .single()
                .unwrap_or_else(Utc::now);

            infos.push(BlameInfo {
                commit_hash: hunk.final_commit_id().to_string(),
                author_name: sig.name().unwrap_or("Unknown").to_string(),
                author_email: sig.email().unwrap_or("").to_string(),
                timestamp,
                final_line: hunk.final_start_line(),
                lines: hunk.lines_in_hunk(),
            });
        }

        Ok(infos)
    }
}

impl BlameProvider for GitRepository {
    fn root(&self) -> &Path {
        GitRepository::root(self)
    }

    fn current_branch_name(&self) -> crawler_core::Result<String> {
        Ok(self.current_branch()?)
    }

    fn blame(
        &self,
        relative_path: &Path,
        range: LineRange,
    ) -> crawler_core::Result<Vec<Attribution>> {
        let infos = self.blame_lines(relative_path, range.start, range.end)?;

        for info in &infos {
            tracing::debug!(
                "{}:{} last changed by {} <{}> at {} in {}",
                relative_path.display(),
                info.final_line,
                info.author_name,
                info.author_email,
                info.timestamp.format("%Y-%m-%d %H:%M"),
                info.commit_hash
            );
        }

        Ok(infos.into_iter().map(Attribution::from).collect())
    }
}
