//! Records produced while crawling.

use std::fmt;

/// A line that contains the search pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// 1-based line number within the file.
    pub line_number: usize,
    /// Line text without its line terminator.
    pub line_text: String,
}

impl MatchRecord {
    pub fn new(line_number: usize, line_text: impl Into<String>) -> Self {
        Self {
            line_number,
            line_text: line_text.into(),
        }
    }
}

/// Inclusive, 1-based range of lines handed to blame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    /// Range covering exactly one line.
    pub fn single(line: usize) -> Self {
        Self {
            start: line,
            end: line,
        }
    }
}

/// The commit a blame lookup attributed a line to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    /// Author display name.
    pub author_identity: String,
    /// Full commit hash.
    pub revision_id: String,
}

/// One output record: who last touched a matched line and where to see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlameRecord {
    pub author_identity: String,
    pub revision_id: String,
    pub git_url: String,
}

impl BlameRecord {
    pub fn new(attribution: Attribution, git_url: String) -> Self {
        Self {
            author_identity: attribution.author_identity,
            revision_id: attribution.revision_id,
            git_url,
        }
    }

    /// Render the record as a single output line (no terminator).
    ///
    /// Verbose mode appends the revision after the other fields.
    pub fn render(&self, verbose: bool) -> String {
        let mut line = format!("author={}, git_url={}", self.author_identity, self.git_url);
        if verbose {
            line.push_str(", revision=");
            line.push_str(&self.revision_id);
        }
        line
    }
}

impl fmt::Display for BlameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}
