//! Scan configuration.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Default destination for crawl results.
pub const DEFAULT_OUTPUT_PATH: &str = "./crawler_output.txt";

/// Allow-list of file suffixes such as `.h` or `.cpp`.
///
/// An empty filter admits every file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter {
    suffixes: BTreeSet<String>,
}

impl ExtensionFilter {
    /// Parse a comma-separated list like `.h,.cpp`.
    ///
    /// Entries are trimmed and empty entries are dropped, so `""` yields an
    /// empty filter.
    pub fn parse(list: &str) -> Self {
        Self::from_suffixes(list.split(','))
    }

    pub fn from_suffixes<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let suffixes = suffixes
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Self { suffixes }
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    /// Check whether a file is admitted by the filter.
    ///
    /// The suffix is the final extension including its dot (`a.tar.gz` has
    /// suffix `.gz`). Files without an extension only pass an empty filter.
    pub fn allows(&self, path: &Path) -> bool {
        if self.suffixes.is_empty() {
            return true;
        }
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => self.suffixes.contains(&format!(".{}", ext)),
            None => false,
        }
    }
}

/// Everything one crawl run needs. Immutable for the duration of the run.
#[derive(Debug, Clone)]
pub struct ScanConfiguration {
    /// Remote URL used as the base for generated links.
    pub repo_remote_url: String,
    /// Local path to the repository.
    pub repo_local_path: PathBuf,
    /// Directory to scan, relative to `repo_local_path`.
    pub search_root: PathBuf,
    /// Literal substring to search for.
    pub pattern: String,
    pub allowed_extensions: ExtensionFilter,
    pub output_path: PathBuf,
    /// Include the revision hash in every record.
    pub verbose: bool,
    /// Branch name for links instead of the checked-out branch.
    pub branch_override: Option<String>,
}

impl ScanConfiguration {
    pub fn new(
        repo_remote_url: impl Into<String>,
        repo_local_path: impl Into<PathBuf>,
        search_root: impl Into<PathBuf>,
        pattern: impl Into<String>,
    ) -> Self {
        Self {
            repo_remote_url: repo_remote_url.into(),
            repo_local_path: repo_local_path.into(),
            search_root: search_root.into(),
            pattern: pattern.into(),
            allowed_extensions: ExtensionFilter::default(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            verbose: false,
            branch_override: None,
        }
    }

    pub fn with_extensions(mut self, filter: ExtensionFilter) -> Self {
        self.allowed_extensions = filter;
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_branch(mut self, branch: Option<String>) -> Self {
        self.branch_override = branch;
        self
    }

    /// Directory that will be walked.
    pub fn scan_dir(&self) -> PathBuf {
        self.repo_local_path.join(&self.search_root)
    }
}
