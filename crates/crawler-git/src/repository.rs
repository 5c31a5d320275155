//! Git repository wrapper.

use git2::Repository;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Repository not found at {0}")]
    NotFound(PathBuf),

    #[error("Repository at {0} has no working tree")]
    Bare(PathBuf),

    #[error("HEAD is not on a branch (detached HEAD)")]
    DetachedHead,
}

/// Result type for git operations.
pub type Result<T> = std::result::Result<T, GitError>;

impl From<GitError> for crawler_core::Error {
    fn from(err: GitError) -> Self {
        match err {
            GitError::NotFound(_) | GitError::Bare(_) => {
                crawler_core::Error::Config(err.to_string())
            }
            _ => crawler_core::Error::Vcs(err.to_string()),
        }
    }
}

/// Wrapper around a git repository with a working tree.
pub struct GitRepository {
    repo: Repository,
    root: PathBuf,
}

impl GitRepository {
    /// Open the git repository containing `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let path = path
            .canonicalize()
            .map_err(|_| GitError::NotFound(path.to_path_buf()))?;
        let repo = Repository::discover(&path).map_err(|_| GitError::NotFound(path.clone()))?;

        let root = repo
            .workdir()
            .ok_or_else(|| GitError::Bare(path.clone()))?
            .canonicalize()
            .map_err(|_| GitError::NotFound(path.clone()))?;

        tracing::debug!("Opened repository at {}", root.display());
        Ok(Self { repo, root })
    }

    /// Get the repository working tree root (canonical).
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the short name of the checked-out branch.
    pub fn current_branch(&self) -> Result<String> {
        let head = self.repo.head()?;
        if !head.is_branch() {
            return Err(GitError::DetachedHead);
        }

        head.shorthand()
            .map(String::from)
            .ok_or(GitError::DetachedHead)
    }

    /// Get the underlying git2 repository.
    pub fn inner(&self) -> &Repository {
        &self.repo
    }
}
