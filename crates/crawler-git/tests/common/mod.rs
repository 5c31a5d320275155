//! Shared helpers for building throwaway repositories.

use git2::{Commit, Oid, Repository, RepositoryInitOptions, Signature, Time};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Create an empty repository whose initial branch is `main`.
pub fn init_repo() -> (TempDir, Repository) {
    let temp_dir = TempDir::new().unwrap();
    let mut opts = RepositoryInitOptions::new();
    opts.initial_head("main");
    let repo = Repository::init_opts(temp_dir.path(), &opts).unwrap();
    (temp_dir, repo)
}

/// Write `content` to `rel_path` and commit it as `author`.
pub fn commit_file(
    repo: &Repository,
    rel_path: &str,
    content: &str,
    author: &str,
    seconds: i64,
) -> Oid {
    let path = repo.workdir().unwrap().join(rel_path);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(Path::new(rel_path)).unwrap();
    index.write().unwrap();
    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();

    let email = format!("{}@example.com", author.to_lowercase());
    let sig = Signature::new(author, &email, &Time::new(seconds, 0)).unwrap();
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, &format!("Update {}", rel_path), &tree, &parents)
        .unwrap()
}
