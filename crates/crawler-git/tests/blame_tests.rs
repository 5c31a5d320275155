//! Blame attribution against real repositories.

mod common;

use common::{commit_file, init_repo};
use crawler_core::{BlameProvider, BlameResolver, Error, LineRange};
use crawler_git::{GitError, GitRepository};
use std::path::Path;

#[test]
fn test_current_branch_name() {
    let (dir, repo) = init_repo();
    commit_file(&repo, "a.txt", "hello\n", "Alice", 1_600_000_000);

    let git = GitRepository::open(dir.path()).unwrap();
    assert_eq!(git.current_branch_name().unwrap(), "main");
}

#[test]
fn test_detached_head() {
    let (dir, repo) = init_repo();
    let oid = commit_file(&repo, "a.txt", "hello\n", "Alice", 1_600_000_000);
    repo.set_head_detached(oid).unwrap();

    let git = GitRepository::open(dir.path()).unwrap();
    assert!(matches!(git.current_branch(), Err(GitError::DetachedHead)));
}

#[test]
fn test_single_line_blame_attributes_last_change() {
    let (dir, repo) = init_repo();
    let first = commit_file(&repo, "src/a.cpp", "foo\nbar pattern\nbaz\n", "Alice", 1_600_000_000);
    let second = commit_file(
        &repo,
        "src/a.cpp",
        "foo\nbar pattern\nbaz pattern\n",
        "Bob",
        1_600_100_000,
    );

    let git = GitRepository::open(dir.path()).unwrap();
    let resolver = BlameResolver::new(&git);

    let line2 = resolver.resolve(Path::new("src/a.cpp"), 2).unwrap();
    assert_eq!(line2.author_identity, "Alice");
    assert_eq!(line2.revision_id, first.to_string());

    let line3 = resolver.resolve(Path::new("src/a.cpp"), 3).unwrap();
    assert_eq!(line3.author_identity, "Bob");
    assert_eq!(line3.revision_id, second.to_string());
    assert_eq!(line3.revision_id.len(), 40);
}

#[test]
fn test_blame_lines_reports_hunks() {
    let (dir, repo) = init_repo();
    commit_file(&repo, "a.txt", "one\ntwo\n", "Alice", 1_600_000_000);
    commit_file(&repo, "a.txt", "one\ntwo\nthree\n", "Bob", 1_600_100_000);

    let git = GitRepository::open(dir.path()).unwrap();
    let infos = git.blame_lines(Path::new("a.txt"), 1, 3).unwrap();

    assert_eq!(infos.len(), 2);
    assert_eq!(infos[0].author_name, "Alice");
    assert_eq!(infos[0].lines, 2);
    assert_eq!(infos[1].author_name, "Bob");
    assert_eq!(infos[1].final_line, 3);
    assert_eq!(infos[1].author_email, "bob@example.com");
}

#[test]
fn test_single_line_range_yields_one_attribution() {
    let (dir, repo) = init_repo();
    commit_file(&repo, "a.txt", "one\ntwo\nthree\n", "Alice", 1_600_000_000);

    let git = GitRepository::open(dir.path()).unwrap();
    let found = git.blame(Path::new("a.txt"), LineRange::single(2)).unwrap();
    assert_eq!(found.len(), 1);
}

#[test]
fn test_untracked_file_is_vcs_error() {
    let (dir, repo) = init_repo();
    commit_file(&repo, "a.txt", "one\n", "Alice", 1_600_000_000);
    std::fs::write(dir.path().join("new.txt"), "fresh\n").unwrap();

    let git = GitRepository::open(dir.path()).unwrap();
    let err = BlameResolver::new(&git)
        .resolve(Path::new("new.txt"), 1)
        .unwrap_err();
    assert!(matches!(err, Error::Vcs(_)));
}
