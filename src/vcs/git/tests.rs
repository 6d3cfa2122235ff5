// lokit: Localization Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{GitWorkingCopy, is_available};
use crate::error::VcsError;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Helper to run git commands in a directory
fn run_git(args: &[&str], cwd: &Path) -> bool {
    Command::new("git")
        .args(args)
        .current_dir(cwd)
        .env("GIT_AUTHOR_NAME", "Test")
        .env("GIT_AUTHOR_EMAIL", "test@test.com")
        .env("GIT_COMMITTER_NAME", "Test")
        .env("GIT_COMMITTER_EMAIL", "test@test.com")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Create an initialized git repo with an initial commit (app.ini)
fn init_test_repo_with_commit(dir: &Path) {
    run_git(&["init", "-q"], dir);
    run_git(&["config", "user.email", "test@test.com"], dir);
    run_git(&["config", "user.name", "Test"], dir);
    fs::write(dir.join("app.ini"), "[S]\nkey = value\n").unwrap();
    run_git(&["add", "."], dir);
    run_git(&["commit", "-q", "-m", "Initial commit"], dir);
}

#[tokio::test]
async fn test_git_is_available() {
    // git is required for the rest of this suite anyway
    assert!(is_available().await);
}

#[tokio::test]
async fn test_discover_from_file_path() {
    let temp = temp_dir();
    init_test_repo_with_commit(temp.path());

    let copy = GitWorkingCopy::discover(&temp.path().join("app.ini")).unwrap();
    assert_eq!(copy.location(), Path::new("app.ini"));
    assert!(copy.root_dir().join(".git").exists());
}

#[tokio::test]
async fn test_discover_from_nested_file_path() {
    let temp = temp_dir();
    init_test_repo_with_commit(temp.path());
    let nested = temp.path().join("po");
    fs::create_dir(&nested).unwrap();
    fs::write(nested.join("de.ini"), "[S]\nk = v\n").unwrap();

    let copy = GitWorkingCopy::discover(&nested.join("de.ini")).unwrap();
    assert_eq!(copy.location(), Path::new("po/de.ini"));
}

#[tokio::test]
async fn test_discover_outside_repo_fails() {
    let temp = temp_dir();
    fs::write(temp.path().join("stray.ini"), "[S]\nk = v\n").unwrap();
    assert!(GitWorkingCopy::discover(&temp.path().join("stray.ini")).is_err());
}

#[tokio::test]
async fn test_has_changes_clean_repo() {
    let temp = temp_dir();
    init_test_repo_with_commit(temp.path());

    let copy = GitWorkingCopy::new(temp.path(), "app.ini");
    assert!(!copy.has_changes().await.unwrap());
}

#[tokio::test]
async fn test_has_changes_ignores_unstaged_edits() {
    let temp = temp_dir();
    init_test_repo_with_commit(temp.path());

    // Modified but not staged: the cached diff is still empty
    fs::write(temp.path().join("app.ini"), "[S]\nkey = changed\n").unwrap();

    let copy = GitWorkingCopy::new(temp.path(), "app.ini");
    assert!(!copy.has_changes().await.unwrap());
}

#[tokio::test]
async fn test_has_changes_sees_staged_edits() {
    let temp = temp_dir();
    init_test_repo_with_commit(temp.path());

    fs::write(temp.path().join("app.ini"), "[S]\nkey = changed\n").unwrap();
    run_git(&["add", "app.ini"], temp.path());

    let copy = GitWorkingCopy::new(temp.path(), "app.ini");
    assert!(copy.has_changes().await.unwrap());
}

#[tokio::test]
async fn test_commit_without_staged_changes_fails_early() {
    let temp = temp_dir();
    init_test_repo_with_commit(temp.path());

    let copy = GitWorkingCopy::new(temp.path(), "app.ini");
    let err = copy
        .commit(Some("msg"), None, false)
        .await
        .expect_err("nothing staged, commit must refuse");
    let vcs_err = err.downcast_ref::<VcsError>().expect("typed vcs error");
    assert!(matches!(vcs_err, VcsError::NothingToCommit { .. }));
}

#[tokio::test]
async fn test_clean_file_returns_committed_content() {
    let temp = temp_dir();
    init_test_repo_with_commit(temp.path());

    // Local edits must not leak into the clean copy
    fs::write(temp.path().join("app.ini"), "[S]\nkey = dirty\n").unwrap();

    let copy = GitWorkingCopy::new(temp.path(), "app.ini");
    let content = copy.clean_file(None).await.unwrap();
    assert_eq!(content, "[S]\nkey = value\n");
}

#[tokio::test]
async fn test_clean_file_missing_path_fails() {
    let temp = temp_dir();
    init_test_repo_with_commit(temp.path());

    let copy = GitWorkingCopy::new(temp.path(), "no-such.ini");
    let err = copy.clean_file(None).await.unwrap_err();
    let vcs_err = err.downcast_ref::<VcsError>().expect("typed vcs error");
    assert!(matches!(vcs_err, VcsError::CommandFailed { .. }));
}

#[tokio::test]
async fn test_clean_file_explicit_revision() {
    let temp = temp_dir();
    init_test_repo_with_commit(temp.path());

    fs::write(temp.path().join("app.ini"), "[S]\nkey = second\n").unwrap();
    run_git(&["add", "app.ini"], temp.path());
    run_git(&["commit", "-q", "-m", "Second"], temp.path());

    let copy = GitWorkingCopy::new(temp.path(), "app.ini");
    assert_eq!(
        copy.clean_file(Some("HEAD~1")).await.unwrap(),
        "[S]\nkey = value\n"
    );
    assert_eq!(
        copy.clean_file(None).await.unwrap(),
        "[S]\nkey = second\n"
    );
}

#[tokio::test]
async fn test_command_failed_carries_command_and_stderr() {
    let temp = temp_dir();
    init_test_repo_with_commit(temp.path());

    let copy = GitWorkingCopy::new(temp.path(), "no-such.ini");
    let err = copy.clean_file(None).await.unwrap_err();
    let vcs_err = err.downcast_ref::<VcsError>().expect("typed vcs error");
    match vcs_err {
        VcsError::CommandFailed { command, message } => {
            assert!(command.contains("--git-dir"), "command was: {command}");
            assert!(command.contains("show"), "command was: {command}");
            assert!(!message.is_empty());
        }
        other => panic!("expected CommandFailed, got {other:?}"),
    }
}
