// lokit: Localization Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::builder::{ProcessBuilder, ProcessFlags};
use std::time::Duration;

#[tokio::test]
async fn test_process_echo() {
    let output = ProcessBuilder::new("echo")
        .arg("hello")
        .capture_output()
        .run()
        .await
        .expect("echo should succeed");

    assert!(output.success());
    insta::assert_snapshot!(output.stdout().trim(), @"hello");
}

#[tokio::test]
async fn test_process_exit_code() {
    let output = ProcessBuilder::new("/bin/sh")
        .args(["-c", "exit 42"])
        .flag(ProcessFlags::ALLOW_FAILURE)
        .run()
        .await
        .expect("process should complete");

    assert_eq!(output.exit_code(), 42);
    assert!(!output.success());
}

#[tokio::test]
async fn test_process_nonzero_fails_without_allow_failure() {
    let result = ProcessBuilder::new("/bin/sh")
        .args(["-c", "exit 3"])
        .quiet()
        .run()
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_process_success_codes() {
    let output = ProcessBuilder::new("/bin/sh")
        .args(["-c", "exit 1"])
        .quiet()
        .success_codes([0, 1])
        .run()
        .await
        .expect("exit code 1 is allowed here");
    assert_eq!(output.exit_code(), 1);
}

#[tokio::test]
async fn test_process_env_var() {
    let output = ProcessBuilder::new("/bin/sh")
        .args(["-c", "echo $LOKIT_TEST_VAR"])
        .env_var("LOKIT_TEST_VAR", "test_value")
        .capture_stdout()
        .run()
        .await
        .expect("process should succeed");

    insta::assert_snapshot!(output.stdout().trim(), @"test_value");
}

#[tokio::test]
async fn test_process_stderr_capture() {
    let output = ProcessBuilder::new("/bin/sh")
        .args(["-c", "echo oops >&2"])
        .capture_output()
        .run()
        .await
        .expect("process should succeed");

    assert_eq!(output.stderr().trim(), "oops");
    assert!(output.stdout().is_empty());
}

#[tokio::test]
async fn test_process_preserves_trailing_newline() {
    let output = ProcessBuilder::new("printf")
        .arg("one\ntwo\n")
        .capture_stdout()
        .run()
        .await
        .expect("printf should succeed");

    assert_eq!(output.stdout(), "one\ntwo\n");
}

#[tokio::test]
async fn test_process_timeout_kills_child() {
    let result = ProcessBuilder::new("sleep")
        .arg("30")
        .quiet()
        .timeout(Duration::from_millis(100))
        .run()
        .await;

    let err = result.expect_err("timeout should surface as an error");
    assert!(err.to_string().contains("timed out"), "got: {err:#}");
}

#[test]
fn test_executable_lookup_found() {
    // cargo should always be available since we're running tests with cargo
    let which_result = ProcessBuilder::which("cargo");
    assert!(which_result.is_ok(), "which: cargo should be found in PATH");
    let builder = which_result.unwrap();
    assert!(
        builder.program().exists(),
        "which: returned program path should exist"
    );

    assert!(
        ProcessBuilder::exists("cargo"),
        "exists: cargo should exist in PATH"
    );

    let find_result = ProcessBuilder::find("cargo");
    assert!(find_result.is_some(), "find: cargo should be found");
    assert!(find_result.unwrap().exists());
}

#[test]
fn test_executable_lookup_not_found() {
    let program = "nonexistent_program_12345";

    assert!(ProcessBuilder::which(program).is_err());
    assert!(!ProcessBuilder::exists(program));
    assert!(ProcessBuilder::find(program).is_none());
}

#[test]
fn test_command_line_quotes_spaced_args() {
    let builder = ProcessBuilder::new("git")
        .arg("commit")
        .arg("-m")
        .arg("two words");
    insta::assert_snapshot!(builder.command_line(), @r#"git commit -m "two words""#);
}
