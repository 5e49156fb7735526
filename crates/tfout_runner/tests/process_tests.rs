//! Integration tests for the process execution layer.
//!
//! These spawn `/bin/sh` and therefore only run on unix hosts.

#![cfg(unix)]

use tempfile::tempdir;
use tfout_runner::{CommandRunner, CommandSpec, ProcessRunner};

fn sh(script: &str) -> CommandSpec {
    CommandSpec::new("/bin/sh").args(["-c", script])
}

/// Exit code and both streams are captured.
#[tokio::test]
async fn test_captures_exit_code_and_streams() {
    let runner = ProcessRunner::new();

    let result = runner
        .run(&sh("printf out; printf err >&2; exit 3"))
        .await
        .unwrap();

    assert_eq!(result.exit_code, 3);
    assert_eq!(result.stdout, "out");
    assert_eq!(result.stderr, "err");
    assert!(!result.success());
    assert!(result.finished_at >= result.started_at);
}

/// The child runs in the requested working directory.
#[tokio::test]
async fn test_runs_in_working_directory() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("marker.txt"), "here").unwrap();

    let runner = ProcessRunner::new();
    let result = runner
        .run(&sh("cat marker.txt").cwd(dir.path()))
        .await
        .unwrap();

    assert!(result.success());
    assert_eq!(result.stdout, "here");
}

/// A child killed by a signal reports the negated signal number.
#[tokio::test]
async fn test_signal_termination_reports_negated_signal() {
    let runner = ProcessRunner::new();

    let killed = runner.run(&sh("kill -9 $$")).await.unwrap();
    assert_eq!(killed.exit_code, -9);

    let terminated = runner.run(&sh("kill -15 $$")).await.unwrap();
    assert_eq!(terminated.exit_code, -15);
}
