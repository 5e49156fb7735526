//! Child process runner backed by `tokio::process`.
//!
//! Spawns the configured program, captures both output streams in full and
//! waits for the child to exit. There is no timeout; the child lives exactly
//! as long as the call.

use std::process::{ExitStatus, Stdio};
use std::time::Instant;

use async_trait::async_trait;
use chrono::Utc;
use tokio::process::Command;
use tracing::debug;

use crate::config::CommandSpec;
use crate::error::{RunnerError, RunnerResult};
use crate::runner::{CommandRunner, ExecutionResult};

/// Runner that executes commands as local child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }

    fn build_command(spec: &CommandSpec) -> RunnerResult<Command> {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(cwd) = &spec.cwd {
            if !cwd.is_dir() {
                return Err(RunnerError::InvalidWorkdir(cwd.display().to_string()));
            }
            cmd.current_dir(cwd);
        }

        Ok(cmd)
    }
}

/// Exit code of a finished child, `-signum` if a signal killed it.
fn exit_code(status: &ExitStatus) -> i64 {
    if let Some(code) = status.code() {
        return i64::from(code);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -i64::from(signal);
        }
    }

    -1
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, spec: &CommandSpec) -> RunnerResult<ExecutionResult> {
        let cmd_str = spec.command_line();
        let mut cmd = Self::build_command(spec)?;
        debug!("Executing: {} (cwd: {:?})", cmd_str, spec.cwd);

        let started_at = Utc::now();
        let start = Instant::now();

        let output = cmd
            .spawn()
            .map_err(|source| RunnerError::SpawnFailed {
                program: spec.program.display().to_string(),
                source,
            })?
            .wait_with_output()
            .await
            .map_err(|e| RunnerError::ExecutionFailed(format!("Failed to wait for process: {}", e)))?;

        let duration_ms = start.elapsed().as_millis() as u64;
        let exit_code = exit_code(&output.status);

        debug!("{} exited with {} after {}ms", cmd_str, exit_code, duration_ms);

        Ok(ExecutionResult {
            exit_code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            started_at,
            finished_at: Utc::now(),
            duration_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_program_is_spawn_failure() {
        let runner = ProcessRunner::new();
        let spec = CommandSpec::new("/definitely/not/a/real/binary");

        let err = runner.run(&spec).await.unwrap_err();
        assert!(matches!(err, RunnerError::SpawnFailed { .. }));
        assert!(err.to_string().contains("/definitely/not/a/real/binary"));
    }

    #[tokio::test]
    async fn test_missing_workdir_is_rejected() {
        let runner = ProcessRunner::new();
        let spec = CommandSpec::new("true").cwd("/definitely/not/a/real/dir");

        let err = runner.run(&spec).await.unwrap_err();
        assert!(matches!(err, RunnerError::InvalidWorkdir(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_code_from_status() {
        use std::os::unix::process::ExitStatusExt;

        assert_eq!(exit_code(&ExitStatus::from_raw(0)), 0);
        assert_eq!(exit_code(&ExitStatus::from_raw(2 << 8)), 2);
        assert_eq!(exit_code(&ExitStatus::from_raw(9)), -9);
        assert_eq!(exit_code(&ExitStatus::from_raw(15)), -15);
    }
}
