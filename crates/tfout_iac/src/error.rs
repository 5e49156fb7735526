//! Error types for the IaC module.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for IaC operations.
pub type IacResult<T> = Result<T, IacError>;

/// Errors that can occur while retrieving Terraform outputs.
#[derive(Error, Debug)]
pub enum IacError {
    #[error("Could not find state_file \"{}\", check the path and try again.", .0.display())]
    StateFileNotFound(PathBuf),

    #[error("Failed to find required executable \"{name}\" in PATH: {reason}")]
    BinaryNotFound { name: String, reason: String },

    #[error(
        "Failure when getting Terraform outputs. Exited {exit_code}.\nstdout: {stdout}\nstderr: {stderr}\ncommand: {command}"
    )]
    OutputsFailed {
        exit_code: i64,
        stdout: String,
        stderr: String,
        command: String,
    },

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("Runner error: {0}")]
    Runner(#[from] tfout_runner::RunnerError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IacError {
    /// The failing command line, for errors raised after the command was built.
    pub fn command(&self) -> Option<&str> {
        match self {
            Self::OutputsFailed { command, .. } => Some(command),
            _ => None,
        }
    }
}
