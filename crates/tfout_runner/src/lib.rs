//! # tfout_runner
//!
//! Child process execution wrapper for tfout.
//!
//! This crate runs external command-line tools and captures their exit code
//! and output streams, behind a trait so callers can swap in a scripted
//! runner under test.
//!
//! # Features
//!
//! - **Process Runner**: tokio child process with piped stdout/stderr
//! - **Mock Runner**: For testing without a real binary on the system
//!
//! # Example
//!
//! ```rust,no_run
//! use tfout_runner::{CommandRunner, CommandSpec, ProcessRunner};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let runner = ProcessRunner::new();
//!
//!     let spec = CommandSpec::new("terraform")
//!         .arg("version")
//!         .cwd("./infrastructure");
//!
//!     let result = runner.run(&spec).await?;
//!     println!("Exit code: {}", result.exit_code);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod mock;
pub mod process;
pub mod runner;

pub use config::CommandSpec;
pub use error::{RunnerError, RunnerResult};
pub use mock::{CapturedCall, MockResponse, MockRunner};
pub use process::ProcessRunner;
pub use runner::{CommandRunner, ExecutionResult};
