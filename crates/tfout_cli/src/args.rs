//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use tfout_iac::OutputParams;

/// tfout - list the outputs of a Terraform stack as JSON
#[derive(Parser, Debug)]
#[command(name = "tfout")]
#[command(version, about = "List the outputs of a Terraform stack as JSON")]
#[command(long_about = r#"
Runs `terraform output -no-color -json` in the project directory and prints
the outputs wrapped in a result document on stdout:

  {"changed": false, "outputs": {"name": {"sensitive": ..., "type": ..., "value": ...}}}

When Terraform reports that no outputs are defined the result is an empty
`outputs` object plus a warning. Failures are printed as
{"changed": false, "failed": true, "msg": "..."}.

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid parameters
  5 - Terraform error
"#)]
pub struct Cli {
    /// Root of the Terraform directory (working directory for terraform)
    #[arg(short, long, env = "TFOUT_PROJECT_PATH")]
    pub project_path: Option<PathBuf>,

    /// Terraform binary to use instead of the one found on PATH
    #[arg(short, long, env = "TFOUT_BINARY_PATH")]
    pub binary_path: Option<PathBuf>,

    /// Existing state file whose outputs are listed
    #[arg(short, long, env = "TFOUT_STATE_FILE")]
    pub state_file: Option<PathBuf>,

    /// JSON or YAML file with project_path, binary_path and state_file
    #[arg(long, env = "TFOUT_PARAMS")]
    pub params: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parameters given as flags or environment variables.
    pub fn explicit_params(&self) -> OutputParams {
        OutputParams {
            project_path: self.project_path.clone(),
            binary_path: self.binary_path.clone(),
            state_file: self.state_file.clone(),
        }
    }
}
