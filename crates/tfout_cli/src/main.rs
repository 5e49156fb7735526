//! tfout CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid parameters
//! - 5: Terraform error

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod args;
mod result;

use args::Cli;
use result::ModuleResult;
use tfout_iac::{fetch_outputs, IacError, IacResult, OutputParams, OutputsResult, Reporter};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_PARAMS: u8 = 2;
    pub const TERRAFORM_ERROR: u8 = 5;
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    let mut reporter = Reporter::new();
    let outcome = run(&cli, &mut reporter).await;

    let (document, exit_code) = match outcome {
        Ok(result) => (
            ModuleResult::success(result, reporter.into_warnings()),
            ExitCodes::SUCCESS,
        ),
        Err(e) => {
            error!("{:#}", e);
            let exit_code = categorize_error(&e);
            (ModuleResult::failure(&e, reporter.into_warnings()), exit_code)
        }
    };

    match serde_json::to_string(&document) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: failed to render result: {}", e);
            return ExitCode::from(ExitCodes::GENERAL_ERROR);
        }
    }

    ExitCode::from(exit_code)
}

/// Log to stderr so stdout only carries the result document.
fn init_logging(cli: &Cli) {
    let default_filter = if cli.verbose {
        "tfout_cli=debug,tfout_iac=debug,tfout_runner=debug,warn"
    } else if cli.quiet {
        "error"
    } else {
        "tfout_cli=info,tfout_iac=info,tfout_runner=info,warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }
}

async fn run(cli: &Cli, reporter: &mut Reporter) -> Result<OutputsResult> {
    let params = resolve_params(cli)?;
    debug!("Resolved parameters: {:?}", params);

    Ok(fetch_outputs(&params, reporter).await?)
}

/// Merge flags over the optional parameter file, then expand `$VAR` and `~`.
fn resolve_params(cli: &Cli) -> IacResult<OutputParams> {
    let explicit = cli.explicit_params();

    let params = match &cli.params {
        Some(path) => {
            let from_file = OutputParams::from_file(path).map_err(|e| {
                IacError::InvalidParams(format!(
                    "Failed to load parameters from {}: {}",
                    path.display(),
                    e
                ))
            })?;
            explicit.or(from_file)
        }
        None => explicit,
    };

    Ok(params.expand_paths())
}

/// Map an error to its exit code.
fn categorize_error(e: &anyhow::Error) -> u8 {
    match e.downcast_ref::<IacError>() {
        Some(IacError::StateFileNotFound(_)) | Some(IacError::InvalidParams(_)) => {
            ExitCodes::INVALID_PARAMS
        }
        Some(IacError::BinaryNotFound { .. }) | Some(IacError::OutputsFailed { .. }) => {
            ExitCodes::TERRAFORM_ERROR
        }
        _ => ExitCodes::GENERAL_ERROR,
    }
}
