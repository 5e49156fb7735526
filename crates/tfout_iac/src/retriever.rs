//! Top-level output retrieval entry point.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use tfout_runner::{CommandRunner, ProcessRunner};

use crate::error::IacResult;
use crate::locator::{BinaryLocator, PathLookup, TERRAFORM_BINARY};
use crate::outputs::OutputsResult;
use crate::params::OutputParams;
use crate::report::Reporter;
use crate::terraform::TerraformOutputs;

/// Resolves the Terraform binary and retrieves the outputs of a stack.
pub struct OutputRetriever {
    outputs: TerraformOutputs,
    locator: Box<dyn BinaryLocator>,
}

impl OutputRetriever {
    /// Create a retriever that looks up `terraform` on `PATH`.
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            outputs: TerraformOutputs::new(runner),
            locator: Box::new(PathLookup),
        }
    }

    /// Use a custom binary locator.
    pub fn with_locator(mut self, locator: impl BinaryLocator + 'static) -> Self {
        self.locator = Box::new(locator);
        self
    }

    /// The binary to run: `binary_path` verbatim, or a required `PATH` lookup.
    pub fn resolve_binary(&self, params: &OutputParams) -> IacResult<PathBuf> {
        match &params.binary_path {
            Some(path) => Ok(path.clone()),
            None => self.locator.locate(TERRAFORM_BINARY),
        }
    }

    /// Retrieve all outputs described by `params`.
    pub async fn retrieve(
        &self,
        params: &OutputParams,
        reporter: &mut Reporter,
    ) -> IacResult<OutputsResult> {
        let binary = self.resolve_binary(params)?;
        info!("Retrieving Terraform outputs using {:?}", binary);

        let outputs = self
            .outputs
            .get_outputs(
                &binary,
                params.project_path.as_deref(),
                params.state_file.as_deref(),
                reporter,
            )
            .await?;

        info!("Retrieved {} Terraform output(s)", outputs.len());
        Ok(OutputsResult::new(outputs))
    }
}

/// Retrieve outputs with a local process runner and a `PATH` lookup.
pub async fn fetch_outputs(
    params: &OutputParams,
    reporter: &mut Reporter,
) -> IacResult<OutputsResult> {
    OutputRetriever::new(Arc::new(ProcessRunner::new()))
        .retrieve(params, reporter)
        .await
}
