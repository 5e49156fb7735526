//! # tfout_iac
//!
//! Terraform output retrieval for tfout.
//!
//! Runs `terraform output -no-color -json` for a stack and returns every
//! output with its sensitivity, type and value.
//!
//! ## Exit code handling
//!
//! - `0`: stdout is decoded as the outputs map
//! - `1`: no outputs defined; a warning is recorded and the map is empty
//! - anything else: [`IacError::OutputsFailed`] with captured streams and the
//!   command line
//!
//! ## Example
//!
//! ```rust,no_run
//! use tfout_iac::{fetch_outputs, OutputParams, Reporter};
//!
//! # async fn run() -> tfout_iac::IacResult<()> {
//! let params = OutputParams::new().with_project_path("./infrastructure");
//! let mut reporter = Reporter::new();
//!
//! let result = fetch_outputs(&params, &mut reporter).await?;
//! for (name, record) in &result.outputs {
//!     println!("{} = {}", name, record.value);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod locator;
pub mod outputs;
pub mod params;
pub mod report;
pub mod retriever;
pub mod terraform;

pub use error::{IacError, IacResult};
pub use locator::{BinaryLocator, PathLookup, TERRAFORM_BINARY};
pub use outputs::{OutputRecord, Outputs, OutputsResult};
pub use params::OutputParams;
pub use report::Reporter;
pub use retriever::{fetch_outputs, OutputRetriever};
pub use terraform::{output_command, state_args, TerraformOutputs, OUTPUT_ARGS};
