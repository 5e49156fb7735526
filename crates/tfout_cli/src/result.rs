//! Result document printed on stdout.

use serde::Serialize;

use tfout_iac::{IacError, Outputs, OutputsResult};

/// Outcome of one invocation, in the shape automation tooling expects.
#[derive(Debug, Serialize)]
pub struct ModuleResult {
    pub changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Outputs>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub failed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl ModuleResult {
    pub fn success(result: OutputsResult, warnings: Vec<String>) -> Self {
        Self {
            changed: false,
            outputs: Some(result.outputs),
            warnings,
            failed: false,
            msg: None,
            command: None,
        }
    }

    pub fn failure(error: &anyhow::Error, warnings: Vec<String>) -> Self {
        let command = error
            .downcast_ref::<IacError>()
            .and_then(IacError::command)
            .map(str::to_string);

        Self {
            changed: false,
            outputs: None,
            warnings,
            failed: true,
            msg: Some(format!("{:#}", error)),
            command,
        }
    }
}
