//! Invocation parameters.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::IacResult;

/// Parameters for a single output retrieval.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputParams {
    /// Root of the Terraform directory, used as the child's working directory
    #[serde(default)]
    pub project_path: Option<PathBuf>,
    /// Terraform binary to run instead of looking one up on `PATH`
    #[serde(default)]
    pub binary_path: Option<PathBuf>,
    /// Existing state file whose outputs are listed
    #[serde(default)]
    pub state_file: Option<PathBuf>,
}

impl OutputParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_path = Some(path.into());
        self
    }

    pub fn with_binary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.binary_path = Some(path.into());
        self
    }

    pub fn with_state_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.state_file = Some(path.into());
        self
    }

    /// Load parameters from a JSON or YAML file, chosen by extension.
    pub fn from_file(path: &Path) -> IacResult<Self> {
        debug!("Loading parameters from {:?}", path);
        let content = fs::read_to_string(path)?;

        let params: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("yml") | Some("yaml") => serde_yaml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };

        Ok(params)
    }

    /// Fill unset fields from `fallback`; fields set on `self` win.
    pub fn or(self, fallback: OutputParams) -> Self {
        Self {
            project_path: self.project_path.or(fallback.project_path),
            binary_path: self.binary_path.or(fallback.binary_path),
            state_file: self.state_file.or(fallback.state_file),
        }
    }

    /// Expand `$VAR`, `${VAR}` and a leading `~` in every path parameter.
    pub fn expand_paths(self) -> Self {
        Self {
            project_path: self.project_path.as_deref().map(expand_path),
            binary_path: self.binary_path.as_deref().map(expand_path),
            state_file: self.state_file.as_deref().map(expand_path),
        }
    }
}

/// Expand environment variables and a leading `~` the way a shell would.
///
/// Unset variables are left untouched, as is `~` when the home directory is
/// unknown. `~user` forms are not expanded. Paths that are not valid UTF-8
/// are returned unchanged.
pub fn expand_path(path: &Path) -> PathBuf {
    let Some(raw) = path.to_str() else {
        return path.to_path_buf();
    };

    let expanded = shellexpand::full_with_context_no_errors(
        raw,
        || dirs::home_dir().and_then(|home| home.to_str().map(str::to_owned)),
        |name: &str| std::env::var(name).ok(),
    );

    PathBuf::from(expanded.into_owned())
}
