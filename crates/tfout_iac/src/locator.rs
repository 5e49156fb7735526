//! Executable lookup on the system search path.

use std::path::PathBuf;

use crate::error::{IacError, IacResult};

/// Name of the Terraform executable looked up when no binary path is given.
pub const TERRAFORM_BINARY: &str = "terraform";

/// Resolves an executable name to a path.
pub trait BinaryLocator: Send + Sync {
    fn locate(&self, name: &str) -> IacResult<PathBuf>;
}

/// Locator backed by a `PATH` search.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathLookup;

impl BinaryLocator for PathLookup {
    fn locate(&self, name: &str) -> IacResult<PathBuf> {
        which::which(name).map_err(|e| IacError::BinaryNotFound {
            name: name.to_string(),
            reason: e.to_string(),
        })
    }
}
