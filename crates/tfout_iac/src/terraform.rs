//! Terraform `output` subcommand execution.

use std::ffi::OsString;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use tfout_runner::{CommandRunner, CommandSpec};

use crate::error::{IacError, IacResult};
use crate::outputs::Outputs;
use crate::report::Reporter;

/// Arguments always passed to `terraform output`.
pub const OUTPUT_ARGS: [&str; 3] = ["output", "-no-color", "-json"];

/// Build the `-state <path>` arguments for an optional state file.
///
/// Fails when a state file is given but does not exist.
pub fn state_args(state_file: Option<&Path>) -> IacResult<Vec<OsString>> {
    match state_file {
        None => Ok(Vec::new()),
        Some(path) if path.exists() => Ok(vec![
            OsString::from("-state"),
            path.as_os_str().to_owned(),
        ]),
        Some(path) => Err(IacError::StateFileNotFound(path.to_path_buf())),
    }
}

/// Build the full `terraform output` command.
pub fn output_command(
    binary: &Path,
    project_path: Option<&Path>,
    state_file: Option<&Path>,
) -> IacResult<CommandSpec> {
    let spec = CommandSpec::new(binary)
        .args(OUTPUT_ARGS)
        .args(state_args(state_file)?)
        .maybe_cwd(project_path);
    Ok(spec)
}

/// Runs `terraform output` and interprets its result.
pub struct TerraformOutputs {
    runner: Arc<dyn CommandRunner>,
}

impl TerraformOutputs {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Fetch all outputs of the stack in `project_path`.
    ///
    /// Exit code 1 means no outputs are defined: a warning is recorded and an
    /// empty map returned. Any other non-zero exit is an error.
    pub async fn get_outputs(
        &self,
        binary: &Path,
        project_path: Option<&Path>,
        state_file: Option<&Path>,
        reporter: &mut Reporter,
    ) -> IacResult<Outputs> {
        let spec = output_command(binary, project_path, state_file)?;
        info!("Running terraform output in {:?}", project_path);
        debug!("Executing {}", spec.command_line());

        let result = self.runner.run(&spec).await?;

        match result.exit_code {
            0 => Ok(serde_json::from_str(&result.stdout)?),
            1 => {
                reporter.warn(format!(
                    "Could not get Terraform outputs. This usually means none have been defined.\nstdout: {}\nstderr: {}",
                    result.stdout, result.stderr
                ));
                Ok(Outputs::new())
            }
            exit_code => Err(IacError::OutputsFailed {
                exit_code,
                stdout: result.stdout,
                stderr: result.stderr,
                command: spec.command_line(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn test_state_args_absent() {
        assert!(state_args(None).unwrap().is_empty());
    }

    #[test]
    fn test_state_args_existing_file() {
        let state = NamedTempFile::new().unwrap();
        let args = state_args(Some(state.path())).unwrap();

        assert_eq!(
            args,
            vec![OsString::from("-state"), state.path().as_os_str().to_owned()]
        );
    }

    #[test]
    fn test_state_args_missing_file() {
        let err = state_args(Some(Path::new("/tmp/nonexistent.tfstate"))).unwrap_err();

        assert!(matches!(err, IacError::StateFileNotFound(_)));
        assert!(err.to_string().contains("/tmp/nonexistent.tfstate"));
    }

    #[test]
    fn test_output_command_shape() {
        let state = NamedTempFile::new().unwrap();
        let spec = output_command(
            Path::new("/usr/bin/terraform"),
            Some(Path::new("/srv/infra")),
            Some(state.path()),
        )
        .unwrap();

        assert_eq!(spec.program, PathBuf::from("/usr/bin/terraform"));
        let expected: Vec<OsString> = OUTPUT_ARGS
            .iter()
            .map(OsString::from)
            .chain([OsString::from("-state"), state.path().as_os_str().to_owned()])
            .collect();
        assert_eq!(spec.args, expected);
        assert_eq!(spec.cwd, Some(PathBuf::from("/srv/infra")));
    }

    #[cfg(unix)]
    #[test]
    fn test_state_args_keep_non_utf8_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::{OsStrExt, OsStringExt};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OsStr::from_bytes(b"prod-\xff.tfstate"));
        if std::fs::write(&path, "{}").is_err() {
            // Filesystem refuses non-UTF-8 names.
            return;
        }

        let args = state_args(Some(&path)).unwrap();
        assert_eq!(args[1].clone().into_vec(), path.as_os_str().as_bytes().to_vec());
    }

    #[test]
    fn test_output_command_without_state() {
        let spec = output_command(Path::new("terraform"), None, None).unwrap();

        assert_eq!(spec.command_line(), "terraform output -no-color -json");
        assert!(spec.cwd.is_none());
    }
}
