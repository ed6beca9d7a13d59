/// Invoke the Terraform CLI and capture its output document.
use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, info};

use super::{ProvisioningOutput, TerraformError, parse_outputs};

/// Executable used when none is configured.
pub const DEFAULT_TERRAFORM_BIN: &str = "terraform";

/// Terraform working directory used when none is configured, relative to the
/// current directory.
pub const DEFAULT_TERRAFORM_DIR: &str = "terraform";

/// Where and how to run Terraform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerraformConfig {
    /// Terraform executable (name on `PATH` or explicit path).
    pub program: PathBuf,
    /// Directory holding the Terraform configuration and state.
    pub working_dir: PathBuf,
}

impl TerraformConfig {
    #[must_use]
    pub fn new(program: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            working_dir: working_dir.into(),
        }
    }
}

impl Default for TerraformConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TERRAFORM_BIN, DEFAULT_TERRAFORM_DIR)
    }
}

/// Run `terraform output -json` in the configured directory and parse the result.
///
/// Blocks until Terraform exits. No timeout and no retries.
///
/// # Errors
///
/// - `TerraformError::Spawn` if the process cannot be started.
/// - `TerraformError::Execution` if it exits non-zero (carries its stderr).
/// - `TerraformError::Parse` if stdout is not a valid output document.
pub fn fetch_outputs(config: &TerraformConfig) -> Result<ProvisioningOutput, TerraformError> {
    info!(
        program = %config.program.display(),
        dir = %config.working_dir.display(),
        "Running terraform output"
    );

    let output = Command::new(&config.program)
        .args(["output", "-json"])
        .current_dir(&config.working_dir)
        .output()
        .map_err(|source| TerraformError::Spawn {
            program: config.program.display().to_string(),
            dir: config.working_dir.display().to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(TerraformError::Execution {
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        });
    }

    let outputs = parse_outputs(&output.stdout)?;
    debug!(
        count = outputs.len(),
        names = ?outputs.names().collect::<Vec<_>>(),
        "Parsed terraform outputs"
    );
    Ok(outputs)
}
