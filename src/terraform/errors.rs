/// Errors from invoking Terraform and reading its output.
use thiserror::Error;

/// Typed errors from the Terraform layer.
#[derive(Debug, Error)]
pub enum TerraformError {
    /// The Terraform process could not be started at all.
    #[error("Failed to run '{program}' in '{dir}': {source}")]
    Spawn {
        /// Executable that was launched.
        program: String,
        /// Working directory the process was started in.
        dir: String,
        /// Underlying OS error (binary missing, directory missing, ...).
        #[source]
        source: std::io::Error,
    },

    /// Terraform ran but exited unsuccessfully.
    #[error("Error running terraform output ({status}): {stderr}")]
    Execution {
        /// Rendered exit status, e.g. "exit status: 1".
        status: String,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// Terraform exited successfully but stdout was not a valid output document.
    #[error("Error parsing terraform output: {0}")]
    Parse(#[from] serde_json::Error),
}
