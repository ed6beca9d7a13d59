/// Top-level errors for an inventory invocation.
use clap::error::ErrorKind;
use thiserror::Error;

use crate::terraform::TerraformError;

/// Program name shown in the usage line.
const PROGRAM: &str = env!("CARGO_PKG_NAME");

/// One-line usage summary for the two protocol modes.
#[must_use]
pub fn usage_line() -> String {
    format!("Usage: {PROGRAM} --list or {PROGRAM} --host <hostname>")
}

/// Everything that can stop an invocation. All variants are terminal.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The arguments match neither `--list` nor `--host <hostname>`.
    #[error("{detail}\n{}", usage_line())]
    Usage {
        /// What was wrong with the arguments.
        detail: String,
    },

    /// Retrieving Terraform outputs failed.
    #[error(transparent)]
    Terraform(#[from] TerraformError),

    /// The inventory could not be serialized.
    #[error("Failed to serialize inventory: {0}")]
    Render(#[source] serde_json::Error),

    /// Writing the result to stdout failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl InventoryError {
    /// Return the CLI exit code for this error. Every failure exits 1.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage { .. } | Self::Terraform(_) | Self::Render(_) | Self::Io(_) => 1,
        }
    }

    /// Machine-readable error code (snake_case).
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usage { .. } => "usage_error",
            Self::Terraform(TerraformError::Spawn { .. } | TerraformError::Execution { .. }) => {
                "execution_error"
            }
            Self::Terraform(TerraformError::Parse(_)) => "parse_error",
            Self::Render(_) | Self::Io(_) => "output_error",
        }
    }
}

/// Map clap's parse failures onto a usage error.
///
/// `--help` and `--version` are not protocol calls either: their full text is
/// kept as the detail so it still reaches stderr. For real parse failures only
/// clap's first line is kept.
impl From<clap::Error> for InventoryError {
    fn from(err: clap::Error) -> Self {
        let rendered = err.to_string();
        let detail = match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => rendered.trim_end().to_owned(),
            _ => rendered
                .lines()
                .next()
                .unwrap_or_default()
                .trim_start_matches("error: ")
                .to_owned(),
        };
        Self::Usage { detail }
    }
}
