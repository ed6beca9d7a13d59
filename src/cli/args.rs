/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Parser, ValueEnum};

use crate::inventory::InventoryError;
use crate::terraform::{DEFAULT_TERRAFORM_BIN, DEFAULT_TERRAFORM_DIR, TerraformConfig};

/// tf-inventory — Ansible dynamic inventory from Terraform outputs.
#[derive(Debug, Parser)]
#[command(
    name = "tf-inventory",
    about = "Ansible dynamic inventory built from `terraform output -json`",
    version,
    group(ArgGroup::new("mode").args(["list", "host"]))
)]
pub struct Cli {
    /// Print the full inventory, including per-host variables under `_meta`.
    #[arg(long)]
    pub list: bool,

    /// Print variables for one host. Always `{}`: they are already in `--list`.
    /// The name is taken verbatim, even when it starts with `-`.
    #[arg(long, value_name = "HOSTNAME", allow_hyphen_values = true)]
    pub host: Option<String>,

    /// Directory to run `terraform output` in.
    #[arg(
        long,
        env = "TF_INVENTORY_DIR",
        value_name = "DIR",
        default_value = DEFAULT_TERRAFORM_DIR
    )]
    pub terraform_dir: PathBuf,

    /// Terraform executable.
    #[arg(
        long,
        env = "TF_INVENTORY_TERRAFORM_BIN",
        value_name = "PATH",
        default_value = DEFAULT_TERRAFORM_BIN
    )]
    pub terraform_bin: PathBuf,

    /// Output format for `--list`. Only the flag selects it, so the
    /// environment Ansible runs in cannot change the protocol answer.
    #[arg(long, value_name = "FORMAT", default_value = "json")]
    pub output: OutputFormat,

    /// Omit table headers.
    #[arg(long)]
    pub no_header: bool,

    /// Format of error reports on stderr.
    #[arg(
        long,
        env = "TF_INVENTORY_ERROR_FORMAT",
        value_name = "FORMAT",
        default_value = "text"
    )]
    pub error_format: ErrorFormat,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    /// `TF_INVENTORY_LOG` overrides this with a full filter directive.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Indented JSON, as Ansible expects.
    #[default]
    Json,
    /// Single-line JSON.
    Compact,
    /// Aligned host table (human-readable).
    Table,
}

/// Error report variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ErrorFormat {
    /// `Error: <message>`.
    #[default]
    Text,
    /// JSON envelope with a machine-readable code.
    Json,
}

/// The protocol call Ansible is making.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// `--list`: emit the whole inventory.
    List,
    /// `--host <name>`: emit that host's variables.
    Host(String),
}

impl Cli {
    /// Resolve which protocol call this invocation is.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::Usage` unless exactly one of `--list` and
    /// `--host` was given.
    pub fn mode(&self) -> Result<Mode, InventoryError> {
        match (self.list, &self.host) {
            (true, None) => Ok(Mode::List),
            (false, Some(host)) => Ok(Mode::Host(host.clone())),
            _ => Err(InventoryError::Usage {
                detail: "expected exactly one of --list or --host <hostname>".to_owned(),
            }),
        }
    }

    /// Terraform settings from `--terraform-bin` / `--terraform-dir`.
    #[must_use]
    pub fn terraform_config(&self) -> TerraformConfig {
        TerraformConfig::new(&self.terraform_bin, &self.terraform_dir)
    }
}
