/// Terraform layer: running `terraform output -json` and parsing its document.
pub mod command;
pub mod errors;
pub mod output;
#[cfg(all(test, unix))]
pub(crate) mod test_support;

pub use command::{DEFAULT_TERRAFORM_BIN, DEFAULT_TERRAFORM_DIR, TerraformConfig, fetch_outputs};
pub use errors::TerraformError;
pub use output::{ProvisioningOutput, parse_outputs};
