/// Scripted stand-in for the Terraform CLI.
use tempfile::TempDir;

use super::TerraformConfig;

/// `sh output -json` executes a script named `output` from the working
/// directory with `-json` as `$1`, so pointing the config at `sh` and a
/// directory holding that script fakes `terraform output -json`.
pub(crate) fn fake_terraform(script: &str) -> (TempDir, TerraformConfig) {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("output"), script).unwrap();
    let config = TerraformConfig::new("sh", dir.path());
    (dir, config)
}
