//! Process-level checks of the Ansible inventory protocol.
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;

/// The binary with a clean configuration environment.
fn tf_inventory() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tf-inventory"));
    for var in [
        "TF_INVENTORY_DIR",
        "TF_INVENTORY_TERRAFORM_BIN",
        "TF_INVENTORY_OUTPUT",
        "TF_INVENTORY_ERROR_FORMAT",
        "TF_INVENTORY_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// `sh output -json` runs the `output` script in the working directory,
/// which stands in for `terraform output -json`.
#[cfg(unix)]
fn with_terraform(script: &str) -> (TempDir, Command) {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("output"), script).unwrap();
    let mut cmd = tf_inventory();
    cmd.env("TF_INVENTORY_TERRAFORM_BIN", "sh")
        .env("TF_INVENTORY_DIR", dir.path());
    (dir, cmd)
}

#[test]
fn no_arguments_exits_1_with_usage() {
    tf_inventory()
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--list or"));
}

#[test]
fn unknown_argument_exits_1_with_usage() {
    tf_inventory()
        .arg("--inventory")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--inventory"))
        .stderr(predicate::str::contains("--host <hostname>"));
}

#[test]
fn help_goes_to_stderr_and_exits_1() {
    for flag in ["--help", "--version"] {
        tf_inventory()
            .arg(flag)
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("tf-inventory"));
    }
}

#[test]
fn host_prints_empty_object_without_terraform() {
    tf_inventory()
        .args(["--host", "anything"])
        .env("TF_INVENTORY_TERRAFORM_BIN", "/nonexistent/terraform")
        .assert()
        .success()
        .stdout("{}\n");
}

#[test]
fn host_accepts_hyphenated_names() {
    for name in ["-web01", "--list"] {
        tf_inventory()
            .args(["--host", name])
            .assert()
            .success()
            .stdout("{}\n");
    }
}

#[test]
fn list_with_missing_terraform_exits_1() {
    tf_inventory()
        .arg("--list")
        .env("TF_INVENTORY_TERRAFORM_BIN", "/nonexistent/terraform")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error: "));
}

#[cfg(unix)]
#[test]
fn list_prints_inventory() {
    let (_dir, mut cmd) = with_terraform(
        "echo '{\"instance_private_ip\": {\"value\": \"10.0.1.5\"}, \"instance_id\": {\"value\": \"i-abc123\"}}'\n",
    );
    let output = cmd.arg("--list").assert().success().get_output().clone();

    let inventory: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(inventory["all"]["hosts"], json!(["10.0.1.5"]));
    assert_eq!(inventory["webservers"]["hosts"], json!(["10.0.1.5"]));
    assert_eq!(
        inventory["_meta"]["hostvars"]["10.0.1.5"],
        json!({
            "instance_id": "i-abc123",
            "ansible_host": "localhost",
            "ansible_connection": "local"
        })
    );
}

#[cfg(unix)]
#[test]
fn list_ignores_output_format_from_environment() {
    let (_dir, mut cmd) = with_terraform("echo '{}'\n");
    let output = cmd
        .arg("--list")
        .env("TF_INVENTORY_OUTPUT", "table")
        .assert()
        .success()
        .get_output()
        .clone();

    let inventory: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(inventory["all"]["hosts"], json!([]));
}

#[cfg(unix)]
#[test]
fn list_terraform_failure_exits_1_with_stderr() {
    let (_dir, mut cmd) = with_terraform("echo 'Error: No state file' >&2\nexit 1\n");
    cmd.arg("--list")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No state file"));
}

#[cfg(unix)]
#[test]
fn list_malformed_output_exits_1() {
    let (_dir, mut cmd) = with_terraform("echo 'not json'\n");
    cmd.arg("--list")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error parsing terraform output"));
}

#[cfg(unix)]
#[test]
fn json_error_format_emits_envelope() {
    let (_dir, mut cmd) = with_terraform("exit 2\n");
    let output = cmd
        .args(["--list", "--error-format", "json"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .get_output()
        .clone();

    let envelope: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(envelope["ok"], json!(false));
    assert_eq!(envelope["error"]["code"], json!("execution_error"));
}
