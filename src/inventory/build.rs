/// Turn Terraform outputs into an Ansible inventory.
use serde_json::Value;
use tracing::{debug, warn};

use super::model::{HostVars, Inventory};
use crate::terraform::ProvisioningOutput;

/// Terraform output holding the host's address.
pub const PRIVATE_IP_OUTPUT: &str = "instance_private_ip";

/// Terraform output holding the cloud instance identifier.
pub const INSTANCE_ID_OUTPUT: &str = "instance_id";

/// Instance id recorded when Terraform does not provide one.
pub const UNKNOWN_INSTANCE_ID: &str = "unknown";

/// Build the inventory for the single host described by `outputs`.
///
/// A missing `instance_private_ip` output is not an error: it means nothing is
/// provisioned, and the result has empty groups.
#[must_use]
pub fn build_inventory(outputs: &ProvisioningOutput) -> Inventory {
    let mut inventory = Inventory::default();
    if outputs.is_empty() {
        debug!("Terraform reported no outputs");
    }

    let Some(ip) = outputs.get(PRIVATE_IP_OUTPUT) else {
        warn!(
            output = PRIVATE_IP_OUTPUT,
            "Terraform output not found; emitting empty inventory"
        );
        return inventory;
    };
    if ip.sensitive {
        warn!(
            output = PRIVATE_IP_OUTPUT,
            "Terraform output is marked sensitive; its value is written to the inventory"
        );
    }

    let address = host_address(&ip.value);
    let instance_id = outputs
        .value(INSTANCE_ID_OUTPUT)
        .cloned()
        .unwrap_or_else(|| Value::from(UNKNOWN_INSTANCE_ID));

    debug!(
        host = %address,
        instance_id = %instance_id,
        value_type = ?ip.value_type,
        "Adding host"
    );
    inventory.add_host(address, HostVars::new(instance_id));
    inventory
}

/// Host address from an output value: strings verbatim, anything else as JSON text.
fn host_address(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
