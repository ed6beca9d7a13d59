/// Ansible dynamic inventory document.
///
/// Field order here is the key order in the emitted JSON.
use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Connection plugin used for every host and for the `all` group.
pub const CONNECTION_LOCAL: &str = "local";

/// Interpreter Ansible should use on managed hosts.
pub const PYTHON_INTERPRETER: &str = "/usr/bin/python3";

/// `ansible_host` override applied to every host.
pub const ANSIBLE_HOST_OVERRIDE: &str = "localhost";

/// Group that every host belongs to.
pub const GROUP_ALL: &str = "all";

/// Group for web-serving hosts. Currently mirrors `all`.
pub const GROUP_WEBSERVERS: &str = "webservers";

/// Full inventory as returned by `--list`.
///
/// Every host in `all.hosts` is also in `webservers.hosts` and has an entry in
/// `_meta.hostvars`. Use [`Inventory::add_host`] to keep the three in step.
/// The default value has no hosts, meaning nothing is provisioned.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Inventory {
    pub all: AllGroup,
    pub webservers: HostGroup,
    #[serde(rename = "_meta")]
    pub meta: Meta,
}

/// The `all` group: hosts plus group-wide variables.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AllGroup {
    pub hosts: Vec<String>,
    pub vars: GroupVars,
}

/// Variables applied to the whole `all` group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupVars {
    pub ansible_connection: String,
    pub ansible_python_interpreter: String,
}

/// A plain group with only a host list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HostGroup {
    pub hosts: Vec<String>,
}

/// `_meta` block carrying per-host variables, so Ansible skips `--host` calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Meta {
    pub hostvars: BTreeMap<String, HostVars>,
}

/// Per-host variables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostVars {
    /// Cloud instance identifier, passed through from Terraform as-is.
    pub instance_id: Value,
    pub ansible_host: String,
    pub ansible_connection: String,
}

impl HostVars {
    /// Host variables for `instance_id` with the fixed connection overrides.
    #[must_use]
    pub fn new(instance_id: Value) -> Self {
        Self {
            instance_id,
            ansible_host: ANSIBLE_HOST_OVERRIDE.to_owned(),
            ansible_connection: CONNECTION_LOCAL.to_owned(),
        }
    }
}

impl Default for GroupVars {
    fn default() -> Self {
        Self {
            ansible_connection: CONNECTION_LOCAL.to_owned(),
            ansible_python_interpreter: PYTHON_INTERPRETER.to_owned(),
        }
    }
}

impl Inventory {
    /// Add a host to `all`, then `webservers`, and record its variables.
    pub fn add_host(&mut self, address: String, vars: HostVars) {
        self.all.hosts.push(address.clone());
        self.webservers.hosts.push(address.clone());
        self.meta.hostvars.insert(address, vars);
    }

    /// Hosts in `all`, in insertion order.
    #[must_use]
    pub fn hosts(&self) -> &[String] {
        &self.all.hosts
    }

    /// Variables recorded for `address`, if it is in the inventory.
    #[must_use]
    pub fn host_vars(&self, address: &str) -> Option<&HostVars> {
        self.meta.hostvars.get(address)
    }

    /// Names of the groups `address` belongs to.
    #[must_use]
    pub fn groups_of(&self, address: &str) -> Vec<&'static str> {
        let mut groups = Vec::new();
        if self.all.hosts.iter().any(|h| h == address) {
            groups.push(GROUP_ALL);
        }
        if self.webservers.hosts.iter().any(|h| h == address) {
            groups.push(GROUP_WEBSERVERS);
        }
        groups
    }
}
