/// The document printed by `terraform output -json`.
///
/// Terraform emits one record per declared output:
///
/// ```json
/// {"instance_id": {"sensitive": false, "type": "string", "value": "i-abc123"}}
/// ```
///
/// Only `value` is required here; `sensitive` and `type` are kept when present.
use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use super::TerraformError;

/// A single named Terraform output.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OutputValue {
    /// The output's value, any JSON type.
    pub value: Value,
    /// Whether Terraform marked the output as sensitive.
    #[serde(default)]
    pub sensitive: bool,
    /// Terraform's type description (a string or a nested type expression).
    #[serde(rename = "type", default)]
    pub value_type: Option<Value>,
}

/// All outputs of one `terraform output -json` call, keyed by output name.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ProvisioningOutput {
    outputs: BTreeMap<String, OutputValue>,
}

impl ProvisioningOutput {
    /// Look up an output record by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OutputValue> {
        self.outputs.get(name)
    }

    /// Look up just the `value` of an output.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.get(name).map(|o| &o.value)
    }

    /// Output names in sorted order.
    #[must_use]
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.outputs.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}

/// Parse raw stdout from `terraform output -json`.
///
/// # Errors
///
/// Returns `TerraformError::Parse` if the bytes are not a JSON object of
/// output records, or a record lacks its `value` field.
pub fn parse_outputs(bytes: &[u8]) -> Result<ProvisioningOutput, TerraformError> {
    Ok(serde_json::from_slice(bytes)?)
}
