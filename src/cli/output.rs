/// Output formatting: pretty/compact JSON and table modes.
use std::io::Write;

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;
use serde_json::Value;

use super::args::{ErrorFormat, OutputFormat};
use crate::inventory::{Inventory, InventoryError};
use crate::types::ErrorOutput;

/// Output context passed to all formatters.
#[derive(Debug, Clone, Default)]
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(format: OutputFormat, no_header: bool) -> Self {
        Self { format, no_header }
    }
}

// --- Inventory ---

/// Render an inventory in the context's format, newline-terminated.
///
/// # Errors
///
/// Returns `InventoryError::Render` if serialization fails.
pub fn render_inventory(inventory: &Inventory, ctx: &OutputCtx) -> Result<String, InventoryError> {
    match ctx.format {
        OutputFormat::Json => to_json(inventory, true),
        OutputFormat::Compact => to_json(inventory, false),
        OutputFormat::Table => Ok(format!("{}\n", inventory_table(inventory, ctx))),
    }
}

fn inventory_table(inventory: &Inventory, ctx: &OutputCtx) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !ctx.no_header {
        table.set_header(["HOST", "GROUPS", "INSTANCE ID", "ANSIBLE HOST", "CONNECTION"]);
    }

    for host in inventory.hosts() {
        let groups = inventory.groups_of(host).join(",");
        let (instance_id, ansible_host, connection) = inventory
            .host_vars(host)
            .map_or_else(Default::default, |vars| {
                (
                    display_value(&vars.instance_id),
                    vars.ansible_host.clone(),
                    vars.ansible_connection.clone(),
                )
            });
        table.add_row([host.clone(), groups, instance_id, ansible_host, connection]);
    }

    table
}

/// Strings without quotes, anything else as JSON text.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// --- Host ---

/// Render the `--host` answer. Always an empty object, in every format.
///
/// # Errors
///
/// Returns `InventoryError::Render` if serialization fails.
pub fn render_host_vars(ctx: &OutputCtx) -> Result<String, InventoryError> {
    let empty = serde_json::Map::new();
    match ctx.format {
        OutputFormat::Json | OutputFormat::Table => to_json(&empty, true),
        OutputFormat::Compact => to_json(&empty, false),
    }
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: ErrorFormat) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match format {
        ErrorFormat::Json => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        ErrorFormat::Text => {
            let _ = writeln!(out, "Error: {}", err.error.message);
        }
    }
}

// --- Generic JSON helpers ---

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, InventoryError> {
    let mut s = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(InventoryError::Render)?;
    s.push('\n');
    Ok(s)
}
