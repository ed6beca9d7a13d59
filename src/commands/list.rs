/// `--list` command: the full inventory built from Terraform outputs.
use std::io::Write;

use tracing::info;

use crate::cli::OutputCtx;
use crate::cli::output::render_inventory;
use crate::inventory::{InventoryError, build_inventory};
use crate::terraform::{TerraformConfig, fetch_outputs};

/// Run `tf-inventory --list`.
///
/// The inventory is fully rendered before anything is written, so a failure
/// leaves `out` untouched.
///
/// # Errors
///
/// Returns `InventoryError` if Terraform cannot be run, exits non-zero, or
/// prints something that is not an output document.
pub fn run<W: Write>(
    terraform: &TerraformConfig,
    ctx: &OutputCtx,
    out: &mut W,
) -> Result<(), InventoryError> {
    let outputs = fetch_outputs(terraform)?;
    let inventory = build_inventory(&outputs);
    info!(hosts = inventory.hosts().len(), "Built inventory");

    let rendered = render_inventory(&inventory, ctx)?;
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}
