/// `--host` command: per-host variables for one host.
use std::io::Write;

use tracing::debug;

use crate::cli::OutputCtx;
use crate::cli::output::render_host_vars;
use crate::inventory::InventoryError;

/// Run `tf-inventory --host <name>`.
///
/// Host variables are already delivered under `_meta.hostvars` by `--list`,
/// so Ansible never needs anything here; the answer is always `{}`.
///
/// # Errors
///
/// Returns `InventoryError::Io` if stdout cannot be written.
pub fn run<W: Write>(host: &str, ctx: &OutputCtx, out: &mut W) -> Result<(), InventoryError> {
    debug!(host, "Host vars requested; served via _meta");
    let rendered = render_host_vars(ctx)?;
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}
