/// Command dispatch: routes the resolved `Mode` to its implementation.
pub mod host;
pub mod list;

use std::io::Write;

use crate::cli::{Mode, OutputCtx};
use crate::inventory::InventoryError;
use crate::terraform::TerraformConfig;

/// Dispatch a resolved `Mode` to its handler, writing the result to `out`.
///
/// # Errors
///
/// Returns `InventoryError` on any command failure. Nothing is written to
/// `out` in that case.
pub fn dispatch<W: Write>(
    mode: &Mode,
    terraform: &TerraformConfig,
    ctx: &OutputCtx,
    out: &mut W,
) -> Result<(), InventoryError> {
    match mode {
        Mode::List => list::run(terraform, ctx, out),
        Mode::Host(name) => host::run(name, ctx, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_mode_ignores_terraform_state() {
        let config = TerraformConfig::new("/nonexistent/terraform", "/nonexistent/dir");
        let mut out = Vec::new();
        dispatch(
            &Mode::Host("anything".to_owned()),
            &config,
            &OutputCtx::default(),
            &mut out,
        )
        .unwrap();
        assert_eq!(out, b"{}\n");
    }

    #[test]
    fn test_list_mode_failure_writes_nothing() {
        let config = TerraformConfig::new("/nonexistent/terraform", "/nonexistent/dir");
        let mut out = Vec::new();
        let err = dispatch(&Mode::List, &config, &OutputCtx::default(), &mut out).unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert!(out.is_empty());
    }
}
