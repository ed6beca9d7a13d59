#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! tf-inventory — Ansible dynamic inventory built from Terraform outputs.

mod cli;
mod commands;
mod inventory;
mod terraform;
mod types;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{Cli, ErrorFormat, OutputCtx, write_error};
use inventory::InventoryError;
use types::ErrorOutput;

/// Environment variable holding a full `tracing` filter directive.
const LOG_ENV: &str = "TF_INVENTORY_LOG";

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => fail(&InventoryError::from(err), ErrorFormat::Text),
    };

    init_tracing(cli.verbose);

    let ctx = OutputCtx::new(cli.output, cli.no_header);
    let result = cli.mode().and_then(|mode| {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        commands::dispatch(&mode, &cli.terraform_config(), &ctx, &mut out)
    });

    if let Err(err) = result {
        fail(&err, cli.error_format);
    }
}

fn fail(err: &InventoryError, format: ErrorFormat) -> ! {
    debug!(code = err.code(), "Invocation failed");
    write_error(&ErrorOutput::from_inventory_error(err), format);
    std::process::exit(err.exit_code());
}

/// Send logs to stderr; stdout is reserved for the inventory document.
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
