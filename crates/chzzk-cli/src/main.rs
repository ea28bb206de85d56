//! Interactive console reporter for Chzzk live broadcasts
//!
//! Presents a numeric menu over the `chzzk-core` operations: top-N live
//! listings, category ranking, a random recommendation and CSV export.

use std::path::PathBuf;

use anyhow::Context;
use chzzk_core::{ChzzkReporter, ClientConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod console;
mod menu;
mod render;

/// Interactive console reporter for Chzzk live broadcasts
#[derive(Parser, Debug)]
#[command(name = "chzzk-reporter", version, about)]
struct Args {
    /// Directory CSV exports are written to
    #[arg(long, default_value = ".")]
    export_dir: PathBuf,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never interleave with the rendered menu
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let reporter = ChzzkReporter::with_config(ClientConfig {
        timeout_secs: args.timeout_secs,
        ..ClientConfig::default()
    })
    .context("failed to initialize the HTTP client")?;

    let mut console = console::StdConsole::new();
    menu::run(&reporter, &mut console, &args.export_dir)
        .await
        .context("console I/O failed")?;

    Ok(())
}
