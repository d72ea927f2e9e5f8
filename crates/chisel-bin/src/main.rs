//! chisel entrypoint.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod menu;
mod session;
mod storage;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "chisel", version, about = "Terminal editor for small C files")]
struct Args {
    /// Open this file directly in the editor, skipping the menu.
    pub path: Option<PathBuf>,
    /// Configuration file path (overrides discovery of `chisel.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = init_logging();
    info!(target: "runtime", direct_open = args.path.is_some(), "startup");

    let config = chisel_config::load_from(args.config.clone())?;
    info!(
        target: "runtime.startup",
        max_lines = config.buffer_limits().max_lines,
        line_capacity = config.buffer_limits().line_capacity,
        history_depth = config.history_depth(),
        clipboard_capacity = config.clipboard_capacity(),
        config_override = args.config.is_some(),
        "bootstrap_complete"
    );

    match args.path {
        Some(path) => session::run(&path, &config),
        None => menu::run(&config),
    }
}

/// Logs go to `chisel.log` — the editor owns the terminal, so nothing may
/// write to stderr while a session runs. The guard must stay alive for the
/// process lifetime or buffered log lines are lost.
fn init_logging() -> WorkerGuard {
    let appender = tracing_appender::rolling::never(".", "chisel.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_env("CHISEL_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    guard
}
