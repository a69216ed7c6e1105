// Rust guideline compliant 2026-10-16

//! Tasklist HTTP server entry point.

use clap::Parser;
use std::path::PathBuf;
use tasklist_server::{run, ServerOptions};

/// Serve a task list over HTTP.
#[derive(Debug, Parser)]
#[command(name = "tasklist-server", version, about)]
struct Cli {
    /// Data directory holding config.toml and the task file.
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Socket address to bind, e.g. 0.0.0.0:8080.
    #[arg(long, value_name = "ADDR")]
    bind: Option<String>,

    /// Write logs to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(ServerOptions {
        data_dir: cli.data_dir,
        bind: cli.bind,
        log_file: cli.log_file,
    })?;
    Ok(())
}
