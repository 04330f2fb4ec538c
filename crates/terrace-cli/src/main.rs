//! terrace CLI entry point.

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use terrace_cli::Args;

fn main() {
    let args = Args::parse();
    init_tracing(&args.log_level);

    tracing::info!(version = terrace::VERSION, "starting terrace");
    tracing::debug!(?args, "parsed arguments");

    if let Err(err) = terrace_cli::run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

/// `RUST_LOG` wins over `--log-level` when set.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| {
            eprintln!("Invalid log level: {log_level}. Using 'warn' instead.");
            EnvFilter::new("warn")
        });
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
