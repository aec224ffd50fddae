//! # phonekit CLI Entry Point
//!
//! Parses arguments, loads configuration, and dispatches to the command handlers.

use clap::Parser;
use phonekit_cli::{load_config, run, Cli};
use std::process::ExitCode;

fn init_tracing(default_filter: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // stdout carries command output
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    init_tracing(&config.logging.filter);
    tracing::debug!("phonekit v{}", env!("CARGO_PKG_VERSION"));

    let stdout = std::io::stdout();
    let ok = run(&cli, &config, &mut stdout.lock())?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
