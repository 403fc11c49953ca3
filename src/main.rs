//! Lookback - browse, filter and group web browsing history
//!
//! This is the main entry point for the Lookback command-line application.
//! It initializes logging and handles errors gracefully.

use lookback::cli;
use lookback::error::Result;
use std::process;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    // RUST_LOG wins; otherwise fall back to the configured level
    let fallback = cli::configured_log_level();
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    cli::run()
}
