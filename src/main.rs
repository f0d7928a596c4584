use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use neopilot_env::cli::{Cli, Commands, SnapshotArgs};
use neopilot_env::command::{run_check, run_provider};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Some(Commands::Check { snapshot, json }) => run_check(&snapshot, json),
        Some(Commands::Provider { snapshot }) => run_provider(&snapshot),
        // No command specified, check the process environment
        None => run_check(&SnapshotArgs::default(), false),
    }
}
