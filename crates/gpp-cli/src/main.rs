use std::io;
use std::process::ExitCode;

use clap::Parser;
use gpp_cli::{load_config, Cli};
use tracing::{error, warn, Level};
use tracing_subscriber::FmtSubscriber;

mod commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging is not set up yet, so config errors go straight to stderr.
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::FAILURE;
        }
    };
    let config_level = config.logging.level();
    let level = cli
        .log_level
        .or_else(|| config_level.as_ref().ok().copied())
        .unwrap_or(Level::INFO);

    // stdout carries command output (tables, JSON); logs go to stderr.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    if let (None, Err(err)) = (cli.log_level, &config_level) {
        warn!("{err:#}; falling back to {level}");
    }

    commands::util::configure_threads(&cli.threads);

    match commands::dispatch(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
