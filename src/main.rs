//! CLI entry point for the tile mosaic generator

use clap::Parser;
use clap::error::ErrorKind as ClapErrorKind;
use std::process::ExitCode;
use tilemosaic::io::cli::{Cli, MosaicRunner, failure_report};
use tilemosaic::io::configuration::{DEFAULT_LOG_FILTER, USAGE_MESSAGE};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// The single reporting boundary: every failure ends up here
#[allow(clippy::print_stderr, clippy::print_stdout)]
fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion) => {
            return match e.print() {
                Ok(()) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            };
        }
        Err(e) => {
            eprintln!("{USAGE_MESSAGE}\n- Problem: {} -", e.render().to_string().trim_end());
            return ExitCode::FAILURE;
        }
    };

    match MosaicRunner::new(cli).run() {
        Ok(output) => {
            println!("Mosaic written to: {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", failure_report(&e));
            ExitCode::FAILURE
        }
    }
}
