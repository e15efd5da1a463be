//! pwgen — an interactive random password generator.
//!
//! This file is the application entry point. It is intentionally kept small
//! and is responsible only for:
//!
//! - Parsing CLI arguments
//! - Setting up logging
//! - Dispatching subcommands and returning the exit status
//!
//! Password composition lives in `generator.rs`, the character tables in
//! `charset.rs`, and all terminal and clipboard helpers in `ui.rs`.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod charset;
mod cli;
mod commands;
mod error;
mod generator;
mod ui;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    // Diagnostics share the terminal with the prompt, so keep them on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("pwgen={level}")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose);
    commands::dispatch(cli)
}
