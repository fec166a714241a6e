use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::{Cli, Commands};
use copia_core::CopiaError;

fn main() {
    // Initialize logging with COPIA_LOG environment variable support
    let log_level = std::env::var("COPIA_LOG").unwrap_or_else(|_| "warn".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);

        // Use appropriate exit codes based on error type
        let exit_code = match e.downcast_ref::<CopiaError>() {
            Some(CopiaError::Config(_)) => 2,
            Some(CopiaError::Io(_)) => 3,
            Some(CopiaError::Parse(_)) => 4,
            Some(CopiaError::InvalidArgument(_)) => 5,
            Some(CopiaError::InsufficientData(_)) => 6,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Configure thread pool
    let num_threads = if cli.threads == 0 {
        num_cpus::get()
    } else {
        cli.threads
    };

    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .expect("Failed to initialize thread pool");

    if cli.verbose > 0 {
        eprintln!("Using {} threads", num_threads);
    }

    match cli.command {
        Commands::Curve(args) => crate::cli::commands::curve::run(args),
        Commands::Stats(args) => crate::cli::commands::stats::run(args),
    }
}
