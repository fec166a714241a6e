pub mod charts;
pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "copia",
    version,
    about = "Taxon accumulation curves from classifier output",
    long_about = "Copia estimates species-richness accumulation (rarefaction) curves from \
                  kaiju/kraken classification tables by repeatedly subsampling each sample \
                  at a ladder of fractions and counting the taxa that clear an occurrence \
                  threshold."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Number of threads to use (0 = all available)
    #[arg(short = 'j', long, default_value = "0", global = true)]
    pub threads: usize,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate an accumulation curve from a classification table
    Curve(commands::curve::CurveArgs),

    /// Summarize a classification table per sample
    Stats(commands::stats::StatsArgs),
}

/// Output format for curve results
#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Options: table, csv, json", s)),
        }
    }
}
