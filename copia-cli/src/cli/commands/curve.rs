use crate::cli::{charts, output, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use copia_bio::formats::table::parse_table;
use copia_bio::CurveBuilder;
use copia_core::config::{load_config, CurveConfig, DispersionPolicy};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub struct CurveArgs {
    /// Classification table (one column per sample, one taxon id per row;
    /// tab-delimited unless the extension is .csv)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Comma separated sample fractions in [0, 1]
    #[arg(short = 'f', long, value_delimiter = ',', value_name = "FRACTIONS")]
    pub fractions: Option<Vec<f64>>,

    /// Minimum occurrences in a subsample to count a taxon as present
    #[arg(short = 't', long)]
    pub threshold: Option<usize>,

    /// Number of simulation repeats per fraction
    #[arg(short = 'r', long)]
    pub repeats: Option<usize>,

    /// Subsample with replacement instead of without
    #[arg(long)]
    pub with_replacement: bool,

    /// Dispersion policy: none, sd, rel:<scale>, pct:<percentile>
    #[arg(short = 'd', long)]
    pub dispersion: Option<DispersionPolicy>,

    /// Seed for the random source (reproducible curves)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Configuration file (TOML); explicit flags override its values
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write results to a file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (table, csv, json)
    #[arg(long, default_value = "table")]
    pub format: OutputFormat,

    /// Skip the terminal chart
    #[arg(long)]
    pub no_chart: bool,

    /// Suppress the progress bar
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

pub fn run(args: CurveArgs) -> Result<()> {
    let config = resolve_config(&args)?;

    let dataset = parse_table(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    info!(
        samples = dataset.n_samples(),
        rows = dataset.n_rows(),
        "loaded classification table"
    );

    let builder = CurveBuilder::new(config);
    let table = builder.build_with_progress(&dataset, !args.quiet)?;

    match args.format {
        OutputFormat::Csv => output::write_csv(&table, args.output.as_deref())?,
        OutputFormat::Json => output::write_json(&table, args.output.as_deref())?,
        OutputFormat::Table => {
            output::print_summary(&table, builder.config());
            if !args.no_chart {
                println!();
                print!("{}", charts::render_curve(&table));
            }
            // table view plus --output still persists the data as CSV
            if let Some(path) = &args.output {
                output::write_csv(&table, Some(path))?;
                println!(
                    "{} Results written to {}",
                    "✓".green().bold(),
                    path.display()
                );
            }
        }
    }

    Ok(())
}

/// Merge the optional TOML config with explicit flags; flags win.
fn resolve_config(args: &CurveArgs) -> Result<CurveConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => CurveConfig::default(),
    };

    if let Some(fractions) = &args.fractions {
        config.fractions = fractions.clone();
    }
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    if let Some(repeats) = args.repeats {
        config.repeats = repeats;
    }
    if args.with_replacement {
        config.with_replacement = true;
    }
    if let Some(dispersion) = &args.dispersion {
        config.dispersion = dispersion.clone();
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    Ok(config)
}
