//! Curve export and terminal summary

use anyhow::Result;
use colored::*;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use copia_core::{CurveConfig, CurveTable};
use std::io::Write;
use std::path::Path;

/// Write the curve as CSV (header: sample,fraction,mean,dispersion) to a
/// file, or to stdout when no path is given.
pub fn write_csv(table: &CurveTable, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let mut writer = csv::Writer::from_path(path)?;
            write_csv_records(&mut writer, table)
        }
        None => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            write_csv_records(&mut writer, table)
        }
    }
}

fn write_csv_records<W: Write>(writer: &mut csv::Writer<W>, table: &CurveTable) -> Result<()> {
    for point in table.points() {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the curve as a JSON array of points.
pub fn write_json(table: &CurveTable, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            serde_json::to_writer_pretty(file, table.points())?;
        }
        None => {
            let stdout = std::io::stdout();
            serde_json::to_writer_pretty(stdout.lock(), table.points())?;
            println!();
        }
    }
    Ok(())
}

/// Print the run parameters and the full curve table.
pub fn print_summary(table: &CurveTable, config: &CurveConfig) {
    println!("{}", "Accumulation curve".bold());
    println!(
        "  {}",
        format!(
            "threshold: {}  repeats: {}  replacement: {}  dispersion: {}",
            config.threshold,
            config.repeats,
            if config.with_replacement {
                "with"
            } else {
                "without"
            },
            config.dispersion
        )
        .dimmed()
    );
    if let Some(seed) = config.seed {
        println!("  {}", format!("seed: {}", seed).dimmed());
    }
    println!();

    let mut summary = Table::new();
    summary
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    summary.set_header(vec![
        Cell::new("Sample").add_attribute(Attribute::Bold),
        Cell::new("Fraction").add_attribute(Attribute::Bold),
        Cell::new("Mean taxa").add_attribute(Attribute::Bold),
        Cell::new("Dispersion").add_attribute(Attribute::Bold),
    ]);

    for point in table.points() {
        summary.add_row(vec![
            Cell::new(&point.sample),
            Cell::new(format!("{:.2}", point.fraction)),
            Cell::new(format!("{:.2}", point.mean)),
            Cell::new(format!("{:.2}", point.dispersion)),
        ]);
    }

    println!("{summary}");
}
