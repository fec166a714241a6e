use anyhow::{Context, Result};
use clap::Args;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use copia_bio::classify::occurrences;
use copia_bio::formats::table::parse_table;
use copia_core::TaxonId;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Classification table (one column per sample, one taxon id per row)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

pub fn run(args: StatsArgs) -> Result<()> {
    let dataset = parse_table(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Sample").add_attribute(Attribute::Bold),
        Cell::new("Reads").add_attribute(Attribute::Bold),
        Cell::new("Classified").add_attribute(Attribute::Bold),
        Cell::new("Unclassified").add_attribute(Attribute::Bold),
        Cell::new("Distinct taxa").add_attribute(Attribute::Bold),
        Cell::new("Singletons").add_attribute(Attribute::Bold),
    ]);

    for (index, name) in dataset.sample_names().iter().enumerate() {
        let column = dataset.column(index);
        let counts = occurrences(column);

        let unclassified = counts.get(&TaxonId::UNCLASSIFIED).copied().unwrap_or(0);
        let classified = column.len() - unclassified;
        let distinct = counts.keys().filter(|t| !t.is_unclassified()).count();
        let singletons = counts
            .iter()
            .filter(|(taxon, &count)| !taxon.is_unclassified() && count == 1)
            .count();
        let unclassified_pct = if column.is_empty() {
            0.0
        } else {
            (unclassified as f64 / column.len() as f64) * 100.0
        };

        table.add_row(vec![
            Cell::new(name),
            Cell::new(column.len()),
            Cell::new(classified),
            Cell::new(format!("{} ({:.1}%)", unclassified, unclassified_pct)),
            Cell::new(distinct),
            Cell::new(singletons),
        ]);
    }

    println!("{table}");
    Ok(())
}
