//! kaiju/kraken classification table parsing
//!
//! A classification table is a delimited text file with a header row of
//! sample names and one non-negative integer taxon id per cell, one read
//! per row. `0` means unclassified.

use copia_core::{CopiaError, CopiaResult, Dataset, TaxonId};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Parse a classification table from a file.
///
/// Tab-delimited unless the file extension is `.csv`.
pub fn parse_table<P: AsRef<Path>>(path: P) -> CopiaResult<Dataset> {
    let path = path.as_ref();
    let delimiter = match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => b',',
        _ => b'\t',
    };
    let file = File::open(path)?;
    parse_table_reader(file, delimiter)
}

/// Parse a classification table from any reader with an explicit delimiter.
pub fn parse_table_reader<R: Read>(reader: R, delimiter: u8) -> CopiaResult<Dataset> {
    // flexible so ragged rows reach our own length check and error message
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| CopiaError::Parse(format!("invalid header row: {}", e)))?;
    let samples: Vec<String> = headers.iter().map(|name| name.to_string()).collect();
    if samples.is_empty() || samples.iter().all(|name| name.is_empty()) {
        return Err(CopiaError::Parse(
            "table has no sample columns".to_string(),
        ));
    }

    let mut columns: Vec<Vec<TaxonId>> = vec![Vec::new(); samples.len()];
    for (index, record) in reader.records().enumerate() {
        // header is line 1, first record is line 2
        let line = index + 2;
        let record = record.map_err(|e| CopiaError::Parse(format!("line {}: {}", line, e)))?;
        if record.len() != samples.len() {
            return Err(CopiaError::Parse(format!(
                "line {}: expected {} fields, found {}",
                line,
                samples.len(),
                record.len()
            )));
        }
        for (column, field) in record.iter().enumerate() {
            let id: u32 = field.parse().map_err(|_| {
                CopiaError::Parse(format!(
                    "line {}, sample '{}': invalid taxon id '{}'",
                    line, samples[column], field
                ))
            })?;
            columns[column].push(TaxonId::new(id));
        }
    }

    if columns[0].is_empty() {
        return Err(CopiaError::Parse("table has no data rows".to_string()));
    }

    debug!(
        samples = samples.len(),
        rows = columns[0].len(),
        "parsed classification table"
    );
    Dataset::new(samples, columns)
}
