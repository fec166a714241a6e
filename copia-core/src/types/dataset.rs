//! Column-oriented classification dataset
//!
//! One column per biological sample, one taxon id per row. Rows are
//! positionally independent; the table is read-only once constructed.

use crate::error::{CopiaError, CopiaResult};
use crate::types::TaxonId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    samples: Vec<String>,
    columns: Vec<Vec<TaxonId>>,
    rows: usize,
}

impl Dataset {
    /// Build a dataset from sample names and their columns.
    ///
    /// Every column must have the same row count, and there must be exactly
    /// one name per column.
    pub fn new(samples: Vec<String>, columns: Vec<Vec<TaxonId>>) -> CopiaResult<Self> {
        if samples.len() != columns.len() {
            return Err(CopiaError::InvalidArgument(format!(
                "{} sample names for {} columns",
                samples.len(),
                columns.len()
            )));
        }
        let rows = columns.first().map(|c| c.len()).unwrap_or(0);
        for (name, column) in samples.iter().zip(&columns) {
            if column.len() != rows {
                return Err(CopiaError::InvalidArgument(format!(
                    "column '{}' has {} rows, expected {}",
                    name,
                    column.len(),
                    rows
                )));
            }
        }
        Ok(Self {
            samples,
            columns,
            rows,
        })
    }

    pub fn n_samples(&self) -> usize {
        self.samples.len()
    }

    pub fn n_rows(&self) -> usize {
        self.rows
    }

    pub fn sample_names(&self) -> &[String] {
        &self.samples
    }

    /// One sample's column of taxon ids.
    pub fn column(&self, index: usize) -> &[TaxonId] {
        &self.columns[index]
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.samples.is_empty()
    }
}
