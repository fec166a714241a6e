//! Threshold-based taxon classification
//!
//! Counts the distinct taxa in a subsample whose occurrence frequency clears
//! a minimum threshold. The unclassified sentinel never counts, however
//! often it occurs.

use copia_core::TaxonId;
use std::collections::HashMap;

/// Occurrence frequency of every distinct taxon in a subsample.
pub fn occurrences(subcolumn: &[TaxonId]) -> HashMap<TaxonId, usize> {
    let mut counts = HashMap::new();
    for &taxon in subcolumn {
        *counts.entry(taxon).or_insert(0) += 1;
    }
    counts
}

/// Number of distinct classified taxa occurring at least `threshold` times.
///
/// A threshold of 0 counts every distinct taxon regardless of frequency.
/// Pure and deterministic; an empty subsample counts 0.
pub fn classify(subcolumn: &[TaxonId], threshold: usize) -> usize {
    occurrences(subcolumn)
        .iter()
        .filter(|(taxon, &count)| !taxon.is_unclassified() && count >= threshold)
        .count()
}
