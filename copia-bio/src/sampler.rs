//! Random subsampling of dataset rows
//!
//! Draws row indices rather than values so one draw can be shared across
//! every column of a simulation repeat.

use copia_core::{CopiaError, CopiaResult, TaxonId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    /// Sampler seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Sampler with a fixed seed, for reproducible curves and tests.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Subsample size for a given row count: nearest integer, ties away from
    /// zero (`f64::round`). Reference implementations disagree on this
    /// boundary; copia rounds.
    pub fn subsample_size(rows: usize, fraction: f64) -> usize {
        (fraction * rows as f64).round() as usize
    }

    /// Draw row indices for one subsample.
    ///
    /// Without replacement the result is a uniformly random duplicate-free
    /// subset of `0..rows`; with replacement each index is an independent
    /// uniform draw.
    pub fn draw_indices(
        &mut self,
        rows: usize,
        fraction: f64,
        with_replacement: bool,
    ) -> CopiaResult<Vec<usize>> {
        check_fraction(fraction)?;
        let size = Self::subsample_size(rows, fraction);
        if with_replacement {
            Ok((0..size).map(|_| self.rng.gen_range(0..rows)).collect())
        } else {
            Ok(rand::seq::index::sample(&mut self.rng, rows, size).into_vec())
        }
    }

    /// Subsample a single column's values directly.
    pub fn sample_column(
        &mut self,
        column: &[TaxonId],
        fraction: f64,
        with_replacement: bool,
    ) -> CopiaResult<Vec<TaxonId>> {
        let indices = self.draw_indices(column.len(), fraction, with_replacement)?;
        Ok(indices.into_iter().map(|i| column[i]).collect())
    }
}

fn check_fraction(fraction: f64) -> CopiaResult<()> {
    if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
        return Err(CopiaError::InvalidArgument(format!(
            "fraction must be in [0, 1], got {}",
            fraction
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn column(values: &[u32]) -> Vec<TaxonId> {
        values.iter().copied().map(TaxonId::new).collect()
    }

    #[test]
    fn test_subsample_size_rounds_to_nearest() {
        assert_eq!(Sampler::subsample_size(10, 0.0), 0);
        assert_eq!(Sampler::subsample_size(10, 1.0), 10);
        assert_eq!(Sampler::subsample_size(10, 0.24), 2);
        assert_eq!(Sampler::subsample_size(10, 0.26), 3);
        // ties away from zero
        assert_eq!(Sampler::subsample_size(5, 0.5), 3);
        assert_eq!(Sampler::subsample_size(0, 0.5), 0);
    }

    #[test]
    fn test_without_replacement_is_duplicate_free() {
        let mut sampler = Sampler::from_seed(7);
        for _ in 0..20 {
            let indices = sampler.draw_indices(50, 0.4, false).unwrap();
            assert_eq!(indices.len(), 20);
            let distinct: HashSet<usize> = indices.iter().copied().collect();
            assert_eq!(distinct.len(), indices.len());
            assert!(indices.iter().all(|&i| i < 50));
        }
    }

    #[test]
    fn test_full_fraction_without_replacement_covers_every_row() {
        let mut sampler = Sampler::from_seed(3);
        let mut indices = sampler.draw_indices(25, 1.0, false).unwrap();
        indices.sort_unstable();
        assert_eq!(indices, (0..25).collect::<Vec<_>>());
    }

    #[test]
    fn test_with_replacement_draws_within_range() {
        let mut sampler = Sampler::from_seed(11);
        let indices = sampler.draw_indices(10, 1.0, true).unwrap();
        assert_eq!(indices.len(), 10);
        assert!(indices.iter().all(|&i| i < 10));
    }

    #[test]
    fn test_sample_column_values_come_from_column() {
        let column = column(&[5, 6, 7, 8]);
        let mut sampler = Sampler::from_seed(1);
        let sub = sampler.sample_column(&column, 0.5, true).unwrap();
        assert_eq!(sub.len(), 2);
        assert!(sub.iter().all(|taxon| column.contains(taxon)));
    }

    #[test]
    fn test_zero_fraction_yields_empty_subsample() {
        let mut sampler = Sampler::from_seed(1);
        assert!(sampler.draw_indices(100, 0.0, false).unwrap().is_empty());
        assert!(sampler.draw_indices(100, 0.0, true).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_fraction_is_rejected() {
        let mut sampler = Sampler::from_seed(1);
        assert!(matches!(
            sampler.draw_indices(10, -0.01, false),
            Err(CopiaError::InvalidArgument(_))
        ));
        assert!(sampler.draw_indices(10, 1.01, false).is_err());
        assert!(sampler.draw_indices(10, f64::NAN, true).is_err());
    }

    #[test]
    fn test_seeded_draws_are_reproducible() {
        let mut a = Sampler::from_seed(42);
        let mut b = Sampler::from_seed(42);
        for _ in 0..5 {
            assert_eq!(
                a.draw_indices(100, 0.3, false).unwrap(),
                b.draw_indices(100, 0.3, false).unwrap()
            );
        }
    }
}
