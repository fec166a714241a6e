//! Repeated subsample-and-classify simulation at one fraction

use crate::classify::classify;
use crate::sampler::Sampler;
use copia_core::{CopiaError, CopiaResult, Dataset, TaxonId};
use tracing::debug;

/// Per-sample repeat counts for one fraction. Count sequences are in repeat
/// order and all have length `repeats`; sample order matches the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct SimBatch {
    fraction: f64,
    samples: Vec<String>,
    counts: Vec<Vec<usize>>,
}

impl SimBatch {
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    /// Repeat counts for a sample by column index.
    pub fn counts(&self, index: usize) -> &[usize] {
        &self.counts[index]
    }

    /// Repeat counts for a sample by name.
    pub fn counts_for(&self, sample: &str) -> Option<&[usize]> {
        self.samples
            .iter()
            .position(|name| name == sample)
            .map(|index| self.counts[index].as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.samples
            .iter()
            .map(String::as_str)
            .zip(self.counts.iter().map(Vec::as_slice))
    }
}

/// Runs the {subsample, classify} pair a fixed number of times per fraction.
pub struct Simulator {
    threshold: usize,
    repeats: usize,
    with_replacement: bool,
}

impl Simulator {
    pub fn new(threshold: usize, repeats: usize, with_replacement: bool) -> Self {
        Self {
            threshold,
            repeats,
            with_replacement,
        }
    }

    /// Simulate one fraction across the whole dataset.
    ///
    /// Each repeat draws one row-index subset and applies it to every
    /// column, so per-sample counts within a repeat are coupled through the
    /// shared draw.
    pub fn run(
        &self,
        sampler: &mut Sampler,
        dataset: &Dataset,
        fraction: f64,
    ) -> CopiaResult<SimBatch> {
        if self.repeats == 0 {
            return Err(CopiaError::InvalidArgument(
                "repeat count must be positive".to_string(),
            ));
        }
        if dataset.n_rows() == 0 {
            return Err(CopiaError::InvalidArgument(
                "dataset has no rows".to_string(),
            ));
        }

        let mut counts = vec![Vec::with_capacity(self.repeats); dataset.n_samples()];
        for _ in 0..self.repeats {
            let indices = sampler.draw_indices(dataset.n_rows(), fraction, self.with_replacement)?;
            for (index, runs) in counts.iter_mut().enumerate() {
                let column = dataset.column(index);
                let subsample: Vec<TaxonId> = indices.iter().map(|&row| column[row]).collect();
                runs.push(classify(&subsample, self.threshold));
            }
        }

        debug!(
            fraction,
            repeats = self.repeats,
            samples = dataset.n_samples(),
            "simulated fraction"
        );

        Ok(SimBatch {
            fraction,
            samples: dataset.sample_names().to_vec(),
            counts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(values: &[u32]) -> Vec<TaxonId> {
        values.iter().copied().map(TaxonId::new).collect()
    }

    fn two_sample_dataset() -> Dataset {
        Dataset::new(
            vec!["A".to_string(), "B".to_string()],
            vec![ids(&[1, 1, 2, 0, 0]), ids(&[1, 2, 3, 0, 0])],
        )
        .unwrap()
    }

    #[test]
    fn test_run_produces_one_sequence_per_sample() {
        let dataset = two_sample_dataset();
        let simulator = Simulator::new(2, 4, false);
        let mut sampler = Sampler::from_seed(9);

        let batch = simulator.run(&mut sampler, &dataset, 0.6).unwrap();
        assert_eq!(batch.samples(), &["A", "B"]);
        assert_eq!(batch.counts(0).len(), 4);
        assert_eq!(batch.counts(1).len(), 4);
        assert_eq!(batch.counts_for("B"), Some(batch.counts(1)));
        assert_eq!(batch.counts_for("C"), None);
    }

    #[test]
    fn test_full_fraction_without_replacement_is_deterministic() {
        // the "subsample" is the whole column, so every repeat must agree
        let dataset = two_sample_dataset();
        let simulator = Simulator::new(2, 5, false);
        let mut sampler = Sampler::from_seed(0);

        let batch = simulator.run(&mut sampler, &dataset, 1.0).unwrap();
        assert_eq!(batch.counts_for("A").unwrap(), &[1, 1, 1, 1, 1]);
        assert_eq!(batch.counts_for("B").unwrap(), &[0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_shared_draw_couples_identical_columns() {
        // identical columns see identical subsamples because the row draw is
        // shared across columns within a repeat
        let column = ids(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let dataset = Dataset::new(
            vec!["left".to_string(), "right".to_string()],
            vec![column.clone(), column],
        )
        .unwrap();
        let simulator = Simulator::new(1, 10, false);
        let mut sampler = Sampler::from_seed(5);

        let batch = simulator.run(&mut sampler, &dataset, 0.5).unwrap();
        assert_eq!(batch.counts(0), batch.counts(1));
    }

    #[test]
    fn test_zero_fraction_counts_zero() {
        let dataset = two_sample_dataset();
        let simulator = Simulator::new(1, 3, false);
        let mut sampler = Sampler::from_seed(2);

        let batch = simulator.run(&mut sampler, &dataset, 0.0).unwrap();
        assert_eq!(batch.counts(0), &[0, 0, 0]);
        assert_eq!(batch.counts(1), &[0, 0, 0]);
    }

    #[test]
    fn test_zero_repeats_is_rejected() {
        let dataset = two_sample_dataset();
        let simulator = Simulator::new(1, 0, false);
        let mut sampler = Sampler::from_seed(2);

        assert!(matches!(
            simulator.run(&mut sampler, &dataset, 0.5),
            Err(CopiaError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_empty_dataset_is_rejected() {
        let dataset = Dataset::new(vec!["A".to_string()], vec![vec![]]).unwrap();
        let simulator = Simulator::new(1, 3, false);
        let mut sampler = Sampler::from_seed(2);

        assert!(matches!(
            simulator.run(&mut sampler, &dataset, 0.5),
            Err(CopiaError::InvalidArgument(_))
        ));
    }
}
