//! Accumulation-curve orchestration
//!
//! Runs one simulation per fraction and folds the repeat counts into the
//! final (sample, fraction) curve table.

use crate::aggregate::aggregate;
use crate::sampler::Sampler;
use crate::simulation::{SimBatch, Simulator};
use copia_core::{CopiaError, CopiaResult, CurveConfig, CurvePoint, CurveTable, Dataset};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::debug;

/// Builds the full curve dataset for a read-only classification table.
///
/// Fractions are processed independently (in parallel) and each gets its own
/// random generator, derived from the configured seed, so concurrent units
/// never share one. Each `build` call is independent and reentrant.
pub struct CurveBuilder {
    config: CurveConfig,
}

impl CurveBuilder {
    pub fn new(config: CurveConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    pub fn build(&self, dataset: &Dataset) -> CopiaResult<CurveTable> {
        self.build_inner(dataset, false)
    }

    pub fn build_with_progress(
        &self,
        dataset: &Dataset,
        show_progress: bool,
    ) -> CopiaResult<CurveTable> {
        self.build_inner(dataset, show_progress)
    }

    fn build_inner(&self, dataset: &Dataset, show_progress: bool) -> CopiaResult<CurveTable> {
        self.config.validate()?;
        if dataset.n_samples() == 0 {
            return Err(CopiaError::InvalidArgument(
                "dataset has no sample columns".to_string(),
            ));
        }
        if dataset.n_rows() == 0 {
            return Err(CopiaError::InvalidArgument(
                "dataset has no rows".to_string(),
            ));
        }

        let pb = if show_progress {
            let pb = ProgressBar::new(self.config.fractions.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                    .unwrap()
                    .progress_chars("##-"),
            );
            pb.set_message("Simulating fractions...");
            Some(pb)
        } else {
            None
        };

        let simulator = Simulator::new(
            self.config.threshold,
            self.config.repeats,
            self.config.with_replacement,
        );

        let batches: Vec<SimBatch> = self
            .config
            .fractions
            .par_iter()
            .enumerate()
            .map(|(unit, &fraction)| {
                let mut sampler = self.sampler_for(unit);
                let batch = simulator.run(&mut sampler, dataset, fraction)?;
                if let Some(ref pb) = pb {
                    pb.inc(1);
                }
                Ok(batch)
            })
            .collect::<CopiaResult<Vec<_>>>()?;

        if let Some(ref pb) = pb {
            pb.finish_and_clear();
        }

        // fraction-major, sample-minor
        let mut points = Vec::with_capacity(batches.len() * dataset.n_samples());
        for batch in &batches {
            for (sample, counts) in batch.iter() {
                let result = aggregate(counts, &self.config.dispersion)?;
                points.push(CurvePoint {
                    sample: sample.to_string(),
                    fraction: batch.fraction(),
                    mean: result.mean,
                    dispersion: result.dispersion,
                });
            }
        }

        debug!(points = points.len(), "curve build complete");
        Ok(CurveTable::new(points))
    }

    fn sampler_for(&self, unit: usize) -> Sampler {
        match self.config.seed {
            Some(seed) => {
                Sampler::from_seed(seed ^ (unit as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
            }
            None => Sampler::from_entropy(),
        }
    }
}
