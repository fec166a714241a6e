//! Reduction of repeat counts into mean and dispersion
//!
//! Pure functions of the input sequence; no state survives a call.

use copia_core::{CopiaError, CopiaResult, DispersionPolicy};

/// Mean and dispersion of one repeat-count sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregate {
    pub mean: f64,
    pub dispersion: f64,
}

/// Reduce an ordered repeat-count sequence under a dispersion policy.
pub fn aggregate(counts: &[usize], policy: &DispersionPolicy) -> CopiaResult<Aggregate> {
    if counts.is_empty() {
        return Err(CopiaError::InsufficientData(
            "cannot aggregate an empty run sequence".to_string(),
        ));
    }

    let mean = mean(counts);
    let dispersion = match *policy {
        DispersionPolicy::None => 0.0,
        DispersionPolicy::SampleSd => sample_sd(counts)?,
        DispersionPolicy::RelativeCi { scale } => {
            let sd = sample_sd(counts)?;
            // a zero mean reports zero dispersion rather than dividing by it
            if mean == 0.0 {
                0.0
            } else {
                scale * sd / mean
            }
        }
        DispersionPolicy::PercentileCi { percentile } => {
            central_interval_half_width(counts, percentile)?
        }
    };

    Ok(Aggregate { mean, dispersion })
}

fn mean(counts: &[usize]) -> f64 {
    counts.iter().sum::<usize>() as f64 / counts.len() as f64
}

/// Unbiased sample standard deviation, divisor n-1.
fn sample_sd(counts: &[usize]) -> CopiaResult<f64> {
    let n = counts.len();
    if n < 2 {
        return Err(CopiaError::InsufficientData(format!(
            "sample standard deviation needs at least 2 runs, got {}",
            n
        )));
    }
    let mean = mean(counts);
    let sum_squares: f64 = counts
        .iter()
        .map(|&count| {
            let delta = count as f64 - mean;
            delta * delta
        })
        .sum();
    Ok((sum_squares / (n - 1) as f64).sqrt())
}

/// Half-width of the central `percentile`-percent interval of the counts.
fn central_interval_half_width(counts: &[usize], percentile: f64) -> CopiaResult<f64> {
    if counts.len() < 2 {
        return Err(CopiaError::InsufficientData(format!(
            "percentile interval needs at least 2 runs, got {}",
            counts.len()
        )));
    }
    if !percentile.is_finite() || percentile <= 0.0 || percentile >= 100.0 {
        return Err(CopiaError::InvalidArgument(format!(
            "percentile must be in (0, 100), got {}",
            percentile
        )));
    }

    let mut sorted: Vec<f64> = counts.iter().map(|&count| count as f64).collect();
    sorted.sort_by(f64::total_cmp);

    let tail = (100.0 - percentile) / 200.0;
    Ok((quantile(&sorted, 1.0 - tail) - quantile(&sorted, tail)) / 2.0)
}

/// Quantile with linear interpolation between order statistics.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let low = position.floor() as usize;
    let high = position.ceil() as usize;
    if low == high {
        sorted[low]
    } else {
        let t = position - low as f64;
        sorted[low] * (1.0 - t) + sorted[high] * t
    }
}
