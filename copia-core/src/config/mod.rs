//! Configuration types for copia

use crate::CopiaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Dispersion measure computed across simulation repeats at a fixed fraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DispersionPolicy {
    /// No dispersion; always reports 0.
    None,
    /// Unbiased sample standard deviation (divisor n-1). Needs at least 2 repeats.
    SampleSd,
    /// `scale * sd / mean`. Reports 0 when the mean is 0 instead of dividing by it.
    RelativeCi { scale: f64 },
    /// Half-width of the central `percentile`-percent interval of the repeat
    /// counts, with linear interpolation between order statistics.
    PercentileCi { percentile: f64 },
}

impl DispersionPolicy {
    pub fn validate(&self) -> Result<(), CopiaError> {
        match *self {
            DispersionPolicy::None | DispersionPolicy::SampleSd => Ok(()),
            DispersionPolicy::RelativeCi { scale } => {
                if !scale.is_finite() || scale <= 0.0 {
                    return Err(CopiaError::InvalidArgument(format!(
                        "relative-ci scale must be a positive number, got {}",
                        scale
                    )));
                }
                Ok(())
            }
            DispersionPolicy::PercentileCi { percentile } => {
                if !percentile.is_finite() || percentile <= 0.0 || percentile >= 100.0 {
                    return Err(CopiaError::InvalidArgument(format!(
                        "percentile-ci percentile must be in (0, 100), got {}",
                        percentile
                    )));
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for DispersionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispersionPolicy::None => write!(f, "none"),
            DispersionPolicy::SampleSd => write!(f, "sample-sd"),
            DispersionPolicy::RelativeCi { scale } => write!(f, "rel:{}", scale),
            DispersionPolicy::PercentileCi { percentile } => write!(f, "pct:{}", percentile),
        }
    }
}

impl FromStr for DispersionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "none" => return Ok(DispersionPolicy::None),
            "sd" | "sample-sd" => return Ok(DispersionPolicy::SampleSd),
            _ => {}
        }
        if let Some(value) = s.strip_prefix("rel:").or_else(|| s.strip_prefix("relative-ci:")) {
            let scale: f64 = value
                .parse()
                .map_err(|_| format!("invalid relative-ci scale: '{}'", value))?;
            return Ok(DispersionPolicy::RelativeCi { scale });
        }
        if let Some(value) = s.strip_prefix("pct:").or_else(|| s.strip_prefix("percentile-ci:")) {
            let percentile: f64 = value
                .parse()
                .map_err(|_| format!("invalid percentile: '{}'", value))?;
            return Ok(DispersionPolicy::PercentileCi { percentile });
        }
        Err(format!(
            "unknown dispersion policy: '{}'. Options: none, sd, rel:<scale>, pct:<percentile>",
            s
        ))
    }
}

/// Configuration for one accumulation-curve build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Sample fractions to simulate, each in [0, 1].
    #[serde(default = "default_fractions")]
    pub fractions: Vec<f64>,
    /// Minimum occurrences in a subsample to count a taxon as present.
    #[serde(default = "default_threshold")]
    pub threshold: usize,
    /// Number of simulation repeats per fraction.
    #[serde(default = "default_repeats")]
    pub repeats: usize,
    /// Subsample with replacement instead of without.
    #[serde(default)]
    pub with_replacement: bool,
    /// Seed for the random source. Unset means OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    // last so the TOML serializer emits scalars before the policy table
    #[serde(default = "default_dispersion")]
    pub dispersion: DispersionPolicy,
}

// Default value functions
fn default_fractions() -> Vec<f64> {
    vec![
        0.0, 0.01, 0.05, 0.1, 0.15, 0.2, 0.25, 0.3, 0.35, 0.4, 0.45, 0.5, 0.55, 0.6, 0.65, 0.7,
        0.75, 0.8, 0.85, 0.9, 0.95, 1.0,
    ]
}
fn default_threshold() -> usize {
    2
}
fn default_repeats() -> usize {
    10
}
fn default_dispersion() -> DispersionPolicy {
    DispersionPolicy::PercentileCi { percentile: 68.0 }
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            fractions: default_fractions(),
            threshold: default_threshold(),
            repeats: default_repeats(),
            with_replacement: false,
            seed: None,
            dispersion: default_dispersion(),
        }
    }
}

impl CurveConfig {
    /// Check the configuration before a build. A curve is only meaningful as a
    /// complete set across fractions, so any bad value rejects the whole config.
    pub fn validate(&self) -> Result<(), CopiaError> {
        if self.fractions.is_empty() {
            return Err(CopiaError::InvalidArgument(
                "fraction list must not be empty".to_string(),
            ));
        }
        for &fraction in &self.fractions {
            if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
                return Err(CopiaError::InvalidArgument(format!(
                    "fraction must be in [0, 1], got {}",
                    fraction
                )));
            }
        }
        let mut sorted = self.fractions.clone();
        sorted.sort_by(f64::total_cmp);
        if sorted.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err(CopiaError::InvalidArgument(
                "fraction list contains duplicates".to_string(),
            ));
        }
        if self.repeats == 0 {
            return Err(CopiaError::InvalidArgument(
                "repeat count must be positive".to_string(),
            ));
        }
        self.dispersion.validate()
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CurveConfig, CopiaError> {
    let contents = std::fs::read_to_string(path)?;
    let config: CurveConfig = toml::from_str(&contents)
        .map_err(|e| CopiaError::Config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &CurveConfig) -> Result<(), CopiaError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| CopiaError::Config(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}
