//! Aggregated accumulation-curve results

use serde::{Deserialize, Serialize};

/// One aggregated observation: the estimated taxon count for a sample at a
/// sampling fraction, with a dispersion measure across simulation repeats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub sample: String,
    pub fraction: f64,
    pub mean: f64,
    pub dispersion: f64,
}

/// The complete curve dataset: samples x fractions, fraction-major then
/// sample-minor. Immutable once built; renderers regroup it per sample.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveTable {
    points: Vec<CurvePoint>,
}

impl CurveTable {
    pub fn new(points: Vec<CurvePoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<CurvePoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Regroup for rendering: one entry per sample (first-appearance order),
    /// each with its points sorted by fraction.
    pub fn per_sample(&self) -> Vec<(&str, Vec<&CurvePoint>)> {
        let mut groups: Vec<(&str, Vec<&CurvePoint>)> = Vec::new();
        for point in &self.points {
            match groups.iter_mut().find(|(name, _)| *name == point.sample) {
                Some((_, points)) => points.push(point),
                None => groups.push((&point.sample, vec![point])),
            }
        }
        for (_, points) in &mut groups {
            points.sort_by(|a, b| a.fraction.total_cmp(&b.fraction));
        }
        groups
    }
}
