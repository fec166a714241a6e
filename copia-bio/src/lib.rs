//! Rarefaction simulation engine for copia
//!
//! Transforms a column-oriented classification table into an accumulation
//! curve: repeated subsampling at a ladder of fractions, threshold-based
//! taxon counting, and aggregation of repeat counts into mean ± dispersion
//! per (sample, fraction).

pub mod aggregate;
pub mod classify;
pub mod curve;
pub mod formats;
pub mod sampler;
pub mod simulation;

// Re-export commonly used types
pub use aggregate::{aggregate, Aggregate};
pub use classify::{classify, occurrences};
pub use curve::CurveBuilder;
pub use formats::table::{parse_table, parse_table_reader};
pub use sampler::Sampler;
pub use simulation::{SimBatch, Simulator};
