//! Shared data types for copia

pub mod curve;
pub mod dataset;
pub mod taxon;

pub use curve::{CurvePoint, CurveTable};
pub use dataset::Dataset;
pub use taxon::TaxonId;
