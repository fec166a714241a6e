//! Core types shared across the copia workspace.

pub mod config;
pub mod error;
pub mod types;

pub use config::{load_config, save_config, CurveConfig, DispersionPolicy};
pub use error::{CopiaError, CopiaResult};
pub use types::{CurvePoint, CurveTable, Dataset, TaxonId};
