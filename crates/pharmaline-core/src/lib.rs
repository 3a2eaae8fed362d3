//! Pharmaline Core - Shared records and normalization for the drug-mention pipeline
//!
//! This crate provides the canonical record types, date normalization,
//! raw-record validation and data-quality accounting used by the
//! graph-building pipeline.

pub mod date;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod quality;
pub mod record;

// Re-exports for convenience
pub use date::parse_date;
pub use error::ConfigError;
pub use logging::init_logging;
pub use normalize::{normalize_drugs, normalize_publications};
pub use quality::{DropReason, QualityReport};
pub use record::{
    Drug, Mention, Publication, RawDrugRecord, RawPublicationRecord, SourceType,
};
