//! Pharmaline Ingest - File adapters for the drug-mention pipeline
//!
//! One module per data source. Adapters read files into raw records and stop
//! there: trimming, validation and dedup happen in `pharmaline-core`'s
//! normalizer. A missing or unreadable file is fatal (the run has no input);
//! a bad row inside a readable file is not.

pub mod drugs;
pub mod pubmed;
pub mod trials;
