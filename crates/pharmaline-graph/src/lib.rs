//! Pharmaline Graph - Drug-mention graph construction and queries
//!
//! Joins the canonical drug list against publication titles to build the
//! in-memory mention graph, and answers ranking queries over it.

pub mod export;
pub mod extract;
pub mod graph;
pub mod query;

// Re-exports for convenience
pub use export::{DrugExport, GraphExport, MentionDetail};
pub use extract::{Candidate, extract_mentions};
pub use graph::{GraphBuild, MentionGraph, build_graph};
pub use query::{Ranking, journals_with_most_distinct_drugs, top_journals_for_drug};
