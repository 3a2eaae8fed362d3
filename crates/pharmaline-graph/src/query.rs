//! Ranking queries over a built mention graph
//!
//! Both queries return the FULL set of journals tied at the winning count,
//! sorted alphabetically. Unknown entities yield an empty ranking, never an
//! error.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::graph::MentionGraph;

/// Result of a ranking query: every journal tied at the top plus the count
/// they share.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ranking {
    /// Alphabetically sorted; empty when nothing qualified
    pub journals: Vec<String>,
    pub count: usize,
}

impl Ranking {
    pub fn is_empty(&self) -> bool {
        self.journals.is_empty()
    }

    fn from_counts(counts: FxHashMap<&str, usize>) -> Self {
        let Some(max) = counts.values().copied().max() else {
            return Self::default();
        };
        let mut journals: Vec<String> = counts
            .iter()
            .filter(|(_, &count)| count == max)
            .map(|(journal, _)| (*journal).to_string())
            .collect();
        journals.sort();
        Self {
            journals,
            count: max,
        }
    }
}

/// Journal(s) with the highest mention count for one drug.
///
/// Lookup is case-insensitive; a drug the graph has never seen (or one with
/// no mentions) produces an empty ranking.
pub fn top_journals_for_drug(graph: &MentionGraph, drug_name: &str) -> Ranking {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for mention in graph.mentions_of_drug(drug_name) {
        *counts.entry(mention.journal.as_str()).or_default() += 1;
    }
    Ranking::from_counts(counts)
}

/// Journal(s) mentioning the most DISTINCT drugs (not total mentions).
pub fn journals_with_most_distinct_drugs(graph: &MentionGraph) -> Ranking {
    let mut per_journal: FxHashMap<&str, FxHashSet<&str>> = FxHashMap::default();
    for mention in graph.mentions() {
        per_journal
            .entry(mention.journal.as_str())
            .or_default()
            .insert(mention.drug.as_str());
    }
    let counts = per_journal
        .into_iter()
        .map(|(journal, drugs)| (journal, drugs.len()))
        .collect();
    Ranking::from_counts(counts)
}
