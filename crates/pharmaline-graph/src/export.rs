//! Deterministic JSON export of the mention graph
//!
//! Downstream visualization consumes a plain nested mapping
//! drug -> journal -> mentions. `BTreeMap` keys and sorted mention lists keep
//! the output byte-stable across rebuilds of the same dataset.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::graph::MentionGraph;

/// One mention as exposed to downstream consumers.
///
/// Field order doubles as the sort order of a journal's mention list.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct MentionDetail {
    /// ISO calendar date (YYYY-MM-DD)
    pub date: String,
    pub title: String,
    pub publication_id: String,
    pub source_type: String,
}

/// Per-drug block: identifier plus journal -> mentions.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DrugExport {
    pub atccode: String,
    pub journals: BTreeMap<String, Vec<MentionDetail>>,
}

/// The full graph as a nested mapping with stable key order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GraphExport {
    pub drugs: BTreeMap<String, DrugExport>,
}

impl GraphExport {
    pub fn from_graph(graph: &MentionGraph) -> Self {
        let mut drugs = BTreeMap::new();

        for drug in graph.drugs() {
            let mut journals: BTreeMap<String, Vec<MentionDetail>> = BTreeMap::new();
            for mention in graph.mentions_of_drug(&drug.name) {
                journals
                    .entry(mention.journal.clone())
                    .or_default()
                    .push(MentionDetail {
                        date: mention.date.format("%Y-%m-%d").to_string(),
                        title: mention.title.clone(),
                        publication_id: mention.publication_id.clone(),
                        source_type: mention.source_type.to_string(),
                    });
            }
            for mentions in journals.values_mut() {
                mentions.sort();
            }
            drugs.insert(
                drug.key(),
                DrugExport {
                    atccode: drug.atccode.clone(),
                    journals,
                },
            );
        }

        Self { drugs }
    }

    /// Serialize for human-inspectable output files.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
