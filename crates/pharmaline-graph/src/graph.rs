//! Drug-mention graph construction
//!
//! The graph owns all mentions in one arena, indexed by drug and by journal
//! so either direction is an O(1) map lookup. A seen-set enforces the
//! uniqueness invariant: one (drug, journal, title, date) tuple at most once,
//! however often the same record is ingested.

use chrono::NaiveDate;
use rustc_hash::{FxHashMap, FxHashSet};

use pharmaline_core::{
    ConfigError, Drug, Mention, Publication, QualityReport, RawDrugRecord, RawPublicationRecord,
    normalize_drugs, normalize_publications,
};

use crate::extract;

/// Identity of a mention for dedup: (drug key, journal, title, date).
type MentionKey = (String, String, String, NaiveDate);

/// Bidirectional drug <-> journal index over mentions.
#[derive(Debug, Default)]
pub struct MentionGraph {
    mentions: Vec<Mention>,
    by_drug: FxHashMap<String, Vec<usize>>,
    by_journal: FxHashMap<String, Vec<usize>>,
    /// Drug nodes by canonical key; registered even when never mentioned
    drugs: FxHashMap<String, Drug>,
    seen: FxHashSet<MentionKey>,
}

impl MentionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a drug node. The first spelling seen is kept.
    pub fn add_drug(&mut self, drug: &Drug) {
        self.drugs
            .entry(drug.key())
            .or_insert_with(|| drug.clone());
    }

    /// Record the mention of `drug` in `publication`.
    ///
    /// Returns `false` (and changes nothing) when the (drug, journal, title,
    /// date) tuple is already present.
    pub fn insert(&mut self, drug: &Drug, publication: &Publication) -> bool {
        let key = (
            drug.key(),
            publication.journal.clone(),
            publication.title.clone(),
            publication.date,
        );
        if !self.seen.insert(key) {
            return false;
        }

        self.add_drug(drug);
        let idx = self.mentions.len();
        self.mentions.push(Mention {
            drug: drug.key(),
            atccode: drug.atccode.clone(),
            publication_id: publication.id.clone(),
            title: publication.title.clone(),
            journal: publication.journal.clone(),
            date: publication.date,
            source_type: publication.source_type,
        });
        self.by_drug.entry(drug.key()).or_default().push(idx);
        self.by_journal
            .entry(publication.journal.clone())
            .or_default()
            .push(idx);
        true
    }

    /// Number of mentions in the graph.
    pub fn len(&self) -> usize {
        self.mentions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mentions.is_empty()
    }

    pub fn drug_count(&self) -> usize {
        self.drugs.len()
    }

    pub fn journal_count(&self) -> usize {
        self.by_journal.len()
    }

    /// All mentions, in insertion order.
    pub fn mentions(&self) -> &[Mention] {
        &self.mentions
    }

    /// Registered drugs, in arbitrary order.
    pub fn drugs(&self) -> impl Iterator<Item = &Drug> {
        self.drugs.values()
    }

    /// Journal names present in the graph, in arbitrary order.
    pub fn journals(&self) -> impl Iterator<Item = &str> {
        self.by_journal.keys().map(String::as_str)
    }

    /// Mentions of a drug, looked up case-insensitively. Unknown drugs yield
    /// an empty iterator.
    pub fn mentions_of_drug<'g>(&'g self, drug_name: &str) -> impl Iterator<Item = &'g Mention> {
        self.by_drug
            .get(&drug_name.to_lowercase())
            .into_iter()
            .flatten()
            .map(|&idx| &self.mentions[idx])
    }

    /// Mentions attributed to a journal (exact name).
    pub fn mentions_in_journal<'g>(&'g self, journal: &str) -> impl Iterator<Item = &'g Mention> {
        self.by_journal
            .get(journal)
            .into_iter()
            .flatten()
            .map(|&idx| &self.mentions[idx])
    }
}

/// Result of a full pipeline run: the graph plus the data-quality report.
#[derive(Debug)]
pub struct GraphBuild {
    pub graph: MentionGraph,
    pub quality: QualityReport,
}

/// Run the pipeline: normalize -> extract -> build.
///
/// Per-row problems end up in the returned quality report; the only error is
/// a drug input source that supplied no records at all.
pub fn build_graph(
    raw_drugs: &[RawDrugRecord],
    raw_publications: &[RawPublicationRecord],
) -> Result<GraphBuild, ConfigError> {
    if raw_drugs.is_empty() {
        return Err(ConfigError::MissingInput("drugs"));
    }

    let mut quality = QualityReport::default();
    let drugs = normalize_drugs(raw_drugs, &mut quality);
    let publications = normalize_publications(raw_publications, &mut quality);

    let mut graph = MentionGraph::new();
    for drug in &drugs {
        graph.add_drug(drug);
    }

    let candidates = extract::extract_mentions(&drugs, &publications);
    let candidate_count = candidates.len();
    for candidate in candidates {
        graph.insert(candidate.drug, candidate.publication);
    }

    log::info!(
        "Graph built: {} drugs, {} journals, {} mentions ({} candidate pairs)",
        graph.drug_count(),
        graph.journal_count(),
        graph.len(),
        candidate_count
    );
    Ok(GraphBuild { graph, quality })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pharmaline_core::SourceType;

    fn drug(atccode: &str, name: &str) -> Drug {
        Drug {
            atccode: atccode.to_string(),
            name: name.to_string(),
        }
    }

    fn publication(id: &str, title: &str, date: &str, journal: &str) -> Publication {
        Publication {
            id: id.to_string(),
            title: title.to_string(),
            date: pharmaline_core::parse_date(date).unwrap(),
            journal: journal.to_string(),
            source_type: SourceType::Pubmed,
        }
    }

    #[test]
    fn insert_indexes_both_directions() {
        let mut graph = MentionGraph::new();
        let d = drug("A04AD", "Diphenhydramine");
        let p = publication("1", "Diphenhydramine use", "2020-01-01", "The Lancet");

        assert!(graph.insert(&d, &p));
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.mentions_of_drug("diphenhydramine").count(), 1);
        assert_eq!(graph.mentions_in_journal("The Lancet").count(), 1);
    }

    #[test]
    fn insert_identical_tuple_is_noop() {
        let mut graph = MentionGraph::new();
        let d = drug("A04AD", "Diphenhydramine");
        let p = publication("1", "Diphenhydramine use", "2020-01-01", "The Lancet");

        assert!(graph.insert(&d, &p));
        assert!(!graph.insert(&d, &p));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn drug_lookup_is_case_insensitive() {
        let mut graph = MentionGraph::new();
        let d = drug("A04AD", "DIPHENHYDRAMINE");
        let p = publication("1", "diphenhydramine trial", "2020-01-01", "J");
        graph.insert(&d, &p);

        assert_eq!(graph.mentions_of_drug("Diphenhydramine").count(), 1);
        assert_eq!(graph.mentions_of_drug("DIPHENHYDRAMINE").count(), 1);
    }

    #[test]
    fn unknown_drug_yields_empty_iterator() {
        let graph = MentionGraph::new();
        assert_eq!(graph.mentions_of_drug("nonexistent-drug").count(), 0);
    }

    #[test]
    fn same_title_different_journal_both_kept() {
        let mut graph = MentionGraph::new();
        let d = drug("X", "ethanol");
        graph.insert(&d, &publication("1", "ethanol study", "2020-01-01", "J1"));
        graph.insert(&d, &publication("2", "ethanol study", "2020-01-01", "J2"));
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.journal_count(), 2);
    }

    #[test]
    fn build_graph_requires_drug_input() {
        let raw_pub = RawPublicationRecord {
            id: Some("1".to_string()),
            title: Some("t".to_string()),
            date: Some("2020-01-01".to_string()),
            journal: Some("j".to_string()),
            source_type: SourceType::Pubmed,
        };
        let err = build_graph(&[], &[raw_pub]).unwrap_err();
        assert_eq!(err, ConfigError::MissingInput("drugs"));
    }

    #[test]
    fn build_graph_with_no_publications_is_empty_but_ok() {
        let raw = [RawDrugRecord {
            atccode: Some("A".to_string()),
            name: Some("ethanol".to_string()),
        }];
        let build = build_graph(&raw, &[]).unwrap();
        assert!(build.graph.is_empty());
        assert_eq!(build.graph.drug_count(), 1);
    }

    #[test]
    fn unmentioned_drugs_are_still_nodes() {
        let raw_drugs = [
            RawDrugRecord {
                atccode: Some("A".to_string()),
                name: Some("ethanol".to_string()),
            },
            RawDrugRecord {
                atccode: Some("B".to_string()),
                name: Some("atropine".to_string()),
            },
        ];
        let raw_pubs = [RawPublicationRecord {
            id: Some("1".to_string()),
            title: Some("ethanol kinetics".to_string()),
            date: Some("2020-01-01".to_string()),
            journal: Some("J".to_string()),
            source_type: SourceType::Pubmed,
        }];
        let build = build_graph(&raw_drugs, &raw_pubs).unwrap();
        assert_eq!(build.graph.drug_count(), 2);
        assert_eq!(build.graph.len(), 1);
    }
}
