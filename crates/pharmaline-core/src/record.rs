//! Canonical and raw record types for the drug-mention pipeline

use chrono::NaiveDate;
use serde::Deserialize;

/// Kind of source a publication record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// Scientific publication (PubMed article)
    Pubmed,
    /// Clinical trial record
    ClinicalTrial,
}

impl SourceType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pubmed => "pubmed",
            Self::ClinicalTrial => "clinical_trial",
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A drug from the reference list.
///
/// `name` keeps the source spelling; graph identity is case-insensitive via
/// [`Drug::key`]. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drug {
    /// ATC classification code (may be empty in degraded source data)
    pub atccode: String,
    pub name: String,
}

impl Drug {
    /// Case-insensitive identity used by the graph indexes.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// A publication or clinical-trial record after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publication {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub journal: String,
    pub source_type: SourceType,
}

/// One recorded occurrence of a drug in a publication title.
///
/// Journal and date are denormalized from the publication so queries never
/// have to chase a second lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    /// Canonical (lowercased) drug name
    pub drug: String,
    pub atccode: String,
    pub publication_id: String,
    pub title: String,
    pub journal: String,
    pub date: NaiveDate,
    pub source_type: SourceType,
}

/// Raw drug row as read from disk, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDrugRecord {
    #[serde(default)]
    pub atccode: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Raw publication row as read from disk, before validation.
///
/// All fields optional: the normalizer decides what is required and drops
/// (with accounting) whatever does not qualify.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPublicationRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub journal: Option<String>,
    pub source_type: SourceType,
}
