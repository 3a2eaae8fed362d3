//! Clinical trials adapter (`id,scientific_title,date,journal` CSV)

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use pharmaline_core::{RawPublicationRecord, SourceType};

/// Row shape of the clinical trials file. Titles live under
/// `scientific_title` in this source.
#[derive(Debug, Deserialize)]
struct TrialRow {
    #[serde(default)]
    id: Option<String>,
    #[serde(rename = "scientific_title", default)]
    title: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    journal: Option<String>,
}

/// Read clinical trial records from a CSV file.
pub fn read_csv(path: &Path) -> Result<Vec<RawPublicationRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read clinical trials CSV: {}", path.display()))?;
    let rows = parse_csv(&content)
        .with_context(|| format!("Failed to parse clinical trials CSV: {}", path.display()))?;
    log::info!(
        "Read {} clinical trial rows from {}",
        rows.len(),
        path.display()
    );
    Ok(rows)
}

fn parse_csv(content: &str) -> Result<Vec<RawPublicationRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());
    let mut rows = Vec::new();
    for row in reader.deserialize::<TrialRow>() {
        let row = row?;
        rows.push(RawPublicationRecord {
            id: row.id,
            title: row.title,
            date: row.date,
            journal: row.journal,
            source_type: SourceType::ClinicalTrial,
        });
    }
    Ok(rows)
}
