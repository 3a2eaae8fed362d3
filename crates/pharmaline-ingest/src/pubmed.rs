//! PubMed publication adapters (`id,title,date,journal` CSV and JSON)
//!
//! The JSON feed is known to arrive with trailing commas; strict parsing is
//! tried first, then one repair pass before giving up.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};

use pharmaline_core::{RawPublicationRecord, SourceType};

/// Row shape of the PubMed CSV file.
#[derive(Debug, Deserialize)]
struct PubmedCsvRow {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    journal: Option<String>,
}

/// Row shape of the PubMed JSON file. Ids arrive as strings or integers.
#[derive(Debug, Deserialize)]
struct PubmedJsonRow {
    #[serde(default, deserialize_with = "id_to_string")]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    journal: Option<String>,
}

/// Deserialize an id that may be a JSON string or integer.
fn id_to_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Num(i64),
        Str(String),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|id| match id {
        RawId::Num(n) => n.to_string(),
        RawId::Str(s) => s,
    }))
}

fn to_record(
    id: Option<String>,
    title: Option<String>,
    date: Option<String>,
    journal: Option<String>,
) -> RawPublicationRecord {
    RawPublicationRecord {
        id,
        title,
        date,
        journal,
        source_type: SourceType::Pubmed,
    }
}

/// Read PubMed publications from a CSV file.
pub fn read_csv(path: &Path) -> Result<Vec<RawPublicationRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read PubMed CSV: {}", path.display()))?;
    let rows = parse_csv(&content)
        .with_context(|| format!("Failed to parse PubMed CSV: {}", path.display()))?;
    log::info!("Read {} PubMed rows from {}", rows.len(), path.display());
    Ok(rows)
}

fn parse_csv(content: &str) -> Result<Vec<RawPublicationRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());
    let mut rows = Vec::new();
    for row in reader.deserialize::<PubmedCsvRow>() {
        let row = row?;
        rows.push(to_record(row.id, row.title, row.date, row.journal));
    }
    Ok(rows)
}

/// Read PubMed publications from a JSON array file.
pub fn read_json(path: &Path) -> Result<Vec<RawPublicationRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read PubMed JSON: {}", path.display()))?;
    let rows = parse_json(&content)
        .with_context(|| format!("Failed to parse PubMed JSON: {}", path.display()))?;
    log::info!("Read {} PubMed rows from {}", rows.len(), path.display());
    Ok(rows)
}

fn parse_json(content: &str) -> Result<Vec<RawPublicationRecord>> {
    let rows: Vec<PubmedJsonRow> = match serde_json::from_str(content) {
        Ok(rows) => rows,
        Err(e) => {
            log::warn!("Strict JSON parsing failed ({e}), retrying after trailing-comma repair");
            serde_json::from_str(&strip_trailing_commas(content))?
        }
    };
    Ok(rows
        .into_iter()
        .map(|row| to_record(row.id, row.title, row.date, row.journal))
        .collect())
}

/// Remove commas that directly precede `]` or `}` outside string literals.
fn strip_trailing_commas(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut in_string = false;
    let mut escaped = false;

    for c in content.chars() {
        if in_string {
            match c {
                '\\' if !escaped => escaped = true,
                '"' if !escaped => in_string = false,
                _ => escaped = false,
            }
            out.push(c);
            continue;
        }
        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            ']' | '}' => {
                // drop a comma left dangling before the closer
                let trimmed_len = out.trim_end().len();
                if trimmed_len > 0 && out.as_bytes()[trimmed_len - 1] == b',' {
                    let ws = out.split_off(trimmed_len);
                    out.pop();
                    out.push_str(&ws);
                }
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}
