//! Drug reference list adapter (`atccode,drug` CSV)

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use pharmaline_core::RawDrugRecord;

/// Row shape of the drug list file.
#[derive(Debug, Deserialize)]
struct DrugRow {
    #[serde(default)]
    atccode: Option<String>,
    #[serde(rename = "drug", default)]
    name: Option<String>,
}

/// Read the drug reference list from a CSV file.
pub fn read_csv(path: &Path) -> Result<Vec<RawDrugRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read drug list: {}", path.display()))?;
    let rows = parse_csv(&content)
        .with_context(|| format!("Failed to parse drug list: {}", path.display()))?;
    log::info!("Read {} drug rows from {}", rows.len(), path.display());
    Ok(rows)
}

fn parse_csv(content: &str) -> Result<Vec<RawDrugRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());
    let mut rows = Vec::new();
    for row in reader.deserialize::<DrugRow>() {
        let row = row?;
        rows.push(RawDrugRecord {
            atccode: row.atccode,
            name: row.name,
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parse_basic_rows() {
        let rows = parse_csv("atccode,drug\nA04AD,DIPHENHYDRAMINE\nA01AD,EPINEPHRINE\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].atccode.as_deref(), Some("A04AD"));
        assert_eq!(rows[0].name.as_deref(), Some("DIPHENHYDRAMINE"));
    }

    #[test]
    fn parse_short_row_yields_missing_field() {
        let rows = parse_csv("atccode,drug\nA04AD\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, None);
    }

    #[test]
    fn read_missing_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let err = read_csv(&dir.path().join("nope.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read drug list"));
    }

    #[test]
    fn read_csv_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("drugs.csv");
        std::fs::write(&path, "atccode,drug\nR01AD,BETAMETHASONE\n").unwrap();
        let rows = read_csv(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name.as_deref(), Some("BETAMETHASONE"));
    }
}
