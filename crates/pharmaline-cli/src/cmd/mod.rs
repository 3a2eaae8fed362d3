//! CLI subcommands

pub mod build;
pub mod query;

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use pharmaline_core::{RawDrugRecord, RawPublicationRecord};

use crate::config::Config;

/// Input file overrides shared by subcommands; the config file supplies
/// defaults for whatever is not given.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Drug list CSV (atccode,drug)
    #[arg(long)]
    pub drugs: Option<PathBuf>,

    /// PubMed publications CSV
    #[arg(long)]
    pub pubmed_csv: Option<PathBuf>,

    /// PubMed publications JSON
    #[arg(long)]
    pub pubmed_json: Option<PathBuf>,

    /// Clinical trials CSV
    #[arg(long)]
    pub trials: Option<PathBuf>,
}

/// Read every configured input source into raw records.
pub fn load_inputs(
    args: &InputArgs,
    config: &Config,
) -> Result<(Vec<RawDrugRecord>, Vec<RawPublicationRecord>)> {
    let drugs_path = args
        .drugs
        .clone()
        .unwrap_or_else(|| config.input.drugs.clone());
    let pubmed_csv = args
        .pubmed_csv
        .clone()
        .unwrap_or_else(|| config.input.pubmed_csv.clone());
    let pubmed_json = args
        .pubmed_json
        .clone()
        .or_else(|| config.input.pubmed_json.clone());
    let trials = args
        .trials
        .clone()
        .unwrap_or_else(|| config.input.trials.clone());

    let raw_drugs = pharmaline_ingest::drugs::read_csv(&drugs_path)?;
    let mut raw_publications = pharmaline_ingest::pubmed::read_csv(&pubmed_csv)?;
    if let Some(path) = pubmed_json {
        raw_publications.extend(pharmaline_ingest::pubmed::read_json(&path)?);
    }
    raw_publications.extend(pharmaline_ingest::trials::read_csv(&trials)?);

    Ok((raw_drugs, raw_publications))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args_for(dir: &std::path::Path, pubmed_json: Option<PathBuf>) -> InputArgs {
        InputArgs {
            drugs: Some(dir.join("drugs.csv")),
            pubmed_csv: Some(dir.join("pubmed.csv")),
            pubmed_json,
            trials: Some(dir.join("clinical_trials.csv")),
        }
    }

    #[test]
    fn load_inputs_reads_all_sources() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("drugs.csv"), "atccode,drug\nA,ethanol\n").unwrap();
        std::fs::write(
            dir.path().join("pubmed.csv"),
            "id,title,date,journal\n1,ethanol a,2020-01-01,J\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("pubmed.json"),
            r#"[{"id": "2", "title": "ethanol b", "date": "2020-01-02", "journal": "J"}]"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("clinical_trials.csv"),
            "id,scientific_title,date,journal\nNCT1,ethanol c,2020-01-03,J\n",
        )
        .unwrap();

        let args = args_for(dir.path(), Some(dir.path().join("pubmed.json")));
        let (drugs, publications) = load_inputs(&args, &Config::default()).unwrap();
        assert_eq!(drugs.len(), 1);
        assert_eq!(publications.len(), 3);
    }

    #[test]
    fn load_inputs_missing_file_errors_with_path() {
        let dir = TempDir::new().unwrap();
        let args = args_for(dir.path(), None);
        let err = load_inputs(&args, &Config::default()).unwrap_err();
        assert!(format!("{err:#}").contains("drug list"));
    }
}
