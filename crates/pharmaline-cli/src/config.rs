//! Configuration loading from TOML files

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Global configuration for pharmaline
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// Default input file locations; CLI arguments override per run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub drugs: PathBuf,
    pub pubmed_csv: PathBuf,
    /// Second PubMed feed delivered as JSON
    pub pubmed_json: Option<PathBuf>,
    pub trials: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            drugs: PathBuf::from("data/input/drugs.csv"),
            pubmed_csv: PathBuf::from("data/input/pubmed.csv"),
            pubmed_json: Some(PathBuf::from("data/input/pubmed.json")),
            trials: PathBuf::from("data/input/clinical_trials.csv"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub graph_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            graph_path: PathBuf::from("data/output/drug_mentions_graph.json"),
        }
    }
}

impl Config {
    /// Load configuration from default locations
    ///
    /// Search order:
    /// 1. ./pharmaline.toml (current directory)
    /// 2. ~/.config/pharmaline/config.toml
    ///
    /// If no config file found, returns default config.
    pub fn load() -> Result<Self> {
        let local_config = PathBuf::from("pharmaline.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = directories::ProjectDirs::from("", "", "pharmaline") {
            let user_config = config_dir.config_dir().join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
