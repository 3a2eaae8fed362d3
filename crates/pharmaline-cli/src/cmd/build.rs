//! Build subcommand - construct the mention graph and export it

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use pharmaline_graph::GraphExport;

use crate::cmd::{self, InputArgs};
use crate::config::Config;

#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Output path for the graph JSON
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: BuildArgs, config: &Config) -> Result<()> {
    let (raw_drugs, raw_publications) = cmd::load_inputs(&args.inputs, config)?;

    let build = pharmaline_graph::build_graph(&raw_drugs, &raw_publications)?;
    build.quality.log();
    eprintln!("{}", build.quality.format_table());

    let output = args
        .output
        .unwrap_or_else(|| config.output.graph_path.clone());
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output dir: {}", parent.display()))?;
    }
    let json = GraphExport::from_graph(&build.graph).to_json_pretty()?;
    std::fs::write(&output, json)
        .with_context(|| format!("Failed to write graph: {}", output.display()))?;

    println!();
    println!("=== Build Summary ===");
    println!("Drugs: {}", build.graph.drug_count());
    println!("Journals: {}", build.graph.journal_count());
    println!("Mentions: {}", build.graph.len());
    println!("Graph written to {}", output.display());

    Ok(())
}
