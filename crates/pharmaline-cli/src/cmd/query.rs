//! Query subcommand - rankings over the mention graph
//!
//! The graph is rebuilt in memory from the input files for each query; there
//! is no cross-run persistence, and the exported JSON is one-way output for
//! downstream consumers.

use anyhow::Result;
use clap::{Args, Subcommand};

use pharmaline_graph::{MentionGraph, journals_with_most_distinct_drugs, top_journals_for_drug};

use crate::cmd::{self, InputArgs};
use crate::config::Config;

#[derive(Args, Debug)]
pub struct QueryArgs {
    #[command(subcommand)]
    pub command: QueryCommand,
}

#[derive(Subcommand, Debug)]
pub enum QueryCommand {
    /// Journals with the most mentions of one drug
    TopJournal {
        /// Drug name (case-insensitive)
        #[arg(long)]
        drug: String,

        #[command(flatten)]
        inputs: InputArgs,
    },
    /// Journal(s) mentioning the most distinct drugs
    TopCoverage {
        #[command(flatten)]
        inputs: InputArgs,
    },
}

pub fn run(args: QueryArgs, config: &Config) -> Result<()> {
    match args.command {
        QueryCommand::TopJournal { drug, inputs } => {
            let graph = build(&inputs, config)?;
            let ranking = top_journals_for_drug(&graph, &drug);
            if ranking.is_empty() {
                println!("No journal mentions '{drug}'");
            } else {
                println!("Top journal(s) for '{drug}' ({} mentions):", ranking.count);
                for journal in &ranking.journals {
                    println!("  {journal}");
                }
            }
        }
        QueryCommand::TopCoverage { inputs } => {
            let graph = build(&inputs, config)?;
            let ranking = journals_with_most_distinct_drugs(&graph);
            if ranking.is_empty() {
                println!("No journals found");
            } else {
                println!(
                    "Journal(s) mentioning the most distinct drugs ({} drugs):",
                    ranking.count
                );
                for journal in &ranking.journals {
                    println!("  {journal}");
                }
            }
        }
    }
    Ok(())
}

fn build(inputs: &InputArgs, config: &Config) -> Result<MentionGraph> {
    let (raw_drugs, raw_publications) = cmd::load_inputs(inputs, config)?;
    let build = pharmaline_graph::build_graph(&raw_drugs, &raw_publications)?;
    build.quality.log();
    Ok(build.graph)
}
