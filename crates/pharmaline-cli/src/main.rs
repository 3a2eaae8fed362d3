//! pharmaline - Drug-mention graph pipeline CLI
//!
//! Builds a graph linking drugs to the journals and publications that
//! mention them, and answers ranking queries over it.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cmd;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "pharmaline")]
#[command(about = "Drug-mention graph pipeline")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file path (default: ./pharmaline.toml or ~/.config/pharmaline/config.toml)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Build the mention graph and export it as JSON
    Build(cmd::build::BuildArgs),
    /// Run ranking queries over the mention graph
    Query(cmd::query::QueryArgs),
    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    pharmaline_core::init_logging(false, cli.debug);

    let config = if let Some(path) = cli.config {
        Config::from_file(&path)?
    } else {
        Config::load()?
    };

    match cli.command {
        Command::Build(args) => cmd::build::run(args, &config),
        Command::Query(args) => cmd::query::run(args, &config),
        Command::Config => {
            use comfy_table::{
                Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL,
            };

            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_header(vec![
                    Cell::new("Setting").fg(Color::Cyan),
                    Cell::new("Value").fg(Color::Cyan),
                ]);

            table.add_row(vec![
                "Drug list",
                &config.input.drugs.display().to_string(),
            ]);
            table.add_row(vec![
                "PubMed CSV",
                &config.input.pubmed_csv.display().to_string(),
            ]);
            table.add_row(vec![
                "PubMed JSON",
                &config
                    .input
                    .pubmed_json
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "not set".to_string()),
            ]);
            table.add_row(vec![
                "Clinical trials",
                &config.input.trials.display().to_string(),
            ]);
            table.add_row(vec![
                "Graph output",
                &config.output.graph_path.display().to_string(),
            ]);

            eprintln!("\n{table}");
            Ok(())
        }
    }
}
