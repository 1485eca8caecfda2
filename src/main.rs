//! Simtable CLI
//!
//! Renders a set of word-similarity evaluation files as one LaTeX
//! comparison table. The last path on the command line is the output file;
//! everything before it is an input.

use anyhow::{Context, Result};
use clap::Parser;
use simtable::{build_table, write_table};
use std::path::PathBuf;

/// Render word-similarity evaluation results as a LaTeX comparison table
#[derive(Parser)]
#[command(name = "simtable")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input evaluation files, followed by the output file
    #[arg(required = true, num_args = 2.., value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Verify that every input reports the same benchmarks in the same order
    #[arg(long)]
    strict: bool,

    /// Also write the assembled table as pretty-printed JSON
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (output, inputs) = cli
        .files
        .split_last()
        .context("Expected one or more input files followed by an output file")?;

    let table = build_table(inputs, cli.strict).context("Failed to build comparison table")?;

    println!(
        "Assembled {} rows x {} benchmarks from {} files",
        table.rows.len(),
        table.columns.len(),
        inputs.len()
    );

    write_table(&table.to_latex(), output).context("Failed to write output table")?;
    println!("Table written to {}", output.display());

    if let Some(json_path) = cli.json {
        let json = serde_json::to_string_pretty(&table)?;
        std::fs::write(&json_path, json)
            .with_context(|| format!("Failed to write JSON results to {}", json_path.display()))?;
        println!("Results saved to {}", json_path.display());
    }

    Ok(())
}
