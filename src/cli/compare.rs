use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::warn;

use crate::cli::OutputFormat;
use crate::comparison::{ComparisonConfig, ComparisonResult, DifferenceClassifier, DifferenceFlags};
use crate::core::structure::StructureRecord;
use crate::parsing::record::{load_record_or_missing, record_code};

#[derive(Args)]
pub struct CompareArgs {
    /// Record produced by the reference run (.json or .json.gz)
    #[arg(required = true)]
    pub old: PathBuf,

    /// Record produced by the new run (.json or .json.gz)
    #[arg(required = true)]
    pub new: PathBuf,
}

pub fn run(
    args: CompareArgs,
    config: ComparisonConfig,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let old = read_input(&args.old)?;
    let new = read_input(&args.new)?;

    if verbose {
        eprintln!("Old: {} chains ({})", old.chains.len(), args.old.display());
        eprintln!("New: {} chains ({})", new.chains.len(), args.new.display());
    }

    let result = DifferenceClassifier::new(config).compare(&old, &new);

    match format {
        OutputFormat::Text => print_text_result(&result, verbose),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Tsv => print_tsv_result(&result),
    }

    Ok(())
}

/// A record file that does not exist or cannot be parsed compares as the missing record
fn read_input(path: &Path) -> anyhow::Result<StructureRecord> {
    let code = record_code(path).unwrap_or_else(|| path.display().to_string());
    if !path.exists() {
        warn!(path = %path.display(), "Record file not found, comparing as missing");
        return Ok(StructureRecord::missing(code));
    }
    load_record_or_missing(path, &code)
        .with_context(|| format!("Failed to load {}", path.display()))
}

fn print_text_result(result: &ComparisonResult, verbose: bool) {
    println!("Comparison of {}", result.code);
    println!("{}", "=".repeat(60));

    println!("\nOld chains: {}", join_ids(&result.old_summary.chains));
    println!("New chains: {}", join_ids(&result.new_summary.chains));

    if result.is_clean() {
        println!("\nResult: no differences");
    } else {
        println!("\nResult: {} categories", result.categories.len());
        for category in &result.categories {
            println!("  - {category}");
        }
    }

    let set: Vec<String> = result.flags.iter_set().map(|k| k.to_string()).collect();
    if !set.is_empty() {
        println!("\nFlags: {}", set.join(", "));
    }

    if !result.messages.is_empty() {
        println!("\nMessages:");
        for message in &result.messages {
            println!("  {message}");
        }
    }

    if verbose {
        for chain in &result.chains {
            println!("\nChain {} ({})", chain.chain, describe(chain.diff.is_acceptable()));
            println!("  old: {}", chain.old_topology);
            println!("  new: {}", chain.new_topology);
        }
    }
}

fn print_tsv_result(result: &ComparisonResult) {
    println!("code\t{}", DifferenceFlags::columns().join("\t"));
    let row: Vec<String> = result.flags.row().iter().map(ToString::to_string).collect();
    println!("{}\t{}", result.code, row.join("\t"));
}

fn join_ids<T: std::fmt::Display>(ids: &[T]) -> String {
    if ids.is_empty() {
        "-".to_string()
    } else {
        ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    }
}

fn describe(acceptable: bool) -> &'static str {
    if acceptable {
        "topologies agree"
    } else {
        "topologies differ"
    }
}
