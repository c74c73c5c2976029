//! Command-line interface for tmdiff.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **compare**: Compare the old and new record of one structure
//! - **batch**: Compare every structure found in two record directories
//! - **config**: Print the effective comparison configuration
//!
//! ## Usage
//!
//! ```text
//! # Compare two record files
//! tmdiff compare old/1a0s.json new/1a0s.json
//!
//! # JSON output for scripting
//! tmdiff compare old/1a0s.json new/1a0s.json --format json
//!
//! # Compare a whole run, writing the grouped report and the flags overview
//! tmdiff batch --old-dir old --new-dir new --output report.json --overview flags.tsv
//!
//! # Start from the defaults when writing a configuration file
//! tmdiff config > tmdiff.json
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::comparison::ComparisonConfig;

pub mod batch;
pub mod compare;
pub mod config;

#[derive(Parser)]
#[command(name = "tmdiff")]
#[command(author = "TmDet developers")]
#[command(version)]
#[command(about = "Compare transmembrane annotation records of two TmDet generations")]
#[command(
    long_about = "tmdiff checks that a new TmDet run agrees with a reference run.\n\nFor every structure it reconciles biomatrix chain edits, compares transmembrane status, protein type, chain lists, TM region counts, helix boundaries and per-residue topologies, and classifies each disagreement into a fixed set of categories and flags."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Comparison configuration (JSON); unset fields keep their defaults
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare the old and new record of one structure
    Compare(compare::CompareArgs),

    /// Compare all structures of two record directories
    Batch(batch::BatchArgs),

    /// Print the effective comparison configuration
    Config,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load the configuration file if one was given, the defaults otherwise
pub fn load_config(path: Option<&Path>) -> anyhow::Result<ComparisonConfig> {
    match path {
        Some(path) => ComparisonConfig::load_from_file(path)
            .with_context(|| format!("Failed to load configuration {}", path.display())),
        None => Ok(ComparisonConfig::default()),
    }
}
