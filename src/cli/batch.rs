use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::cli::OutputFormat;
use crate::comparison::{ComparisonConfig, DifferenceClassifier};
use crate::report::{discover_codes, read_code_list, run_batch, BatchReport};

#[derive(Args)]
pub struct BatchArgs {
    /// Directory of records produced by the reference run
    #[arg(long, required = true)]
    pub old_dir: PathBuf,

    /// Directory of records produced by the new run
    #[arg(long, required = true)]
    pub new_dir: PathBuf,

    /// File listing the codes to compare, one per line (default: every
    /// record found in either directory)
    #[arg(long)]
    pub codes: Option<PathBuf>,

    /// Write the JSON report to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the flags overview table (TSV) to this file
    #[arg(long)]
    pub overview: Option<PathBuf>,

    /// Number of worker threads (default: one per core)
    #[arg(short, long)]
    pub threads: Option<usize>,
}

pub fn run(
    args: BatchArgs,
    config: ComparisonConfig,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    if let Some(num_threads) = args.threads {
        info!("Setting rayon global thread pool to {num_threads} threads");
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .context("Failed to build global thread pool")?;
    }

    let codes = collect_codes(&args)?;
    if verbose {
        eprintln!("Comparing {} structures", codes.len());
    }

    let classifier = DifferenceClassifier::new(config);
    let results = run_batch(&codes, &args.old_dir, &args.new_dir, &classifier);
    let report = BatchReport::from_results(results);

    if let Some(path) = &args.output {
        std::fs::write(path, report.to_json()?)
            .with_context(|| format!("Failed to write report {}", path.display()))?;
        if verbose {
            eprintln!("Report written to {}", path.display());
        }
    }

    if let Some(path) = &args.overview {
        let file = File::create(path)
            .with_context(|| format!("Failed to create overview {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        report.write_overview_tsv(&mut writer)?;
        writer.flush()?;
    }

    match format {
        OutputFormat::Text => print_text_report(&report),
        OutputFormat::Json => {
            if args.output.is_none() {
                println!("{}", report.to_json()?);
            }
        }
        OutputFormat::Tsv => {
            let stdout = std::io::stdout();
            report.write_overview_tsv(stdout.lock())?;
        }
    }

    Ok(())
}

fn collect_codes(args: &BatchArgs) -> anyhow::Result<Vec<String>> {
    if let Some(path) = &args.codes {
        let file = File::open(path)
            .with_context(|| format!("Failed to open code list {}", path.display()))?;
        return Ok(read_code_list(BufReader::new(file))?);
    }

    let mut codes = discover_codes(&args.old_dir)
        .with_context(|| format!("Failed to list {}", args.old_dir.display()))?;
    codes.extend(
        discover_codes(&args.new_dir)
            .with_context(|| format!("Failed to list {}", args.new_dir.display()))?,
    );
    codes.sort();
    codes.dedup();
    Ok(codes)
}

fn print_text_report(report: &BatchReport) {
    println!("Batch Comparison");
    println!("{}", "=".repeat(60));
    println!("  Structures: {}", report.total);
    println!("  Clean:      {}", report.clean);
    println!("  Differing:  {}", report.failed());

    if report.by_categories.is_empty() {
        return;
    }

    println!("\n{:<50} {:>8}", "Category", "Count");
    println!("{}", "-".repeat(60));
    for group in &report.by_categories {
        println!("{:<50} {:>8}", group.category, group.count);
    }
}
