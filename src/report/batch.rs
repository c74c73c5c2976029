use std::io::BufRead;
use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::comparison::{ComparisonResult, DifferenceClassifier};
use crate::parsing::record::{load_record_from_dir, record_code};
use crate::parsing::ParseError;

/// Read a code list: the first whitespace-separated token of each line
///
/// Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns an error if the reader fails.
pub fn read_code_list<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut codes = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let Some(code) = line.split_whitespace().next() else {
            continue;
        };
        if code.starts_with('#') {
            continue;
        }
        codes.push(code.to_string());
    }
    Ok(codes)
}

/// Codes with a record file in `dir`, in either layout, sorted and deduplicated
///
/// # Errors
///
/// Returns an error if the directory cannot be listed.
pub fn discover_codes(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut codes = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            for inner in std::fs::read_dir(&path)? {
                codes.extend(record_code(&inner?.path()));
            }
        } else {
            codes.extend(record_code(&path));
        }
    }
    codes.sort();
    codes.dedup();
    Ok(codes)
}

/// Load and compare the two records of one code
///
/// # Errors
///
/// Returns an error if either record file exists but cannot be loaded.
pub fn compare_code(
    code: &str,
    old_dir: &Path,
    new_dir: &Path,
    classifier: &DifferenceClassifier,
) -> Result<ComparisonResult, ParseError> {
    let old = load_record_from_dir(old_dir, code)?;
    let new = load_record_from_dir(new_dir, code)?;
    Ok(classifier.compare(&old, &new))
}

/// Compare every code in parallel; results come back sorted by code
///
/// A code whose record file cannot be read yields a fatal-error result instead
/// of aborting the batch. Unparseable files are compared as missing records.
pub fn run_batch(
    codes: &[String],
    old_dir: &Path,
    new_dir: &Path,
    classifier: &DifferenceClassifier,
) -> Vec<ComparisonResult> {
    info!(codes = codes.len(), "Comparing structures");

    let mut results: Vec<ComparisonResult> = codes
        .par_iter()
        .map(|code| match compare_code(code, old_dir, new_dir, classifier) {
            Ok(result) => {
                debug!(code = %code, clean = result.is_clean(), "Compared");
                result
            }
            Err(e) => {
                warn!(code = %code, error = %e, "Comparison failed");
                ComparisonResult::fatal(code.as_str(), e)
            }
        })
        .collect();
    results.sort_by(|a, b| a.code.cmp(&b.code));

    let failed = results.iter().filter(|r| !r.is_clean()).count();
    info!(total = results.len(), failed, "Batch finished");
    results
}
