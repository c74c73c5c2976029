use std::collections::BTreeMap;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::comparison::{ComparisonResult, DifferenceFlags, DifferenceKind};

/// Codes that hit one discrepancy category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    pub category: String,
    pub count: usize,
    pub codes: Vec<String>,
}

/// Aggregated outcome of a batch comparison
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    #[serde(rename = "generated_at")]
    pub generated_at: DateTime<Utc>,

    /// Number of compared codes
    pub total: usize,

    /// Number of codes without any discrepancy
    pub clean: usize,

    /// Non-empty categories in taxonomy order
    pub by_categories: Vec<CategoryGroup>,

    /// Full results of the codes that are not clean
    pub details_by_codes: BTreeMap<String, ComparisonResult>,

    /// Flags of every compared code, for the overview table
    #[serde(skip)]
    overview: Vec<(String, DifferenceFlags)>,
}

impl BatchReport {
    /// Group results by category; results are expected sorted by code
    #[must_use]
    pub fn from_results(results: Vec<ComparisonResult>) -> Self {
        let total = results.len();
        let overview = results
            .iter()
            .map(|r| (r.code.clone(), r.flags))
            .collect();

        let mut by_categories: Vec<CategoryGroup> = Vec::new();
        for category in DifferenceKind::ALL.iter().filter_map(|k| k.category()) {
            if by_categories.iter().any(|g| g.category == category) {
                continue;
            }
            let codes: Vec<String> = results
                .iter()
                .filter(|r| r.has_category(category))
                .map(|r| r.code.clone())
                .collect();
            if !codes.is_empty() {
                by_categories.push(CategoryGroup {
                    category: category.to_string(),
                    count: codes.len(),
                    codes,
                });
            }
        }

        let details_by_codes: BTreeMap<String, ComparisonResult> = results
            .into_iter()
            .filter(|r| !r.is_clean())
            .map(|r| (r.code.clone(), r))
            .collect();

        Self {
            generated_at: Utc::now(),
            total,
            clean: total - details_by_codes.len(),
            by_categories,
            details_by_codes,
            overview,
        }
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.total - self.clean
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write the flags overview: a `code` column and one 0/1 column per flag
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_overview_tsv<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        writeln!(out, "code\t{}", DifferenceFlags::columns().join("\t"))?;
        for (code, flags) in &self.overview {
            let row: Vec<String> = flags.row().iter().map(ToString::to_string).collect();
            writeln!(out, "{code}\t{}", row.join("\t"))?;
        }
        Ok(())
    }
}
