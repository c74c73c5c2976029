use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::core::region::RegionType;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Default tolerance, in residues, for helix start/end positions
pub const DEFAULT_BOUNDARY_TOLERANCE: usize = 4;

/// Default number of unmatched runs tolerated on either side of a topology diff
pub const DEFAULT_MAX_UNMATCHED_RUNS: usize = 1;

/// Default shortest common run, in residues, that counts as a match
pub const DEFAULT_MIN_MATCHED_RUN: usize = 1;

/// Rules for turning a region list into a topology string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopologyConfig {
    /// Region labels written into the topology string; others are ignored
    pub labels: Vec<RegionType>,

    /// Clear the midpoint of a helix sandwiched between author-contiguous
    /// neighbors of the same type
    pub split_kinked_helices: bool,

    /// Neighbor type that never triggers a helix split (3-10 helix)
    pub kink_exempt_neighbor: RegionType,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            labels: vec![RegionType::Helix, RegionType::Beta, RegionType::Loop],
            split_kinked_helices: true,
            kink_exempt_neighbor: RegionType::Other('G'),
        }
    }
}

/// Verdict thresholds for the interval diff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifferConfig {
    /// Largest leftover run count on either side that still passes
    pub max_unmatched_runs: usize,

    /// Shortest common run that is matched and cleared; shorter overlaps are
    /// left for the leftover count
    pub min_matched_run: usize,
}

impl Default for DifferConfig {
    fn default() -> Self {
        Self {
            max_unmatched_runs: DEFAULT_MAX_UNMATCHED_RUNS,
            min_matched_run: DEFAULT_MIN_MATCHED_RUN,
        }
    }
}

/// Configuration of a whole structure comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Largest accepted |old - new| for helix start and end positions
    pub boundary_tolerance: usize,

    /// Protein type renames applied to both records (old name -> current name)
    pub protein_type_aliases: BTreeMap<String, String>,

    /// Protein types of the new record that accept whatever the old record says
    pub wildcard_protein_types: Vec<String>,

    pub topology: TopologyConfig,

    pub differ: DifferConfig,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        let mut protein_type_aliases = BTreeMap::new();
        protein_type_aliases.insert("Ca_Tm".to_string(), "Tm_Alpha".to_string());

        Self {
            boundary_tolerance: DEFAULT_BOUNDARY_TOLERANCE,
            protein_type_aliases,
            wildcard_protein_types: vec!["Tm_Mixed".to_string()],
            topology: TopologyConfig::default(),
            differ: DifferConfig::default(),
        }
    }
}

impl ComparisonConfig {
    /// Load a configuration from a JSON file; omitted fields keep their defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadError` if the file cannot be read,
    /// `ConfigError::ParseError` on malformed JSON, or `ConfigError::Invalid`
    /// if the values are unusable.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a configuration from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` on malformed JSON, or
    /// `ConfigError::Invalid` if the values are unusable.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration is usable
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if no topology label is configured or
    /// `differ.min_matched_run` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.topology.labels.is_empty() {
            return Err(ConfigError::Invalid(
                "topology.labels must name at least one region type".to_string(),
            ));
        }
        if self.differ.min_matched_run == 0 {
            return Err(ConfigError::Invalid(
                "differ.min_matched_run must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ComparisonConfig::from_json(r#"{"boundary_tolerance": 2}"#).unwrap();
        assert_eq!(config.boundary_tolerance, 2);
        assert_eq!(config.differ.max_unmatched_runs, DEFAULT_MAX_UNMATCHED_RUNS);
        assert_eq!(config.topology, TopologyConfig::default());
        assert_eq!(
            config.protein_type_aliases.get("Ca_Tm").map(String::as_str),
            Some("Tm_Alpha")
        );
    }

    #[test]
    fn test_nested_override() {
        let config =
            ComparisonConfig::from_json(r#"{"topology": {"labels": ["H", "B"]}}"#).unwrap();
        assert_eq!(
            config.topology.labels,
            vec![RegionType::Helix, RegionType::Beta]
        );
        assert!(config.topology.split_kinked_helices);
    }

    #[test]
    fn test_empty_labels_rejected() {
        let result = ComparisonConfig::from_json(r#"{"topology": {"labels": []}}"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_min_matched_run_rejected() {
        let result = ComparisonConfig::from_json(r#"{"differ": {"min_matched_run": 0}}"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_default_roundtrips_through_json() {
        let json = serde_json::to_string(&ComparisonConfig::default()).unwrap();
        assert_eq!(
            ComparisonConfig::from_json(&json).unwrap(),
            ComparisonConfig::default()
        );
    }
}
