use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Sentinel used by record producers for summary values they could not determine
pub const MISSING: &str = "missing";

/// Identifier of a chain within a structure
///
/// The anonymous chain identifier `_` used by older PDB entries is stored as `A`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ChainId(String);

impl ChainId {
    pub fn new(s: impl Into<String>) -> Self {
        let s = s.into();
        if s == "_" {
            Self("A".to_string())
        } else {
            Self(s)
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ChainId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ChainId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<ChainId> for String {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

impl Borrow<str> for ChainId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Membrane class of a chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainType {
    /// Alpha-helical transmembrane chain
    Alpha,
    /// Beta-barrel transmembrane chain
    Beta,
    /// Anything else (soluble, non-protein, unknown)
    #[serde(other)]
    Other,
}

impl ChainType {
    /// Only alpha and beta chains take part in a comparison
    #[must_use]
    pub fn is_comparable(self) -> bool {
        matches!(self, Self::Alpha | Self::Beta)
    }
}

impl std::fmt::Display for ChainType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Alpha => write!(f, "alpha"),
            Self::Beta => write!(f, "beta"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Overall transmembrane status of a structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTmStatus", into = "RawTmStatus")]
pub enum TmStatus {
    Transmembrane,
    NotTransmembrane,
    /// The record could not be produced or read
    Missing,
}

impl std::fmt::Display for TmStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transmembrane => write!(f, "yes"),
            Self::NotTransmembrane => write!(f, "no"),
            Self::Missing => write!(f, "{MISSING}"),
        }
    }
}

/// Wire form of [`TmStatus`]: a boolean, or one of `yes`, `no`, `missing`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawTmStatus {
    Flag(bool),
    Label(String),
}

impl TryFrom<RawTmStatus> for TmStatus {
    type Error = String;

    fn try_from(raw: RawTmStatus) -> Result<Self, Self::Error> {
        match raw {
            RawTmStatus::Flag(true) => Ok(Self::Transmembrane),
            RawTmStatus::Flag(false) => Ok(Self::NotTransmembrane),
            RawTmStatus::Label(label) => match label.to_lowercase().as_str() {
                "yes" | "true" => Ok(Self::Transmembrane),
                "no" | "false" => Ok(Self::NotTransmembrane),
                MISSING => Ok(Self::Missing),
                other => Err(format!("invalid transmembrane status '{other}'")),
            },
        }
    }
}

impl From<TmStatus> for RawTmStatus {
    fn from(status: TmStatus) -> Self {
        match status {
            TmStatus::Transmembrane => Self::Flag(true),
            TmStatus::NotTransmembrane => Self::Flag(false),
            TmStatus::Missing => Self::Label(MISSING.to_string()),
        }
    }
}

/// Protein type reported for a structure (e.g. `Tm_Alpha`, `Tm_Beta`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProteinType {
    Known(String),
    Missing,
}

impl ProteinType {
    pub fn new(s: impl Into<String>) -> Self {
        Self::from(s.into())
    }
}

impl From<String> for ProteinType {
    fn from(s: String) -> Self {
        if s == MISSING {
            Self::Missing
        } else {
            Self::Known(s)
        }
    }
}

impl From<ProteinType> for String {
    fn from(protein_type: ProteinType) -> Self {
        match protein_type {
            ProteinType::Known(s) => s,
            ProteinType::Missing => MISSING.to_string(),
        }
    }
}

impl std::fmt::Display for ProteinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Known(s) => write!(f, "{s}"),
            Self::Missing => write!(f, "{MISSING}"),
        }
    }
}
