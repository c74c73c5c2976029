//! Loading of normalized annotation records.
//!
//! Both TmDet generations are converted into one JSON shape before
//! comparison (see [`record`]). Files may be plain or gzip compressed:
//!
//! - `<code>.json`
//! - `<code>.json.gz`
//!
//! ## Normalization
//!
//! Loading applies the rules every record must satisfy before comparison:
//!
//! | Rule | Example |
//! |------|---------|
//! | Anonymous chain id becomes `A` | `_` -> `A` |
//! | Membrane region label becomes helix | `M` -> `H` |
//! | Sequence whitespace removed, unknown residues become `X` | `"MK ?"` -> `"MKX"` |
//! | Chains that are neither alpha nor beta are dropped | `type: "non_tm"` |
//!
//! A record file that does not exist, or whose content cannot be parsed, is not
//! an error: it is the `missing` record, which still takes part in the
//! comparison. Only a file that cannot be read at all fails.

use thiserror::Error;

pub mod record;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid record JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid record: {0}")]
    InvalidFormat(String),

    #[error("Duplicate chain id '{0}'")]
    DuplicateChain(String),

    #[error("Too many chains: {0} exceeds maximum allowed (10000)")]
    TooManyChains(usize),
}

impl ParseError {
    /// The file was read but its content is not a usable record
    #[must_use]
    pub fn is_unparseable(&self) -> bool {
        match self {
            Self::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::InvalidData
                    | std::io::ErrorKind::InvalidInput
                    | std::io::ErrorKind::UnexpectedEof
            ),
            Self::Json(_)
            | Self::InvalidFormat(_)
            | Self::DuplicateChain(_)
            | Self::TooManyChains(_) => true,
        }
    }
}
