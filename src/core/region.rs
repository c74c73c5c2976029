use serde::{Deserialize, Serialize};

/// Label of an annotated region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "char", into = "char")]
pub enum RegionType {
    /// Membrane-crossing helix (`H`, raw membrane label `M` included)
    Helix,
    /// Membrane-crossing beta strand (`B`)
    Beta,
    /// Loop or re-entrant region (`L`)
    Loop,
    /// Any other label, kept as-is (e.g. `G` for 3-10 helix, `1`/`2` for sides)
    Other(char),
}

impl RegionType {
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Helix => 'H',
            Self::Beta => 'B',
            Self::Loop => 'L',
            Self::Other(c) => c,
        }
    }

    /// Byte written into a topology string for this label
    ///
    /// Non-ASCII labels never appear in topology strings; they map to `?`.
    #[must_use]
    pub fn as_byte(self) -> u8 {
        let c = self.as_char();
        if c.is_ascii() {
            c as u8
        } else {
            b'?'
        }
    }
}

impl From<char> for RegionType {
    fn from(c: char) -> Self {
        match c {
            'H' | 'M' => Self::Helix,
            'B' => Self::Beta,
            'L' => Self::Loop,
            other => Self::Other(other),
        }
    }
}

impl From<RegionType> for char {
    fn from(kind: RegionType) -> Self {
        kind.as_char()
    }
}

impl std::fmt::Display for RegionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One annotated region of a chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// First residue, zero-based sequence index
    pub start: usize,

    /// Last residue, zero-based sequence index (inclusive)
    pub end: usize,

    #[serde(rename = "type")]
    pub kind: RegionType,

    /// Author (PDB) residue number of `start`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_start: Option<i64>,

    /// Author (PDB) residue number of `end`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_end: Option<i64>,
}

impl Region {
    pub fn new(start: usize, end: usize, kind: RegionType) -> Self {
        Self {
            start,
            end,
            kind,
            auth_start: None,
            auth_end: None,
        }
    }

    #[must_use]
    pub fn with_auth(mut self, auth_start: i64, auth_end: i64) -> Self {
        self.auth_start = Some(auth_start);
        self.auth_end = Some(auth_end);
        self
    }

    /// Residue in the middle of the region, rounded down
    #[must_use]
    pub fn midpoint(&self) -> usize {
        (self.start + self.end) / 2
    }

    /// True when `next` starts right after this region in author numbering
    ///
    /// Regions without author numbering are never contiguous.
    #[must_use]
    pub fn is_auth_contiguous_with(&self, next: &Region) -> bool {
        match (self.auth_end, next.auth_start) {
            (Some(end), Some(start)) => start.checked_sub(end) == Some(1),
            _ => false,
        }
    }
}
