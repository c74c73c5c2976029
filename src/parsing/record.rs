//! Parser for normalized TmDet record files.
//!
//! ```json
//! {
//!   "code": "1a0s",
//!   "is_transmembrane": true,
//!   "protein_type": "Tm_Alpha",
//!   "chains": [
//!     {"id": "A", "type": "alpha", "sequence": "MKV...", "num_tm": 1,
//!      "regions": [{"start": 10, "end": 30, "type": "H"}]}
//!   ],
//!   "deleted_chains": [],
//!   "added_chains": []
//! }
//! ```

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::core::chain::Chain;
use crate::core::structure::StructureRecord;
use crate::core::types::{ChainId, ProteinType, TmStatus};
use crate::parsing::ParseError;
use crate::utils::validation::{clean_sequence, shard_dir, MAX_CHAINS};

/// File suffixes tried when looking a record up by code, in order
const RECORD_SUFFIXES: [&str; 2] = [".json", ".json.gz"];

/// On-disk shape of a record; chains are a list so duplicates can be detected
#[derive(Debug, Deserialize)]
struct RecordFile {
    #[serde(default)]
    code: Option<String>,

    is_transmembrane: TmStatus,

    #[serde(default = "missing_protein_type")]
    protein_type: ProteinType,

    #[serde(default)]
    chains: Vec<Chain>,

    #[serde(default)]
    deleted_chains: Vec<ChainId>,

    #[serde(default)]
    added_chains: Vec<ChainId>,
}

fn missing_protein_type() -> ProteinType {
    ProteinType::Missing
}

/// Check if the path is a gzipped file
#[must_use]
fn is_gzipped(path: &Path) -> bool {
    path.to_string_lossy().ends_with(".gz")
}

/// Parse a record from JSON text
///
/// `code` is used when the file does not name its structure.
///
/// # Errors
///
/// Returns `ParseError::Json` if the text is not a record,
/// `ParseError::DuplicateChain` if a chain id occurs twice,
/// `ParseError::TooManyChains` if the record exceeds the chain limit, or
/// `ParseError::InvalidFormat` if a region has its end before its start.
pub fn parse_record_json(json: &str, code: &str) -> Result<StructureRecord, ParseError> {
    let file: RecordFile = serde_json::from_str(json)?;
    normalize(file, code)
}

fn normalize(file: RecordFile, code: &str) -> Result<StructureRecord, ParseError> {
    if file.chains.len() > MAX_CHAINS {
        return Err(ParseError::TooManyChains(file.chains.len()));
    }

    let code = file.code.unwrap_or_else(|| code.to_string());
    let mut record = StructureRecord::new(code, file.is_transmembrane, file.protein_type)
        .with_deleted_chains(file.deleted_chains)
        .with_added_chains(file.added_chains);

    let mut seen = BTreeSet::new();
    for mut chain in file.chains {
        if !seen.insert(chain.id.clone()) {
            return Err(ParseError::DuplicateChain(chain.id.to_string()));
        }
        if !chain.kind.is_comparable() {
            debug!(chain = %chain.id, kind = %chain.kind, "Skipping non-membrane chain");
            continue;
        }

        if let Some(region) = chain.regions.iter().find(|r| r.end < r.start) {
            return Err(ParseError::InvalidFormat(format!(
                "region {}-{} of chain {} ends before it starts",
                region.start, region.end, chain.id
            )));
        }
        chain.sequence = clean_sequence(&chain.sequence);
        chain.regions.sort_by_key(|r| r.start);
        record = record.with_chain(chain);
    }

    Ok(record)
}

/// Load a record file, plain or gzip compressed
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or any error of
/// [`parse_record_json`].
pub fn load_record(path: &Path, code: &str) -> Result<StructureRecord, ParseError> {
    let file = File::open(path)?;
    let mut json = String::new();
    if is_gzipped(path) {
        BufReader::new(GzDecoder::new(file)).read_to_string(&mut json)?;
    } else {
        BufReader::new(file).read_to_string(&mut json)?;
    }
    parse_record_json(&json, code)
}

/// Structure code named by a record file (`1a0s.json.gz` -> `1a0s`)
///
/// Returns `None` for files without a record suffix.
#[must_use]
pub fn record_code(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let code = RECORD_SUFFIXES
        .iter()
        .rev()
        .find_map(|suffix| name.strip_suffix(suffix))?;
    Some(code.to_string())
}

/// Find the record file of `code` under `dir`
///
/// Both the flat layout (`<dir>/<code>.json`) and the sharded layout
/// (`<dir>/<code[1..3]>/<code>.json`) are searched, each with and without
/// a `.gz` suffix.
#[must_use]
pub fn locate_record(dir: &Path, code: &str) -> Option<PathBuf> {
    let mut dirs = vec![dir.to_path_buf()];
    if let Some(shard) = shard_dir(code) {
        dirs.push(dir.join(shard));
    }

    dirs.iter()
        .flat_map(|d| RECORD_SUFFIXES.iter().map(move |s| d.join(format!("{code}{s}"))))
        .find(|p| p.is_file())
}

/// Load a record file, turning unparseable content into the missing record
///
/// # Errors
///
/// Returns `ParseError::Io` only when the file cannot be read at all.
pub fn load_record_or_missing(path: &Path, code: &str) -> Result<StructureRecord, ParseError> {
    match load_record(path, code) {
        Err(e) if e.is_unparseable() => {
            warn!(
                code,
                path = %path.display(),
                error = %e,
                "Unparseable record, comparing as missing"
            );
            Ok(StructureRecord::missing(code))
        }
        other => other,
    }
}

/// Load the record of `code` from `dir`, or the missing record if there is none
///
/// A record file that exists but cannot be parsed is also the missing record.
///
/// # Errors
///
/// Returns an error only when a record file exists but cannot be read.
pub fn load_record_from_dir(dir: &Path, code: &str) -> Result<StructureRecord, ParseError> {
    match locate_record(dir, code) {
        Some(path) => {
            debug!(code, path = %path.display(), "Loading record");
            load_record_or_missing(&path, code)
        }
        None => {
            debug!(code, dir = %dir.display(), "No record file found");
            Ok(StructureRecord::missing(code))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::region::RegionType;
    use crate::core::types::ChainType;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::TempDir;

    const RECORD: &str = r#"{
        "code": "1a0s",
        "is_transmembrane": "yes",
        "protein_type": "Tm_Alpha",
        "chains": [
            {"id": "_", "type": "alpha", "sequence": "MKV LL\n?A", "num_tm": 1,
             "regions": [
                {"start": 5, "end": 6, "type": "M"},
                {"start": 0, "end": 4, "type": "1"}
             ]},
            {"id": "W", "type": "non_tm", "sequence": "HOH"}
        ],
        "deleted_chains": ["C"]
    }"#;

    #[test]
    fn test_parse_normalizes_record() {
        let record = parse_record_json(RECORD, "xxxx").unwrap();
        assert_eq!(record.code, "1a0s");
        assert_eq!(record.is_transmembrane, TmStatus::Transmembrane);
        assert_eq!(record.protein_type, ProteinType::new("Tm_Alpha"));
        assert_eq!(record.chains.len(), 1);

        let chain = &record.chains["A"];
        assert_eq!(chain.kind, ChainType::Alpha);
        assert_eq!(chain.sequence, "MKVLLXA");
        assert_eq!(chain.regions[0].start, 0);
        assert_eq!(chain.regions[1].kind, RegionType::Helix);
        assert!(record.deleted_chains.contains("C"));
        assert!(record.added_chains.is_empty());
    }

    #[test]
    fn test_code_falls_back_to_argument() {
        let record = parse_record_json(r#"{"is_transmembrane": false}"#, "2xyz").unwrap();
        assert_eq!(record.code, "2xyz");
        assert_eq!(record.is_transmembrane, TmStatus::NotTransmembrane);
        assert_eq!(record.protein_type, ProteinType::Missing);
    }

    #[test]
    fn test_duplicate_chain_rejected() {
        let json = r#"{"is_transmembrane": true, "chains": [
            {"id": "A", "type": "alpha"}, {"id": "A", "type": "beta"}
        ]}"#;
        let err = parse_record_json(json, "1abc").unwrap_err();
        assert!(matches!(err, ParseError::DuplicateChain(id) if id == "A"));
    }

    #[test]
    fn test_reversed_region_rejected() {
        let json = r#"{"is_transmembrane": true, "chains": [
            {"id": "A", "type": "alpha", "regions": [{"start": 9, "end": 3, "type": "H"}]}
        ]}"#;
        assert!(matches!(
            parse_record_json(json, "1abc"),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            parse_record_json("{not json", "1abc"),
            Err(ParseError::Json(_))
        ));
    }

    #[test]
    fn test_load_gzipped_record() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("1a0s.json.gz");
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(RECORD.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let record = load_record(&path, "1a0s").unwrap();
        assert_eq!(record.chains.len(), 1);
    }

    #[test]
    fn test_locate_flat_and_sharded() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("1a0s.json"), RECORD).unwrap();
        std::fs::create_dir(dir.path().join("bc")).unwrap();
        std::fs::write(dir.path().join("bc").join("1bcd.json"), RECORD).unwrap();

        assert_eq!(
            locate_record(dir.path(), "1a0s"),
            Some(dir.path().join("1a0s.json"))
        );
        assert_eq!(
            locate_record(dir.path(), "1bcd"),
            Some(dir.path().join("bc").join("1bcd.json"))
        );
        assert_eq!(locate_record(dir.path(), "9zzz"), None);
    }

    #[test]
    fn test_record_code() {
        assert_eq!(record_code(Path::new("dir/1a0s.json")).as_deref(), Some("1a0s"));
        assert_eq!(record_code(Path::new("1a0s.json.gz")).as_deref(), Some("1a0s"));
        assert_eq!(record_code(Path::new("1a0s.xml")), None);
    }

    #[test]
    fn test_unparseable_file_is_missing_record() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("1a0s.json"), "{broken").unwrap();
        std::fs::write(dir.path().join("1bcd.json.gz"), "not gzip").unwrap();
        let reversed = r#"{"is_transmembrane": true, "chains": [
            {"id": "A", "type": "alpha", "regions": [{"start": 9, "end": 3, "type": "H"}]}
        ]}"#;
        std::fs::write(dir.path().join("2xyz.json"), reversed).unwrap();

        for code in ["1a0s", "1bcd", "2xyz"] {
            let record = load_record_from_dir(dir.path(), code).unwrap();
            assert!(record.is_missing(), "{code}");
            assert_eq!(record.code, code);
        }
    }

    #[test]
    fn test_absent_file_is_missing_record() {
        let dir = TempDir::new().unwrap();
        let record = load_record_from_dir(dir.path(), "9zzz").unwrap();
        assert!(record.is_missing());
        assert_eq!(record.code, "9zzz");
    }
}
