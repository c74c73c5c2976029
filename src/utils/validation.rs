//! Centralized validation and helper functions.

/// Maximum number of chains accepted in a single record file (DOS protection)
pub const MAX_CHAINS: usize = 10_000;

/// Strip whitespace from a raw sequence and turn unknown residues (`?`) into `X`.
///
/// # Examples
///
/// ```
/// use tm_diff::utils::validation::clean_sequence;
///
/// assert_eq!(clean_sequence("MKV\n  LL?A\t"), "MKVLLXA");
/// ```
#[must_use]
pub fn clean_sequence(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == '?' { 'X' } else { c })
        .collect()
}

/// Validate that a string looks like a PDB code: four alphanumeric characters,
/// the first one a digit.
///
/// # Examples
///
/// ```
/// use tm_diff::utils::validation::is_valid_pdb_code;
///
/// assert!(is_valid_pdb_code("1a0s"));
/// assert!(!is_valid_pdb_code("../etc"));
/// assert!(!is_valid_pdb_code("abcd"));
/// ```
#[must_use]
pub fn is_valid_pdb_code(s: &str) -> bool {
    s.len() == 4
        && s.chars().all(|c| c.is_ascii_alphanumeric())
        && s.starts_with(|c: char| c.is_ascii_digit())
}

/// Name of the sharded subdirectory a PDB code lives in: its two middle
/// characters (`1a0s` -> `a0`).
///
/// Returns `None` for strings that are not PDB codes.
#[must_use]
pub fn shard_dir(code: &str) -> Option<&str> {
    if is_valid_pdb_code(code) {
        code.get(1..3)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_sequence() {
        assert_eq!(clean_sequence(""), "");
        assert_eq!(clean_sequence(" A C\r\nD?"), "ACDX");
    }

    #[test]
    fn test_pdb_codes() {
        assert!(is_valid_pdb_code("7XYZ"));
        assert!(!is_valid_pdb_code("1a0"));
        assert!(!is_valid_pdb_code("1a0s5"));
        assert!(!is_valid_pdb_code("1a/s"));
    }

    #[test]
    fn test_shard_dir() {
        assert_eq!(shard_dir("1a0s"), Some("a0"));
        assert_eq!(shard_dir("bad"), None);
    }
}
