//! End-to-end comparison scenarios
//!
//! Records are written as JSON the way the exporters produce them, loaded
//! through the record parser, and compared with the default configuration.

use serde_json::{json, Value};
use tm_diff::parsing::record::parse_record_json;
use tm_diff::{DifferenceClassifier, DifferenceKind, StructureRecord};

const LENGTH: usize = 200;

fn helix(start: usize, end: usize) -> Value {
    json!({"start": start, "end": end, "type": "H"})
}

fn chain(id: &str, num_tm: usize, regions: Vec<Value>) -> Value {
    json!({
        "id": id,
        "type": "alpha",
        "sequence": "A".repeat(LENGTH),
        "num_tm": num_tm,
        "regions": regions,
    })
}

fn record(value: &Value) -> StructureRecord {
    parse_record_json(&value.to_string(), "1abc").expect("valid record")
}

fn alpha_record(chains: Vec<Value>) -> Value {
    json!({
        "code": "1abc",
        "is_transmembrane": true,
        "protein_type": "Tm_Alpha",
        "chains": chains,
    })
}

#[test]
fn test_identical_records_are_clean() {
    let value = alpha_record(vec![chain("A", 2, vec![helix(10, 30), helix(50, 70)])]);
    let result = DifferenceClassifier::default().compare(&record(&value), &record(&value));

    assert!(result.is_clean(), "unexpected: {:?}", result.categories);
    assert!(result.messages.is_empty());
    assert_eq!(result.chains.len(), 1);
    assert!(result.chains[0].diff.is_acceptable());
}

#[test]
fn test_chain_deleted_in_new_is_reconciled() {
    let old = alpha_record(vec![
        chain("A", 1, vec![helix(10, 30)]),
        chain("B", 1, vec![helix(10, 30)]),
    ]);
    let mut new = alpha_record(vec![chain("A", 1, vec![helix(10, 30)])]);
    new["deleted_chains"] = json!(["B"]);

    let result = DifferenceClassifier::default().compare(&record(&old), &record(&new));

    assert!(result.has(DifferenceKind::OnlyNewHasDeletedChains));
    assert!(result.has(DifferenceKind::DeletedChainLists));
    assert!(!result.has(DifferenceKind::ChainLists));
    assert_eq!(
        result.categories,
        vec![
            "Only new record has deleted chains",
            "Deleted chain lists differ"
        ]
    );
    // Summaries keep the lists as they were before reconciliation
    assert_eq!(result.old_summary.chains.len(), 2);
    assert_eq!(result.new_summary.deleted_chains.len(), 1);
}

#[test]
fn test_tm_region_count_differs() {
    let regions = vec![helix(10, 30), helix(50, 70)];
    let old = alpha_record(vec![chain("A", 2, regions.clone())]);
    let new = alpha_record(vec![chain("A", 3, regions)]);

    let result = DifferenceClassifier::default().compare(&record(&old), &record(&new));

    assert_eq!(result.categories, vec!["Number of TM regions differs"]);
    assert!(result.messages[0].contains("chain: A"));
}

#[test]
fn test_helix_start_beyond_tolerance() {
    let old = alpha_record(vec![chain("A", 1, vec![helix(100, 120)])]);
    let new = alpha_record(vec![chain("A", 1, vec![helix(106, 120)])]);

    let result = DifferenceClassifier::default().compare(&record(&old), &record(&new));

    assert_eq!(result.categories, vec!["Region start or end in chain differs"]);
    assert!(result.has(DifferenceKind::RegionStart));
    assert!(!result.has(DifferenceKind::RegionEnd));
    // The overlapping helices still cancel out in the topology diff
    assert!(!result.has(DifferenceKind::Topology));
}

#[test]
fn test_helix_shift_within_tolerance() {
    let old = alpha_record(vec![chain("A", 1, vec![helix(100, 120)])]);
    let new = alpha_record(vec![chain("A", 1, vec![helix(104, 116)])]);

    let result = DifferenceClassifier::default().compare(&record(&old), &record(&new));
    assert!(result.is_clean());
}

#[test]
fn test_tmp_status_short_circuits() {
    let old = alpha_record(vec![chain("A", 1, vec![helix(10, 30)])]);
    let mut new = alpha_record(vec![chain("B", 4, vec![])]);
    new["is_transmembrane"] = json!(false);

    let result = DifferenceClassifier::default().compare(&record(&old), &record(&new));

    assert_eq!(result.categories, vec!["TMP attributes differ"]);
    assert!(result.has(DifferenceKind::TmpAttributes));
    assert!(!result.has(DifferenceKind::ChainLists));
    assert!(result.chains.is_empty());
}

#[test]
fn test_extra_helices_make_topologies_differ() {
    let old = alpha_record(vec![chain("A", 2, vec![helix(10, 30), helix(50, 70)])]);
    let new = alpha_record(vec![chain(
        "A",
        2,
        vec![helix(10, 30), helix(50, 70), helix(100, 120), helix(140, 160)],
    )]);

    let result = DifferenceClassifier::default().compare(&record(&old), &record(&new));

    assert_eq!(result.categories, vec!["Topologies differ"]);
    let message = result.messages.last().expect("topology message");
    assert!(message.contains("fp: 2 fn: 0"));
}

#[test]
fn test_one_extra_helix_is_tolerated() {
    let old = alpha_record(vec![chain("A", 2, vec![helix(10, 30), helix(50, 70)])]);
    let new = alpha_record(vec![chain(
        "A",
        2,
        vec![helix(10, 30), helix(50, 70), helix(100, 120)],
    )]);

    let result = DifferenceClassifier::default().compare(&record(&old), &record(&new));
    assert!(result.is_clean());
}

#[test]
fn test_missing_record_against_missing_record() {
    let result = DifferenceClassifier::default().compare(
        &StructureRecord::missing("1abc"),
        &StructureRecord::missing("1abc"),
    );
    assert!(result.is_clean());
}

#[test]
fn test_mixed_protein_type_adopts_old_value() {
    let old = alpha_record(vec![chain("A", 1, vec![helix(10, 30)])]);
    let mut new = old.clone();
    new["protein_type"] = json!("Tm_Mixed");
    let mut legacy = old.clone();
    legacy["protein_type"] = json!("Ca_Tm");

    let classifier = DifferenceClassifier::default();
    assert!(classifier.compare(&record(&old), &record(&new)).is_clean());
    assert!(classifier.compare(&record(&legacy), &record(&old)).is_clean());

    let mut beta = old.clone();
    beta["protein_type"] = json!("Tm_Beta");
    let result = classifier.compare(&record(&old), &record(&beta));
    assert_eq!(result.categories, vec!["Protein type differs"]);
}

#[test]
fn test_chain_type_differs() {
    let old = alpha_record(vec![chain("A", 1, vec![helix(10, 30)])]);
    let mut new = old.clone();
    new["chains"][0]["type"] = json!("beta");

    let result = DifferenceClassifier::default().compare(&record(&old), &record(&new));
    assert!(result.has(DifferenceKind::ChainType));
    assert!(result.chains.is_empty());
}

#[test]
fn test_sequence_length_mismatch() {
    let old = alpha_record(vec![chain("A", 1, vec![helix(10, 30)])]);
    let mut new = old.clone();
    new["chains"][0]["sequence"] = json!("A".repeat(LENGTH + 5));

    let result = DifferenceClassifier::default().compare(&record(&old), &record(&new));
    assert_eq!(result.categories, vec!["Topology lengths differ"]);
}

#[test]
fn test_length_mismatch_does_not_stop_other_chains() {
    let old = alpha_record(vec![
        chain("A", 1, vec![helix(10, 30)]),
        chain("B", 1, vec![helix(10, 30)]),
    ]);
    let mut new = alpha_record(vec![
        chain("A", 1, vec![helix(10, 30)]),
        chain("B", 2, vec![helix(10, 30)]),
    ]);
    new["chains"][0]["sequence"] = json!("A".repeat(LENGTH + 5));

    let result = DifferenceClassifier::default().compare(&record(&old), &record(&new));

    assert!(result.has_category("Topology lengths differ"));
    assert!(result.has_category("Number of TM regions differs"));
    assert!(result.messages.iter().any(|m| m.contains("chain: B")));
    let chains: Vec<&str> = result.chains.iter().map(|c| c.chain.as_str()).collect();
    assert_eq!(chains, vec!["A", "B"]);
    assert!(!result.chains[0].diff.is_acceptable());
    assert!(result.chains[1].diff.is_acceptable());
}

#[test]
fn test_non_membrane_records_ignore_protein_type() {
    let old = json!({"is_transmembrane": "no", "protein_type": "Soluble"});
    let new = json!({"is_transmembrane": false, "protein_type": "missing"});

    let result = DifferenceClassifier::default().compare(&record(&old), &record(&new));
    assert!(result.is_clean(), "unexpected: {:?}", result.categories);
}

#[test]
fn test_result_serializes_flags_in_camel_case() {
    let old = alpha_record(vec![chain("A", 1, vec![helix(10, 30)])]);
    let mut new = old.clone();
    new["is_transmembrane"] = json!("missing");

    let result = DifferenceClassifier::default().compare(&record(&old), &record(&new));
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["flags"]["tmpAttributes"], json!(true));
    assert_eq!(value["flags"]["fatalErrorOccurred"], json!(false));
    assert_eq!(value["categories"], json!(["TMP attributes differ"]));
}
