use super::*;

fn build(pairs: &[(&str, &str)]) -> RowTable {
    let pairs: Vec<FeaturePair> = pairs.iter().map(|(p, r)| FeaturePair::new(*p, *r)).collect();
    build_feature_rows(&pairs, "Protein name", "RNA name", '/', '/')
}

#[test]
fn test_columns() {
    let table = build(&[("P1", "R1")]);
    assert_eq!(
        table.columns,
        vec!["Protein name", "Operation", "Consensus label", "Operation", "RNA name"]
    );
    assert_eq!(table.consensus_column, 2);
}

#[test]
fn test_one_to_one() {
    let table = build(&[("P1", "R1")]);
    assert_eq!(table.len(), 1);
    assert_eq!(table.rows[0].cells, vec!["P1", "", "R1", "", "R1"]);
}

#[test]
fn test_one_to_many() {
    let table = build(&[("P3", "R3a/R3b")]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[0].cells, vec!["P3", "", "P3", "sum()", "R3a"]);
    assert_eq!(table.rows[1].cells, vec!["", "", "", "", "R3b"]);
    assert!(table.rows[1].continuation);
    assert_eq!(table.rows[1].consensus, "P3");
}

#[test]
fn test_many_to_one() {
    let table = build(&[("P2a/P2b", "R2")]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[0].cells, vec!["P2a", "max()", "R2", "", "R2"]);
    assert_eq!(table.rows[1].cells, vec!["P2b", "", "", "", ""]);
}

#[test]
fn test_many_to_many() {
    let table = build(&[("P4a/P4b", "R4a/R4b")]);
    assert_eq!(table.rows[0].cells, vec!["P4a", "max()", "R4a", "sum()", "R4a"]);
    assert_eq!(table.rows[1].cells, vec!["P4b", "", "", "", "R4b"]);
}

#[test]
fn test_protein_only_and_rna_only() {
    let table = build(&[("P_Prot_Only", ""), ("", "R_RNA_Only")]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[0].cells, vec!["P_Prot_Only", "", "P_Prot_Only", "", ""]);
    assert_eq!(table.rows[1].cells, vec!["", "", "R_RNA_Only", "", "R_RNA_Only"]);
}

#[test]
fn test_empty_pairs_are_skipped() {
    let table = build(&[("", ""), (" / ", "")]);
    assert!(table.is_empty());
}

#[test]
fn test_rows_sorted_by_consensus_then_cells() {
    let table = build(&[("Pz", "Rz"), ("P2a/P2b", "R2"), ("P1", "R1"), ("P3", "R3a/R3b")]);
    assert_eq!(table.consensus_labels(), vec!["P3", "R1", "R2", "Rz"]);
    assert_eq!(
        table.column(2),
        vec!["P3", "", "R1", "R2", "", "Rz"]
    );
}

#[test]
fn test_repeated_consensus_blanks_following_block() {
    let table = build(&[("Pb", "R1"), ("Pa", "R1")]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[0].cells, vec!["Pa", "", "R1", "", "R1"]);
    assert_eq!(table.rows[1].cells, vec!["Pb", "", "", "", "R1"]);
    assert!(table.rows[1].continuation);
}

#[test]
fn test_custom_separators() {
    let pairs = vec![FeaturePair::new("A;B", "R1|R2")];
    let table = build_feature_rows(&pairs, "Protein", "RNA", ';', '|');
    assert_eq!(table.rows[0].cells, vec!["A", "max()", "R1", "sum()", "R1"]);
    assert_eq!(table.rows[1].cells, vec!["B", "", "", "", "R2"]);
}
