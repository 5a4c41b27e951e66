use std::collections::BTreeMap;

use super::*;
use crate::color::format_color_with_opacity;
use crate::report::NO_DATA_TABLE;

fn owned(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn mapping1() -> BTreeMap<String, String> {
    owned(&[("Tcell_1", "T-cell"), ("Bcell_A", "B-cell"), ("Macro_X", "Myeloid")])
}

fn mapping2() -> BTreeMap<String, String> {
    owned(&[
        ("T_cell_X", "T-cell"),
        ("B_cell_Y", "B-cell"),
        ("Mono_1", "Myeloid"),
        ("NK_1", "NK cell"),
    ])
}

fn feature_pairs() -> Vec<FeaturePair> {
    [
        ("P1", "R1"),
        ("P2a/P2b", "R2"),
        ("P3", "R3a/R3b"),
        ("P4a/P4b", "R4a/R4b"),
        ("P_RNA_Only", "R_RNA_Only1/R_RNA_Only2"),
        ("P_Prot_Only/P_Prot_Only2", ""),
    ]
    .iter()
    .map(|(p, r)| FeaturePair::new(*p, *r))
    .collect()
}

#[test]
fn test_celltype_smoke() {
    let report =
        create_celltype_mapping_table(&mapping1(), &mapping2(), &CelltypeTableOptions::default())
            .unwrap();
    assert!(!report.table_html.is_empty());
    assert!(report.legend_html.as_deref().is_some_and(|l| l.contains("Legend")));
    assert_eq!(report.rows.len(), 4);
    assert_eq!(report.colors.len(), 4);
}

#[test]
fn test_celltype_empty_mappings() {
    for show_legend in [true, false] {
        let opts = CelltypeTableOptions {
            show_legend,
            ..Default::default()
        };
        let empty = BTreeMap::<String, String>::new();
        let report = create_celltype_mapping_table(&empty, &empty, &opts).unwrap();
        assert_eq!(report.table_html, NO_DATA_TABLE);
        assert!(report.legend_html.is_none());
        assert!(report.rows.is_empty());
    }
}

#[test]
fn test_celltype_one_mapping_empty() {
    let empty = BTreeMap::<String, String>::new();
    let report =
        create_celltype_mapping_table(&mapping1(), &empty, &CelltypeTableOptions::default()).unwrap();
    assert_eq!(report.rows.columns.len(), 3);
    assert!(report.rows.column(1).contains(&"T-cell"));
    assert!(report.table_html.contains("font-style: italic;"));
}

#[test]
fn test_celltype_blank_entry_rejected() {
    let bad = owned(&[("T1", " ")]);
    let err = create_celltype_mapping_table(&bad, &mapping2(), &CelltypeTableOptions::default())
        .unwrap_err();
    assert!(matches!(err, MappingError::EmptyEntry { .. }));
}

#[test]
fn test_celltype_repeated_label_rejected() {
    let err = create_celltype_mapping_table(
        &[("T1", "T"), ("T1", "B")],
        &[("X", "T")],
        &CelltypeTableOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, MappingError::DuplicateLabel { ref label, .. } if label == "T1"));
}

#[test]
fn test_celltype_no_common_consensus() {
    let m1 = owned(&[("a", "A"), ("b", "B")]);
    let m2 = owned(&[("c", "C"), ("d", "D")]);
    let report = create_celltype_mapping_table(&m1, &m2, &CelltypeTableOptions::default()).unwrap();
    assert_eq!(report.rows.len(), 4);
    assert_eq!(report.rows.consensus_labels(), vec!["A", "B", "C", "D"]);
}

#[test]
fn test_celltype_columns_and_rows() {
    let opts = CelltypeTableOptions {
        dataset1_name: "DS1".to_string(),
        dataset2_name: "OtherDS".to_string(),
        ..Default::default()
    };
    let report = create_celltype_mapping_table(&mapping1(), &mapping2(), &opts).unwrap();
    assert_eq!(report.rows.columns, vec!["DS1", "Consensus Label", "OtherDS"]);
    assert_eq!(report.rows.len(), 4);
    // Shared labels first, the dataset-2-only NK cell last.
    assert_eq!(
        report.rows.consensus_labels(),
        vec!["B-cell", "Myeloid", "T-cell", "NK cell"]
    );
}

#[test]
fn test_celltype_legend_toggle() {
    let opts = CelltypeTableOptions {
        show_legend: false,
        ..Default::default()
    };
    let report = create_celltype_mapping_table(&mapping1(), &mapping2(), &opts).unwrap();
    assert!(report.legend_html.is_none());
}

#[test]
fn test_celltype_custom_colors() {
    let opts = CelltypeTableOptions {
        color_scheme: owned(&[("T-cell", "#FF0000"), ("B-cell", "#00FF00"), ("Myeloid", "#0000FF")]),
        ..Default::default()
    };
    let report = create_celltype_mapping_table(&mapping1(), &mapping2(), &opts).unwrap();

    let swatch = format_color_with_opacity(Some("#ff0000"), 1.0);
    let cell = format_color_with_opacity(Some("#ff0000"), 0.5);
    let legend = report.legend_html.unwrap().to_lowercase();
    assert!(legend.contains(&format!("background-color: {swatch}")));
    assert!(report.table_html.to_lowercase().contains(&format!("background-color: {cell}")));
    assert_ne!(report.colors["NK cell"].to_ascii_lowercase(), "#ff0000");
}

#[test]
fn test_celltype_caption() {
    let opts = CelltypeTableOptions {
        caption: "My Custom Celltype Table".to_string(),
        ..Default::default()
    };
    let report = create_celltype_mapping_table(&mapping1(), &mapping2(), &opts).unwrap();
    assert!(report.table_html.contains("<caption>My Custom Celltype Table</caption>"));
}

#[test]
fn test_feature_smoke() {
    let report = create_feature_mapping_table(&feature_pairs(), &FeatureTableOptions::default());
    assert!(report.legend_html.is_some());
    assert_eq!(report.rows.len(), 1 + 2 + 2 + 2 + 2 + 2);
    assert_eq!(
        report.rows.columns,
        vec!["Protein name", "Operation", "Consensus label", "Operation", "RNA name"]
    );
}

#[test]
fn test_feature_empty_input() {
    for show_legend in [true, false] {
        let opts = FeatureTableOptions {
            show_legend,
            ..Default::default()
        };
        let report = create_feature_mapping_table(&[], &opts);
        assert_eq!(report.table_html, NO_DATA_TABLE);
        assert!(report.legend_html.is_none());
        assert!(report.rows.is_empty());

        let blanks = vec![FeaturePair::new("", "")];
        assert_eq!(create_feature_mapping_table(&blanks, &opts), MappingReport::no_data());
    }
}

#[test]
fn test_feature_one_to_many_report() {
    let pairs = vec![FeaturePair::new("P3", "R3a/R3b")];
    let report = create_feature_mapping_table(&pairs, &FeatureTableOptions::default());
    let rows = &report.rows.rows;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].cells[2], "P3");
    assert_eq!(rows[0].cells[3], "sum()");
    assert_eq!(rows[0].cells[1], "");
    assert_eq!(rows[1].cells[2], "");
    assert_eq!(rows[1].cells[0], "");
    assert_eq!(rows[1].cells[4], "R3b");
    assert_eq!(report.table_html.matches("border-top: none;").count(), 3);
}

#[test]
fn test_feature_custom_colors_and_caption() {
    let opts = FeatureTableOptions {
        caption: "My Custom Feature Table".to_string(),
        color_scheme: owned(&[("R1", "#FF0000"), ("P3", "#0000FF"), ("R2", "not-a-color")]),
        ..Default::default()
    };
    let report = create_feature_mapping_table(&feature_pairs(), &opts);

    assert!(report.table_html.contains("<caption>My Custom Feature Table</caption>"));
    let legend = report.legend_html.unwrap().to_lowercase();
    assert!(legend.contains("background-color: #ff0000ff"));
    assert!(report.table_html.to_lowercase().contains("background-color: #ff000080"));
    assert!(crate::color::is_valid_hex_color(&report.colors["R2"]));
    assert!(!report.table_html.contains("font-style: italic;"));
}

#[test]
fn test_legend_restricted_to_table_labels() {
    let opts = FeatureTableOptions {
        color_scheme: owned(&[("Unused", "#123456")]),
        ..Default::default()
    };
    let pairs = vec![FeaturePair::new("P1", "R1")];
    let report = create_feature_mapping_table(&pairs, &opts);
    let legend = report.legend_html.unwrap();
    assert!(!legend.contains("Unused"));
    assert!(legend.contains("<span>R1</span>"));
}
