use crate::color::{ColorMap, LEGEND_OPACITY, build_final_color_map, get_legend_html};
use crate::consensus::feature::FeaturePair;
use crate::mapping::{LabelMapping, MappingError, validate_entries};
use crate::report::{MappingReport, TableStyle, render_table_html};
use crate::table::{RowTable, build_celltype_rows, build_feature_rows};

pub const LEGEND_TITLE: &str = "Legend";

#[derive(Debug, Clone)]
pub struct CelltypeTableOptions {
    pub color_scheme: ColorMap,
    pub caption: String,
    pub show_legend: bool,
    pub dataset1_name: String,
    pub dataset2_name: String,
}

impl Default for CelltypeTableOptions {
    fn default() -> Self {
        Self {
            color_scheme: ColorMap::new(),
            caption: "Celltype Mapping Table".to_string(),
            show_legend: true,
            dataset1_name: "Dataset 1".to_string(),
            dataset2_name: "Dataset 2".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FeatureTableOptions {
    pub caption: String,
    pub show_legend: bool,
    pub color_scheme: ColorMap,
    pub protein_column: String,
    pub rna_column: String,
    pub protein_separator: char,
    pub rna_separator: char,
}

impl Default for FeatureTableOptions {
    fn default() -> Self {
        Self {
            caption: "Feature Mapping Table".to_string(),
            show_legend: true,
            color_scheme: ColorMap::new(),
            protein_column: "Protein name".to_string(),
            rna_column: "RNA name".to_string(),
            protein_separator: '/',
            rna_separator: '/',
        }
    }
}

/// Side-by-side table of two label mappings grouped by consensus label.
///
/// Either mapping may be empty; both empty yields the "No data" report.
/// Blank keys or values are rejected.
pub fn create_celltype_mapping_table<A, B>(
    mapping1: &A,
    mapping2: &B,
    opts: &CelltypeTableOptions,
) -> Result<MappingReport, MappingError>
where
    A: LabelMapping + ?Sized,
    B: LabelMapping + ?Sized,
{
    if mapping1.is_empty() && mapping2.is_empty() {
        return Ok(MappingReport::no_data());
    }
    validate_entries(mapping1, "mapping1")?;
    validate_entries(mapping2, "mapping2")?;

    let rows = build_celltype_rows(mapping1, mapping2, &opts.dataset1_name, &opts.dataset2_name);
    let style = TableStyle {
        italic_single_dataset: true,
    };
    Ok(assemble(
        rows,
        &opts.color_scheme,
        &opts.caption,
        opts.show_legend,
        style,
    ))
}

/// Expanded protein/RNA table with aggregation hints.
pub fn create_feature_mapping_table(
    pairs: &[FeaturePair],
    opts: &FeatureTableOptions,
) -> MappingReport {
    let rows = build_feature_rows(
        pairs,
        &opts.protein_column,
        &opts.rna_column,
        opts.protein_separator,
        opts.rna_separator,
    );
    assemble(
        rows,
        &opts.color_scheme,
        &opts.caption,
        opts.show_legend,
        TableStyle::default(),
    )
}

fn assemble(
    rows: RowTable,
    user_scheme: &ColorMap,
    caption: &str,
    show_legend: bool,
    style: TableStyle,
) -> MappingReport {
    if rows.is_empty() {
        return MappingReport::no_data();
    }

    let colors = build_final_color_map(&rows.consensus_labels(), user_scheme);
    let table_html = render_table_html(&rows, &colors, caption, style);
    let legend_html = if show_legend {
        get_legend_html(&colors, LEGEND_TITLE, LEGEND_OPACITY)
    } else {
        None
    };

    tracing::debug!(
        rows = rows.len(),
        labels = colors.len(),
        legend = legend_html.is_some(),
        "assembled mapping table"
    );

    MappingReport {
        table_html,
        legend_html,
        rows,
        colors,
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/visualize.rs"]
mod tests;
