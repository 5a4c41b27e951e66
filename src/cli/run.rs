use std::path::Path;

use clap::Parser;

use kira_mapvis::color::ColorMap;
use kira_mapvis::mapping::{
    FeatureLoaderOptions, LoaderOptions, MappingError, load_color_scheme, load_feature_pairs,
    load_mapping, validate_celltype_mappings,
};
use kira_mapvis::report::MappingReport;
use kira_mapvis::report::document::write_document;
use kira_mapvis::report::json::write_rows_json;
use kira_mapvis::{
    CelltypeTableOptions, FeatureTableOptions, create_celltype_mapping_table,
    create_feature_mapping_table,
};

use crate::cli::args::{CelltypeArgs, Cli, Commands, FeatureArgs, OutputArgs};

pub const TABLE_FILE: &str = "mapping_table.html";
pub const ROWS_FILE: &str = "mapping_rows.json";

pub fn entry() -> Result<(), MappingError> {
    let cli = Cli::parse();
    crate::logging::init(cli.verbose);
    match cli.command {
        Commands::Celltype(args) => run_celltype(&args),
        Commands::Feature(args) => run_feature(&args),
    }
}

fn run_celltype(args: &CelltypeArgs) -> Result<(), MappingError> {
    let loader = LoaderOptions {
        source_col: args.source_col.clone(),
        target_col: args.target_col.clone(),
        delimiter: delimiter_byte(args.delimiter)?,
    };
    let mapping1 = load_mapping(&args.map1, &loader)?;
    let mapping2 = load_mapping(&args.map2, &loader)?;
    tracing::info!(
        map1 = %args.map1.display(),
        map2 = %args.map2.display(),
        n1 = mapping1.len(),
        n2 = mapping2.len(),
        "loaded mappings"
    );
    if args.strict {
        validate_celltype_mappings(&mapping1, &mapping2)?;
    }

    let defaults = CelltypeTableOptions::default();
    let opts = CelltypeTableOptions {
        color_scheme: color_scheme(&args.output)?,
        caption: args.output.caption.clone().unwrap_or(defaults.caption),
        show_legend: !args.output.no_legend,
        dataset1_name: args.dataset1_name.clone(),
        dataset2_name: args.dataset2_name.clone(),
    };
    let report = create_celltype_mapping_table(&mapping1, &mapping2, &opts)?;
    write_outputs(&args.output.out, &report, &opts.caption)
}

fn run_feature(args: &FeatureArgs) -> Result<(), MappingError> {
    let loader = FeatureLoaderOptions {
        protein_col: args.protein_col.clone(),
        rna_col: args.rna_col.clone(),
        delimiter: delimiter_byte(args.delimiter)?,
    };
    let pairs = load_feature_pairs(&args.input, &loader)?;
    tracing::info!(input = %args.input.display(), pairs = pairs.len(), "loaded feature pairs");

    let defaults = FeatureTableOptions::default();
    let opts = FeatureTableOptions {
        caption: args.output.caption.clone().unwrap_or(defaults.caption),
        show_legend: !args.output.no_legend,
        color_scheme: color_scheme(&args.output)?,
        protein_column: args.protein_col.clone(),
        rna_column: args.rna_col.clone(),
        protein_separator: args.protein_separator,
        rna_separator: args.rna_separator,
    };
    let report = create_feature_mapping_table(&pairs, &opts);
    write_outputs(&args.output.out, &report, &opts.caption)
}

fn color_scheme(output: &OutputArgs) -> Result<ColorMap, MappingError> {
    match &output.colors {
        Some(path) => load_color_scheme(path),
        None => Ok(ColorMap::new()),
    }
}

fn delimiter_byte(delimiter: Option<char>) -> Result<Option<u8>, MappingError> {
    match delimiter {
        None => Ok(None),
        Some(c) if c.is_ascii() => Ok(Some(c as u8)),
        Some(c) => Err(MappingError::InvalidDelimiter(c)),
    }
}

fn write_outputs(out_dir: &Path, report: &MappingReport, title: &str) -> Result<(), MappingError> {
    let table_path = out_dir.join(TABLE_FILE);
    let rows_path = out_dir.join(ROWS_FILE);
    write_document(&table_path, report, title)?;
    write_rows_json(&rows_path, report)?;
    tracing::info!(
        rows = report.rows.len(),
        labels = report.colors.len(),
        table = %table_path.display(),
        rows_json = %rows_path.display(),
        "wrote mapping table"
    );
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/run.rs"]
mod tests;
