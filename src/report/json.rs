use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::color::ColorMap;
use crate::mapping::MappingError;
use crate::report::MappingReport;
use crate::table::RowTable;

#[derive(Debug, Serialize)]
struct RowsDocument<'a> {
    tool: &'static str,
    version: &'static str,
    columns: &'a [String],
    rows: Vec<&'a [String]>,
    consensus: Vec<&'a str>,
    colors: &'a ColorMap,
}

/// Display cells plus the logical consensus label of every row.
pub fn render_rows_json(rows: &RowTable, colors: &ColorMap) -> Result<String, MappingError> {
    let doc = RowsDocument {
        tool: "kira-mapvis",
        version: env!("CARGO_PKG_VERSION"),
        columns: &rows.columns,
        rows: rows.rows.iter().map(|r| r.cells.as_slice()).collect(),
        consensus: rows.rows.iter().map(|r| r.consensus.as_str()).collect(),
        colors,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

pub fn write_rows_json(path: &Path, report: &MappingReport) -> Result<(), MappingError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(render_rows_json(&report.rows, &report.colors)?.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
