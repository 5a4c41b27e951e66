pub mod document;
pub mod json;

use std::fmt::Write;

use crate::color::{ColorMap, TABLE_OPACITY, format_color_with_opacity};
use crate::table::RowTable;

pub const NO_DATA_TABLE: &str = "<table><caption>No data to display</caption></table>";

pub const CELL_PROPERTIES: &[(&str, &str)] = &[
    ("color", "black"),
    ("border", "1px solid #DDDDDD"),
    ("padding", "8px"),
    ("text-align", "left"),
    ("min-width", "70px"),
    ("vertical-align", "middle"),
];

/// Rendered table, optional legend and the rows behind them.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingReport {
    pub table_html: String,
    pub legend_html: Option<String>,
    pub rows: RowTable,
    pub colors: ColorMap,
}

impl MappingReport {
    pub fn no_data() -> Self {
        Self {
            table_html: NO_DATA_TABLE.to_string(),
            legend_html: None,
            rows: RowTable::default(),
            colors: ColorMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TableStyle {
    /// Italicize rows whose consensus label comes from one dataset only.
    pub italic_single_dataset: bool,
}

pub fn cell_properties_css() -> String {
    let mut css = String::new();
    for (i, (key, value)) in CELL_PROPERTIES.iter().enumerate() {
        if i > 0 {
            css.push(' ');
        }
        let _ = write!(css, "{key}: {value};");
    }
    css
}

/// Renders the rows as an inline-styled HTML table without an index column.
///
/// Each cell is tinted with its row's consensus color at half opacity. Blank
/// merge-column cells of a continuation row drop their top border so the
/// block reads as one merged cell.
pub fn render_table_html(
    table: &RowTable,
    colors: &ColorMap,
    caption: &str,
    style: TableStyle,
) -> String {
    if table.is_empty() {
        return NO_DATA_TABLE.to_string();
    }

    let base = cell_properties_css();
    let mut html = String::with_capacity(256 + table.len() * 512);

    html.push_str("<table>\n");
    let _ = writeln!(html, "<caption>{}</caption>", escape_html(caption));
    html.push_str("<thead>\n<tr>");
    for column in &table.columns {
        let _ = write!(html, "<th style=\"{base}\">{}</th>", escape_html(column));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in &table.rows {
        let background =
            format_color_with_opacity(colors.get(&row.consensus).map(String::as_str), TABLE_OPACITY);
        html.push_str("<tr>");
        for (idx, cell) in row.cells.iter().enumerate() {
            let mut css = format!("{base} background-color: {background};");
            if row.continuation && cell.is_empty() && table.merge_columns.contains(&idx) {
                css.push_str(" border-top: none;");
            }
            if style.italic_single_dataset && row.single_dataset {
                css.push_str(" font-style: italic;");
            }
            let _ = write!(html, "<td style=\"{css}\">{}</td>", escape_html(cell));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>");
    html
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
