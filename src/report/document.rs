use std::fmt::Write as FmtWrite;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::mapping::MappingError;
use crate::report::{MappingReport, escape_html};

/// Wraps the table and legend fragments in a minimal standalone page.
pub fn render_document(report: &MappingReport, title: &str) -> String {
    let mut html = String::with_capacity(report.table_html.len() + 1024);
    let _ = writeln!(html, "<!DOCTYPE html>");
    let _ = writeln!(html, "<html lang=\"en\">");
    let _ = writeln!(html, "<head>");
    let _ = writeln!(html, "<meta charset=\"utf-8\"/>");
    let _ = writeln!(html, "<title>{}</title>", escape_html(title));
    let _ = writeln!(
        html,
        "<style>body{{font-family:Arial,Helvetica,sans-serif;margin:20px;color:#222;background:#fff;}}table{{border-collapse:collapse;}}caption{{text-align:left;font-weight:bold;padding:6px 0;}}</style>"
    );
    let _ = writeln!(html, "</head>");
    let _ = writeln!(html, "<body>");
    let _ = writeln!(html, "{}", report.table_html);
    if let Some(legend) = &report.legend_html {
        let _ = writeln!(html, "{legend}");
    }
    let _ = writeln!(html, "</body>");
    let _ = writeln!(html, "</html>");
    html
}

pub fn write_document(path: &Path, report: &MappingReport, title: &str) -> Result<(), MappingError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(render_document(report, title).as_bytes())?;
    out.flush()?;
    Ok(())
}
