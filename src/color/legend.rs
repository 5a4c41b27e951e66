use crate::color::{ColorMap, format_color_with_opacity};
use crate::report::escape_html;

#[derive(Debug, Clone, Copy)]
pub struct LegendStyles {
    pub container: &'static str,
    pub item: &'static str,
    pub swatch_base: &'static str,
    pub title: &'static str,
}

impl Default for LegendStyles {
    fn default() -> Self {
        Self {
            container: "padding: 10px; border: 1px solid #DDDDDD; margin-top: 20px; display: inline-block; font-family: Arial, sans-serif;",
            item: "display: flex; align-items: center; margin-bottom: 5px;",
            swatch_base: "width: 20px; height: 20px; margin-right: 10px; border: 1px solid #CCCCCC;",
            title: "margin-top:0; margin-bottom:10px;",
        }
    }
}

/// Legend fragment with one swatch per label, labels in lexicographic order.
/// Returns `None` for an empty map.
pub fn get_legend_html(color_map: &ColorMap, title: &str, swatch_opacity: f64) -> Option<String> {
    if color_map.is_empty() {
        return None;
    }

    let styles = LegendStyles::default();
    let mut parts = Vec::with_capacity(color_map.len() + 3);
    parts.push(format!("<div style=\"{}\">", styles.container));
    if !title.is_empty() {
        parts.push(format!(
            "<h4 style=\"{}\">{}</h4>",
            styles.title,
            escape_html(title)
        ));
    }

    // BTreeMap iteration is already lexicographic.
    for (label, color) in color_map {
        let swatch = format_color_with_opacity(Some(color), swatch_opacity);
        parts.push(format!(
            "<div style=\"{}\"><span style=\"{} background-color: {};\"></span><span>{}</span></div>",
            styles.item,
            styles.swatch_base,
            swatch,
            escape_html(label)
        ));
    }

    parts.push("</div>".to_string());
    Some(parts.join("\n"))
}
