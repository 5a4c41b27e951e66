pub mod legend;

use std::collections::{BTreeMap, BTreeSet};

pub use legend::{LegendStyles, get_legend_html};

/// Consensus label -> `#RRGGBB`.
pub type ColorMap = BTreeMap<String, String>;

pub const DEFAULT_PALETTE: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

pub const INVALID_COLOR: &str = "#00000000";

pub const TABLE_OPACITY: f64 = 0.5;
pub const LEGEND_OPACITY: f64 = 1.0;

/// `#` followed by exactly six hex digits.
pub fn is_valid_hex_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(digits) => is_hex_of_len(digits, 6),
        None => false,
    }
}

fn is_hex_of_len(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Formats a 6-digit color as `#rrggbbaa`. Eight-digit input is passed through,
/// anything else collapses to [`INVALID_COLOR`].
pub fn format_color_with_opacity(color: Option<&str>, opacity: f64) -> String {
    let Some(color) = color else {
        return INVALID_COLOR.to_string();
    };
    let lower = color.to_ascii_lowercase();
    let digits = lower.strip_prefix('#').unwrap_or(&lower);

    if is_hex_of_len(digits, 8) {
        return format!("#{digits}");
    }
    if !is_hex_of_len(digits, 6) {
        return INVALID_COLOR.to_string();
    }

    let opacity = if opacity.is_nan() {
        0.0
    } else {
        opacity.clamp(0.0, 1.0)
    };
    let alpha = (opacity * 255.0).round_ties_even() as u8;
    format!("#{digits}{alpha:02x}")
}

/// Assigns palette colors to labels that have none yet, in input order.
///
/// Palette entries already taken by `existing` are skipped while free entries
/// remain; once every entry is taken the full palette is cycled. Only the new
/// assignments are returned.
pub fn generate_default_colors<S: AsRef<str>>(labels: &[S], existing: &ColorMap) -> ColorMap {
    let taken: BTreeSet<String> = existing.values().map(|c| c.to_ascii_lowercase()).collect();
    let mut free: Vec<&str> = DEFAULT_PALETTE
        .iter()
        .copied()
        .filter(|c| !taken.contains(*c))
        .collect();
    if free.is_empty() {
        free = DEFAULT_PALETTE.to_vec();
    }

    let mut assigned = ColorMap::new();
    let mut next = 0usize;
    for label in labels {
        let label = label.as_ref();
        if existing.contains_key(label) || assigned.contains_key(label) {
            continue;
        }
        assigned.insert(label.to_string(), free[next % free.len()].to_string());
        next += 1;
    }
    assigned
}

/// Covers exactly `labels`: valid user colors verbatim, generated defaults for the rest.
pub fn build_final_color_map<S: AsRef<str>>(labels: &[S], user_scheme: &ColorMap) -> ColorMap {
    let mut resolved = ColorMap::new();
    let mut missing = Vec::new();

    for label in labels {
        let label = label.as_ref();
        if resolved.contains_key(label) {
            continue;
        }
        match user_scheme.get(label) {
            Some(color) if is_valid_hex_color(color) => {
                resolved.insert(label.to_string(), color.clone());
            }
            Some(color) => {
                tracing::debug!(label, color = color.as_str(), "dropping invalid color");
                missing.push(label);
            }
            None => missing.push(label),
        }
    }

    let generated = generate_default_colors(&missing, &resolved);
    resolved.extend(generated);
    resolved
}

#[cfg(test)]
#[path = "../../tests/src_inline/color/tests.rs"]
mod tests;
