pub mod celltype;
pub mod feature;

use serde::Serialize;

pub use celltype::{CONSENSUS_COLUMN, build_celltype_rows};
pub use feature::{FEATURE_CONSENSUS_COLUMN, OPERATION_COLUMN, build_feature_rows};

/// One rendered table row.
///
/// `consensus` is the logical group label even when the display cell for it
/// is blanked; `continuation` marks rows that visually merge with the row
/// above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub consensus: String,
    pub cells: Vec<String>,
    pub continuation: bool,
    pub single_dataset: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RowTable {
    pub columns: Vec<String>,
    pub consensus_column: usize,
    /// Columns whose blank cells on continuation rows merge with the cell above.
    pub merge_columns: Vec<usize>,
    pub rows: Vec<DisplayRow>,
}

impl RowTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Display values of the column at `idx`, top to bottom.
    pub fn column(&self, idx: usize) -> Vec<&str> {
        self.rows
            .iter()
            .map(|row| row.cells.get(idx).map(String::as_str).unwrap_or(""))
            .collect()
    }

    /// Distinct logical consensus labels in first-seen row order.
    pub fn consensus_labels(&self) -> Vec<&str> {
        let mut seen = std::collections::BTreeSet::new();
        self.rows
            .iter()
            .map(|row| row.consensus.as_str())
            .filter(|label| !label.is_empty() && seen.insert(*label))
            .collect()
    }

    pub fn rows_for(&self, consensus: &str) -> usize {
        self.rows.iter().filter(|r| r.consensus == consensus).count()
    }
}
