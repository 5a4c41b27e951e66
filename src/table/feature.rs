use crate::consensus::feature::{FeatureGroup, FeaturePair, classify_pair};
use crate::table::{DisplayRow, RowTable};

pub const OPERATION_COLUMN: &str = "Operation";
pub const FEATURE_CONSENSUS_COLUMN: &str = "Consensus label";

const PROTEIN: usize = 0;
const PROTEIN_OP: usize = 1;
const CONSENSUS: usize = 2;
const RNA_OP: usize = 3;
const RNA: usize = 4;

struct Block {
    consensus: String,
    rows: Vec<[String; 5]>,
}

impl Block {
    fn expand(group: FeatureGroup) -> Self {
        let n = group.row_count();
        let mut rows = Vec::with_capacity(n);
        for i in 0..n {
            let mut cells: [String; 5] = Default::default();
            cells[PROTEIN] = group.proteins.get(i).cloned().unwrap_or_default();
            cells[RNA] = group.rnas.get(i).cloned().unwrap_or_default();
            if i == 0 {
                cells[PROTEIN_OP] = group.protein_op.as_str().to_string();
                cells[RNA_OP] = group.rna_op.as_str().to_string();
            }
            cells[CONSENSUS] = group.consensus.clone();
            rows.push(cells);
        }
        Self {
            consensus: group.consensus,
            rows,
        }
    }

    fn sort_key(&self) -> (&str, &str, &str) {
        let first = &self.rows[0];
        (self.consensus.as_str(), first[PROTEIN].as_str(), first[RNA].as_str())
    }
}

/// Expands compound protein/RNA pairs into `[protein, op, consensus, op, rna]` rows.
///
/// Blocks are ordered by `(consensus, protein, rna)` of their leading row and
/// keep their expansion order internally. A row whose consensus label matches
/// the previous row's has its consensus cell blanked.
pub fn build_feature_rows(
    pairs: &[FeaturePair],
    protein_column: &str,
    rna_column: &str,
    protein_separator: char,
    rna_separator: char,
) -> RowTable {
    let mut blocks: Vec<Block> = Vec::with_capacity(pairs.len());
    for (idx, pair) in pairs.iter().enumerate() {
        match classify_pair(pair, protein_separator, rna_separator) {
            Some(group) => blocks.push(Block::expand(group)),
            None => tracing::debug!(row = idx, "skipping feature pair with no identifiers"),
        }
    }
    blocks.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    let mut rows: Vec<DisplayRow> = Vec::new();
    for block in blocks {
        for mut cells in block.rows {
            let continuation = rows
                .last()
                .is_some_and(|prev| prev.consensus == block.consensus);
            if continuation {
                cells[CONSENSUS].clear();
            }
            rows.push(DisplayRow {
                consensus: block.consensus.clone(),
                cells: cells.into(),
                continuation,
                single_dataset: false,
            });
        }
    }

    RowTable {
        columns: vec![
            protein_column.to_string(),
            OPERATION_COLUMN.to_string(),
            FEATURE_CONSENSUS_COLUMN.to_string(),
            OPERATION_COLUMN.to_string(),
            rna_column.to_string(),
        ],
        consensus_column: CONSENSUS,
        merge_columns: vec![PROTEIN_OP, CONSENSUS, RNA_OP],
        rows,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/table/feature.rs"]
mod tests;
