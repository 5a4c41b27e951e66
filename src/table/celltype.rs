use crate::consensus::{build_consensus_map, sort_by_presence};
use crate::mapping::LabelMapping;
use crate::table::{DisplayRow, RowTable};

pub const CONSENSUS_COLUMN: &str = "Consensus Label";

/// Builds `[dataset1, consensus, dataset2]` rows, one block per consensus label.
///
/// Blocks follow shared, dataset-1-only, dataset-2-only order. Within a block the
/// original labels are paired by position and only the first row shows the
/// consensus label.
pub fn build_celltype_rows<A, B>(
    dataset1: &A,
    dataset2: &B,
    dataset1_name: &str,
    dataset2_name: &str,
) -> RowTable
where
    A: LabelMapping + ?Sized,
    B: LabelMapping + ?Sized,
{
    let map = build_consensus_map(dataset1, dataset2);
    let order = sort_by_presence(&map);

    let mut rows = Vec::new();
    for label in order {
        let Some(group) = map.get(&label) else {
            continue;
        };
        let single_dataset = group.presence().is_single_dataset();
        for i in 0..group.row_count() {
            let left = group.dataset1.get(i).cloned().unwrap_or_default();
            let right = group.dataset2.get(i).cloned().unwrap_or_default();
            let shown = if i == 0 { label.clone() } else { String::new() };
            rows.push(DisplayRow {
                consensus: label.clone(),
                cells: vec![left, shown, right],
                continuation: i > 0,
                single_dataset,
            });
        }
    }

    RowTable {
        columns: vec![
            dataset1_name.to_string(),
            CONSENSUS_COLUMN.to_string(),
            dataset2_name.to_string(),
        ],
        consensus_column: 1,
        merge_columns: vec![1],
        rows,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/table/celltype.rs"]
mod tests;
