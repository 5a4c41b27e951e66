use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeaturePair {
    pub protein: String,
    pub rna: String,
}

impl FeaturePair {
    pub fn new(protein: impl Into<String>, rna: impl Into<String>) -> Self {
        Self {
            protein: protein.into(),
            rna: rna.into(),
        }
    }
}

/// Aggregation a downstream analysis should apply to collapsed identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Operation {
    #[default]
    None,
    Sum,
    Max,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::None => "",
            Operation::Sum => "sum()",
            Operation::Max => "max()",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One input pair after splitting, with its consensus label and hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureGroup {
    pub consensus: String,
    pub proteins: Vec<String>,
    pub rnas: Vec<String>,
    pub protein_op: Operation,
    pub rna_op: Operation,
}

impl FeatureGroup {
    pub fn row_count(&self) -> usize {
        self.proteins.len().max(self.rnas.len()).max(1)
    }
}

/// Splits on `separator`, trimming and discarding empty fragments.
pub fn split_compound(field: &str, separator: char) -> Vec<String> {
    field
        .split(separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns `None` when both sides are empty.
pub fn classify_pair(
    pair: &FeaturePair,
    protein_separator: char,
    rna_separator: char,
) -> Option<FeatureGroup> {
    let proteins = split_compound(&pair.protein, protein_separator);
    let rnas = split_compound(&pair.rna, rna_separator);

    let (consensus, protein_op, rna_op) = match (proteins.len(), rnas.len()) {
        (0, 0) => return None,
        (1, 1) => (rnas[0].clone(), Operation::None, Operation::None),
        (1, _) if rnas.len() > 1 => (proteins[0].clone(), Operation::None, Operation::Sum),
        (_, 1) if proteins.len() > 1 => (rnas[0].clone(), Operation::Max, Operation::None),
        (0, _) => (rnas[0].clone(), Operation::None, Operation::None),
        (_, 0) => (proteins[0].clone(), Operation::None, Operation::None),
        _ => (rnas[0].clone(), Operation::Max, Operation::Sum),
    };

    Some(FeatureGroup {
        consensus,
        proteins,
        rnas,
        protein_op,
        rna_op,
    })
}
