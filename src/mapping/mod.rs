use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::PathBuf;

pub mod loader;

pub use loader::{
    FeatureLoaderOptions, LoaderOptions, load_color_scheme, load_feature_pairs, load_mapping,
};

#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("{name} must be a mapping of strings to strings, got {found}")]
    InvalidType { name: String, found: String },

    #[error("{name} cannot be empty")]
    EmptyMapping { name: String },

    #[error("empty keys or values not allowed in {name}")]
    EmptyEntry { name: String },

    #[error("label '{label}' is mapped more than once in {name}")]
    DuplicateLabel { name: String, label: String },

    #[error("no common consensus labels found between datasets")]
    NoCommonConsensus,

    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("required column '{column}' not found in {}", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("invalid delimiter '{0}': must be a single-byte character")]
    InvalidDelimiter(char),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Anything that can be viewed as original label -> consensus label pairs.
pub trait LabelMapping {
    fn len(&self) -> usize;

    fn pairs(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn consensus_labels(&self) -> BTreeSet<&str> {
        self.pairs().map(|(_, consensus)| consensus).collect()
    }
}

impl LabelMapping for BTreeMap<String, String> {
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn pairs(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

impl<S: std::hash::BuildHasher> LabelMapping for HashMap<String, String, S> {
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn pairs(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

impl LabelMapping for [(&str, &str)] {
    fn len(&self) -> usize {
        <[(&str, &str)]>::len(self)
    }

    fn pairs(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        Box::new(self.iter().map(|&(k, v)| (k, v)))
    }
}

impl<const N: usize> LabelMapping for [(&str, &str); N] {
    fn len(&self) -> usize {
        N
    }

    fn pairs(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        Box::new(self.iter().map(|&(k, v)| (k, v)))
    }
}

impl LabelMapping for Vec<(String, String)> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn pairs(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

/// Non-empty mapping whose keys and values are non-blank.
pub fn validate_mapping<M: LabelMapping + ?Sized>(mapping: &M, name: &str) -> Result<(), MappingError> {
    if mapping.is_empty() {
        return Err(MappingError::EmptyMapping {
            name: name.to_string(),
        });
    }
    validate_entries(mapping, name)
}

/// Blank-entry and repeated-key check; an empty mapping passes.
///
/// Pair sequences can repeat an original label, which would place it in two
/// consensus groups.
pub fn validate_entries<M: LabelMapping + ?Sized>(mapping: &M, name: &str) -> Result<(), MappingError> {
    let mut seen = BTreeSet::new();
    for (key, value) in mapping.pairs() {
        if key.trim().is_empty() || value.trim().is_empty() {
            return Err(MappingError::EmptyEntry {
                name: name.to_string(),
            });
        }
        if !seen.insert(key) {
            return Err(MappingError::DuplicateLabel {
                name: name.to_string(),
                label: key.to_string(),
            });
        }
    }
    Ok(())
}

/// Strict two-mapping check: both valid and sharing at least one consensus label.
pub fn validate_celltype_mappings<A, B>(dataset1: &A, dataset2: &B) -> Result<(), MappingError>
where
    A: LabelMapping + ?Sized,
    B: LabelMapping + ?Sized,
{
    validate_mapping(dataset1, "dataset1_mapping")?;
    validate_mapping(dataset2, "dataset2_mapping")?;

    let consensus1 = dataset1.consensus_labels();
    let consensus2 = dataset2.consensus_labels();
    if consensus1.is_disjoint(&consensus2) {
        return Err(MappingError::NoCommonConsensus);
    }
    Ok(())
}

pub fn validate_feature_mappings<A, B>(dataset1: &A, dataset2: &B) -> Result<(), MappingError>
where
    A: LabelMapping + ?Sized,
    B: LabelMapping + ?Sized,
{
    validate_mapping(dataset1, "dataset1_mapping")?;
    validate_mapping(dataset2, "dataset2_mapping")
}

/// Converts a JSON object of string values into a mapping.
pub fn mapping_from_json(
    value: &serde_json::Value,
    name: &str,
) -> Result<BTreeMap<String, String>, MappingError> {
    let object = value.as_object().ok_or_else(|| MappingError::InvalidType {
        name: name.to_string(),
        found: json_kind(value).to_string(),
    })?;

    let mut mapping = BTreeMap::new();
    for (key, value) in object {
        let Some(text) = value.as_str() else {
            return Err(MappingError::InvalidType {
                name: name.to_string(),
                found: format!("{} value for key '{key}'", json_kind(value)),
            });
        };
        mapping.insert(key.clone(), text.to_string());
    }
    Ok(mapping)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/mapping/tests.rs"]
mod tests;
