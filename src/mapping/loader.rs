use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::color::ColorMap;
use crate::consensus::feature::FeaturePair;
use crate::mapping::{MappingError, mapping_from_json};

#[derive(Debug, Clone)]
pub struct LoaderOptions {
    pub source_col: String,
    pub target_col: String,
    /// Overrides the delimiter derived from the file extension.
    pub delimiter: Option<u8>,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            source_col: "source".to_string(),
            target_col: "target".to_string(),
            delimiter: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FeatureLoaderOptions {
    pub protein_col: String,
    pub rna_col: String,
    pub delimiter: Option<u8>,
}

impl Default for FeatureLoaderOptions {
    fn default() -> Self {
        Self {
            protein_col: "Protein name".to_string(),
            rna_col: "RNA name".to_string(),
            delimiter: None,
        }
    }
}

/// Loads original label -> consensus label from a delimited or JSON file.
pub fn load_mapping(
    path: &Path,
    opts: &LoaderOptions,
) -> Result<BTreeMap<String, String>, MappingError> {
    if is_json(path) {
        let value = read_json(path)?;
        return mapping_from_json(&value, &path.display().to_string());
    }

    let mut reader = delimited_reader(path, opts.delimiter)?;
    let headers = reader.headers()?.clone();
    let source_idx = column_index(&headers, &opts.source_col, path)?;
    let target_idx = column_index(&headers, &opts.target_col, path)?;

    let mut mapping = BTreeMap::new();
    for (row_no, record) in reader.records().enumerate() {
        let record = record?;
        let source = record.get(source_idx).unwrap_or("").to_string();
        let target = record.get(target_idx).unwrap_or("").to_string();
        if let Some(previous) = mapping.insert(source.clone(), target) {
            tracing::warn!(
                path = %path.display(),
                row = row_no + 2,
                source = source.as_str(),
                previous = previous.as_str(),
                "duplicate source label; keeping last"
            );
        }
    }
    Ok(mapping)
}

/// Loads protein/RNA pairs; short rows read the missing cell as empty.
pub fn load_feature_pairs(
    path: &Path,
    opts: &FeatureLoaderOptions,
) -> Result<Vec<FeaturePair>, MappingError> {
    let mut reader = delimited_reader(path, opts.delimiter)?;
    let headers = reader.headers()?.clone();
    let protein_idx = column_index(&headers, &opts.protein_col, path)?;
    let rna_idx = column_index(&headers, &opts.rna_col, path)?;

    let mut pairs = Vec::new();
    for record in reader.records() {
        let record = record?;
        pairs.push(FeaturePair::new(
            record.get(protein_idx).unwrap_or(""),
            record.get(rna_idx).unwrap_or(""),
        ));
    }
    Ok(pairs)
}

/// Reads a JSON object or a headerless two-column `label,color` file.
pub fn load_color_scheme(path: &Path) -> Result<ColorMap, MappingError> {
    if is_json(path) {
        let value = read_json(path)?;
        return mapping_from_json(&value, &path.display().to_string());
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter_for(path))
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(open_maybe_gz(path)?);

    let mut scheme = ColorMap::new();
    for record in reader.records() {
        let record = record?;
        match (record.get(0), record.get(1)) {
            (Some(label), Some(color)) if !label.is_empty() => {
                scheme.insert(label.to_string(), color.to_string());
            }
            _ => tracing::debug!(path = %path.display(), "skipping incomplete color line"),
        }
    }
    Ok(scheme)
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, MappingError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(MappingError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(err) => return Err(err.into()),
    };
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

fn delimited_reader(
    path: &Path,
    delimiter: Option<u8>,
) -> Result<csv::Reader<Box<dyn BufRead>>, MappingError> {
    let delimiter = delimiter.unwrap_or_else(|| delimiter_for(path));
    Ok(csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(open_maybe_gz(path)?))
}

fn column_index(
    headers: &csv::StringRecord,
    column: &str,
    path: &Path,
) -> Result<usize, MappingError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| MappingError::MissingColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
        })
}

/// Tab for `.tsv`/`.txt` (optionally gzipped), comma otherwise.
fn delimiter_for(path: &Path) -> u8 {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let name = name.strip_suffix(".gz").unwrap_or(&name);
    if name.ends_with(".tsv") || name.ends_with(".txt") {
        b'\t'
    } else {
        b','
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn read_json(path: &Path) -> Result<serde_json::Value, MappingError> {
    let mut text = String::new();
    open_maybe_gz(path)?.read_to_string(&mut text)?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
#[path = "../../tests/src_inline/mapping/loader.rs"]
mod tests;
