//! Color-coded HTML comparison tables for celltype and feature mappings.
//!
//! Two label mappings (original label -> consensus label) are grouped by
//! consensus label and rendered side by side, or a protein/RNA feature table
//! is expanded into aligned rows with `sum()`/`max()` aggregation hints. Both
//! entry points return inline-styled HTML, an optional legend and the rows
//! behind the table.

pub mod color;
pub mod consensus;
pub mod mapping;
pub mod report;
pub mod table;
pub mod visualize;

pub use consensus::feature::FeaturePair;
pub use mapping::{LabelMapping, MappingError};
pub use report::MappingReport;
pub use table::{DisplayRow, RowTable};
pub use visualize::{
    CelltypeTableOptions, FeatureTableOptions, create_celltype_mapping_table,
    create_feature_mapping_table,
};
