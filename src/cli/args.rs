use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "kira-mapvis",
    version,
    about = "Color-coded HTML tables for celltype and feature mappings"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Debug logging (RUST_LOG overrides)
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare two label -> consensus mappings
    Celltype(CelltypeArgs),
    /// Expand a protein/RNA feature table
    Feature(FeatureArgs),
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    #[arg(long)]
    pub out: PathBuf,

    /// JSON object or two-column file of label -> #RRGGBB
    #[arg(long)]
    pub colors: Option<PathBuf>,

    #[arg(long)]
    pub caption: Option<String>,

    #[arg(long, default_value_t = false)]
    pub no_legend: bool,
}

#[derive(Args, Debug)]
pub struct CelltypeArgs {
    #[arg(long)]
    pub map1: PathBuf,

    #[arg(long)]
    pub map2: PathBuf,

    #[arg(long, default_value = "Dataset 1")]
    pub dataset1_name: String,

    #[arg(long, default_value = "Dataset 2")]
    pub dataset2_name: String,

    #[arg(long, default_value = "source")]
    pub source_col: String,

    #[arg(long, default_value = "target")]
    pub target_col: String,

    /// Field delimiter; inferred from the extension when omitted
    #[arg(long)]
    pub delimiter: Option<char>,

    /// Reject mappings that share no consensus label
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct FeatureArgs {
    pub input: PathBuf,

    #[arg(long, default_value = "Protein name")]
    pub protein_col: String,

    #[arg(long, default_value = "RNA name")]
    pub rna_col: String,

    #[arg(long, default_value_t = '/')]
    pub protein_separator: char,

    #[arg(long, default_value_t = '/')]
    pub rna_separator: char,

    #[arg(long)]
    pub delimiter: Option<char>,

    #[command(flatten)]
    pub output: OutputArgs,
}
