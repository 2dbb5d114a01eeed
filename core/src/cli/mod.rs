pub mod report;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for ctclass
#[derive(Parser, Debug)]
#[command(name = "ctclass")]
#[command(about = "Rule-based classification of CT DICOM series")]
#[command(version)]
pub struct Cli {
    /// Directory containing the DICOM files of one series
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Acquisition label (defaults to the series description)
    #[arg(short, long)]
    pub label: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Accept series whose modality is not CT
    #[arg(long)]
    pub ignore_modality: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}
