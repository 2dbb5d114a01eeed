pub mod classification;
pub mod cli;
pub mod collaborators;
pub mod error;
pub mod extraction;
pub mod series;
pub mod types;

pub use classification::{classify_ct, CtClassifier};
pub use cli::report::TextReport;
pub use collaborators::{CoverageComputer, LocalizerDetector};
pub use error::{CtClassError, Result};
pub use series::CtSeries;
pub use types::*;
