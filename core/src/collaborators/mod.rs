//! Helpers the classifier depends on but does not own
//!
//! The localizer check and the scan coverage measurement sit behind
//! traits so callers can plug in their own; the defaults here are what
//! [`classify_ct`](crate::classify_ct) uses.

pub mod coverage;
pub mod localizer;
pub mod matching;

pub use coverage::SlicePositionCoverage;
pub use localizer::PatternLocalizerDetector;
pub use matching::{compile_patterns, matches_any};

use crate::types::ImageHeader;

/// Decides whether a label or description names a localizer series
pub trait LocalizerDetector {
    fn is_localizer(&self, text: &str) -> bool;
}

/// Measures the extent of a series along the scan axis, in mm
pub trait CoverageComputer {
    /// Returns `None` when no coverage can be computed
    fn compute_scan_coverage(&self, images: &[ImageHeader]) -> Option<f64>;
}
