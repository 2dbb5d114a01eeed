//! Label predicates
//!
//! Each predicate is a standalone test over one input: text predicates take
//! a (possibly empty) label or description, coverage predicates take an
//! optional scan coverage in mm. Empty text and missing coverage never
//! match.

use crate::collaborators::{compile_patterns, matches_any};
use regex::Regex;
use std::sync::OnceLock;

/// Coverage below this is a head scan (mm)
pub const HEAD_MAX_COVERAGE: f64 = 250.0;
/// Coverage above this is a whole body scan (mm)
pub const WHOLE_BODY_MIN_COVERAGE: f64 = 1300.0;
/// Lower exclusive bound of chest/abdomen/pelvis coverage (mm)
pub const CAP_MIN_COVERAGE: f64 = 800.0;
/// Upper exclusive bound of chest/abdomen/pelvis coverage (mm)
pub const CAP_MAX_COVERAGE: f64 = 1300.0;

/// Defines a case-insensitive text predicate over a fixed pattern set
macro_rules! text_predicate {
    ($(#[$meta:meta])* $name:ident => [$($pattern:expr),+ $(,)?]) => {
        $(#[$meta])*
        pub fn $name(text: &str) -> bool {
            static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
            matches_any(
                PATTERNS.get_or_init(|| compile_patterns(&[$($pattern),+])),
                text,
            )
        }
    };
}

text_predicate! {
    /// Standard (non attenuation corrected) scan: NAC as a token
    is_standard_scan => [r"\bNAC", r"NAC\b", "_NAC", "NAC_"]
}

text_predicate! {
    /// Attenuation corrected scan: AC as a token
    is_attn_corr_scan => [r"\bAC", r"AC\b", "_AC", "^AC_"]
}

// Orientation
text_predicate! { is_axial => ["axial", "trans"] }
text_predicate! { is_coronal => ["cor"] }
text_predicate! { is_sagittal => ["sag"] }

// Anatomy
text_predicate! { is_chest => ["lung", "chest"] }
text_predicate! { is_abdomen => ["abd"] }
text_predicate! { is_pelvis => ["pelvis"] }

text_predicate! {
    /// Scanner shorthand "w^o" (without contrast); the caret is literal
    is_not_contrast => [r"w\^o"]
}

text_predicate! {
    /// Scanner shorthand "w^IV" (with IV contrast); the caret is literal
    is_contrast => [r"w\^IV"]
}

// Contrast phases
text_predicate! { is_arterial_phase => ["arterial"] }
text_predicate! { is_portal_venous => ["venous"] }
text_predicate! { is_delayed => ["delayed", "equil"] }

// Reconstruction window
text_predicate! { is_bone_window => ["bone window"] }
text_predicate! { is_lung_window => ["lung window"] }

/// Head: coverage strictly below 250 mm
pub fn is_head(scan_coverage: Option<f64>) -> bool {
    scan_coverage.is_some_and(|c| c < HEAD_MAX_COVERAGE)
}

/// Whole body: coverage strictly above 1300 mm
pub fn is_whole_body(scan_coverage: Option<f64>) -> bool {
    scan_coverage.is_some_and(|c| c > WHOLE_BODY_MIN_COVERAGE)
}

/// Chest/abdomen/pelvis: coverage strictly between 800 and 1300 mm
pub fn is_cap(scan_coverage: Option<f64>) -> bool {
    scan_coverage.is_some_and(|c| c > CAP_MIN_COVERAGE && c < CAP_MAX_COVERAGE)
}
